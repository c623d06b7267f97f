use crate::message::Message;
use iced::widget::image::Handle;
use iced::widget::{text, Image};
use iced::{ContentFit, Element, Length};

pub fn image_panel<'a>(preview: Option<&Handle>) -> Element<'a, Message> {
    if let Some(handle) = preview {
        Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into()
    } else {
        text("Preview unavailable").into()
    }
}
