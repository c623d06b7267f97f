use crate::components::card;
use crate::error::AnalyzeError;
use crate::message::Message;
use crate::model::SelectedImage;
use crate::utils::format_byte_size;
use crate::views::image_panel;
use iced::widget::image::Handle;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

const PREVIEW_HEIGHT: f32 = 320.0;
const MAX_PANEL_WIDTH: f32 = 640.0;

/// Shown between submission and the analyzer's answer.
pub fn pending_panel<'a>(
    image: &'a SelectedImage,
    preview: Option<&Handle>,
) -> Element<'a, Message> {
    let body = column![
        text(format!("Analyzing {}…", image.file.file_name)).size(24),
        text(format_byte_size(image.file.size_bytes())).size(13),
        column![image_panel(preview)].height(Length::Fixed(PREVIEW_HEIGHT)),
        button("Cancel")
            .on_press(Message::Reset)
            .style(button::secondary),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    card(body).max_width(MAX_PANEL_WIDTH).into()
}

pub fn failed_panel<'a>(
    image: &'a SelectedImage,
    preview: Option<&Handle>,
    error: &'a AnalyzeError,
) -> Element<'a, Message> {
    let actions = row![
        button("Retry").on_press(Message::Retry),
        button("Choose Another Image")
            .on_press(Message::Reset)
            .style(button::secondary),
    ]
    .spacing(12);

    let body = column![
        text("Analysis failed").size(24),
        text(error.to_string())
            .style(text::danger)
            .wrapping(Wrapping::Word),
        column![image_panel(preview)].height(Length::Fixed(PREVIEW_HEIGHT)),
        text(image.file.display_path()).size(13),
        actions,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    card(body).max_width(MAX_PANEL_WIDTH).into()
}
