use crate::components::drop_zone;
use crate::message::Message;
use crate::upload::DragState;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

const MAX_ZONE_WIDTH: f32 = 720.0;

pub fn upload_panel<'a>(drag: DragState) -> Element<'a, Message> {
    let content = column![
        text("Upload an Image").size(40),
        text("AuthentiScan sends it to the analyzer and reports what kind of image it is.")
            .size(15),
        drop_zone(drag.is_hovering()),
    ]
    .spacing(20)
    .max_width(MAX_ZONE_WIDTH)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding(24)
        .into()
}
