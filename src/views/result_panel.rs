use crate::components::card;
use crate::message::Message;
use crate::model::{ClassificationResult, SelectedImage};
use crate::views::image_panel;
use iced::widget::image::Handle;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length};

const IMAGE_HEIGHT: f32 = 360.0;
const LABEL_WIDTH: f32 = 110.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

impl ResultRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Labelled rows of the classification card, in display order.
pub fn classification_rows(result: &ClassificationResult) -> Vec<ResultRow> {
    let mut rows = vec![ResultRow::new("Type", result.image_type.as_str())];
    if let Some(subtype) = result.subtype() {
        rows.push(ResultRow::new("Subtype", subtype));
    }
    rows.push(ResultRow::new("Confidence", result.confidence.to_string()));
    if let Some(filename) = result.filename() {
        rows.push(ResultRow::new("File", filename));
    }
    rows
}

pub fn result_panel<'a>(
    image: &'a SelectedImage,
    preview: Option<&Handle>,
    result: &'a ClassificationResult,
) -> Element<'a, Message> {
    let header = row![
        text("Analysis Result").size(28),
        horizontal_space(),
        button("Analyze Another").on_press(Message::Reset),
    ]
    .align_y(Alignment::Center);

    let image_card = card(
        column![
            text("Uploaded Image").size(20),
            column![image_panel(preview)].height(Length::Fixed(IMAGE_HEIGHT)),
            text(image.file.display_path()).size(13),
        ]
        .spacing(12),
    );

    let details = classification_rows(result).into_iter().fold(
        column![text("Classification").size(20)].spacing(8),
        |details, entry| {
            details.push(
                row![
                    text(format!("{}:", entry.label)).width(Length::Fixed(LABEL_WIDTH)),
                    text(entry.value).wrapping(Wrapping::Word),
                ]
                .spacing(8),
            )
        },
    );

    let details = details
        .push(text("Reasons:").size(16))
        .push(reason_list(&result.reason));

    column![
        header,
        row![image_card, card(details)]
            .spacing(24)
            .width(Length::Fill),
    ]
    .spacing(24)
    .padding(24)
    .into()
}

fn reason_list<'a>(reasons: &[String]) -> Column<'a, Message> {
    reason_lines(reasons)
        .into_iter()
        .fold(Column::new().spacing(4), |list, line| {
            list.push(text(line).wrapping(Wrapping::Word))
        })
}

fn reason_lines(reasons: &[String]) -> Vec<String> {
    reasons.iter().map(|reason| format!("• {reason}")).collect()
}
