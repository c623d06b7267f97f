use crate::message::Message;
use iced::border::{Border, Radius};
use iced::widget::{column, container, mouse_area, text, Container};
use iced::{Alignment, Background, Element, Length, Theme};

/// Clickable target for dropped files; highlighted while a file hovers over the window.
pub fn drop_zone<'a>(hovering: bool) -> Element<'a, Message> {
    let label = if hovering {
        "Release to analyze"
    } else {
        "Drop your image or click to browse"
    };

    let content = column![
        text(label).size(18),
        text("PNG, JPEG, GIF, WebP, BMP or TIFF").size(13),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let zone = container(content)
        .padding(48)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(move |theme| drop_zone_style(theme, hovering));

    mouse_area(zone).on_press(Message::PickFile).into()
}

/// Rounded card used to frame the preview and the classification.
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(card_style)
}

fn drop_zone_style(theme: &Theme, hovering: bool) -> container::Style {
    let palette = theme.extended_palette();

    let (background, border_color) = if hovering {
        (
            palette.primary.weak.color.scale_alpha(0.25),
            palette.primary.strong.color,
        )
    } else {
        (
            palette.background.weak.color.scale_alpha(0.4),
            palette.background.strong.color,
        )
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: Radius::new(24.0),
        },
        ..Default::default()
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color.scale_alpha(0.6))),
        border: Border {
            color: palette.primary.base.color.scale_alpha(0.3),
            width: 1.0,
            radius: Radius::new(24.0),
        },
        ..Default::default()
    }
}
