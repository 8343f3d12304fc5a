use iced::widget::container::Style;
use iced::{Background, Color};

use super::Theme;

/// Dimmed backdrop behind a modal.
pub fn backdrop(_theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(Color {
            a: 0.8,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}
