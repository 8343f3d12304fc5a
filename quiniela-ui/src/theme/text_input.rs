use iced::widget::text_input::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border};

use super::palette::TextInputPalette;
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let input = &theme.colors.text_inputs.primary;
    match status {
        Status::Disabled => styled(&input.disabled),
        _ => styled(&input.active),
    }
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    let input = &theme.colors.text_inputs.invalid;
    match status {
        Status::Disabled => styled(&input.disabled),
        _ => styled(&input.active),
    }
}

fn styled(p: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(p.background),
        border: p
            .border
            .map(|color| Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            })
            .unwrap_or_default(),
        icon: p.icon,
        placeholder: p.placeholder,
        value: p.value,
        selection: p.selection,
    }
}
