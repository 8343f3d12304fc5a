use iced::{widget::button, Alignment, Length};

use super::text::text;
use crate::{theme, widget::*};

pub fn primary<'a, T: 'a>(content: &'a str) -> Button<'a, T> {
    button(content_row(content))
        .padding(5)
        .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(content: &'a str) -> Button<'a, T> {
    button(content_row(content))
        .padding(5)
        .style(theme::button::secondary)
}

pub fn destructive<'a, T: 'a>(content: &'a str) -> Button<'a, T> {
    button(content_row(content))
        .padding(5)
        .style(theme::button::destructive)
}

pub fn transparent<'a, T: 'a>(content: &'a str) -> Button<'a, T> {
    button(content_row(content))
        .padding(5)
        .style(theme::button::transparent)
}

pub fn link<'a, T: 'a>(content: &'a str) -> Button<'a, T> {
    button(content_row(content))
        .padding(5)
        .style(theme::button::link)
}

fn content_row<'a, T: 'a>(content: &'a str) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(text(content))
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(5)
}
