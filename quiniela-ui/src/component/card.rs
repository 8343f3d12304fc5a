use crate::{component::text, theme, widget::*};

pub fn simple<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::simple)
}

pub fn modal<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(25).style(theme::card::modal)
}

/// Display an error as a card with the message on top of the technical detail.
pub fn error<'a, T: 'a>(message: &'static str, error: String) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(20)
            .push(text::p1_bold(message))
            .push(text::p2_regular(error)),
    )
    .padding(25)
    .style(theme::card::error)
}
