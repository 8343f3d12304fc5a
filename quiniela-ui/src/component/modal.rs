use iced::widget::{center, mouse_area, opaque, stack};

use crate::{theme, widget::*};

/// Stacks `content` on top of `base` behind a dimmed backdrop.
///
/// The backdrop swallows every interaction with `base`. If `on_blur` is
/// set, clicking outside the content produces it, otherwise the overlay
/// can only be dismissed by the content itself.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Option<Message>,
) -> Element<'a, Message> {
    let mut area = mouse_area(center(opaque(content)).style(theme::overlay::backdrop));
    if let Some(on_blur) = on_blur {
        area = area.on_press(on_blur);
    }
    stack([base.into(), opaque(area)]).into()
}
