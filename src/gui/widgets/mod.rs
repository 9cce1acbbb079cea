use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element, Theme};

/// Float `content` over `base` behind a dimmed backdrop; clicking the
/// backdrop emits `on_blur`.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content.into())).style(backdrop)).on_press(on_blur)
        ),
    ]
    .into()
}

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.6,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
