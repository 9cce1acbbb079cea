use std::time::Duration;

use iced::widget::{button, column, container, text};
use iced::{Alignment, Color, Element, Length, Theme, border};

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification. Toasts stack top-right, newest last, and can
/// also be dismissed by clicking them.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

fn toast_style(kind: ToastKind) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status| {
        let palette = theme.palette();
        let background = match kind {
            ToastKind::Success => palette.success,
            ToastKind::Error => palette.danger,
        };
        button::Style {
            background: Some(background.into()),
            text_color: Color::WHITE,
            border: border::rounded(4.0),
            ..button::Style::default()
        }
    }
}

/// Render the toast stack as a full-window overlay layer.
pub fn stacked<'a, Message: Clone + 'a>(
    toasts: &'a [Toast],
    on_dismiss: impl Fn(u64) -> Message + 'a,
) -> Element<'a, Message> {
    let cards = toasts.iter().map(|toast| {
        button(text(toast.message.as_str()))
            .on_press(on_dismiss(toast.id))
            .style(toast_style(toast.kind))
            .padding(10)
            .into()
    });

    container(column(cards).spacing(8))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::Start)
        .padding(12)
        .into()
}
