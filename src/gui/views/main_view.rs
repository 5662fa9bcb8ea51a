//! Main widget view

use crate::gui::app::Message;
use crate::gui::components::{console, progress_bar};
use crate::session::SessionView;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

/// Create the widget view
pub fn main_view(session: &SessionView, show_console: bool) -> Element<'static, Message> {
    use crate::gui::theme;

    let header = text("Infinity")
        .size(30)
        .style(iced::theme::Text::Color(theme::TEXT_PRIMARY));

    let stats = column![
        text(format!("{:.2} MB / \u{221e}", session.data_downloaded))
            .size(16)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        text(format!("Transfer Rate: {:.2} MB/s", session.transfer_rate))
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
    ]
    .spacing(4);

    // Start doubles as Resume; it is disabled only while actively downloading
    let start_label = if session.paused {
        "Resume Download"
    } else {
        "Start Download"
    };
    let controls = row![
        button(text(start_label).size(14))
            .on_press_maybe(if session.downloading && !session.paused {
                None
            } else {
                Some(Message::StartPressed)
            })
            .padding([10, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        button(text("Pause Download").size(14))
            .on_press_maybe(if session.downloading {
                Some(Message::PausePressed)
            } else {
                None
            })
            .padding([10, 16])
            .style(iced::theme::Button::Custom(Box::new(
                theme::SecondaryButton
            ))),
        button(text("Cancel Download").size(14))
            .on_press(Message::CancelPressed)
            .padding([10, 16])
            .style(iced::theme::Button::Custom(Box::new(
                theme::DestructiveButton
            ))),
    ]
    .spacing(12);

    let toggle = button(
        text(if show_console {
            "Show Less"
        } else {
            "Show More"
        })
        .size(14),
    )
    .on_press(Message::ToggleConsole)
    .padding([8, 14])
    .style(iced::theme::Button::Custom(Box::new(
        theme::SecondaryButton,
    )));

    let mut content = column![
        header,
        progress_bar(session.progress),
        stats,
        controls,
        toggle,
    ]
    .spacing(20);

    if show_console {
        content = content.push(console(&session.log));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(
            theme::MainGradientContainer,
        )))
        .into()
}
