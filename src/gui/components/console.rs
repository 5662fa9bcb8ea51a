//! Fake CLI output console

use iced::widget::{column, container, scrollable, text};
use iced::{Element, Font, Length};

/// Render the rolling status log as a terminal-styled panel
pub fn console(lines: &[String]) -> Element<'static, crate::gui::app::Message> {
    use crate::gui::theme;

    let mut output = column![text("CLI Output")
        .size(14)
        .style(iced::theme::Text::Color(theme::CONSOLE_TEXT))]
    .spacing(4);

    for line in lines {
        output = output.push(
            text(line.clone())
                .size(12)
                .font(Font::MONOSPACE)
                .style(iced::theme::Text::Color(theme::CONSOLE_TEXT)),
        );
    }

    container(scrollable(output))
        .width(Length::Fill)
        .padding(10)
        .style(iced::theme::Container::Custom(Box::new(
            theme::ConsoleContainer,
        )))
        .into()
}
