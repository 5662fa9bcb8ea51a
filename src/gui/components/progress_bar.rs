//! Progress bar component

use iced::widget::{progress_bar as iced_progress_bar, row, text};
use iced::{Alignment, Element, Length};

/// Create the progress bar with its percentage readout
pub fn progress_bar(progress: f64) -> Element<'static, crate::gui::app::Message> {
    use crate::gui::theme;

    let bar = iced_progress_bar(0.0..=100.0, progress as f32)
        .height(Length::Fixed(30.0))
        .style(iced::theme::ProgressBar::Custom(Box::new(
            theme::ProgressBarStyle,
        )));

    let mut labeled = row![bar].spacing(10).align_items(Alignment::Center);
    if progress > 0.0 {
        labeled = labeled.push(
            text(format!("{:.1}%", progress))
                .size(12)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        );
    }

    labeled.into()
}
