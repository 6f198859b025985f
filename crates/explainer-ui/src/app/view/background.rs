use iced::widget::{container, text};
use iced::{Element, Font, Length};

use crate::app::{App, Message};
use crate::style::BACKGROUND_ROWS;

impl App {
    /// Scrolling dummy code drawn behind the panel.
    pub fn view_background(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let visible = self
            .shell
            .background
            .window(self.scroll_offset, BACKGROUND_ROWS);

        container(
            text(visible)
                .size(12)
                .font(Font::MONOSPACE)
                .color(palette.background_code.to_iced()),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(12)
        .clip(true)
        .into()
    }
}
