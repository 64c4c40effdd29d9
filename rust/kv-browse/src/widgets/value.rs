use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::ValueView;

/// Shows the value of the selected key, or why it could not be shown.
pub struct ValuePane<'a> {
    /// The value or error to show
    pub value: &'a ValueView,
}

impl Widget for ValuePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = match self.value.is_error() {
            true => Style::new().fg(Color::Red),
            false => Style::new(),
        };

        Paragraph::new(self.value.to_text())
            .style(style)
            .block(Block::bordered().title("Value"))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
