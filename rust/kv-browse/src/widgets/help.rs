use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

/// Key bindings listed in the help window.
pub const HELP_TEXT: &str = "\
Use Arrow keys to navigate
'n' for next page
'p' for previous page
'esc' to change focus
'enter' when on search go to keys
'enter' when on keys shows value
'q' to quit
'h' to toggle this help window";

/// Bordered box listing the key bindings.
pub struct HelpWindow {}

impl Widget for HelpWindow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(HELP_TEXT)
            .block(Block::bordered().title("Help"))
            .render(area, buf);
    }
}
