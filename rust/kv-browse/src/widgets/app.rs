//! Main application widget for the browser TUI.

use ratatui::prelude::*;

use crate::{BrowseState, HelpWindow, KeyList, SearchLine, ValuePane};

/// One-line hint shown beneath the keys.
pub const FOOTER_HINT: &str =
    "Use Arrow keys to navigate, 'n' for next page, 'p' for previous page, 'h' for help";

/// Main application widget that renders the overall TUI layout.
///
/// This widget handles the top-level layout including:
/// - The search line
/// - The key list beside the value pane
/// - Footer with help text
/// - The help window, appended at the bottom while it is toggled on
pub struct BrowseApp {}

impl StatefulWidget for &BrowseApp {
    type State = BrowseState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let (search_area, inner_area, footer_area) = if state.help_visible {
            let [search_area, inner_area, footer_area, help_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(area);

            HelpWindow {}.render(help_area, buf);

            (search_area, inner_area, footer_area)
        } else {
            let [search_area, inner_area, footer_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

            (search_area, inner_area, footer_area)
        };

        let [keys_area, value_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(2)]).areas(inner_area);

        SearchLine {}.render(search_area, buf, state);
        KeyList {}.render(keys_area, buf, state);
        ValuePane { value: &state.value }.render(value_area, buf);

        Line::raw(FOOTER_HINT).render(footer_area, buf);
    }
}
