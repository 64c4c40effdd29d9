use ratatui::prelude::*;

use crate::{BrowseState, Focus};

/// Label drawn in front of the search text.
pub const SEARCH_LABEL: &str = "Search/Prefix: ";

/// The search input line.
///
/// While the search box has focus the character under the cursor is drawn
/// reversed.
pub struct SearchLine {}

impl StatefulWidget for SearchLine {
    type State = BrowseState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let text = state.search.text();
        let focused = state.focus == Focus::Search;

        let label = match focused {
            true => SEARCH_LABEL.bold().yellow(),
            false => SEARCH_LABEL.bold(),
        };

        let split = text
            .char_indices()
            .nth(state.search.cursor())
            .map(|(index, _)| index)
            .unwrap_or(text.len());
        let (before, rest) = text.split_at(split);

        let mut spans = vec![label, Span::raw(before)];

        if focused {
            let mut characters = rest.chars();
            let under_cursor = characters
                .next()
                .map(String::from)
                .unwrap_or_else(|| " ".into());
            spans.push(Span::raw(under_cursor).reversed());
            spans.push(Span::raw(characters.as_str()));
        } else {
            spans.push(Span::raw(rest));
        }

        Line::from(spans).render(area, buf);
    }
}
