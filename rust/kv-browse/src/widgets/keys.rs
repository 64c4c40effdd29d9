use ratatui::{
    prelude::*,
    widgets::{Block, HighlightSpacing, List, ListItem},
};

use crate::{BrowseState, Focus};

/// Widget listing the keys on the current page.
///
/// The title shows which page is displayed and how many keys matched the
/// search. The highlighted row is the one `Enter` will look up.
pub struct KeyList {}

impl StatefulWidget for KeyList {
    type State = BrowseState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let pager = &state.pager;

        let title = match pager.page_count() {
            0 => "Keys (no matches)".to_owned(),
            pages => format!(
                "Keys ({}/{} · {} total)",
                pager.page_index() + 1,
                pages,
                pager.keys().len()
            ),
        };

        let border_style = match state.focus {
            Focus::List => Style::new().fg(Color::Yellow),
            Focus::Search => Style::new(),
        };

        let items = pager
            .current_page()
            .iter()
            .map(|key| ListItem::new(key.to_lossy_string().into_owned()))
            .collect::<Vec<_>>();

        let list = List::new(items)
            .block(Block::bordered().title(title).border_style(border_style))
            .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("› ");

        StatefulWidget::render(list, area, buf, &mut state.list);
    }
}
