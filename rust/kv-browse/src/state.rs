use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    widgets::ListState,
};

mod focus;
pub use focus::*;

mod search;
pub use search::*;

mod value;
pub use value::*;

use crate::{FilterMode, FilteredKeySet, KeyValueStore, Pager, filter_keys};

/// Everything the browser knows between two key events.
///
/// The state owns the store handle, the search text, the pager holding the
/// current key set, the focus and the help flag. Each key event is handled
/// to completion by [`BrowseState::handle_key_event`] before the next frame
/// is drawn.
pub struct BrowseState {
    /// The store being browsed, closed when the state is dropped
    pub store: Box<dyn KeyValueStore>,
    /// How search text is matched against keys
    pub mode: FilterMode,
    /// The search/prefix input
    pub search: SearchInput,
    /// Pages over the keys matching the search text
    pub pager: Pager,
    /// The region receiving key presses
    pub focus: Focus,
    /// Whether the help window is shown below the keys
    pub help_visible: bool,
    /// Highlighted row of the current page
    pub list: ListState,
    /// What the value pane shows
    pub value: ValueView,
    exit: bool,
}

impl BrowseState {
    /// Creates the browser state and lists every key in the store.
    pub fn new(store: impl KeyValueStore + 'static, mode: FilterMode) -> Self {
        Self::with_pager(store, mode, Pager::default())
    }

    /// Like [`BrowseState::new`], paging with the given pager.
    pub fn with_pager(
        store: impl KeyValueStore + 'static,
        mode: FilterMode,
        pager: Pager,
    ) -> Self {
        let mut state = Self {
            store: Box::new(store),
            mode,
            search: SearchInput::default(),
            pager,
            focus: Focus::default(),
            help_visible: false,
            list: ListState::default(),
            value: ValueView::default(),
            exit: false,
        };
        state.refilter();
        state
    }

    /// True once the user asked to quit
    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Dispatches one key press.
    ///
    /// `n`, `p`, `h` and `q` are captured regardless of focus. In the search
    /// box the character is then also typed into the search text, except for
    /// `q` which ends the session immediately.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('q' | 'Q') if plain => {
                self.exit = true;
                return;
            }
            KeyCode::Char('n') if plain => self.next_page(),
            KeyCode::Char('p') if plain => self.previous_page(),
            KeyCode::Char('h' | 'H') if plain => self.toggle_help(),
            _ => (),
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key_event, plain),
            Focus::List => self.handle_list_key(key_event),
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent, plain: bool) {
        let changed = match key_event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                self.focus = Focus::List;
                false
            }
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.clear()
            }
            KeyCode::Char(character) if plain => self.search.insert(character),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => {
                self.search.move_left();
                false
            }
            KeyCode::Right => {
                self.search.move_right();
                false
            }
            KeyCode::Home => {
                self.search.move_home();
                false
            }
            KeyCode::End => {
                self.search.move_end();
                false
            }
            _ => false,
        };

        if changed {
            self.refilter();
        }
    }

    fn handle_list_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Enter => self.select(),
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => self.focus = Focus::Search,
            KeyCode::Up => self.move_selection(|index, _| index.saturating_sub(1)),
            KeyCode::Down => self.move_selection(|index, last| (index + 1).min(last)),
            KeyCode::Home => self.move_selection(|_, _| 0),
            KeyCode::End => self.move_selection(|_, last| last),
            _ => (),
        }
    }

    /// Recomputes the key set from the current search text and returns to
    /// the first page.
    ///
    /// A failing scan leaves an empty key set and shows the error in the
    /// value pane instead of ending the session.
    // TODO: reuse the previous key set when the new text extends the old
    // prefix, instead of rescanning the store on every keystroke
    pub fn refilter(&mut self) {
        match filter_keys(self.store.as_ref(), self.search.text(), self.mode) {
            Ok(keys) => {
                self.pager.reset(keys);
                if let ValueView::ScanFailed(_) = self.value {
                    self.value = ValueView::Empty;
                }
            }
            Err(error) => {
                tracing::error!(%error, text = self.search.text(), "Failed to filter keys");
                self.pager.reset(FilteredKeySet::default());
                self.value = ValueView::ScanFailed(error.to_string());
            }
        }
        self.reset_selection();
    }

    /// Moves to the next page, if there is one.
    pub fn next_page(&mut self) {
        if self.pager.next() {
            tracing::debug!(page = self.pager.page_index(), "Next page");
            self.reset_selection();
        }
    }

    /// Moves to the previous page, if there is one.
    pub fn previous_page(&mut self) {
        if self.pager.previous() {
            tracing::debug!(page = self.pager.page_index(), "Previous page");
            self.reset_selection();
        }
    }

    /// Shows or hides the help window.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Loads the value of the highlighted key into the value pane.
    ///
    /// The key is looked up by its position on the current page at the time
    /// of selection. Lookup failures are shown inline and change nothing
    /// else.
    pub fn select(&mut self) {
        let Some(key) = self
            .list
            .selected()
            .and_then(|offset| self.pager.key_on_page(offset))
            .cloned()
        else {
            return;
        };

        self.value = match self.store.get(key.as_bytes()) {
            Ok(value) => ValueView::Entry { key, value },
            Err(error) => {
                tracing::warn!(%key, %error, "Failed to look up key");
                ValueView::LookupFailed {
                    key,
                    message: error.to_string(),
                }
            }
        };
    }

    fn move_selection(&mut self, to: impl Fn(usize, usize) -> usize) {
        let Some(last) = self.pager.current_page().len().checked_sub(1) else {
            return;
        };
        let current = self.list.selected().unwrap_or_default();
        self.list.select(Some(to(current, last).min(last)));
    }

    fn reset_selection(&mut self) {
        self.list = ListState::default();
        if !self.pager.current_page().is_empty() {
            self.list.select(Some(0));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{Entry, Key, KvBrowseError, MemoryStore, Scan};
    use pretty_assertions::assert_eq;

    /// A store the test can keep mutating after handing it to the state.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &[u8]) -> Result<Vec<u8>, KvBrowseError> {
            self.0.borrow().get(key)
        }

        fn scan(
            &self,
            lower: &[u8],
            upper: Option<&[u8]>,
        ) -> Result<Scan<'_, Entry>, KvBrowseError> {
            let entries = self
                .0
                .borrow()
                .scan(lower, upper)?
                .collect::<Vec<_>>();
            Ok(Box::new(entries.into_iter()))
        }
    }

    fn press(state: &mut BrowseState, code: KeyCode) {
        state.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(state: &mut BrowseState, text: &str) {
        for character in text.chars() {
            press(state, KeyCode::Char(character));
        }
    }

    fn listed(state: &BrowseState) -> Vec<String> {
        state
            .pager
            .current_page()
            .iter()
            .map(Key::to_string)
            .collect()
    }

    fn numbered(count: usize) -> MemoryStore {
        MemoryStore::from_iter(
            (0..count).map(|index| (format!("key:{index:03}"), format!("{index}"))),
        )
    }

    #[test]
    fn it_starts_on_the_key_list_with_every_key() {
        let store = MemoryStore::from_iter([("b", "2"), ("a", "1")]);
        let state = BrowseState::new(store, FilterMode::Prefix);

        assert_eq!(state.focus, Focus::List);
        assert!(!state.help_visible);
        assert_eq!(listed(&state), vec!["a", "b"]);
        assert_eq!(state.list.selected(), Some(0));
    }

    #[test]
    fn it_refilters_on_every_keystroke_in_search() {
        let store = MemoryStore::from_iter([("a1", ""), ("a2", ""), ("b1", "")]);
        let mut state = BrowseState::new(store, FilterMode::Prefix);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.focus, Focus::Search);

        type_text(&mut state, "a");
        assert_eq!(listed(&state), vec!["a1", "a2"]);

        type_text(&mut state, "2");
        assert_eq!(listed(&state), vec!["a2"]);

        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        assert_eq!(listed(&state), vec!["a1", "a2", "b1"]);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus, Focus::List);
    }

    #[test]
    fn it_matches_substrings_when_asked_to() {
        let store = MemoryStore::from_iter([("a1", ""), ("b1", ""), ("c2", "")]);
        let mut state = BrowseState::new(store, FilterMode::Substring);

        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "1");

        assert_eq!(listed(&state), vec!["a1", "b1"]);
    }

    #[test]
    fn it_pages_from_any_focus() {
        let mut state =
            BrowseState::with_pager(numbered(250), FilterMode::Prefix, Pager::new(100));

        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.pager.page_range(), 100..200);
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.pager.page_range(), 200..250);
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.pager.page_index(), 2);

        press(&mut state, KeyCode::Char('p'));
        assert_eq!(state.pager.page_index(), 1);
        assert_eq!(listed(&state).first().map(String::as_str), Some("key:100"));
    }

    #[test]
    fn it_types_hotkeys_into_the_search_box_after_handling_them() {
        let mut state =
            BrowseState::with_pager(numbered(250), FilterMode::Substring, Pager::new(100));
        press(&mut state, KeyCode::Esc);

        type_text(&mut state, "h");

        assert!(state.help_visible);
        assert_eq!(state.search.text(), "h");
        assert_eq!(state.pager.keys().len(), 0);
    }

    #[test]
    fn it_resets_to_the_first_page_when_the_filter_changes() {
        let mut state =
            BrowseState::with_pager(numbered(250), FilterMode::Prefix, Pager::new(100));
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.pager.page_index(), 1);

        press(&mut state, KeyCode::Esc);
        type_text(&mut state, "key:1");

        assert_eq!(state.pager.page_index(), 0);
        assert_eq!(state.pager.keys().len(), 100);
    }

    #[test]
    fn it_shows_the_value_of_the_selected_key() {
        let store = MemoryStore::from_iter([("a", "apple"), ("b", "banana")]);
        let mut state = BrowseState::new(store, FilterMode::Prefix);

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);

        assert_eq!(
            state.value,
            ValueView::Entry {
                key: Key::from("b"),
                value: b"banana".to_vec()
            }
        );
        assert_eq!(state.value.to_text(), "Key: b\n\nValue: banana");
        assert_eq!(state.focus, Focus::List);
    }

    #[test]
    fn it_clamps_list_navigation() {
        let store = MemoryStore::from_iter([("a", ""), ("b", ""), ("c", "")]);
        let mut state = BrowseState::new(store, FilterMode::Prefix);

        press(&mut state, KeyCode::Up);
        assert_eq!(state.list.selected(), Some(0));

        for _ in 0..5 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.list.selected(), Some(2));

        press(&mut state, KeyCode::Home);
        assert_eq!(state.list.selected(), Some(0));
    }

    #[test]
    fn it_reports_keys_deleted_since_listing_inline() {
        let shared = SharedStore::default();
        shared.0.borrow_mut().insert("a1", "one");
        shared.0.borrow_mut().insert("a2", "two");

        let mut state = BrowseState::new(shared.clone(), FilterMode::Prefix);
        shared.0.borrow_mut().remove(b"a1");

        press(&mut state, KeyCode::Enter);

        assert!(matches!(
            &state.value,
            ValueView::LookupFailed { key, .. } if key == &Key::from("a1")
        ));
        assert!(state.value.is_error());
        assert!(state.value.to_text().starts_with("Error: "));
        assert_eq!(listed(&state), vec!["a1", "a2"]);
        assert!(!state.should_exit());
    }

    #[test]
    fn it_toggles_help_without_touching_focus_or_page() {
        let mut state =
            BrowseState::with_pager(numbered(30), FilterMode::Prefix, Pager::new(10));
        press(&mut state, KeyCode::Char('n'));

        let page = state.pager.page_index();
        let focus = state.focus;

        press(&mut state, KeyCode::Char('h'));
        assert!(state.help_visible);
        press(&mut state, KeyCode::Char('H'));

        assert!(!state.help_visible);
        assert_eq!(state.focus, focus);
        assert_eq!(state.pager.page_index(), page);
    }

    #[test]
    fn it_quits_from_any_focus() {
        for open_search in [false, true] {
            let mut state = BrowseState::new(MemoryStore::new(), FilterMode::Prefix);
            if open_search {
                press(&mut state, KeyCode::Esc);
            }

            press(&mut state, KeyCode::Char('Q'));

            assert!(state.should_exit());
            assert_eq!(state.search.text(), "");
        }
    }

    #[test]
    fn it_ignores_selection_on_an_empty_page() {
        let mut state = BrowseState::new(MemoryStore::new(), FilterMode::Prefix);

        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Down);

        assert_eq!(state.value, ValueView::Empty);
        assert_eq!(state.list.selected(), None);
    }

    struct FailingScan;

    impl KeyValueStore for FailingScan {
        fn get(&self, _key: &[u8]) -> Result<Vec<u8>, KvBrowseError> {
            Err(KvBrowseError::Lookup("offline".into()))
        }

        fn scan(
            &self,
            _lower: &[u8],
            _upper: Option<&[u8]>,
        ) -> Result<Scan<'_, Entry>, KvBrowseError> {
            Err(KvBrowseError::Scan("offline".into()))
        }
    }

    #[test]
    fn it_keeps_running_when_a_scan_fails() {
        let state = BrowseState::new(FailingScan, FilterMode::Prefix);

        assert!(state.pager.keys().is_empty());
        assert_eq!(
            state.value,
            ValueView::ScanFailed("Range scan failed: offline".into())
        );
        assert!(!state.should_exit());
    }
}
