use std::ops::Range;

use crate::{FilteredKeySet, Key};

/// Number of keys shown per page.
pub const PAGE_SIZE: usize = 100;

/// Fixed-size pages over a [`FilteredKeySet`].
///
/// The pager owns the current key set. Replacing the set with
/// [`Pager::reset`] always returns to the first page, and moving between
/// pages clamps at both ends instead of wrapping around.
#[derive(Debug, Clone)]
pub struct Pager {
    keys: FilteredKeySet,
    page_index: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    /// Creates an empty pager with the given page size.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            keys: FilteredKeySet::default(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the key set and returns to the first page.
    pub fn reset(&mut self, keys: FilteredKeySet) {
        self.keys = keys;
        self.page_index = 0;
    }

    /// Advances one page. Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if (self.page_index + 1) * self.page_size < self.keys.len() {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page. Returns false when already on the first page.
    pub fn previous(&mut self) -> bool {
        if self.page_index > 0 {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Indices into the key set covered by the current page
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(self.keys.len());
        let end = (start + self.page_size).min(self.keys.len());
        start..end
    }

    /// Keys on the current page, at most one page long
    pub fn current_page(&self) -> &[Key] {
        &self.keys.as_slice()[self.page_range()]
    }

    /// The key at `offset` within the current page
    pub fn key_on_page(&self, offset: usize) -> Option<&Key> {
        self.current_page().get(offset)
    }

    /// Zero-based index of the current page
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Number of pages, zero for an empty key set
    pub fn page_count(&self) -> usize {
        self.keys.len().div_ceil(self.page_size)
    }

    /// Keys per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The whole key set being paged
    pub fn keys(&self) -> &FilteredKeySet {
        &self.keys
    }
}
