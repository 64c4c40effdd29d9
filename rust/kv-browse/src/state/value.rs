use crate::Key;

/// Contents of the value pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValueView {
    /// Nothing has been selected yet
    #[default]
    Empty,
    /// The value of the most recently selected key
    Entry {
        /// The selected key
        key: Key,
        /// Its value as read at selection time
        value: Vec<u8>,
    },
    /// Looking up the selected key failed
    LookupFailed {
        /// The selected key
        key: Key,
        /// Why the lookup failed
        message: String,
    },
    /// Re-filtering the keys failed; the key list is empty until the next
    /// successful filter
    ScanFailed(String),
}

impl ValueView {
    /// True when the pane shows an error
    pub fn is_error(&self) -> bool {
        matches!(self, ValueView::LookupFailed { .. } | ValueView::ScanFailed(_))
    }

    /// The text shown in the pane
    pub fn to_text(&self) -> String {
        match self {
            ValueView::Empty => String::new(),
            ValueView::Entry { key, value } => {
                format!("Key: {key}\n\nValue: {}", String::from_utf8_lossy(value))
            }
            ValueView::LookupFailed { message, .. } | ValueView::ScanFailed(message) => {
                format!("Error: {message}")
            }
        }
    }
}
