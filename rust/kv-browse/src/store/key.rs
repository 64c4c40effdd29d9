use std::{borrow::Cow, fmt::Display};

/// An opaque store key, ordered by its raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Vec<u8>);

impl Key {
    /// The raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Renders the key for display, replacing invalid UTF-8 sequences.
    pub fn to_lossy_string(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// True when `needle` occurs anywhere within the key.
    pub fn contains(&self, needle: &[u8]) -> bool {
        needle.is_empty() || self.0.windows(needle.len()).any(|window| window == needle)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Key {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Key {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lossy_string())
    }
}
