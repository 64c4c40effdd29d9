//! UI widgets for the browser TUI.
//!
//! This module contains the ratatui widgets that make up the user interface:
//! the overall layout, the search line, the key list, the value pane and the
//! help window.

mod app;
pub use app::*;

mod search;
pub use search::*;

mod keys;
pub use keys::*;

mod value;
pub use value::*;

mod help;
pub use help::*;
