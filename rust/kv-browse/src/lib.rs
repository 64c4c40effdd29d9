#![warn(missing_docs)]

//! # KV Browse
//!
//! A Terminal User Interface (TUI) for browsing on-disk ordered key-value
//! stores. Keys are listed in byte order, filtered as you type and paginated;
//! the value of a key is loaded only when that key is selected.
//!
//! ## Features
//!
//! - **Prefix Filtering**: Narrow the key list with a bounded range scan
//! - **Substring Filtering**: Opt-in full scan matching anywhere in a key
//! - **Pagination**: Fixed pages of [`PAGE_SIZE`] keys
//! - **Dump Mode**: Print every (optionally prefixed) entry to stdout
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin kv-browse -- --db <path>
//! ```
//!
//! Or to dump entries without the UI:
//!
//! ```bash
//! cargo run --bin kv-dump -- --db <path> --prefix user:
//! ```
//!
//! ## Key Bindings
//!
//! - `q` or `Q` - Quit the application
//! - `n` / `p` - Next / previous page
//! - `h` or `H` - Toggle the help window
//! - `Enter` - In the search box, jump to the keys; on a key, show its value
//! - `Esc` - Switch focus between the search box and the keys
//! - `Up`/`Down` - Navigate within the key list

mod cli;
pub use cli::*;

mod error;
pub use error::*;

mod logging;
pub use logging::*;

mod store;
pub use store::*;

mod filter;
pub use filter::*;

mod pager;
pub use pager::*;

mod state;
pub use state::*;

mod widgets;
pub use widgets::*;

mod dump;
pub use dump::*;
