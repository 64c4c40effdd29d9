/// The region that currently receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The search/prefix input line
    Search,
    /// The list of keys on the current page
    #[default]
    List,
}
