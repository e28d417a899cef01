//! Min Tab Registry
//!
//! Holds the open tabs of a window in strip order and tracks which one is selected.
//! The tab editor only ever reads `url` and the tab count from here.

mod error;
mod manager;
mod tab;

pub use error::TabError;
pub use manager::TabManager;
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
