//! Min Navigation
//!
//! Address bar input resolution:
//!   1. URL-like input → navigate
//!   2. Anything else → search
//!
//! Internal pages live under `min://app/pages/<name>/`; [`SourceUrlParser`] maps them
//! back to the address a user should see when editing.

mod error;
mod input;
mod source_url;

pub use error::NavigationError;
pub use input::{InputResolution, InputResolver};
pub use source_url::SourceUrlParser;

/// Address of the new tab page as shown to users.
pub const NEW_TAB_URL: &str = "min://newtab";

/// Scheme used by internal pages.
pub const INTERNAL_SCHEME: &str = "min";

pub type Result<T> = std::result::Result<T, NavigationError>;
