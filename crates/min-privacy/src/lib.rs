//! Min Privacy Protection
//!
//! Content blocking is on globally by default; users can switch it off for
//! individual sites from the navbar toggle.

mod blocking;

pub use blocking::{BlockingStatus, ContentBlocking};
