//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] min_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] min_navigation::NavigationError),

    #[error("Tab editor error: {0}")]
    Navbar(#[from] min_navbar::NavbarError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No tab selected")]
    NoSelectedTab,
}

// Config files are the only I/O here
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
