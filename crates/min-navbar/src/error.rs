//! Navbar error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavbarError {
    #[error("Required element not found: #{0}")]
    MissingElement(String),

    #[error("Tab not found: {0}")]
    TabNotFound(String),

    #[error("Tab editor not initialized")]
    NotInitialized,

    #[error("Tab editor already initialized")]
    AlreadyInitialized,

    #[error("{subsystem} failed: {message}")]
    Collaborator {
        subsystem: &'static str,
        message: String,
    },
}

impl NavbarError {
    pub fn collaborator(subsystem: &'static str, message: impl Into<String>) -> Self {
        NavbarError::Collaborator {
            subsystem,
            message: message.into(),
        }
    }
}
