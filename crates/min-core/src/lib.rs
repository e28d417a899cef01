//! Min Core
//!
//! Composes the browser chrome: tabs, navigation, content blocking and the
//! tab editor, wired together behind [`Shell`].

mod adapters;
mod bookmarks;
mod config;
mod content_blocking;
mod content_view;
mod error;
mod keyboard;
mod modal;
mod searchbar;
mod shell;
mod strings;

pub use adapters::{SourceUrls, TabDirectory};
pub use bookmarks::{Bookmark, BookmarkStar, BookmarkStore};
pub use config::{AnimationConfig, Config};
pub use content_blocking::ContentBlockingToggle;
pub use content_view::ContentView;
pub use error::CoreError;
pub use keyboard::KeyboardNavigationGroups;
pub use modal::ModalState;
pub use searchbar::{NavigationSearchbar, UrlSelected};
pub use shell::Shell;
pub use strings::Strings;

// Re-export core components
pub use min_navbar::{
    headless, EditorEvent, InputDispatcher, KeyPress, NavbarError, TabEditorController,
};
pub use min_navigation::{InputResolution, InputResolver, NavigationError, SourceUrlParser};
pub use min_privacy::{BlockingStatus, ContentBlocking};
pub use min_tabs::{Tab, TabError, TabManager};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
