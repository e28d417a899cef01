//! Min Navbar: Tab URL Editor
//!
//! The editor overlay that replaces the tab strip while an address is being typed.
//!
//! ```text
//! host ──show(tab)──▶ TabEditorController ──▶ widgets, placeholders, body classes
//!                            │
//!                            └─(more than one tab)─▶ AnimationCoordinator
//!                                                    frame 1: start state
//!                                                    frame 2: end state
//! input / content region ──▶ InputDispatcher ──▶ searchbar.open_url / hide()
//! ```
//!
//! Everything the editor touches is reached through the traits in [`dom`] and
//! [`collaborators`], so the controller runs the same against a real renderer or
//! the in-memory elements in [`headless`].

pub mod add_tab_button;
mod animation;
pub mod collaborators;
mod controller;
mod dispatcher;
pub mod dom;
mod error;
pub mod headless;
mod state;

#[cfg(test)]
mod testing;

pub use animation::{
    AnimationCoordinator, FrameCallback, FrameQueue, FrameScheduler, RevealTransition,
    DEFAULT_DAMPING, DEFAULT_DURATION,
};
pub use collaborators::Collaborators;
pub use controller::{
    EditorElements, EditorSettings, TabEditorController, DEFAULT_NEW_TAB_URL, EDIT_MODE_CLASS,
    EDIT_MODE_PLACEHOLDER, PLACEHOLDER_TEXT_KEY, SEARCHBAR_GROUP, TAB_NAVIGATION_CLASSES,
};
pub use dispatcher::{EditorEvent, InputDispatcher, KeyPress, ENTER_KEY_CODE};
pub use error::NavbarError;
pub use state::TabEditorState;

pub type Result<T> = std::result::Result<T, NavbarError>;
