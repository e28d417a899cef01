//! Editor state
//!
//! One instance per composed UI, owned by [`crate::TabEditorController`].

use crate::dom::Widget;

#[derive(Debug, Default)]
pub struct TabEditorState {
    /// Overlay unhidden and body in edit mode
    pub(crate) is_shown: bool,
    /// Tab being edited; stale once hidden
    pub(crate) active_tab_id: Option<String>,
    pub(crate) star: Option<Widget>,
    pub(crate) content_blocking: Option<Widget>,
    /// Bumped by every show and hide so pending animation frames can tell they are stale
    pub(crate) reveal: u64,
    pub(crate) initialized: bool,
}

impl TabEditorState {
    pub fn is_shown(&self) -> bool {
        self.is_shown
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    pub fn star(&self) -> Option<&Widget> {
        self.star.as_ref()
    }

    pub fn content_blocking(&self) -> Option<&Widget> {
        self.content_blocking.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn next_reveal(&mut self) -> u64 {
        self.reveal = self.reveal.wrapping_add(1);
        self.reveal
    }

    /// Whether an animation started for `tab_id` at `generation` still describes the screen.
    pub(crate) fn is_current_reveal(&self, tab_id: &str, generation: u64) -> bool {
        self.is_shown && self.reveal == generation && self.active_tab_id() == Some(tab_id)
    }
}
