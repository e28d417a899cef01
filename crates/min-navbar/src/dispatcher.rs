//! Input routing for the editor
//!
//! Raw listener callbacks are translated into [`EditorEvent`]s and funnelled
//! through [`InputDispatcher::dispatch`], so the same path can be driven from
//! a test without any elements.

use crate::controller::TabEditorController;
use crate::Result;

/// Return key
pub const ENTER_KEY_CODE: u32 = 13;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key_code: u32,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    default_prevented: bool,
}

impl KeyPress {
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            ..Self::default()
        }
    }

    pub fn enter() -> Self {
        Self::new(ENTER_KEY_CODE)
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn is_enter(&self) -> bool {
        self.key_code == ENTER_KEY_CODE
    }

    /// Ctrl or Cmd held: the page should open in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        self.ctrl_key || self.meta_key
    }

    /// Stop the platform's default handling (form submission).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug)]
pub enum EditorEvent<'e> {
    /// Return pressed in the address input
    EnterSubmit(&'e mut KeyPress),
    /// Click on the page content while editing
    ClickOutside,
}

impl<'e> EditorEvent<'e> {
    /// Only Enter means anything to the editor; other keys are left to the input.
    pub fn from_key_press(key: &'e mut KeyPress) -> Option<Self> {
        if key.is_enter() {
            Some(EditorEvent::EnterSubmit(key))
        } else {
            None
        }
    }
}

#[derive(Clone)]
pub struct InputDispatcher {
    controller: TabEditorController,
}

impl InputDispatcher {
    pub fn new(controller: TabEditorController) -> Self {
        Self { controller }
    }

    pub fn dispatch(&self, event: EditorEvent<'_>) -> Result<()> {
        match event {
            EditorEvent::EnterSubmit(key) => {
                let value = self.controller.input_value();
                tracing::debug!(value = %value, "Submitting address input");

                let submitted = self
                    .controller
                    .collaborators()
                    .searchbar
                    .open_url(&value, key);
                key.prevent_default();
                submitted
            }
            EditorEvent::ClickOutside => {
                if self.controller.is_shown() {
                    self.controller.hide()
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Returns whether the key was handled.
    pub fn key_press(&self, key: &mut KeyPress) -> Result<bool> {
        match EditorEvent::from_key_press(key) {
            Some(event) => self.dispatch(event).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn content_click(&self) -> Result<()> {
        self.dispatch(EditorEvent::ClickOutside)
    }

    pub fn controller(&self) -> &TabEditorController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::CONTENT_REGION_ID;
    use crate::error::NavbarError;
    use crate::testing::Fixture;

    #[test]
    fn test_enter_submits_once_and_prevents_default() {
        let fx = Fixture::new();
        fx.tabs.add("tab-1", "https://example.com");
        fx.controller.show("tab-1", Some("rust lang"), false).unwrap();

        let mut key = KeyPress::enter();
        assert!(fx.dispatcher.key_press(&mut key).unwrap());

        assert_eq!(fx.searchbar.submissions(), vec!["rust lang".to_string()]);
        assert!(key.default_prevented());
    }

    #[test]
    fn test_other_keys_ignored() {
        let fx = Fixture::new();
        fx.tabs.add("tab-1", "https://example.com");
        fx.controller.show("tab-1", None, false).unwrap();

        let mut key = KeyPress::new(65);
        assert!(!fx.dispatcher.key_press(&mut key).unwrap());
        assert!(fx.searchbar.submissions().is_empty());
        assert!(!key.default_prevented());
    }

    #[test]
    fn test_failed_submit_still_prevents_default() {
        let fx = Fixture::new();
        fx.tabs.add("tab-1", "https://example.com");
        fx.controller.show("tab-1", None, false).unwrap();
        fx.searchbar.fail_next();

        let mut key = KeyPress::enter();
        let err = fx
            .dispatcher
            .dispatch(EditorEvent::EnterSubmit(&mut key))
            .unwrap_err();
        assert!(matches!(err, NavbarError::Collaborator { subsystem: "searchbar", .. }));
        assert!(key.default_prevented());
    }

    #[test]
    fn test_click_outside_hides() {
        let fx = Fixture::new();
        fx.tabs.add("tab-1", "https://example.com");
        fx.controller.show("tab-1", None, false).unwrap();

        fx.dispatcher.content_click().unwrap();
        assert!(!fx.controller.is_shown());
        assert_eq!(fx.searchbar.hides(), 1);

        // already closed: nothing else happens
        fx.dispatcher.content_click().unwrap();
        assert_eq!(fx.searchbar.hides(), 1);
    }

    #[test]
    fn test_listeners_route_through_dispatcher() {
        let fx = Fixture::new();
        fx.tabs.add("tab-1", "https://example.com");
        fx.controller.show("tab-1", None, false).unwrap();

        let key = fx.input().press_key(KeyPress::enter().with_ctrl());
        assert!(key.default_prevented());
        assert_eq!(
            fx.searchbar.submissions(),
            vec!["https://example.com".to_string()]
        );

        let key = fx.input().press_key(KeyPress::new(40));
        assert!(!key.default_prevented());
        assert_eq!(fx.searchbar.submissions().len(), 1);

        fx.document
            .headless_clickable(CONTENT_REGION_ID)
            .unwrap()
            .click();
        assert!(!fx.controller.is_shown());
    }

    #[test]
    fn test_key_press_modifiers() {
        assert!(KeyPress::enter().with_ctrl().opens_new_tab());
        assert!(KeyPress::enter().with_meta().opens_new_tab());
        assert!(!KeyPress::enter().with_shift().opens_new_tab());
        assert!(KeyPress::enter().is_enter());
        assert!(!KeyPress::new(9).is_enter());
    }
}
