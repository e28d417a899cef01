//! Modal mode
//!
//! While a dialog owns the window, chrome such as the tab editor stays put.

use std::sync::atomic::{AtomicBool, Ordering};

use min_navbar::collaborators::ModalMode;

#[derive(Debug, Default)]
pub struct ModalState {
    enabled: AtomicBool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&self, enabled: bool) {
        let was = self.enabled.swap(enabled, Ordering::SeqCst);
        if was != enabled {
            tracing::debug!(enabled, "Modal mode changed");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl ModalMode for ModalState {
    fn enabled(&self) -> bool {
        self.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let modal = ModalState::new();
        assert!(!modal.enabled());
        modal.set_enabled(true);
        assert!(modal.enabled());
        modal.set_enabled(false);
        assert!(!modal.is_enabled());
    }
}
