//! Page content visibility
//!
//! Chrome that covers the page (the tab editor, menus) asks for a named
//! placeholder. The live page is shown again once every name is released.

use parking_lot::RwLock;
use std::collections::BTreeSet;

use min_navbar::collaborators::ContentPlaceholders;

#[derive(Debug, Default)]
pub struct ContentView {
    placeholders: RwLock<BTreeSet<String>>,
}

impl ContentView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self, name: &str) {
        let mut placeholders = self.placeholders.write();
        if placeholders.insert(name.to_string()) {
            tracing::debug!(placeholder = name, active = placeholders.len(), "Placeholder requested");
        }
    }

    /// Releasing a name that was never requested does nothing.
    pub fn release(&self, name: &str) {
        let mut placeholders = self.placeholders.write();
        if placeholders.remove(name) {
            tracing::debug!(placeholder = name, active = placeholders.len(), "Placeholder released");
        }
    }

    pub fn is_content_visible(&self) -> bool {
        self.placeholders.read().is_empty()
    }

    pub fn placeholders(&self) -> Vec<String> {
        self.placeholders.read().iter().cloned().collect()
    }
}

impl ContentPlaceholders for ContentView {
    fn request_placeholder(&self, name: &str) -> min_navbar::Result<()> {
        self.request(name);
        Ok(())
    }

    fn hide_placeholder(&self, name: &str) -> min_navbar::Result<()> {
        self.release(name);
        Ok(())
    }
}
