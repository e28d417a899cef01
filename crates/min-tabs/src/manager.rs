//! Tab Manager
//!
//! Keeps tabs in strip order. Cloning shares the underlying list.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Default)]
struct TabList {
    tabs: Vec<Tab>,
    selected: Option<String>,
}

impl TabList {
    fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn get_mut(&mut self, tab_id: &str) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }
}

pub struct TabManager {
    inner: Arc<RwLock<TabList>>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TabList::default())),
        }
    }

    /// Append a new tab to the end of the strip. The selection is left alone.
    pub fn create_tab(&self, url: String) -> Result<Tab> {
        let tab = Tab::new(url)?;
        self.inner.write().tabs.push(tab.clone());

        tracing::info!(tab_id = %tab.id, url = %tab.url, "Created new tab");

        Ok(tab)
    }

    /// Get a tab by ID
    pub fn get_tab(&self, tab_id: &str) -> Result<Tab> {
        self.inner
            .read()
            .tabs
            .iter()
            .find(|t| t.id == tab_id)
            .cloned()
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    pub fn count(&self) -> usize {
        self.inner.read().tabs.len()
    }

    pub fn ordered_tabs(&self) -> Vec<Tab> {
        self.inner.read().tabs.clone()
    }

    pub fn select_tab(&self, tab_id: &str) -> Result<Tab> {
        let mut list = self.inner.write();
        let tab = list
            .tabs
            .iter()
            .find(|t| t.id == tab_id)
            .cloned()
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        list.selected = Some(tab.id.clone());

        tracing::debug!(tab_id = %tab_id, "Selected tab");

        Ok(tab)
    }

    pub fn selected_tab(&self) -> Option<Tab> {
        let list = self.inner.read();
        let id = list.selected.as_deref()?;
        list.tabs.iter().find(|t| t.id == id).cloned()
    }

    /// Navigate a tab to a new URL
    pub fn navigate_tab(&self, tab_id: &str, url: String) -> Result<Tab> {
        let mut list = self.inner.write();
        let tab = list.get_mut(tab_id)?;
        tab.navigate(url)?;

        tracing::debug!(tab_id = %tab_id, url = %tab.url, "Navigated tab");

        Ok(tab.clone())
    }

    pub fn set_tab_title(&self, tab_id: &str, title: String) -> Result<Tab> {
        let mut list = self.inner.write();
        let tab = list.get_mut(tab_id)?;
        tab.set_title(title);
        Ok(tab.clone())
    }

    /// Close a tab. If it was selected, its right neighbour (or the new last tab) takes over.
    pub fn close_tab(&self, tab_id: &str) -> Result<()> {
        let mut list = self.inner.write();
        let index = list
            .position(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        list.tabs.remove(index);

        if list.selected.as_deref() == Some(tab_id) {
            list.selected = list
                .tabs
                .get(index.min(list.tabs.len().saturating_sub(1)))
                .map(|t| t.id.clone());
        }

        tracing::info!(tab_id = %tab_id, "Closed tab");

        Ok(())
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabManager {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
