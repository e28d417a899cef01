//! Navbar content-blocking toggle

use parking_lot::RwLock;
use std::sync::Arc;

use min_navbar::collaborators::TabWidget;
use min_navbar::dom::Widget;
use min_navbar::NavbarError;
use min_navigation::SourceUrlParser;
use min_privacy::{BlockingStatus, ContentBlocking};
use min_tabs::TabManager;

use crate::strings::Strings;

pub const CONTENT_BLOCKING_TOGGLE_NAME: &str = "content-blocking-toggle";

/// Shows whether blocking applies to the edited tab's site. Hidden for pages
/// blocking can't touch and while blocking is off everywhere.
pub struct ContentBlockingToggle {
    tabs: TabManager,
    blocking: Arc<RwLock<ContentBlocking>>,
    strings: Arc<Strings>,
    source_urls: SourceUrlParser,
}

impl ContentBlockingToggle {
    pub fn new(
        tabs: TabManager,
        blocking: Arc<RwLock<ContentBlocking>>,
        strings: Arc<Strings>,
        source_urls: SourceUrlParser,
    ) -> Self {
        Self {
            tabs,
            blocking,
            strings,
            source_urls,
        }
    }

    fn page_url(&self, tab_id: &str) -> Result<String, NavbarError> {
        let tab = self
            .tabs
            .get_tab(tab_id)
            .map_err(|e| NavbarError::collaborator("content-blocking", e.to_string()))?;
        Ok(self.source_urls.source_url(&tab.url))
    }

    pub fn status(&self, tab_id: &str) -> Result<BlockingStatus, NavbarError> {
        let url = self.page_url(tab_id)?;
        Ok(self.blocking.read().status_for(&url))
    }

    /// Flip the exemption for the tab's site.
    pub fn toggle(&self, tab_id: &str) -> Result<BlockingStatus, NavbarError> {
        let url = self.page_url(tab_id)?;
        let mut blocking = self.blocking.write();
        let status = match blocking.status_for(&url) {
            BlockingStatus::Active => blocking.set_exempt(&url, true),
            BlockingStatus::Exempt => blocking.set_exempt(&url, false),
            other => other,
        };
        Ok(status)
    }
}

impl TabWidget for ContentBlockingToggle {
    fn create(&self) -> Widget {
        let widget = Widget::new(CONTENT_BLOCKING_TOGGLE_NAME);
        widget.update(|state| state.hidden = true);
        widget
    }

    fn update(&self, tab_id: &str, widget: &Widget) -> min_navbar::Result<()> {
        let status = self.status(tab_id)?;
        let (label, active, hidden) = match status {
            BlockingStatus::Active => (self.strings.get("disableBlocking"), true, false),
            BlockingStatus::Exempt => (self.strings.get("enableBlocking"), false, false),
            BlockingStatus::Disabled | BlockingStatus::NotApplicable => {
                (String::new(), false, true)
            }
        };

        widget.update(|state| {
            state.label = label;
            state.active = active;
            state.hidden = hidden;
            state.tab_id = Some(tab_id.to_string());
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> (TabManager, Arc<RwLock<ContentBlocking>>, ContentBlockingToggle) {
        let tabs = TabManager::new();
        let blocking = Arc::new(RwLock::new(ContentBlocking::new()));
        let toggle = ContentBlockingToggle::new(
            tabs.clone(),
            blocking.clone(),
            Arc::new(Strings::english()),
            SourceUrlParser::default(),
        );
        (tabs, blocking, toggle)
    }

    #[test]
    fn test_web_page_states() {
        let (tabs, _blocking, toggle) = toggle();
        let tab = tabs
            .create_tab("https://news.example.com/today".to_string())
            .unwrap();
        let widget = toggle.create();
        assert!(widget.state().hidden);

        toggle.update(&tab.id, &widget).unwrap();
        let state = widget.state();
        assert!(state.active);
        assert!(!state.hidden);
        assert_eq!(state.label, "Disable blocking for this site");

        assert_eq!(toggle.toggle(&tab.id).unwrap(), BlockingStatus::Exempt);
        toggle.update(&tab.id, &widget).unwrap();
        assert!(!widget.state().active);
        assert_eq!(widget.state().label, "Enable blocking for this site");

        assert_eq!(toggle.toggle(&tab.id).unwrap(), BlockingStatus::Active);
    }

    #[test]
    fn test_hidden_for_internal_pages_and_when_disabled() {
        let (tabs, blocking, toggle) = toggle();
        let internal = tabs.create_tab("min://newtab".to_string()).unwrap();
        let web = tabs.create_tab("https://example.com".to_string()).unwrap();
        let widget = toggle.create();

        toggle.update(&internal.id, &widget).unwrap();
        assert!(widget.state().hidden);
        assert_eq!(toggle.toggle(&internal.id).unwrap(), BlockingStatus::NotApplicable);

        blocking.write().set_enabled(false);
        toggle.update(&web.id, &widget).unwrap();
        assert!(widget.state().hidden);
    }
}
