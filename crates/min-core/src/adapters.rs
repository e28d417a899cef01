//! Tab and URL services as seen by the tab editor

use min_navbar::collaborators::{TabSnapshot, TabSource, UrlParser};
use min_navigation::SourceUrlParser;
use min_tabs::TabManager;

/// Read-only view of the tab list.
#[derive(Clone)]
pub struct TabDirectory(pub TabManager);

impl TabSource for TabDirectory {
    fn get(&self, tab_id: &str) -> Option<TabSnapshot> {
        self.0
            .get_tab(tab_id)
            .ok()
            .map(|tab| TabSnapshot { url: tab.url })
    }

    fn count(&self) -> usize {
        self.0.count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceUrls(pub SourceUrlParser);

impl UrlParser for SourceUrls {
    fn source_url(&self, url: &str) -> String {
        self.0.source_url(url)
    }
}
