//! Bookmarks and the navbar star

use parking_lot::RwLock;
use std::sync::Arc;

use min_navbar::collaborators::TabWidget;
use min_navbar::dom::Widget;
use min_navbar::NavbarError;
use min_navigation::SourceUrlParser;
use min_tabs::TabManager;

use crate::strings::Strings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

/// In-memory bookmark list, one entry per URL.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the bookmark for `bookmark.url`.
    pub fn add(&self, bookmark: Bookmark) {
        let mut bookmarks = self.bookmarks.write();
        match bookmarks.iter_mut().find(|b| b.url == bookmark.url) {
            Some(existing) => *existing = bookmark,
            None => bookmarks.push(bookmark),
        }
    }

    pub fn remove(&self, url: &str) -> bool {
        let mut bookmarks = self.bookmarks.write();
        let before = bookmarks.len();
        bookmarks.retain(|b| b.url != url);
        bookmarks.len() != before
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.read().iter().any(|b| b.url == url)
    }

    /// Returns whether `url` is bookmarked afterwards.
    pub fn toggle(&self, url: &str, title: &str) -> bool {
        if self.remove(url) {
            tracing::info!(url, "Bookmark removed");
            false
        } else {
            self.add(Bookmark {
                title: title.to_string(),
                url: url.to_string(),
            });
            tracing::info!(url, "Bookmark added");
            true
        }
    }

    pub fn list(&self) -> Vec<Bookmark> {
        self.bookmarks.read().clone()
    }
}

pub const BOOKMARK_STAR_NAME: &str = "bookmark-star";

/// Star button that shows whether the edited tab's page is bookmarked.
pub struct BookmarkStar {
    tabs: TabManager,
    store: Arc<BookmarkStore>,
    strings: Arc<Strings>,
    source_urls: SourceUrlParser,
    new_tab_url: String,
}

impl BookmarkStar {
    pub fn new(
        tabs: TabManager,
        store: Arc<BookmarkStore>,
        strings: Arc<Strings>,
        source_urls: SourceUrlParser,
        new_tab_url: String,
    ) -> Self {
        Self {
            tabs,
            store,
            strings,
            source_urls,
            new_tab_url,
        }
    }

    /// The URL a bookmark for `tab_id` is filed under.
    pub fn bookmark_url(&self, tab_id: &str) -> Result<String, NavbarError> {
        let tab = self
            .tabs
            .get_tab(tab_id)
            .map_err(|e| NavbarError::collaborator("bookmarks", e.to_string()))?;
        Ok(self.source_urls.source_url(&tab.url))
    }
}

impl TabWidget for BookmarkStar {
    fn create(&self) -> Widget {
        let widget = Widget::new(BOOKMARK_STAR_NAME);
        widget.update(|state| state.label = self.strings.get("addBookmark"));
        widget
    }

    fn update(&self, tab_id: &str, widget: &Widget) -> min_navbar::Result<()> {
        let url = self.bookmark_url(tab_id)?;
        let bookmarked = self.store.is_bookmarked(&url);
        let label = if bookmarked {
            self.strings.get("removeBookmark")
        } else {
            self.strings.get("addBookmark")
        };
        let hidden = url.is_empty() || url == self.new_tab_url;

        widget.update(|state| {
            state.label = label;
            state.active = bookmarked;
            state.hidden = hidden;
            state.tab_id = Some(tab_id.to_string());
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> (TabManager, Arc<BookmarkStore>, BookmarkStar) {
        let tabs = TabManager::new();
        let store = Arc::new(BookmarkStore::new());
        let star = BookmarkStar::new(
            tabs.clone(),
            store.clone(),
            Arc::new(Strings::english()),
            SourceUrlParser::default(),
            "min://newtab".to_string(),
        );
        (tabs, store, star)
    }

    #[test]
    fn test_store_toggle() {
        let store = BookmarkStore::new();
        assert!(store.toggle("https://example.com", "Example"));
        assert!(store.is_bookmarked("https://example.com"));
        assert!(!store.toggle("https://example.com", "Example"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_store_replaces_same_url() {
        let store = BookmarkStore::new();
        store.add(Bookmark {
            title: "Old".to_string(),
            url: "https://example.com".to_string(),
        });
        store.add(Bookmark {
            title: "New".to_string(),
            url: "https://example.com".to_string(),
        });

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "New");
        assert!(!store.remove("https://example.org"));
    }

    #[test]
    fn test_star_follows_bookmark_state() {
        let (tabs, store, star) = star();
        let tab = tabs.create_tab("https://example.com".to_string()).unwrap();
        let widget = star.create();
        assert_eq!(widget.state().label, "Bookmark this page");

        star.update(&tab.id, &widget).unwrap();
        assert!(!widget.state().active);
        assert!(!widget.state().hidden);

        store.toggle("https://example.com", "Example");
        star.update(&tab.id, &widget).unwrap();
        let state = widget.state();
        assert!(state.active);
        assert_eq!(state.label, "Remove bookmark");
        assert_eq!(state.tab_id.as_deref(), Some(tab.id.as_str()));
    }

    #[test]
    fn test_star_uses_source_url_and_hides_on_new_tab() {
        let (tabs, store, star) = star();
        store.toggle("https://example.com/post", "Post");
        let reader = tabs
            .create_tab(
                "min://app/pages/reader/index.html?url=https%3A%2F%2Fexample.com%2Fpost"
                    .to_string(),
            )
            .unwrap();
        let blank = tabs.create_tab("min://newtab".to_string()).unwrap();
        let widget = star.create();

        star.update(&reader.id, &widget).unwrap();
        assert!(widget.state().active);

        star.update(&blank.id, &widget).unwrap();
        assert!(widget.state().hidden);
    }

    #[test]
    fn test_star_missing_tab() {
        let (_tabs, _store, star) = star();
        let err = star.update("missing", &star.create()).unwrap_err();
        assert!(matches!(
            err,
            NavbarError::Collaborator {
                subsystem: "bookmarks",
                ..
            }
        ));
    }
}
