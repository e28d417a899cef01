//! Address submission
//!
//! The tab editor hands typed text to [`NavigationSearchbar::open_url`], which
//! resolves it and announces the result on a broadcast channel. The shell
//! consumes those announcements on its next tick.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

use min_navbar::collaborators::Searchbar;
use min_navbar::{KeyPress, NavbarError};
use min_navigation::{InputResolution, InputResolver};

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSelected {
    pub url: String,
    /// Open in a new tab behind the current one
    pub background: bool,
}

pub struct NavigationSearchbar {
    resolver: InputResolver,
    events: broadcast::Sender<UrlSelected>,
    visible: AtomicBool,
}

impl NavigationSearchbar {
    pub fn new(resolver: InputResolver) -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            resolver,
            events,
            visible: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UrlSelected> {
        self.events.subscribe()
    }

    pub fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    pub fn resolver(&self) -> &InputResolver {
        &self.resolver
    }
}

impl Searchbar for NavigationSearchbar {
    fn open_url(&self, value: &str, event: &mut KeyPress) -> min_navbar::Result<()> {
        let resolution = self.resolver.resolve(value);
        let background = event.opens_new_tab();

        match &resolution {
            InputResolution::Navigate(url) => {
                tracing::debug!(url = %url, background, "Navigating to typed address")
            }
            InputResolution::Search(url) => {
                tracing::debug!(url = %url, background, "Searching for typed text")
            }
        }

        self.events
            .send(UrlSelected {
                url: resolution.url().to_string(),
                background,
            })
            .map(|_| ())
            .map_err(|_| NavbarError::collaborator("searchbar", "no listener for selected URLs"))
    }

    fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_url_broadcasts_resolution() {
        let searchbar = NavigationSearchbar::new(InputResolver::new());
        let mut events = searchbar.subscribe();

        searchbar
            .open_url("example.com", &mut KeyPress::enter())
            .unwrap();
        assert_eq!(
            events.try_recv().unwrap(),
            UrlSelected {
                url: "https://example.com".to_string(),
                background: false,
            }
        );

        searchbar
            .open_url("rust borrow checker", &mut KeyPress::enter().with_meta())
            .unwrap();
        let selected = events.try_recv().unwrap();
        assert!(selected.background);
        assert!(selected.url.starts_with("https://duckduckgo.com/?q=rust"));
    }

    #[test]
    fn test_open_url_without_listener_fails() {
        let searchbar = NavigationSearchbar::new(InputResolver::new());
        let err = searchbar
            .open_url("example.com", &mut KeyPress::enter())
            .unwrap_err();
        assert!(matches!(
            err,
            NavbarError::Collaborator {
                subsystem: "searchbar",
                ..
            }
        ));
    }

    #[test]
    fn test_hide() {
        let searchbar = NavigationSearchbar::new(InputResolver::new());
        searchbar.show();
        assert!(searchbar.is_visible());
        searchbar.hide();
        assert!(!searchbar.is_visible());
    }
}
