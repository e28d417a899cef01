//! Subsystems the editor depends on but does not own.

use std::sync::Arc;

use crate::animation::FrameScheduler;
use crate::dispatcher::KeyPress;
use crate::dom::{OverlayElement, Rect, Widget};
use crate::Result;

/// Application-wide blocking mode (a dialog is up).
pub trait ModalMode: Send + Sync {
    fn enabled(&self) -> bool;
}

/// The part of a tab the editor reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSnapshot {
    pub url: String,
}

pub trait TabSource: Send + Sync {
    fn get(&self, tab_id: &str) -> Option<TabSnapshot>;
    fn count(&self) -> usize;
}

pub trait UrlParser: Send + Sync {
    /// Map internal page URLs back to what the user should see.
    fn source_url(&self, url: &str) -> String;
}

/// Named stand-ins shown over the page content.
pub trait ContentPlaceholders: Send + Sync {
    fn request_placeholder(&self, name: &str) -> Result<()>;
    fn hide_placeholder(&self, name: &str) -> Result<()>;
}

pub trait Searchbar: Send + Sync {
    /// Commit typed input for navigation. `event` is the key press that triggered it.
    fn open_url(&self, value: &str, event: &mut KeyPress) -> Result<()>;
    fn hide(&self);
}

/// A navbar widget whose content follows the edited tab.
pub trait TabWidget: Send + Sync {
    fn create(&self) -> Widget;
    fn update(&self, tab_id: &str, widget: &Widget) -> Result<()>;
}

pub trait KeyboardNavigation: Send + Sync {
    fn add_to_group(&self, group: &str, element: Arc<dyn OverlayElement>);
}

pub trait Localizer: Send + Sync {
    fn get(&self, key: &str) -> String;
}

/// Layout reads for the reveal animation.
pub trait LayoutProbe: Send + Sync {
    /// Tab strip item for `tab_id`, if it is currently laid out
    fn tab_item_rect(&self, tab_id: &str) -> Option<Rect>;
    /// The tab strip container
    fn tab_container_rect(&self) -> Option<Rect>;
    fn viewport_width(&self) -> f64;
}

/// Opens a fresh tab (add-tab button target).
pub trait TabOpener: Send + Sync {
    fn add_tab(&self) -> Result<()>;
}

/// Everything the controller calls out to.
#[derive(Clone)]
pub struct Collaborators {
    pub modal_mode: Arc<dyn ModalMode>,
    pub tabs: Arc<dyn TabSource>,
    pub url_parser: Arc<dyn UrlParser>,
    pub webviews: Arc<dyn ContentPlaceholders>,
    pub searchbar: Arc<dyn Searchbar>,
    pub bookmark_star: Arc<dyn TabWidget>,
    pub content_blocking: Arc<dyn TabWidget>,
    pub keyboard_navigation: Arc<dyn KeyboardNavigation>,
    pub strings: Arc<dyn Localizer>,
    pub layout: Arc<dyn LayoutProbe>,
    pub scheduler: Arc<dyn FrameScheduler>,
}
