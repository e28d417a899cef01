//! Element abstractions
//!
//! The editor never talks to a rendering engine directly. Hosts hand it a
//! [`Document`] that resolves element ids to these traits.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::dispatcher::KeyPress;

/// Overlay container
pub const CONTAINER_ID: &str = "tab-editor";
/// Address input inside the overlay
pub const INPUT_ID: &str = "tab-editor-input";
/// Region hosting the page content views
pub const CONTENT_REGION_ID: &str = "webviews";
/// New tab button in the tab strip
pub const ADD_TAB_BUTTON_ID: &str = "add-tab-button";

/// Screen rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Inline style the editor puts on the overlay. `Default` is "no inline style".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayStyle {
    pub opacity: Option<f64>,
    /// Horizontal offset in pixels
    pub translate_x: Option<f64>,
    /// Duration of an `all` transition
    pub transition: Option<Duration>,
}

impl OverlayStyle {
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.translate_x.is_none() && self.transition.is_none()
    }

    /// Render as a CSS declaration block for hosts backed by a web view.
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();
        if let Some(duration) = self.transition {
            declarations.push(format!("transition: {}s all", duration.as_secs_f64()));
        }
        if let Some(opacity) = self.opacity {
            declarations.push(format!("opacity: {opacity}"));
        }
        if let Some(offset) = self.translate_x {
            declarations.push(format!("transform: translateX({offset}px)"));
        }
        declarations.join("; ")
    }
}

/// What a navbar widget currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Accessible label / tooltip
    pub label: String,
    /// Pressed / highlighted
    pub active: bool,
    pub hidden: bool,
    /// Tab the widget was last updated for
    pub tab_id: Option<String>,
}

/// A small UI element owned by the editor and mutated in place by its subsystem.
/// Clones refer to the same element.
#[derive(Clone)]
pub struct Widget {
    name: Arc<str>,
    state: Arc<RwLock<WidgetState>>,
}

impl Widget {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            state: Arc::new(RwLock::new(WidgetState::default())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> WidgetState {
        self.state.read().clone()
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut WidgetState),
    {
        f(&mut self.state.write());
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("name", &self.name)
            .field("state", &*self.state.read())
            .finish()
    }
}

pub type KeyPressHandler = Arc<dyn Fn(&mut KeyPress) + Send + Sync>;
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

pub trait OverlayElement: Send + Sync {
    fn set_hidden(&self, hidden: bool);
    fn is_hidden(&self) -> bool;
    fn set_style(&self, style: OverlayStyle);
    fn style(&self) -> OverlayStyle;
    /// Drop all inline styling
    fn remove_style(&self);
    fn append_child(&self, widget: Widget);
}

pub trait TextInput: Send + Sync {
    fn set_placeholder(&self, text: &str);
    fn set_value(&self, value: &str);
    fn value(&self) -> String;
    fn focus(&self);
    fn blur(&self);
    fn select_all(&self);
    fn set_scroll_left(&self, offset: f64);
    fn on_key_press(&self, handler: KeyPressHandler);
}

pub trait Clickable: Send + Sync {
    fn on_click(&self, handler: ClickHandler);
}

/// Class list of the document body
pub trait BodyClassList: Send + Sync {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

pub trait Document: Send + Sync {
    fn overlay(&self, id: &str) -> Option<Arc<dyn OverlayElement>>;
    fn text_input(&self, id: &str) -> Option<Arc<dyn TextInput>>;
    fn clickable(&self, id: &str) -> Option<Arc<dyn Clickable>>;
    fn body(&self) -> Arc<dyn BodyClassList>;
}
