//! In-memory elements
//!
//! Behave like the DOM elements the editor expects, record what was done to
//! them and let callers fire events by hand. Used by tests and by hosts that
//! render the editor themselves.

use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::collaborators::LayoutProbe;
use crate::dispatcher::KeyPress;
use crate::dom::{
    BodyClassList, ClickHandler, Clickable, Document, KeyPressHandler, OverlayElement,
    OverlayStyle, Rect, TextInput, Widget, ADD_TAB_BUTTON_ID, CONTAINER_ID, CONTENT_REGION_ID,
    INPUT_ID,
};

#[derive(Debug)]
struct OverlayInner {
    hidden: bool,
    style: OverlayStyle,
    children: Vec<Widget>,
}

/// Starts out hidden, like the markup it stands in for.
pub struct HeadlessOverlay {
    inner: RwLock<OverlayInner>,
}

impl HeadlessOverlay {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(OverlayInner {
                hidden: true,
                style: OverlayStyle::default(),
                children: Vec::new(),
            }),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.inner.read().hidden
    }

    pub fn style(&self) -> OverlayStyle {
        self.inner.read().style.clone()
    }

    pub fn children(&self) -> Vec<Widget> {
        self.inner.read().children.clone()
    }
}

impl Default for HeadlessOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayElement for HeadlessOverlay {
    fn set_hidden(&self, hidden: bool) {
        self.inner.write().hidden = hidden;
    }

    fn is_hidden(&self) -> bool {
        HeadlessOverlay::is_hidden(self)
    }

    fn set_style(&self, style: OverlayStyle) {
        self.inner.write().style = style;
    }

    fn style(&self) -> OverlayStyle {
        HeadlessOverlay::style(self)
    }

    fn remove_style(&self) {
        self.inner.write().style = OverlayStyle::default();
    }

    fn append_child(&self, widget: Widget) {
        self.inner.write().children.push(widget);
    }
}

#[derive(Debug, Default)]
struct InputInner {
    value: String,
    placeholder: String,
    focused: bool,
    /// Selected character range
    selection: Option<(usize, usize)>,
    /// Caret position in characters when nothing is selected
    caret: usize,
    scroll_left: f64,
}

#[derive(Default)]
pub struct HeadlessInput {
    inner: RwLock<InputInner>,
    handlers: RwLock<Vec<KeyPressHandler>>,
}

impl HeadlessInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        self.inner.read().value.clone()
    }

    pub fn placeholder(&self) -> String {
        self.inner.read().placeholder.clone()
    }

    pub fn is_focused(&self) -> bool {
        self.inner.read().focused
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.inner.read().selection
    }

    pub fn caret(&self) -> usize {
        self.inner.read().caret
    }

    pub fn scroll_left(&self) -> f64 {
        self.inner.read().scroll_left
    }

    pub fn set_scroll_left(&self, offset: f64) {
        self.inner.write().scroll_left = offset;
    }

    /// Replace the text as if typed; caret ends up after it.
    pub fn type_text(&self, text: &str) {
        let mut inner = self.inner.write();
        inner.value = text.to_string();
        inner.selection = None;
        inner.caret = text.chars().count();
    }

    /// Fire key-press listeners and return the event as they left it.
    pub fn press_key(&self, mut key: KeyPress) -> KeyPress {
        let handlers = self.handlers.read().clone();
        for handler in handlers {
            handler(&mut key);
        }
        key
    }
}

impl TextInput for HeadlessInput {
    fn set_placeholder(&self, text: &str) {
        self.inner.write().placeholder = text.to_string();
    }

    fn set_value(&self, value: &str) {
        self.type_text(value);
    }

    fn value(&self) -> String {
        HeadlessInput::value(self)
    }

    fn focus(&self) {
        self.inner.write().focused = true;
    }

    fn blur(&self) {
        self.inner.write().focused = false;
    }

    fn select_all(&self) {
        let mut inner = self.inner.write();
        inner.selection = Some((0, inner.value.chars().count()));
    }

    fn set_scroll_left(&self, offset: f64) {
        HeadlessInput::set_scroll_left(self, offset);
    }

    fn on_key_press(&self, handler: KeyPressHandler) {
        self.handlers.write().push(handler);
    }
}

#[derive(Default)]
pub struct HeadlessClickable {
    handlers: RwLock<Vec<ClickHandler>>,
}

impl HeadlessClickable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&self) {
        let handlers = self.handlers.read().clone();
        for handler in handlers {
            handler();
        }
    }
}

impl Clickable for HeadlessClickable {
    fn on_click(&self, handler: ClickHandler) {
        self.handlers.write().push(handler);
    }
}

#[derive(Debug, Default)]
pub struct HeadlessBody {
    classes: RwLock<BTreeSet<String>>,
}

impl HeadlessBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.read().iter().cloned().collect()
    }

    pub fn add_class(&self, class: &str) {
        self.classes.write().insert(class.to_string());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.read().contains(class)
    }
}

impl BodyClassList for HeadlessBody {
    fn add_class(&self, class: &str) {
        HeadlessBody::add_class(self, class);
    }

    fn remove_class(&self, class: &str) {
        self.classes.write().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        HeadlessBody::has_class(self, class)
    }
}

pub struct HeadlessDocument {
    overlays: HashMap<String, Arc<HeadlessOverlay>>,
    inputs: HashMap<String, Arc<HeadlessInput>>,
    clickables: HashMap<String, Arc<HeadlessClickable>>,
    body: Arc<HeadlessBody>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self {
            overlays: HashMap::new(),
            inputs: HashMap::new(),
            clickables: HashMap::new(),
            body: Arc::new(HeadlessBody::new()),
        }
    }

    /// Editor overlay, its input, the content region and the add-tab button.
    pub fn standard() -> Self {
        Self::new()
            .with_overlay(CONTAINER_ID)
            .with_input(INPUT_ID)
            .with_clickable(CONTENT_REGION_ID)
            .with_clickable(ADD_TAB_BUTTON_ID)
    }

    pub fn with_overlay(mut self, id: &str) -> Self {
        self.overlays
            .insert(id.to_string(), Arc::new(HeadlessOverlay::new()));
        self
    }

    pub fn with_input(mut self, id: &str) -> Self {
        self.inputs
            .insert(id.to_string(), Arc::new(HeadlessInput::new()));
        self
    }

    pub fn with_clickable(mut self, id: &str) -> Self {
        self.clickables
            .insert(id.to_string(), Arc::new(HeadlessClickable::new()));
        self
    }

    /// Remove the element with `id`, whatever its kind.
    pub fn without(mut self, id: &str) -> Self {
        self.overlays.remove(id);
        self.inputs.remove(id);
        self.clickables.remove(id);
        self
    }

    pub fn headless_overlay(&self, id: &str) -> Option<Arc<HeadlessOverlay>> {
        self.overlays.get(id).cloned()
    }

    pub fn headless_input(&self, id: &str) -> Option<Arc<HeadlessInput>> {
        self.inputs.get(id).cloned()
    }

    pub fn headless_clickable(&self, id: &str) -> Option<Arc<HeadlessClickable>> {
        self.clickables.get(id).cloned()
    }

    pub fn headless_body(&self) -> Arc<HeadlessBody> {
        Arc::clone(&self.body)
    }
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for HeadlessDocument {
    fn overlay(&self, id: &str) -> Option<Arc<dyn OverlayElement>> {
        self.overlays
            .get(id)
            .map(|overlay| Arc::clone(overlay) as Arc<dyn OverlayElement>)
    }

    fn text_input(&self, id: &str) -> Option<Arc<dyn TextInput>> {
        self.inputs
            .get(id)
            .map(|input| Arc::clone(input) as Arc<dyn TextInput>)
    }

    fn clickable(&self, id: &str) -> Option<Arc<dyn Clickable>> {
        self.clickables
            .get(id)
            .map(|clickable| Arc::clone(clickable) as Arc<dyn Clickable>)
    }

    fn body(&self) -> Arc<dyn BodyClassList> {
        Arc::clone(&self.body) as Arc<dyn BodyClassList>
    }
}

/// Layout with hand-placed rectangles. Counts geometry reads.
pub struct HeadlessLayout {
    tab_items: RwLock<HashMap<String, Rect>>,
    container: RwLock<Option<Rect>>,
    viewport_width: RwLock<f64>,
    reads: AtomicUsize,
}

impl HeadlessLayout {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            tab_items: RwLock::new(HashMap::new()),
            container: RwLock::new(None),
            viewport_width: RwLock::new(viewport_width),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn set_tab_rect(&self, tab_id: &str, rect: Rect) {
        self.tab_items.write().insert(tab_id.to_string(), rect);
    }

    pub fn remove_tab_rect(&self, tab_id: &str) {
        self.tab_items.write().remove(tab_id);
    }

    pub fn set_container_rect(&self, rect: Rect) {
        *self.container.write() = Some(rect);
    }

    pub fn set_viewport_width(&self, width: f64) {
        *self.viewport_width.write() = width;
    }

    /// How many tab item rectangles have been read
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl LayoutProbe for HeadlessLayout {
    fn tab_item_rect(&self, tab_id: &str) -> Option<Rect> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.tab_items.read().get(tab_id).copied()
    }

    fn tab_container_rect(&self) -> Option<Rect> {
        *self.container.read()
    }

    fn viewport_width(&self) -> f64 {
        *self.viewport_width.read()
    }
}
