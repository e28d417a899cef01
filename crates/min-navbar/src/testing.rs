//! Recording collaborators and a ready-made editor for unit tests.

use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::animation::FrameQueue;
use crate::collaborators::{
    Collaborators, ContentPlaceholders, KeyboardNavigation, Localizer, ModalMode, Searchbar,
    TabSnapshot, TabSource, TabWidget, UrlParser,
};
use crate::controller::{EditorSettings, TabEditorController};
use crate::dispatcher::{InputDispatcher, KeyPress};
use crate::dom::{OverlayElement, OverlayStyle, Widget, CONTAINER_ID, INPUT_ID};
use crate::error::NavbarError;
use crate::headless::{
    HeadlessBody, HeadlessDocument, HeadlessInput, HeadlessLayout, HeadlessOverlay,
};
use crate::Result;

#[derive(Default)]
pub(crate) struct FakeModal(AtomicBool);

impl FakeModal {
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::SeqCst);
    }
}

impl ModalMode for FakeModal {
    fn enabled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub(crate) struct FakeTabs(Mutex<Vec<(String, String)>>);

impl FakeTabs {
    pub fn add(&self, id: &str, url: &str) {
        self.0.lock().push((id.to_string(), url.to_string()));
    }
}

impl TabSource for FakeTabs {
    fn get(&self, tab_id: &str) -> Option<TabSnapshot> {
        self.0
            .lock()
            .iter()
            .find(|(id, _)| id == tab_id)
            .map(|(_, url)| TabSnapshot { url: url.clone() })
    }

    fn count(&self) -> usize {
        self.0.lock().len()
    }
}

/// Internal pages carry their source as `?url=`.
pub(crate) struct QueryUrlParser;

impl UrlParser for QueryUrlParser {
    fn source_url(&self, url: &str) -> String {
        match url.split_once("?url=") {
            Some((_, source)) if url.starts_with("min://app/") => source.to_string(),
            _ => url.to_string(),
        }
    }
}

#[derive(Default)]
pub(crate) struct FakePlaceholders {
    log: Mutex<Vec<String>>,
    active: Mutex<BTreeSet<String>>,
    fail_next: AtomicBool,
}

impl FakePlaceholders {
    pub fn log(&self) -> Vec<String> {
        self.log.lock().clone()
    }

    pub fn active(&self) -> Vec<String> {
        self.active.lock().iter().cloned().collect()
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl ContentPlaceholders for FakePlaceholders {
    fn request_placeholder(&self, name: &str) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(NavbarError::collaborator("webviews", "capture failed"));
        }
        self.log.lock().push(format!("request:{name}"));
        self.active.lock().insert(name.to_string());
        Ok(())
    }

    fn hide_placeholder(&self, name: &str) -> Result<()> {
        self.log.lock().push(format!("hide:{name}"));
        self.active.lock().remove(name);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeSearchbar {
    submissions: Mutex<Vec<String>>,
    hides: AtomicUsize,
    fail_next: AtomicBool,
}

impl FakeSearchbar {
    pub fn submissions(&self) -> Vec<String> {
        self.submissions.lock().clone()
    }

    pub fn hides(&self) -> usize {
        self.hides.load(Ordering::SeqCst)
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl Searchbar for FakeSearchbar {
    fn open_url(&self, value: &str, _event: &mut KeyPress) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(NavbarError::collaborator("searchbar", "no handler"));
        }
        self.submissions.lock().push(value.to_string());
        Ok(())
    }

    fn hide(&self) {
        self.hides.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) struct FakeWidgets {
    name: &'static str,
    created: AtomicUsize,
    updates: Mutex<Vec<String>>,
}

impl FakeWidgets {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            created: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> Vec<String> {
        self.updates.lock().clone()
    }
}

impl TabWidget for FakeWidgets {
    fn create(&self) -> Widget {
        self.created.fetch_add(1, Ordering::SeqCst);
        Widget::new(self.name)
    }

    fn update(&self, tab_id: &str, widget: &Widget) -> Result<()> {
        self.updates.lock().push(tab_id.to_string());
        widget.update(|state| state.tab_id = Some(tab_id.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeKeyboard(Mutex<Vec<String>>);

impl FakeKeyboard {
    pub fn groups(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

impl KeyboardNavigation for FakeKeyboard {
    fn add_to_group(&self, group: &str, _element: Arc<dyn OverlayElement>) {
        self.0.lock().push(group.to_string());
    }
}

pub(crate) struct EnglishStrings;

impl Localizer for EnglishStrings {
    fn get(&self, key: &str) -> String {
        match key {
            "searchbarPlaceholder" => "Search or enter address".to_string(),
            other => other.to_string(),
        }
    }
}

/// Everything visible from outside the controller.
#[derive(Debug, PartialEq)]
pub(crate) struct Observed {
    shown: bool,
    hidden: bool,
    style: OverlayStyle,
    classes: Vec<String>,
    placeholders: Vec<String>,
    focused: bool,
    value: String,
}

pub(crate) struct Fixture {
    pub document: Arc<HeadlessDocument>,
    pub layout: Arc<HeadlessLayout>,
    pub frames: Arc<FrameQueue>,
    pub modal: Arc<FakeModal>,
    pub tabs: Arc<FakeTabs>,
    pub webviews: Arc<FakePlaceholders>,
    pub searchbar: Arc<FakeSearchbar>,
    pub star: Arc<FakeWidgets>,
    pub blocking: Arc<FakeWidgets>,
    pub keyboard: Arc<FakeKeyboard>,
    pub controller: TabEditorController,
    pub dispatcher: InputDispatcher,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_document(HeadlessDocument::standard())
    }

    pub fn with_document(document: HeadlessDocument) -> Self {
        Self::build(document, true)
    }

    /// Controller constructed but `initialize` not called. The dispatcher is
    /// built directly so the fixture shape stays the same.
    pub fn uninitialized() -> Self {
        Self::build(HeadlessDocument::standard(), false)
    }

    fn build(document: HeadlessDocument, initialize: bool) -> Self {
        let document = Arc::new(document);
        let layout = Arc::new(HeadlessLayout::new(1280.0));
        let frames = Arc::new(FrameQueue::new());
        let modal = Arc::new(FakeModal::default());
        let tabs = Arc::new(FakeTabs::default());
        let webviews = Arc::new(FakePlaceholders::default());
        let searchbar = Arc::new(FakeSearchbar::default());
        let star = Arc::new(FakeWidgets::new("star"));
        let blocking = Arc::new(FakeWidgets::new("content-blocking"));
        let keyboard = Arc::new(FakeKeyboard::default());

        let collaborators = Collaborators {
            modal_mode: modal.clone(),
            tabs: tabs.clone(),
            url_parser: Arc::new(QueryUrlParser),
            webviews: webviews.clone(),
            searchbar: searchbar.clone(),
            bookmark_star: star.clone(),
            content_blocking: blocking.clone(),
            keyboard_navigation: keyboard.clone(),
            strings: Arc::new(EnglishStrings),
            layout: layout.clone(),
            scheduler: frames.clone(),
        };

        let controller = TabEditorController::from_document(
            document.as_ref(),
            collaborators,
            EditorSettings::default(),
        )
        .expect("standard document has the editor elements");

        let dispatcher = if initialize {
            controller
                .initialize(document.as_ref())
                .expect("first initialize succeeds")
        } else {
            InputDispatcher::new(controller.clone())
        };

        Self {
            document,
            layout,
            frames,
            modal,
            tabs,
            webviews,
            searchbar,
            star,
            blocking,
            keyboard,
            controller,
            dispatcher,
        }
    }

    pub fn overlay(&self) -> Arc<HeadlessOverlay> {
        self.document.headless_overlay(CONTAINER_ID).unwrap()
    }

    pub fn input(&self) -> Arc<HeadlessInput> {
        self.document.headless_input(INPUT_ID).unwrap()
    }

    pub fn body(&self) -> Arc<HeadlessBody> {
        self.document.headless_body()
    }

    pub fn observe(&self) -> Observed {
        Observed {
            shown: self.controller.is_shown(),
            hidden: self.overlay().is_hidden(),
            style: self.overlay().style(),
            classes: self.body().classes(),
            placeholders: self.webviews.active(),
            focused: self.input().is_focused(),
            value: self.input().value(),
        }
    }
}
