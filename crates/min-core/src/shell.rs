//! Browser chrome composition root
//!
//! Owns the tab list and every subsystem the tab editor talks to, wires the
//! editor and the add-tab button into a document, and pumps URL selections and
//! animation frames.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tokio::time::MissedTickBehavior;

use min_navbar::add_tab_button;
use min_navbar::collaborators::{Collaborators, LayoutProbe, TabOpener, TabWidget};
use min_navbar::dom::Document;
use min_navbar::{FrameQueue, InputDispatcher, NavbarError, TabEditorController};
use min_navigation::{InputResolver, SourceUrlParser};
use min_privacy::{BlockingStatus, ContentBlocking};
use min_tabs::{Tab, TabManager};

use crate::adapters::{SourceUrls, TabDirectory};
use crate::bookmarks::{BookmarkStar, BookmarkStore};
use crate::config::Config;
use crate::content_blocking::ContentBlockingToggle;
use crate::content_view::ContentView;
use crate::error::CoreError;
use crate::keyboard::KeyboardNavigationGroups;
use crate::modal::ModalState;
use crate::searchbar::{NavigationSearchbar, UrlSelected};
use crate::strings::Strings;
use crate::Result;

#[derive(Clone)]
pub struct Shell {
    config: Arc<Config>,
    tabs: TabManager,
    strings: Arc<Strings>,
    modal: Arc<ModalState>,
    content_view: Arc<ContentView>,
    bookmarks: Arc<BookmarkStore>,
    bookmark_star: Arc<BookmarkStar>,
    blocking: Arc<RwLock<ContentBlocking>>,
    blocking_toggle: Arc<ContentBlockingToggle>,
    keyboard: Arc<KeyboardNavigationGroups>,
    searchbar: Arc<NavigationSearchbar>,
    selections: Arc<Mutex<broadcast::Receiver<UrlSelected>>>,
    frames: Arc<FrameQueue>,
    editor: TabEditorController,
    dispatcher: InputDispatcher,
}

impl Shell {
    /// Build every subsystem from `config` and attach the editor to `document`.
    pub fn new(
        config: Config,
        document: &dyn Document,
        layout: Arc<dyn LayoutProbe>,
    ) -> Result<Self> {
        config.validate()?;

        let strings = Arc::new(Strings::english().with_overrides(&config.strings));
        let source_urls = SourceUrlParser::new(&config.internal_scheme);
        let resolver = InputResolver::with_search_engine(&config.search_engine)?;

        let tabs = TabManager::new();
        let modal = Arc::new(ModalState::new());
        let content_view = Arc::new(ContentView::new());
        let bookmarks = Arc::new(BookmarkStore::new());
        let blocking = Arc::new(RwLock::new(ContentBlocking::new()));
        let keyboard = Arc::new(KeyboardNavigationGroups::new());
        let searchbar = Arc::new(NavigationSearchbar::new(resolver));
        let selections = Arc::new(Mutex::new(searchbar.subscribe()));
        let frames = Arc::new(FrameQueue::new());

        let bookmark_star = Arc::new(BookmarkStar::new(
            tabs.clone(),
            bookmarks.clone(),
            strings.clone(),
            source_urls.clone(),
            config.new_tab_url.clone(),
        ));
        let blocking_toggle = Arc::new(ContentBlockingToggle::new(
            tabs.clone(),
            blocking.clone(),
            strings.clone(),
            source_urls.clone(),
        ));

        let collaborators = Collaborators {
            modal_mode: modal.clone(),
            tabs: Arc::new(TabDirectory(tabs.clone())),
            url_parser: Arc::new(SourceUrls(source_urls)),
            webviews: content_view.clone(),
            searchbar: searchbar.clone(),
            bookmark_star: bookmark_star.clone(),
            content_blocking: blocking_toggle.clone(),
            keyboard_navigation: keyboard.clone(),
            strings: strings.clone(),
            layout,
            scheduler: frames.clone(),
        };

        let editor =
            TabEditorController::from_document(document, collaborators, config.editor_settings())?;
        let dispatcher = editor.initialize(document)?;

        let shell = Self {
            config: Arc::new(config),
            tabs,
            strings,
            modal,
            content_view,
            bookmarks,
            bookmark_star,
            blocking,
            blocking_toggle,
            keyboard,
            searchbar,
            selections,
            frames,
            editor,
            dispatcher,
        };

        add_tab_button::initialize(document, Arc::new(shell.clone()));

        tracing::info!("Shell initialized");
        Ok(shell)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn content_view(&self) -> &ContentView {
        &self.content_view
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn content_blocking(&self) -> Arc<RwLock<ContentBlocking>> {
        Arc::clone(&self.blocking)
    }

    pub fn keyboard_navigation(&self) -> &KeyboardNavigationGroups {
        &self.keyboard
    }

    pub fn searchbar(&self) -> &NavigationSearchbar {
        &self.searchbar
    }

    pub fn frames(&self) -> &FrameQueue {
        &self.frames
    }

    pub fn editor(&self) -> &TabEditorController {
        &self.editor
    }

    pub fn dispatcher(&self) -> &InputDispatcher {
        &self.dispatcher
    }

    /// Open a tab on `url` and select it.
    pub fn open_tab(&self, url: &str) -> Result<Tab> {
        let tab = self.tabs.create_tab(url.to_string())?;
        self.tabs.select_tab(&tab.id)?;
        tracing::info!(tab_id = %tab.id, url = %url, "Opened tab");
        Ok(tab)
    }

    /// New blank tab, selected, with its address ready for typing.
    pub fn add_tab(&self) -> Result<Tab> {
        let tab = self.open_tab(&self.config.new_tab_url)?;
        self.edit_tab(&tab.id, None)?;
        Ok(tab)
    }

    /// Open the editor for `tab_id`. The searchbar follows it unless modal
    /// mode kept the editor closed.
    pub fn edit_tab(&self, tab_id: &str, editing_value: Option<&str>) -> Result<()> {
        self.editor.show(tab_id, editing_value, true)?;
        if self.editor.is_shown() {
            self.searchbar.show();
        }
        Ok(())
    }

    /// Record the page title reported for a tab.
    pub fn set_tab_title(&self, tab_id: &str, title: &str) -> Result<Tab> {
        Ok(self.tabs.set_tab_title(tab_id, title.to_string())?)
    }

    pub fn edit_selected_tab(&self) -> Result<()> {
        let tab = self.tabs.selected_tab().ok_or(CoreError::NoSelectedTab)?;
        self.edit_tab(&tab.id, None)
    }

    pub fn hide_editor(&self) -> Result<()> {
        self.editor.hide()?;
        Ok(())
    }

    /// Close a tab, leaving edit mode first if it was the one being edited.
    pub fn close_tab(&self, tab_id: &str) -> Result<()> {
        if self.editor.is_shown() && self.editor.active_tab_id().as_deref() == Some(tab_id) {
            self.editor.hide()?;
        }
        self.tabs.close_tab(tab_id)?;
        Ok(())
    }

    /// Returns whether the tab's page is bookmarked afterwards.
    pub fn toggle_bookmark(&self, tab_id: &str) -> Result<bool> {
        let url = self.bookmark_star.bookmark_url(tab_id)?;
        let tab = self.tabs.get_tab(tab_id)?;
        let bookmarked = self.bookmarks.toggle(&url, tab.display_title());
        self.refresh_widgets(tab_id)?;
        Ok(bookmarked)
    }

    /// Flip the content-blocking exemption for the tab's site.
    pub fn toggle_content_blocking(&self, tab_id: &str) -> Result<BlockingStatus> {
        let status = self.blocking_toggle.toggle(tab_id)?;
        self.refresh_widgets(tab_id)?;
        Ok(status)
    }

    /// Bring the editor widgets up to date if `tab_id` is being edited.
    fn refresh_widgets(&self, tab_id: &str) -> Result<()> {
        if !self.editor.is_shown() || self.editor.active_tab_id().as_deref() != Some(tab_id) {
            return Ok(());
        }

        let (star, toggle) = self
            .editor
            .with_state(|state| (state.star().cloned(), state.content_blocking().cloned()));
        if let Some(star) = star {
            self.bookmark_star.update(tab_id, &star)?;
        }
        if let Some(toggle) = toggle {
            self.blocking_toggle.update(tab_id, &toggle)?;
        }
        Ok(())
    }

    /// Apply URLs submitted from the editor since the last call. Returns how
    /// many were applied; failures are logged and skipped.
    pub fn handle_url_selections(&self) -> usize {
        let pending = {
            let mut selections = self.selections.lock();
            let mut pending = Vec::new();
            loop {
                match selections.try_recv() {
                    Ok(selected) => pending.push(selected),
                    Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Dropped URL selections");
                    }
                    Err(broadcast::error::TryRecvError::Empty)
                    | Err(broadcast::error::TryRecvError::Closed) => break,
                }
            }
            pending
        };

        let mut applied = 0;
        for selected in pending {
            match self.apply_selection(selected) {
                Ok(()) => applied += 1,
                Err(e) => tracing::error!(error = %e, "Failed to open selected URL"),
            }
        }
        applied
    }

    fn apply_selection(&self, selected: UrlSelected) -> Result<()> {
        if selected.background {
            let tab = self.tabs.create_tab(selected.url)?;
            tracing::info!(tab_id = %tab.id, url = %tab.url, "Opened background tab");
            return Ok(());
        }

        let tab = self.tabs.selected_tab().ok_or(CoreError::NoSelectedTab)?;
        let tab = self.tabs.navigate_tab(&tab.id, selected.url)?;
        tracing::info!(tab_id = %tab.id, url = %tab.url, "Navigated tab");
        self.editor.hide()?;
        Ok(())
    }

    /// One frame: apply URL selections, then run due animation callbacks.
    /// Returns how many frame callbacks ran.
    pub fn tick(&self) -> usize {
        self.handle_url_selections();
        self.frames.run_frame()
    }

    /// Tick every frame interval until `shutdown` turns true or its sender
    /// goes away.
    pub async fn run_frame_loop(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(self.config.frame_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::debug!(interval_ms = self.config.frame_interval_ms, "Frame loop started");

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::debug!("Frame loop stopped");
    }
}

impl TabOpener for Shell {
    fn add_tab(&self) -> min_navbar::Result<()> {
        match Shell::add_tab(self) {
            Ok(_) => Ok(()),
            Err(CoreError::Navbar(e)) => Err(e),
            Err(e) => Err(NavbarError::collaborator("tabs", e.to_string())),
        }
    }
}
