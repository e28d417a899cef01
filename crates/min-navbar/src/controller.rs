//! Tab editor controller
//!
//! Shows and hides the address editing overlay for a tab and keeps the
//! surrounding UI in step with it.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::animation::{AnimationCoordinator, RevealTransition};
use crate::collaborators::Collaborators;
use crate::dispatcher::{EditorEvent, InputDispatcher};
use crate::dom::{
    BodyClassList, Document, OverlayElement, TextInput, Widget, CONTAINER_ID, CONTENT_REGION_ID,
    INPUT_ID,
};
use crate::error::NavbarError;
use crate::state::TabEditorState;
use crate::Result;

/// Content-view placeholder held while editing
pub const EDIT_MODE_PLACEHOLDER: &str = "editMode";
/// Body class present while editing
pub const EDIT_MODE_CLASS: &str = "is-edit-mode";
/// Body classes left behind by tab-strip keyboard navigation
pub const TAB_NAVIGATION_CLASSES: [&str; 2] = ["background-tab-mode", "sibling-tab-mode"];
/// Keyboard navigation group the overlay joins
pub const SEARCHBAR_GROUP: &str = "searchbar";
pub const PLACEHOLDER_TEXT_KEY: &str = "searchbarPlaceholder";
pub const DEFAULT_NEW_TAB_URL: &str = "min://newtab";

/// The elements the editor owns for the life of the process.
#[derive(Clone)]
pub struct EditorElements {
    pub container: Arc<dyn OverlayElement>,
    pub input: Arc<dyn TextInput>,
    pub body: Arc<dyn BodyClassList>,
}

impl EditorElements {
    /// Look up the overlay and its input. Both are required.
    pub fn acquire(document: &dyn Document) -> Result<Self> {
        let container = document
            .overlay(CONTAINER_ID)
            .ok_or_else(|| NavbarError::MissingElement(CONTAINER_ID.to_string()))?;
        let input = document
            .text_input(INPUT_ID)
            .ok_or_else(|| NavbarError::MissingElement(INPUT_ID.to_string()))?;

        Ok(Self {
            container,
            input,
            body: document.body(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct EditorSettings {
    /// Address shown as an empty field
    pub new_tab_url: String,
    pub animation: AnimationCoordinator,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            new_tab_url: DEFAULT_NEW_TAB_URL.to_string(),
            animation: AnimationCoordinator::default(),
        }
    }
}

pub struct TabEditorController {
    elements: EditorElements,
    collaborators: Collaborators,
    settings: Arc<EditorSettings>,
    state: Arc<RwLock<TabEditorState>>,
}

impl TabEditorController {
    pub fn new(
        elements: EditorElements,
        collaborators: Collaborators,
        settings: EditorSettings,
    ) -> Self {
        Self {
            elements,
            collaborators,
            settings: Arc::new(settings),
            state: Arc::new(RwLock::new(TabEditorState::default())),
        }
    }

    pub fn from_document(
        document: &dyn Document,
        collaborators: Collaborators,
        settings: EditorSettings,
    ) -> Result<Self> {
        Ok(Self::new(
            EditorElements::acquire(document)?,
            collaborators,
            settings,
        ))
    }

    /// One-time setup. Wires the input and content region listeners and
    /// returns the dispatcher they route through.
    pub fn initialize(&self, document: &dyn Document) -> Result<InputDispatcher> {
        if self.state.read().initialized {
            return Err(NavbarError::AlreadyInitialized);
        }

        let placeholder = self.collaborators.strings.get(PLACEHOLDER_TEXT_KEY);
        self.elements.input.set_placeholder(&placeholder);

        let star = self.collaborators.bookmark_star.create();
        self.elements.container.append_child(star.clone());

        let content_blocking = self.collaborators.content_blocking.create();
        self.elements.container.append_child(content_blocking.clone());

        {
            let mut state = self.state.write();
            state.star = Some(star);
            state.content_blocking = Some(content_blocking);
            state.initialized = true;
        }

        self.collaborators
            .keyboard_navigation
            .add_to_group(SEARCHBAR_GROUP, Arc::clone(&self.elements.container));

        let dispatcher = InputDispatcher::new(self.clone());

        let on_key = dispatcher.clone();
        self.elements.input.on_key_press(Arc::new(move |key| {
            if let Err(e) = on_key.key_press(key) {
                tracing::error!(error = %e, "Address submit failed");
            }
        }));

        match document.clickable(CONTENT_REGION_ID) {
            Some(region) => {
                let on_click = dispatcher.clone();
                region.on_click(Arc::new(move || {
                    if let Err(e) = on_click.dispatch(EditorEvent::ClickOutside) {
                        tracing::error!(error = %e, "Failed to leave edit mode");
                    }
                }));
            }
            None => tracing::warn!(
                element = CONTENT_REGION_ID,
                "Content region not found, click-outside dismissal disabled"
            ),
        }

        tracing::info!("Tab editor initialized");

        Ok(dispatcher)
    }

    /// Open the editor for `tab_id`. A no-op while modal mode is enabled.
    pub fn show(&self, tab_id: &str, editing_value: Option<&str>, show_searchbar: bool) -> Result<()> {
        if self.collaborators.modal_mode.enabled() {
            tracing::debug!(tab_id = %tab_id, "Edit mode unavailable in modal mode");
            return Ok(());
        }

        let (star, content_blocking) = {
            let state = self.state.read();
            match (&state.star, &state.content_blocking) {
                (Some(star), Some(toggle)) => (star.clone(), toggle.clone()),
                _ => return Err(NavbarError::NotInitialized),
            }
        };

        let tab = self
            .collaborators
            .tabs
            .get(tab_id)
            .ok_or_else(|| NavbarError::TabNotFound(tab_id.to_string()))?;

        self.elements.container.set_hidden(false);
        let generation = {
            let mut state = self.state.write();
            state.is_shown = true;
            state.active_tab_id = Some(tab_id.to_string());
            state.next_reveal()
        };

        if let Err(e) = self.enter_edit_mode(tab_id, &star, &content_blocking) {
            // leave nothing half shown
            if let Err(rollback) = self.hide() {
                tracing::error!(tab_id = %tab_id, error = %rollback, "Failed to roll back tab editor");
            }
            return Err(e);
        }

        // An empty editing value counts as none: show the tab's address instead.
        let editing_value = editing_value.filter(|value| !value.is_empty());
        let value = match editing_value {
            Some(value) => value.to_string(),
            None => self.display_url(&tab.url),
        };

        let input = &self.elements.input;
        input.set_value(&value);
        input.focus();
        if editing_value.is_none() {
            input.select_all();
        }
        // long URLs would otherwise open scrolled to the caret
        input.set_scroll_left(0.0);

        tracing::debug!(
            tab_id = %tab_id,
            editing = editing_value.is_some(),
            show_searchbar,
            "Tab editor shown"
        );

        if self.collaborators.tabs.count() > 1 {
            self.schedule_reveal(tab_id, generation);
        }

        Ok(())
    }

    /// Close the editor. Safe to call when already hidden.
    pub fn hide(&self) -> Result<()> {
        self.elements.container.set_hidden(true);
        self.elements.container.remove_style();

        {
            let mut state = self.state.write();
            state.is_shown = false;
            state.next_reveal();
        }

        self.elements.input.blur();
        self.collaborators.searchbar.hide();

        self.elements.body.remove_class(EDIT_MODE_CLASS);
        for class in TAB_NAVIGATION_CLASSES {
            self.elements.body.remove_class(class);
        }

        self.collaborators
            .webviews
            .hide_placeholder(EDIT_MODE_PLACEHOLDER)?;

        tracing::trace!("Tab editor hidden");

        Ok(())
    }

    pub fn is_shown(&self) -> bool {
        self.state.read().is_shown
    }

    pub fn active_tab_id(&self) -> Option<String> {
        self.state.read().active_tab_id.clone()
    }

    pub fn input_value(&self) -> String {
        self.elements.input.value()
    }

    pub fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TabEditorState) -> T,
    {
        f(&self.state.read())
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub(crate) fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    fn enter_edit_mode(&self, tab_id: &str, star: &Widget, content_blocking: &Widget) -> Result<()> {
        self.collaborators.bookmark_star.update(tab_id, star)?;
        self.collaborators
            .content_blocking
            .update(tab_id, content_blocking)?;

        self.collaborators
            .webviews
            .request_placeholder(EDIT_MODE_PLACEHOLDER)?;

        self.elements.body.add_class(EDIT_MODE_CLASS);
        Ok(())
    }

    fn display_url(&self, url: &str) -> String {
        let source = self.collaborators.url_parser.source_url(url);
        if source == self.settings.new_tab_url {
            String::new()
        } else {
            source
        }
    }

    fn schedule_reveal(&self, tab_id: &str, generation: u64) {
        let controller = self.clone();
        let tab_id = tab_id.to_string();
        self.collaborators.scheduler.request_frame(Box::new(move || {
            controller.reveal_start(&tab_id, generation);
        }));
    }

    fn reveal_start(&self, tab_id: &str, generation: u64) {
        if !self.state.read().is_current_reveal(tab_id, generation) {
            tracing::trace!(tab_id = %tab_id, "Dropping stale reveal");
            return;
        }

        let Some(transition) = self
            .settings
            .animation
            .plan(self.collaborators.layout.as_ref(), tab_id)
        else {
            tracing::debug!(tab_id = %tab_id, "Tab item not laid out, showing editor without animation");
            return;
        };

        transition.apply_start_state(self.elements.container.as_ref());

        let controller = self.clone();
        let tab_id = tab_id.to_string();
        self.collaborators.scheduler.request_frame(Box::new(move || {
            controller.reveal_end(&tab_id, &transition, generation);
        }));
    }

    fn reveal_end(&self, tab_id: &str, transition: &RevealTransition, generation: u64) {
        if !self.state.read().is_current_reveal(tab_id, generation) {
            tracing::trace!(tab_id = %tab_id, "Dropping stale reveal");
            return;
        }

        transition.apply_end_state(self.elements.container.as_ref());
    }
}

impl Clone for TabEditorController {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            collaborators: self.collaborators.clone(),
            settings: Arc::clone(&self.settings),
            state: Arc::clone(&self.state),
        }
    }
}
