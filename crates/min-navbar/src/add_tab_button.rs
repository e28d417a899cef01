//! New tab button in the tab strip

use std::sync::Arc;

use crate::collaborators::TabOpener;
use crate::dom::{Document, ADD_TAB_BUTTON_ID};

/// Wire the add-tab button to `opener`. The button is optional: without it
/// this logs a warning and returns `false`.
pub fn initialize(document: &dyn Document, opener: Arc<dyn TabOpener>) -> bool {
    let Some(button) = document.clickable(ADD_TAB_BUTTON_ID) else {
        tracing::warn!(
            element = ADD_TAB_BUTTON_ID,
            "Add tab button not found, skipping initialization"
        );
        return false;
    };

    button.on_click(Arc::new(move || {
        if let Err(e) = opener.add_tab() {
            tracing::error!(error = %e, "Failed to add tab");
        }
    }));

    true
}
