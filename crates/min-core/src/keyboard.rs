//! Keyboard navigation groups
//!
//! Elements in the same group are walked with the arrow keys.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use min_navbar::collaborators::KeyboardNavigation;
use min_navbar::dom::OverlayElement;

#[derive(Default)]
pub struct KeyboardNavigationGroups {
    groups: RwLock<HashMap<String, Vec<Arc<dyn OverlayElement>>>>,
}

impl KeyboardNavigationGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_len(&self, group: &str) -> usize {
        self.groups.read().get(group).map_or(0, Vec::len)
    }

    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl KeyboardNavigation for KeyboardNavigationGroups {
    fn add_to_group(&self, group: &str, element: Arc<dyn OverlayElement>) {
        let mut groups = self.groups.write();
        let members = groups.entry(group.to_string()).or_default();
        if members.iter().any(|member| Arc::ptr_eq(member, &element)) {
            return;
        }
        members.push(element);
        tracing::debug!(group, members = members.len(), "Element added to navigation group");
    }
}
