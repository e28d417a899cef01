//! UI strings

use std::collections::HashMap;

use min_navbar::collaborators::Localizer;

const ENGLISH: &[(&str, &str)] = &[
    ("searchbarPlaceholder", "Search or enter address"),
    ("addBookmark", "Bookmark this page"),
    ("removeBookmark", "Remove bookmark"),
    ("enableBlocking", "Enable blocking for this site"),
    ("disableBlocking", "Disable blocking for this site"),
    ("newTabAction", "New tab"),
];

/// Built-in English table plus overrides. Unknown keys come back unchanged.
#[derive(Debug, Clone)]
pub struct Strings {
    table: HashMap<String, String>,
}

impl Strings {
    pub fn english() -> Self {
        Self {
            table: ENGLISH
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        self.table
            .extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn get(&self, key: &str) -> String {
        match self.table.get(key) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!(key, "Missing string");
                key.to_string()
            }
        }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for Strings {
    fn get(&self, key: &str) -> String {
        Strings::get(self, key)
    }
}
