//! Internal page → source URL mapping
//!
//! Reader view and error pages are internal documents that carry the page they
//! stand in for as a `url` query parameter. Other internal pages are shown by
//! their short name (`min://newtab`).

use url::Url;

use crate::INTERNAL_SCHEME;

#[derive(Debug, Clone)]
pub struct SourceUrlParser {
    scheme: String,
    prefix: String,
}

impl SourceUrlParser {
    pub fn new(scheme: &str) -> Self {
        Self {
            scheme: scheme.to_string(),
            prefix: format!("{scheme}://app/"),
        }
    }

    pub fn is_internal(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }

    /// The address a user should see for `url`.
    pub fn source_url(&self, url: &str) -> String {
        if !self.is_internal(url) {
            return url.to_string();
        }

        let represented = Url::parse(url).ok().and_then(|parsed| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "url")
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        });
        if let Some(represented) = represented {
            return represented;
        }

        match page_name(url) {
            Some(name) => format!("{}://{}", self.scheme, name),
            None => url.to_string(),
        }
    }
}

impl Default for SourceUrlParser {
    fn default() -> Self {
        Self::new(INTERNAL_SCHEME)
    }
}

/// `.../pages/<name>/...` where name is ASCII letters only.
fn page_name(url: &str) -> Option<&str> {
    let start = url.find("/pages/")? + "/pages/".len();
    let tail = &url[start..];
    let end = tail.find('/')?;
    let name = &tail[..end];
    (!name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())).then_some(name)
}
