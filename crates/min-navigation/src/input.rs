//! Input resolution for the address bar
//!
//! 1. Input with a known scheme → navigate as typed
//! 2. Host-like input → navigate over https
//! 3. Anything else → search

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use url::Url;

use crate::error::NavigationError;
use crate::{Result, INTERNAL_SCHEME, NEW_TAB_URL};

const DEFAULT_SEARCH_TEMPLATE: &str = "https://duckduckgo.com/?q=%s";

/// Schemes that are navigated to exactly as typed.
const PASSTHROUGH_SCHEMES: &[&str] = &["http", "https", "file", "about", "data", INTERNAL_SCHEME];

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "url", rename_all = "lowercase")]
pub enum InputResolution {
    /// Navigate to a URL
    Navigate(String),
    /// Perform a search; holds the search engine URL
    Search(String),
}

impl InputResolution {
    pub fn url(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: &str) -> Result<Self> {
        if !template.contains("%s") {
            return Err(NavigationError::InvalidSearchTemplate(template.to_string()));
        }

        Ok(Self {
            search_template: template.to_string(),
        })
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into an action
    pub fn resolve(&self, input: &str) -> InputResolution {
        let input = input.trim();

        if input.is_empty() {
            return InputResolution::Navigate(NEW_TAB_URL.to_string());
        }

        if let Some(url) = self.with_known_scheme(input) {
            return InputResolution::Navigate(url);
        }

        if let Some(url) = self.as_host_url(input) {
            return InputResolution::Navigate(url);
        }

        tracing::trace!(query = %input, "Address input resolved to search");
        InputResolution::Search(self.search_template.replace("%s", &urlencoding::encode(input)))
    }

    fn with_known_scheme(&self, input: &str) -> Option<String> {
        let (scheme, _) = input.split_once(':')?;
        if !PASSTHROUGH_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
            return None;
        }

        Url::parse(input).ok().map(|_| input.to_string())
    }

    fn as_host_url(&self, input: &str) -> Option<String> {
        if input.contains(char::is_whitespace) {
            return None;
        }

        let (host, rest) = split_host_and_rest(input);
        let candidate = match parse_ip_host(host) {
            Some(IpAddr::V6(_)) if !host.starts_with('[') => format!("https://[{host}]{rest}"),
            Some(_) => format!("https://{host}{rest}"),
            None if is_localhost(host) || has_plausible_tld(host) => {
                format!("https://{host}{rest}")
            }
            None => return None,
        };

        Url::parse(&candidate).ok().map(|_| candidate)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn is_localhost(host: &str) -> bool {
    let name = host.split(':').next().unwrap_or(host);
    name.eq_ignore_ascii_case("localhost")
}

/// `example.com`, `example.co.uk:8080`; the last label must be 2-6 letters.
fn has_plausible_tld(host: &str) -> bool {
    let name = host.split(':').next().unwrap_or(host);
    match name.rsplit_once('.') {
        Some((rest, tld)) => {
            !rest.is_empty()
                && (2..=6).contains(&tld.len())
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

fn parse_ip_host(host: &str) -> Option<IpAddr> {
    if host.is_empty() {
        return None;
    }

    let bare = if let Some(inner) = host.strip_prefix('[') {
        inner.split(']').next().unwrap_or(inner)
    } else if host.matches(':').count() == 1 {
        host.split(':').next().unwrap_or(host)
    } else {
        host
    };

    bare.parse().ok()
}

fn split_host_and_rest(input: &str) -> (&str, &str) {
    let cut = input.find(['/', '?', '#']).unwrap_or(input.len());
    input.split_at(cut)
}
