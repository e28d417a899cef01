//! Content blocking policy
//!
//! Tracks the global switch and the set of hosts exempted from blocking.
//! Exemptions apply to the host and all of its subdomains.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use url::Url;

/// What the navbar toggle should show for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockingStatus {
    /// Blocking applies to this page
    Active,
    /// The page's site is exempted
    Exempt,
    /// Blocking is switched off everywhere
    Disabled,
    /// Not a web page (internal page, file, data URL)
    NotApplicable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlocking {
    /// Whether blocking is enabled
    enabled: bool,
    /// Hosts where blocking is switched off
    exempt_hosts: BTreeSet<String>,
}

impl ContentBlocking {
    pub fn new() -> Self {
        Self {
            enabled: true,
            exempt_hosts: BTreeSet::new(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Host of a web URL, lowercased. `None` for anything that isn't http(s).
    pub fn web_host(url: &str) -> Option<String> {
        let parsed = Url::parse(url).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        parsed.host_str().map(str::to_lowercase)
    }

    pub fn status_for(&self, url: &str) -> BlockingStatus {
        let Some(host) = Self::web_host(url) else {
            return BlockingStatus::NotApplicable;
        };

        if !self.enabled {
            return BlockingStatus::Disabled;
        }

        if self.is_exempt(&host) {
            BlockingStatus::Exempt
        } else {
            BlockingStatus::Active
        }
    }

    fn is_exempt(&self, host: &str) -> bool {
        let parts: Vec<&str> = host.split('.').collect();
        (0..parts.len()).any(|i| self.exempt_hosts.contains(&parts[i..].join(".")))
    }

    /// Exempt or re-protect the site `url` belongs to. Returns the new status.
    pub fn set_exempt(&mut self, url: &str, exempt: bool) -> BlockingStatus {
        if let Some(host) = Self::web_host(url) {
            let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
            if exempt {
                self.exempt_hosts.insert(host.clone());
            } else {
                self.exempt_hosts.remove(&host);
            }
            tracing::info!(host = %host, exempt, "Updated content blocking exemption");
        }

        self.status_for(url)
    }

    pub fn exempt_hosts(&self) -> impl Iterator<Item = &str> {
        self.exempt_hosts.iter().map(String::as_str)
    }
}

impl Default for ContentBlocking {
    fn default() -> Self {
        Self::new()
    }
}
