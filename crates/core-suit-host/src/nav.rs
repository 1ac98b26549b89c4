//! Navigation loader: mount the shared navigation fragment.
//!
//! The fragment is fetched with a cache-busting query. If the fetch fails
//! for any reason, an equivalent navigation block is rendered from
//! [`HostConfig::fallback_nav`] instead. Either way the entry matching the
//! current page is marked active.

use async_trait::async_trait;
use tracing::{debug, warn};

use core_suit_model::escape_html;

use crate::config::{HostConfig, NavItem};
use crate::error::Result;

/// Element id of the mount point for the navigation block.
pub const NAV_MOUNT_ID: &str = "sidebar-root";

/// Source of the shared navigation fragment.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Fetch the markup at `url`. Non-success responses are errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Where the mounted navigation block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    Fragment,
    Fallback,
}

/// The navigation block ready to be injected into [`NAV_MOUNT_ID`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMount {
    pub html: String,
    pub origin: NavOrigin,
    /// Href of the entry matching the current page, if any.
    pub active: Option<String>,
}

/// Fragment URL with a cache-busting `v` parameter.
pub fn fragment_url(path: &str, now_millis: i64) -> String {
    format!("{}?v={}", path, now_millis)
}

/// Pick the href whose file name equals the last segment of `current_path`.
///
/// Comparison is case-insensitive; an empty last segment means `index.html`.
pub fn active_item<'a, I>(current_path: &str, hrefs: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let page = match last_segment(current_path) {
        "" => "index.html".to_string(),
        segment => segment.to_lowercase(),
    };
    hrefs
        .into_iter()
        .find(|href| last_segment(href).to_lowercase() == page)
}

fn last_segment(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    path.rsplit('/').next().unwrap_or(path)
}

/// Double-quoted `href` values in a fragment, in document order.
fn fragment_hrefs(html: &str) -> Vec<&str> {
    let mut hrefs = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find("href=\"") {
        rest = &rest[start + 6..];
        match rest.find('"') {
            Some(end) => {
                hrefs.push(&rest[..end]);
                rest = &rest[end + 1..];
            }
            None => break,
        }
    }
    hrefs
}

/// Loads the navigation block for a page.
pub struct NavLoader<S: FragmentSource> {
    source: S,
    config: HostConfig,
}

impl<S: FragmentSource> NavLoader<S> {
    pub fn new(source: S, config: HostConfig) -> Self {
        Self { source, config }
    }

    /// Get the source reference.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the fragment for `current_path`, falling back to the built-in
    /// block on failure. Never fails.
    pub async fn load(&self, current_path: &str) -> NavMount {
        let url = fragment_url(&self.config.nav_fragment_path, now_millis());
        match self.source.fetch(&url).await {
            Ok(html) => {
                let active = active_item(current_path, fragment_hrefs(&html)).map(String::from);
                debug!(url = %url, active = ?active, "mounted navigation fragment");
                NavMount {
                    html,
                    origin: NavOrigin::Fragment,
                    active,
                }
            }
            Err(e) => {
                warn!(url = %url, error = %e, "navigation fragment unavailable, using fallback");
                self.fallback(current_path)
            }
        }
    }

    /// Render the built-in navigation block.
    pub fn fallback(&self, current_path: &str) -> NavMount {
        let items = &self.config.fallback_nav;
        let active = active_item(current_path, items.iter().map(|i| i.href.as_str()))
            .map(String::from);
        NavMount {
            html: render_fallback(&self.config, items, active.as_deref()),
            origin: NavOrigin::Fallback,
            active,
        }
    }
}

fn render_fallback(config: &HostConfig, items: &[NavItem], active: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<aside class=\"sidebar\">\n");
    html.push_str("  <div class=\"brand\">\n    <div class=\"logo\"></div>\n    <div>\n");
    html.push_str(&format!("      <h2>{}</h2>\n", escape_html(&config.brand_title)));
    html.push_str(&format!("      <div>{}</div>\n", escape_html(&config.brand_subtitle)));
    html.push_str("    </div>\n  </div>\n  <ul class=\"nav\">\n");
    for item in items {
        let class = if Some(item.href.as_str()) == active {
            " class=\"active\""
        } else {
            ""
        };
        html.push_str(&format!(
            "    <li{}><a href=\"{}\">{}</a></li>\n",
            class,
            escape_html(&item.href),
            escape_html(&item.label)
        ));
    }
    html.push_str("  </ul>\n  <button class=\"logout\" onclick=\"logout()\">Logout</button>\n");
    html.push_str("</aside>\n");
    html
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// A map-backed fragment source for testing.
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    use crate::error::HostError;

    /// Serves fragments by path, ignoring the query string.
    #[derive(Default)]
    pub struct StaticFragments {
        fragments: HashMap<String, String>,
        requested: RwLock<Vec<String>>,
    }

    impl StaticFragments {
        /// A source with no fragments; every fetch answers 404.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_fragment(mut self, path: impl Into<String>, html: impl Into<String>) -> Self {
            self.fragments.insert(path.into(), html.into());
            self
        }

        /// URLs fetched so far, in order.
        pub async fn requested(&self) -> Vec<String> {
            self.requested.read().await.clone()
        }
    }

    #[async_trait]
    impl FragmentSource for StaticFragments {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.requested.write().await.push(url.to_string());
            let path = url.split('?').next().unwrap_or(url);
            self.fragments
                .get(path)
                .cloned()
                .ok_or(HostError::Status(404))
        }
    }
}
