//! Configuration for the host collaborators.

use serde::{Deserialize, Serialize};

/// One entry of the navigation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub label: String,
}

impl NavItem {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Configuration for the auth guard and navigation loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Protected endpoint probed on page load.
    pub check_auth_endpoint: String,
    /// Where unauthenticated visitors are sent.
    pub login_route: String,
    /// Paths on which the guard does not run.
    pub login_paths: Vec<String>,
    /// Path of the shared navigation fragment.
    pub nav_fragment_path: String,
    /// Give up on the auth probe after this many milliseconds.
    pub probe_timeout_ms: Option<u64>,
    /// Heading of the fallback navigation block.
    pub brand_title: String,
    pub brand_subtitle: String,
    /// Entries of the fallback navigation block.
    pub fallback_nav: Vec<NavItem>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            check_auth_endpoint: "/api/check-auth".to_string(),
            login_route: "/login".to_string(),
            login_paths: vec!["/login".to_string(), "/login.html".to_string()],
            nav_fragment_path: "/sidebar.html".to_string(),
            probe_timeout_ms: None,
            brand_title: "CORE".to_string(),
            brand_subtitle: "Conductive Suit Reliability Evaluator".to_string(),
            fallback_nav: vec![
                NavItem::new("dashboard.html", "Dashboard"),
                NavItem::new("pengujian.html", "Testing"),
                NavItem::new("daftar.html", "Conductive Data"),
                NavItem::new("histori.html", "History"),
                NavItem::new("foto.html", "Conductive Suit Photos"),
                NavItem::new("user.html", "User Management"),
            ],
        }
    }
}
