//! # CORE Suit Host
//!
//! Collaborators of the host page that embeds the registry editor.
//!
//! ## Overview
//!
//! The editor itself is synchronous and assumes an authenticated session.
//! The page around it does two asynchronous things on load, both modelled
//! here behind async traits so any HTTP client can drive them:
//!
//! - **Auth guard**: probe a protected endpoint and redirect to the login
//!   route unless it answers 2xx. See [`AuthGuard`].
//! - **Navigation loader**: fetch the shared navigation fragment, or render
//!   the built-in fallback block when the fetch fails. See [`NavLoader`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core_suit_host::{AuthGuard, GuardDecision, HostConfig, NavLoader};
//! use core_suit_host::auth::memory::StaticProbe;
//! use core_suit_host::nav::memory::StaticFragments;
//!
//! async fn example() {
//!     let config = HostConfig::default();
//!
//!     let guard = AuthGuard::new(StaticProbe::status(200), config.clone());
//!     if let GuardDecision::Redirect { to } = guard.guard("/daftar.html").await {
//!         println!("redirect to {to}");
//!         return;
//!     }
//!
//!     let nav = NavLoader::new(StaticFragments::new(), config);
//!     let mount = nav.load("/daftar.html").await;
//!     println!("{:?} navigation, active {:?}", mount.origin, mount.active);
//! }
//! ```
//!
//! ## Flow
//!
//! ```text
//! page load
//!   |-- login page? ----------------> Skip
//!   |-- probe /api/check-auth
//!   |     |-- 2xx ------------------> Allow
//!   |     `-- other / error / timeout -> Redirect /login
//!   `-- fetch /sidebar.html?v=<ms>
//!         |-- ok -------------------> Fragment
//!         `-- error ----------------> Fallback
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod nav;

pub use auth::{AuthGuard, AuthProbe, GuardDecision};
pub use config::{HostConfig, NavItem};
pub use error::{HostError, Result};
pub use nav::{active_item, fragment_url, FragmentSource, NavLoader, NavMount, NavOrigin};
