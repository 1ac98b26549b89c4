//! Auth guard: redirect unauthenticated page loads to the login route.
//!
//! The editor never checks authentication itself. The host page runs the
//! guard once per load, before the editor is wired up.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::HostConfig;
use crate::error::{HostError, Result};

/// Probe for the protected endpoint.
///
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait AuthProbe: Send + Sync {
    /// Request `endpoint` with the session credentials and return the
    /// response status. Network failures are errors.
    async fn check(&self, endpoint: &str) -> Result<u16>;
}

/// What the host page should do after the guard ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The current page is a login page; no probe was made.
    Skip,
    /// The session is authenticated.
    Allow,
    /// Leave the page for the login route.
    Redirect { to: String },
}

/// Runs the auth probe and turns its answer into a [`GuardDecision`].
pub struct AuthGuard<P: AuthProbe> {
    probe: P,
    config: HostConfig,
}

impl<P: AuthProbe> AuthGuard<P> {
    pub fn new(probe: P, config: HostConfig) -> Self {
        Self { probe, config }
    }

    /// Get the probe reference.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// True if `path` is one of the configured login pages.
    pub fn is_login_page(&self, path: &str) -> bool {
        self.config.login_paths.iter().any(|p| p == path)
    }

    /// Decide whether the page at `path` may stay.
    ///
    /// Any status outside 2xx, any probe error, and a probe timeout all
    /// redirect to the login route.
    pub async fn guard(&self, path: &str) -> GuardDecision {
        if self.is_login_page(path) {
            return GuardDecision::Skip;
        }

        match self.probe_status().await {
            Ok(status) if (200..300).contains(&status) => {
                debug!(path, status, "session authenticated");
                GuardDecision::Allow
            }
            Ok(status) => {
                debug!(path, status, "session rejected");
                self.redirect()
            }
            Err(e) => {
                warn!(path, error = %e, "auth probe failed");
                self.redirect()
            }
        }
    }

    async fn probe_status(&self) -> Result<u16> {
        let endpoint = self.config.check_auth_endpoint.as_str();
        match self.config.probe_timeout_ms {
            Some(ms) => tokio::time::timeout(Duration::from_millis(ms), self.probe.check(endpoint))
                .await
                .map_err(|_| HostError::Timeout(format!("{} after {}ms", endpoint, ms)))?,
            None => self.probe.check(endpoint).await,
        }
    }

    fn redirect(&self) -> GuardDecision {
        GuardDecision::Redirect {
            to: self.config.login_route.clone(),
        }
    }
}

/// A fixed-answer probe for testing.
pub mod memory {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every check the same way, optionally after a delay.
    pub struct StaticProbe {
        answer: Result<u16>,
        delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl StaticProbe {
        /// Answer every check with `status`.
        pub fn status(status: u16) -> Self {
            Self::with_answer(Ok(status))
        }

        /// Fail every check with a transport error.
        pub fn unreachable() -> Self {
            Self::with_answer(Err(HostError::Transport("connection refused".into())))
        }

        pub fn with_answer(answer: Result<u16>) -> Self {
            Self {
                answer,
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        /// Delay every answer.
        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Number of checks made so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthProbe for StaticProbe {
        async fn check(&self, _endpoint: &str) -> Result<u16> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.answer.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::StaticProbe;
    use super::*;

    fn guard(probe: StaticProbe) -> AuthGuard<StaticProbe> {
        AuthGuard::new(probe, HostConfig::default())
    }

    fn redirect_to_login() -> GuardDecision {
        GuardDecision::Redirect {
            to: "/login".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_pages_are_skipped() {
        let guard = guard(StaticProbe::status(401));

        assert_eq!(guard.guard("/login").await, GuardDecision::Skip);
        assert_eq!(guard.guard("/login.html").await, GuardDecision::Skip);
        assert_eq!(guard.probe().calls(), 0);
    }

    #[tokio::test]
    async fn test_success_status_allows() {
        let ok = guard(StaticProbe::status(200)).guard("/daftar.html").await;
        assert_eq!(ok, GuardDecision::Allow);

        let no_content = guard(StaticProbe::status(204)).guard("/").await;
        assert_eq!(no_content, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_non_success_status_redirects() {
        for status in [301, 401, 403, 500] {
            let decision = guard(StaticProbe::status(status)).guard("/daftar.html").await;
            assert_eq!(decision, redirect_to_login(), "status {status}");
        }
    }

    #[tokio::test]
    async fn test_network_failure_redirects() {
        let guard = guard(StaticProbe::unreachable());
        assert_eq!(guard.guard("/dashboard.html").await, redirect_to_login());
        assert_eq!(guard.probe().calls(), 1);
    }

    #[tokio::test]
    async fn test_timeout_redirects() {
        let config = HostConfig {
            probe_timeout_ms: Some(10),
            ..HostConfig::default()
        };
        let guard = AuthGuard::new(
            StaticProbe::status(200).delayed(Duration::from_millis(500)),
            config,
        );

        assert_eq!(guard.guard("/daftar.html").await, redirect_to_login());
    }
}
