//! Page boot: the load sequence of the page that hosts the editor.

use tracing::{debug, info};

use core_suit_host::{AuthGuard, AuthProbe, FragmentSource, GuardDecision, NavLoader, NavMount};
use core_suit_store::Backend;

use crate::editor::Editor;

/// A loaded page: the navigation block and a rendered editor.
pub struct Page<B: Backend> {
    pub editor: Editor<B>,
    pub nav: NavMount,
    /// `Allow`, or `Skip` when the page is itself a login page.
    pub guard: GuardDecision,
}

/// Outcome of [`boot`].
pub enum PageLoad<B: Backend> {
    /// The session is not authenticated; leave for `to`.
    Redirect { to: String },
    Ready(Page<B>),
}

impl<B: Backend> PageLoad<B> {
    /// The loaded page, unless the guard redirected.
    pub fn ready(self) -> Option<Page<B>> {
        match self {
            PageLoad::Ready(page) => Some(page),
            PageLoad::Redirect { .. } => None,
        }
    }
}

/// Run the load sequence for the page at `path`.
///
/// The guard runs first. On a redirect neither the navigation nor the
/// editor is built. Otherwise the navigation block is loaded (falling back
/// to the built-in block) and `make_editor` builds the editor, which
/// renders the stored collection.
pub async fn boot<P, S, B, F>(
    path: &str,
    guard: &AuthGuard<P>,
    nav: &NavLoader<S>,
    make_editor: F,
) -> PageLoad<B>
where
    P: AuthProbe,
    S: FragmentSource,
    B: Backend,
    F: FnOnce() -> Editor<B>,
{
    let decision = guard.guard(path).await;
    if let GuardDecision::Redirect { to } = decision {
        info!(path, to = %to, "page load redirected");
        return PageLoad::Redirect { to };
    }

    let nav = nav.load(path).await;
    let editor = make_editor();
    debug!(path, origin = ?nav.origin, rows = editor.rows().len(), "page ready");

    PageLoad::Ready(Page {
        editor,
        nav,
        guard: decision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use core_suit_host::auth::memory::StaticProbe;
    use core_suit_host::nav::memory::StaticFragments;
    use core_suit_host::{HostConfig, NavOrigin};
    use core_suit_model::Record;
    use core_suit_store::{CollectionStore, MemoryBackend};

    fn stored_backend() -> MemoryBackend {
        let backend = MemoryBackend::new();
        CollectionStore::with_default_key(&backend)
            .save_all(&[Record::builder("Suit A", "SA1").build()])
            .unwrap();
        backend
    }

    #[tokio::test]
    async fn test_redirect_skips_editor() {
        let config = HostConfig::default();
        let guard = AuthGuard::new(StaticProbe::status(401), config.clone());
        let nav = NavLoader::new(StaticFragments::new(), config);

        let mut built = false;
        let load = boot("/daftar.html", &guard, &nav, || {
            built = true;
            Editor::open(MemoryBackend::new(), EditorConfig::default())
        })
        .await;

        assert!(matches!(load, PageLoad::Redirect { ref to } if to == "/login"));
        assert!(!built);
        assert!(nav.source().requested().await.is_empty());
    }

    #[tokio::test]
    async fn test_ready_renders_stored_rows() {
        let config = HostConfig::default();
        let guard = AuthGuard::new(StaticProbe::status(200), config.clone());
        let nav = NavLoader::new(
            StaticFragments::new().with_fragment(
                "/sidebar.html",
                r#"<ul><li><a href="/index.html">Home</a></li><li><a href="/daftar.html">Suits</a></li></ul>"#,
            ),
            config,
        );
        let backend = stored_backend();

        let page = boot("/daftar.html", &guard, &nav, || {
            Editor::open(&backend, EditorConfig::default())
        })
        .await
        .ready()
        .unwrap();

        assert_eq!(page.guard, GuardDecision::Allow);
        assert_eq!(page.nav.origin, NavOrigin::Fragment);
        assert_eq!(page.nav.active.as_deref(), Some("/daftar.html"));
        assert_eq!(page.editor.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_nav_falls_back() {
        let config = HostConfig::default();
        let guard = AuthGuard::new(StaticProbe::status(204), config.clone());
        let nav = NavLoader::new(StaticFragments::new(), config);

        let page = boot("/login", &guard, &nav, || {
            Editor::open(MemoryBackend::new(), EditorConfig::default())
        })
        .await
        .ready()
        .unwrap();

        assert_eq!(page.guard, GuardDecision::Skip);
        assert_eq!(page.nav.origin, NavOrigin::Fallback);
        assert_eq!(guard.probe().calls(), 0);
    }
}
