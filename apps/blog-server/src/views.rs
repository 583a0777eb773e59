//! Mounted views.
//!
//! A browser tab mounts a view and gets back its id. Each view owns a toast
//! center and the controllers for the screens it has opened; unmounting the
//! view drops all of them. Views sit behind their own async mutex, so one
//! view's store round trips never block another view.
//!
//! A tab that closes without unmounting leaves its view behind. Views unused
//! for longer than the registry's idle time-to-live are dropped the next time
//! any view mounts.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use inkzenith_core::controllers::{Dashboard, Editor, LoginForm, Paginator, PostView, Step};
use inkzenith_core::domain::PostId;
use inkzenith_core::error::DomainError;
use inkzenith_core::ports::{IdentityService, Notifier, PostStore};
use inkzenith_core::{ToastCenter, UiConfig};

/// Controllers and notifications for one mounted view.
pub struct ViewSession {
    store: Arc<dyn PostStore>,
    ui: UiConfig,
    toasts: Arc<ToastCenter>,
    home: Option<Paginator>,
    home_failed: bool,
    dashboard: Option<Dashboard>,
    editor: Option<Editor>,
}

impl ViewSession {
    pub fn new(store: Arc<dyn PostStore>, ui: UiConfig) -> Self {
        Self {
            toasts: Arc::new(ToastCenter::new(ui.toast_ttl)),
            store,
            ui,
            home: None,
            home_failed: false,
            dashboard: None,
            editor: None,
        }
    }

    pub fn toasts(&self) -> &ToastCenter {
        &self.toasts
    }

    fn notifier(&self) -> Arc<dyn Notifier> {
        self.toasts.clone()
    }

    /// The public post list, mounted on first use.
    ///
    /// Returns [`Step::Applied`] for an already mounted list, otherwise the
    /// outcome of the mount. A list whose mount failed is mounted again on
    /// the next call.
    pub async fn home(&mut self) -> (Step, &mut Paginator) {
        let cached = self.home.take().filter(|_| !self.home_failed);
        let (step, pages) = match cached {
            Some(pages) => (Step::Applied, pages),
            None => {
                let mut pages =
                    Paginator::new(self.store.clone(), self.notifier(), self.ui.home_page_size);
                let step = pages.mount().await;
                (step, pages)
            }
        };
        self.home_failed = step == Step::Failed;
        (step, self.home.insert(pages))
    }

    /// Drop the public post list so the next visit fetches the first page again.
    pub fn reset_home(&mut self) {
        self.home = None;
    }

    /// Mount a fresh dashboard, replacing any previous one.
    pub async fn mount_dashboard(&mut self) -> (Step, &mut Dashboard) {
        let mut dashboard = Dashboard::new(
            self.store.clone(),
            self.notifier(),
            self.ui.dashboard_page_size,
        );
        let step = dashboard.mount().await;
        (step, self.dashboard.insert(dashboard))
    }

    pub fn dashboard(&mut self) -> Option<&mut Dashboard> {
        self.dashboard.as_mut()
    }

    /// Open the editor for `id`, or for a new post when `id` is `None`.
    pub fn open_editor(&mut self, id: Option<PostId>) -> &mut Editor {
        let editor = Editor::for_route(self.store.clone(), self.notifier(), id);
        self.editor.insert(editor)
    }

    pub fn editor(&mut self) -> Option<&mut Editor> {
        self.editor.as_mut()
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn reader(&self) -> PostView {
        PostView::new(self.store.clone(), self.notifier())
    }

    pub fn login_form(&self, identity: Arc<dyn IdentityService>) -> LoginForm {
        LoginForm::new(identity, self.notifier())
    }
}

struct MountedView {
    session: Arc<Mutex<ViewSession>>,
    last_used: Instant,
}

/// All mounted views, keyed by view id.
pub struct ViewRegistry {
    idle_ttl: Duration,
    views: RwLock<HashMap<Uuid, MountedView>>,
}

impl ViewRegistry {
    /// Idle time-to-live used when none is configured.
    pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            idle_ttl,
            views: RwLock::new(HashMap::new()),
        }
    }

    pub async fn mount(&self, session: ViewSession) -> Uuid {
        self.mount_at(session, Instant::now()).await
    }

    /// Mount `session` at `now`, dropping views idle for longer than the TTL.
    pub async fn mount_at(&self, session: ViewSession, now: Instant) -> Uuid {
        let id = Uuid::new_v4();
        let mut views = self.views.write().await;

        let before = views.len();
        views.retain(|_, view| now.saturating_duration_since(view.last_used) <= self.idle_ttl);
        let evicted = before - views.len();
        if evicted > 0 {
            tracing::info!(evicted, "Idle views unmounted");
        }

        views.insert(
            id,
            MountedView {
                session: Arc::new(Mutex::new(session)),
                last_used: now,
            },
        );
        tracing::debug!(view_id = %id, "View mounted");
        id
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<Mutex<ViewSession>>, DomainError> {
        self.get_at(id, Instant::now()).await
    }

    /// Look up a view and mark it used at `now`.
    pub async fn get_at(&self, id: Uuid, now: Instant) -> Result<Arc<Mutex<ViewSession>>, DomainError> {
        let mut views = self.views.write().await;
        let view = views.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            entity_type: "View",
            id: id.to_string(),
        })?;
        view.last_used = view.last_used.max(now);
        Ok(view.session.clone())
    }

    /// Returns false if the view was not mounted.
    pub async fn unmount(&self, id: Uuid) -> bool {
        let removed = self.views.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!(view_id = %id, "View unmounted");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.views.read().await.len()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IDLE_TTL)
    }
}
