//! Time-boxed toast notifications.
//!
//! A [`ToastCenter`] is created when a view mounts and dropped when it
//! unmounts. Controllers receive it as an `Arc<dyn Notifier>`; the
//! presentation layer reads [`ToastCenter::active`] to render what is
//! currently visible. Each toast dismisses itself once its time-to-live has
//! passed.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::Notifier;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Notification dispatcher for one mounted view.
pub struct ToastCenter {
    ttl: TimeDelta,
    inner: Mutex<Inner>,
}

impl ToastCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Raise a toast stamped at `now`. Toasts expired by `now` are dropped.
    pub fn push_at(&self, kind: ToastKind, message: &str, now: DateTime<Utc>) -> u64 {
        let mut inner = self.lock();
        inner.toasts.retain(|t| t.expires_at > now);
        inner.next_id += 1;
        let id = inner.next_id;
        inner.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
            raised_at: now,
            expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        id
    }

    /// Toasts still visible at the current time.
    pub fn active(&self) -> Vec<Toast> {
        self.active_at(Utc::now())
    }

    /// Toasts still visible at `now`; expired ones are dropped.
    pub fn active_at(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut inner = self.lock();
        inner.toasts.retain(|t| t.expires_at > now);
        inner.toasts.clone()
    }

    /// Dismiss a toast before it expires. Returns false if it was already gone.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut inner = self.lock();
        let before = inner.toasts.len();
        inner.toasts.retain(|t| t.id != id);
        inner.toasts.len() != before
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned toast list is still a valid list.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for ToastCenter {
    fn notify(&self, kind: ToastKind, message: &str) {
        match kind {
            ToastKind::Error => tracing::warn!(toast = message, "Error toast raised"),
            ToastKind::Success => tracing::debug!(toast = message, "Success toast raised"),
        }
        self.push_at(kind, message, Utc::now());
    }
}
