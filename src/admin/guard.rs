//! Session guard for admin routes.
//!
//! A guard is mounted per protected navigation, probes the backend once, and
//! resolves `Checking` into either `Authenticated` or `Unauthenticated`. The
//! resolution is dropped on the floor when the guard was unmounted while the
//! probe was in flight.

use super::probe::IdentityProbe;
use crate::navigation::{NavigateMode, Navigator};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// What a guarded route shows for its current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView {
    /// Neutral "Checking session…" placeholder; nothing protected.
    Loading,
    /// The protected children.
    Content,
    /// Bounced to the login view.
    Redirect(String),
}

/// Mounted flag captured when a guard mounts. Cloned handles let whoever
/// owns the route unmount the guard while a probe is still running.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct SessionGuard {
    status: watch::Sender<SessionStatus>,
    liveness: Liveness,
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl SessionGuard {
    pub fn mount(navigator: Arc<dyn Navigator>, login_path: impl Into<String>) -> Self {
        let (status, _rx) = watch::channel(SessionStatus::Checking);
        Self {
            status,
            liveness: Liveness::new(),
            navigator,
            login_path: login_path.into(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        *self.status.borrow()
    }

    /// Observe status writes. A receiver that never reports a change proves
    /// no write happened.
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.liveness.is_alive()
    }

    pub fn unmount(&self) {
        self.liveness.revoke();
    }

    pub fn view(&self) -> GuardView {
        match self.status() {
            SessionStatus::Checking => GuardView::Loading,
            SessionStatus::Authenticated => GuardView::Content,
            SessionStatus::Unauthenticated => GuardView::Redirect(self.login_path.clone()),
        }
    }

    /// Run the identity probe and resolve the guard.
    ///
    /// Returns the terminal status, or `None` when the guard was unmounted
    /// before the probe resolved. In that case neither the status nor the
    /// navigator is touched. A guard that already resolved does not probe
    /// again.
    pub async fn check_session<P>(&self, probe: &P) -> Option<SessionStatus>
    where
        P: IdentityProbe + ?Sized,
    {
        let current = self.status();
        if current != SessionStatus::Checking {
            debug!(status = ?current, "session already resolved for this mount");
            return Some(current);
        }
        if !self.liveness.is_alive() {
            return None;
        }

        let outcome = probe.whoami().await;

        if !self.liveness.is_alive() {
            debug!("guard unmounted before identity probe resolved; discarding result");
            return None;
        }

        let next = match outcome {
            Ok(()) => SessionStatus::Authenticated,
            Err(e) => {
                info!("identity probe failed, treating session as unauthenticated: {e}");
                SessionStatus::Unauthenticated
            }
        };

        let transitioned = self.status.send_if_modified(|status| {
            if *status == SessionStatus::Checking {
                *status = next;
                true
            } else {
                false
            }
        });

        if transitioned && next == SessionStatus::Unauthenticated {
            self.navigator.navigate(&self.login_path, NavigateMode::Replace);
        }

        Some(self.status())
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.liveness.revoke();
    }
}
