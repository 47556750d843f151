//! Session / saved-jobs store — the in-memory mock identity and its
//! operations. Injected into handlers through `AppState`; there are no
//! globals.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::application::JobApplication;
use crate::models::user::User;
use crate::session::persist::SessionFlag;

#[derive(Clone)]
pub struct SessionStore {
    user: Arc<RwLock<Option<User>>>,
    flag: SessionFlag,
}

impl SessionStore {
    pub fn new(flag: SessionFlag) -> Self {
        Self {
            user: Arc::new(RwLock::new(None)),
            flag,
        }
    }

    /// Installs the demo identity when a prior run persisted the flag.
    ///
    /// Only the authenticated flag survives restarts: saved-job edits and
    /// applications from the prior session are not recovered.
    pub async fn restore_persisted(&self) -> bool {
        if !self.flag.is_set() {
            return false;
        }
        *self.user.write().await = Some(crate::backend::demo_user());
        true
    }

    /// Installs `user` as the current session and persists the flag.
    pub async fn establish(&self, user: User) -> std::io::Result<()> {
        self.flag.set()?;
        *self.user.write().await = Some(user);
        Ok(())
    }

    /// Ends the session and clears the persisted flag.
    pub async fn clear(&self) -> std::io::Result<()> {
        self.flag.clear()?;
        *self.user.write().await = None;
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    /// Bookmarks a job for the current user. Each id appears at most once;
    /// re-saving is a no-op. Returns false when nothing changed (no session,
    /// or already saved).
    pub async fn save_job(&self, job_id: &str) -> bool {
        let mut guard = self.user.write().await;
        let Some(user) = guard.as_mut() else {
            return false;
        };
        if user.saved_jobs.iter().any(|id| id == job_id) {
            return false;
        }
        user.saved_jobs.push(job_id.to_string());
        debug!(job_id, "job saved");
        true
    }

    /// Removes a bookmark. Returns false when nothing changed.
    pub async fn unsave_job(&self, job_id: &str) -> bool {
        let mut guard = self.user.write().await;
        let Some(user) = guard.as_mut() else {
            return false;
        };
        let before = user.saved_jobs.len();
        user.saved_jobs.retain(|id| id != job_id);
        user.saved_jobs.len() < before
    }

    /// Membership test; false when unauthenticated.
    pub async fn is_job_saved(&self, job_id: &str) -> bool {
        match self.user.read().await.as_ref() {
            Some(user) => user.saved_jobs.iter().any(|id| id == job_id),
            None => false,
        }
    }

    /// Appends a submitted application to the session user. In-session only;
    /// nothing is durably persisted.
    pub async fn record_application(&self, application: JobApplication) {
        if let Some(user) = self.user.write().await.as_mut() {
            user.applications.push(application);
        }
    }
}
