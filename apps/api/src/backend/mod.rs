//! Backend capability seam — the remote operations a real job-board service
//! would implement over a transport. This build ships the mock: every
//! operation succeeds after a fixed delay and no data leaves the process.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::user::User;

/// Operations behind the session and submission flows. Delays are awaited
/// inside the caller's future, so an abandoned request cancels the in-flight
/// operation with it.
#[async_trait]
pub trait JobBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User, AppError>;
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AppError>;
    async fn submit_application(&self, application: &JobApplication) -> Result<(), AppError>;
}

/// Stand-in transport: fixed-latency timers, unconditional success, no
/// retries.
pub struct MockBackend {
    auth_delay: Duration,
    submit_delay: Duration,
}

impl MockBackend {
    pub fn new(auth_delay: Duration, submit_delay: Duration) -> Self {
        Self {
            auth_delay,
            submit_delay,
        }
    }
}

#[async_trait]
impl JobBackend for MockBackend {
    /// Always resolves to the demo identity; credentials are ignored.
    async fn login(&self, email: &str, _password: &str) -> Result<User, AppError> {
        tokio::time::sleep(self.auth_delay).await;
        debug!(email, "mock login round-trip complete");
        Ok(demo_user())
    }

    /// Always succeeds with a fresh identity carrying empty saved-job and
    /// application lists.
    async fn register(&self, name: &str, email: &str, _password: &str) -> Result<User, AppError> {
        tokio::time::sleep(self.auth_delay).await;
        Ok(User {
            id: format!("user-{}", Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            saved_jobs: Vec::new(),
            applications: Vec::new(),
        })
    }

    async fn submit_application(&self, application: &JobApplication) -> Result<(), AppError> {
        tokio::time::sleep(self.submit_delay).await;
        debug!(job_id = %application.job_id, "mock submission accepted");
        Ok(())
    }
}

/// The hardcoded identity every login resolves to.
pub fn demo_user() -> User {
    User {
        id: "user-1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        saved_jobs: vec!["1".to_string(), "3".to_string()],
        applications: vec![JobApplication {
            job_id: "2".to_string(),
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            resume_url: "resume.pdf".to_string(),
            cover_letter: None,
            status: ApplicationStatus::UnderReview,
        }],
    }
}
