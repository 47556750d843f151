use serde::{Deserialize, Serialize};

use crate::models::application::JobApplication;

/// The current (mock) authenticated identity. Lives for the length of the
/// session: recreated on register, replaced on login, dropped on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Bookmarked posting ids, ordered by first save. Each id appears at
    /// most once.
    pub saved_jobs: Vec<String>,
    pub applications: Vec<JobApplication>,
}
