use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::catalog::search::{filter_jobs, SearchFilter};
use crate::errors::AppError;
use crate::models::job::Job;
use crate::state::AppState;

/// The home view shows at most this many filtered matches.
pub const FEATURED_JOB_LIMIT: usize = 4;
const RECENT_JOB_LIMIT: usize = 3;

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct JobDetailResponse {
    pub job: Job,
    pub saved: bool,
}

#[derive(Serialize)]
pub struct HomeResponse {
    pub featured: Vec<Job>,
    pub recent: Vec<Job>,
    pub urgent: Vec<Job>,
}

#[derive(Serialize)]
pub struct ShareResponse {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<SearchFilter>,
) -> Json<JobListResponse> {
    let jobs: Vec<Job> = filter_jobs(state.catalog.all(), &filter)
        .into_iter()
        .cloned()
        .collect();
    let total = jobs.len();
    Json(JobListResponse { jobs, total })
}

/// GET /api/v1/jobs/:id
///
/// Unknown identifiers are a NOT_FOUND error; the frontend surfaces it as a
/// notification and navigates back to the listing.
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = state
        .catalog
        .get(&job_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    let saved = state.sessions.is_job_saved(&job.id).await;
    Ok(Json(JobDetailResponse { job, saved }))
}

/// GET /api/v1/home
///
/// Composition the home page renders: the first four filtered matches, the
/// three most recently posted jobs, and the urgent openings.
pub async fn handle_home(
    State(state): State<AppState>,
    Query(filter): Query<SearchFilter>,
) -> Json<HomeResponse> {
    let all = state.catalog.all();

    let featured: Vec<Job> = filter_jobs(all, &filter)
        .into_iter()
        .take(FEATURED_JOB_LIMIT)
        .cloned()
        .collect();

    let mut by_recency: Vec<&Job> = all.iter().collect();
    by_recency.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
    let recent: Vec<Job> = by_recency
        .into_iter()
        .take(RECENT_JOB_LIMIT)
        .cloned()
        .collect();

    let urgent: Vec<Job> = all.iter().filter(|job| job.is_urgent).cloned().collect();

    Json(HomeResponse {
        featured,
        recent,
        urgent,
    })
}

/// GET /api/v1/jobs/:id/share
///
/// Payload for the host platform's share capability; callers without native
/// sharing copy `url` to the clipboard.
pub async fn handle_share_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<ShareResponse>, AppError> {
    let job = state
        .catalog
        .get(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(ShareResponse {
        title: job.title.clone(),
        text: format!("Check out this job: {} at {}", job.title, job.company),
        url: format!("{}/job/{}", state.config.public_base_url, job.id),
    }))
}
