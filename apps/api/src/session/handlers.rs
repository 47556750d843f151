use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: User,
}

#[derive(Serialize)]
pub struct MeResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Serialize)]
pub struct SavedStateResponse {
    pub saved: bool,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let user = state.backend.login(&req.email, &req.password).await?;
    state
        .sessions
        .establish(user.clone())
        .await
        .context("persisting session flag")?;
    info!(user_id = %user.id, "session established");
    Ok(Json(SessionResponse { user }))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let user = state
        .backend
        .register(&req.name, &req.email, &req.password)
        .await?;
    state
        .sessions
        .establish(user.clone())
        .await
        .context("persisting session flag")?;
    info!(user_id = %user.id, "account registered");
    Ok(Json(SessionResponse { user }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.sessions.clear().await.context("clearing session flag")?;
    info!("session cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/me
pub async fn handle_me(State(state): State<AppState>) -> Json<MeResponse> {
    let user = state.sessions.current_user().await;
    Json(MeResponse {
        authenticated: user.is_some(),
        user,
    })
}

/// POST /api/v1/jobs/:id/save
pub async fn handle_save_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<SavedStateResponse>, AppError> {
    ensure_known_job(&state, &job_id)?;
    if !state.sessions.is_authenticated().await {
        return Err(AppError::Unauthorized);
    }
    state.sessions.save_job(&job_id).await;
    Ok(Json(SavedStateResponse { saved: true }))
}

/// DELETE /api/v1/jobs/:id/save
pub async fn handle_unsave_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<SavedStateResponse>, AppError> {
    ensure_known_job(&state, &job_id)?;
    if !state.sessions.is_authenticated().await {
        return Err(AppError::Unauthorized);
    }
    state.sessions.unsave_job(&job_id).await;
    Ok(Json(SavedStateResponse { saved: false }))
}

/// GET /api/v1/saved-jobs
pub async fn handle_saved_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<Job>>, AppError> {
    let user = state
        .sessions
        .current_user()
        .await
        .ok_or(AppError::Unauthorized)?;
    let jobs: Vec<Job> = user
        .saved_jobs
        .iter()
        .filter_map(|id| state.catalog.get(id))
        .cloned()
        .collect();
    Ok(Json(jobs))
}

fn ensure_known_job(state: &AppState, job_id: &str) -> Result<(), AppError> {
    if state.catalog.get(job_id).is_none() {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    Ok(())
}
