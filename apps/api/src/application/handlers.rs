use axum::{
    extract::{multipart::Field, Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::application::validation::{validate, ApplicationForm, ResumeUpload};
use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ApplicationSubmitted {
    pub message: String,
    pub application: JobApplication,
}

/// POST /api/v1/jobs/:id/apply
///
/// Multipart fields: fullName, email, phone, coverLetter (optional), resume
/// (file). An invalid form returns 422 carrying the per-field error map; a
/// valid one goes through the backend seam and is recorded on the session.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ApplicationSubmitted>, AppError> {
    let job = state
        .catalog
        .get(&job_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    if !state.sessions.is_authenticated().await {
        return Err(AppError::Unauthorized);
    }

    let form = read_form(&mut multipart).await?;
    let errors = validate(&form);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // validate() guarantees the resume is present on a clean form
    let resume_name = form
        .resume
        .as_ref()
        .map(|resume| resume.file_name.clone())
        .unwrap_or_default();

    let application = JobApplication {
        job_id: job.id.clone(),
        full_name: form.full_name,
        email: form.email,
        phone: form.phone,
        resume_url: resume_name,
        cover_letter: form.cover_letter.filter(|letter| !letter.trim().is_empty()),
        status: ApplicationStatus::Submitted,
    };

    state.backend.submit_application(&application).await?;
    state.sessions.record_application(application.clone()).await;
    info!(job_id = %job.id, "application submitted");

    Ok(Json(ApplicationSubmitted {
        message: "Application submitted successfully!".to_string(),
        application,
    }))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    let user = state
        .sessions
        .current_user()
        .await
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(user.applications))
}

async fn read_form(multipart: &mut Multipart) -> Result<ApplicationForm, AppError> {
    let mut form = ApplicationForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "fullName" => form.full_name = read_text(field).await?,
            "email" => form.email = read_text(field).await?,
            "phone" => form.phone = read_text(field).await?,
            "coverLetter" => form.cover_letter = Some(read_text(field).await?),
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read resume upload: {e}"))
                })?;
                form.resume = Some(ResumeUpload { file_name, content });
            }
            _ => {} // unknown fields are ignored
        }
    }

    Ok(form)
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart field: {e}")))
}
