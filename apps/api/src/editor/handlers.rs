//! Axum route handlers for the profile editor.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editor::drafts::{
    AboutDraft, CertificationDraft, EducationDraft, PersonalInfoDraft, ProjectDraft,
};
use crate::editor::tags::{TagChange, TagKind, TagList};
use crate::editor::{Outcome, ProfileSnapshot, TagLists};
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::models::education::{CertificationEntry, EducationEntry};
use crate::models::profile::{AboutInfo, PersonalInfo};
use crate::models::project::{Project, ProjectTab};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub change: TagChange,
    pub tags: TagList,
}

#[derive(Debug, Serialize)]
pub struct RemovedResponse<T> {
    pub removed: T,
}

fn parse_tab(tab: &str) -> Result<ProjectTab, AppError> {
    ProjectTab::parse(tab).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unknown project collection '{tab}' (expected featured or upcoming)"
        ))
    })
}

fn parse_kind(kind: &str) -> Result<TagKind, AppError> {
    TagKind::parse(kind).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unknown tag list '{kind}' (expected skills or interests)"
        ))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileSnapshot> {
    Json(state.editor.read().await.snapshot())
}

/// PUT /api/v1/profile/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    AppJson(draft): AppJson<PersonalInfoDraft>,
) -> Result<Json<Outcome<PersonalInfo>>, AppError> {
    let outcome = state.editor.write().await.update_personal(draft)?;
    Ok(Json(outcome))
}

/// PUT /api/v1/profile/about
pub async fn handle_update_about(
    State(state): State<AppState>,
    AppJson(draft): AppJson<AboutDraft>,
) -> Result<Json<Outcome<AboutInfo>>, AppError> {
    let outcome = state.editor.write().await.update_about(draft)?;
    Ok(Json(outcome))
}

/// POST /api/v1/profile/tags/:kind
///
/// Blank and duplicate values are not errors; `change` reports what happened.
pub async fn handle_add_tag(
    State(state): State<AppState>,
    AppPath(kind): AppPath<String>,
    AppJson(req): AppJson<TagRequest>,
) -> Result<Json<TagResponse>, AppError> {
    let kind = parse_kind(&kind)?;
    let mut editor = state.editor.write().await;
    let change = editor.add_tag(kind, &req.value);
    let lists = editor.tag_lists();
    let tags = match kind {
        TagKind::Skills => lists.skills,
        TagKind::Interests => lists.interests,
    };
    Ok(Json(TagResponse {
        change,
        tags: tags.into_iter().collect(),
    }))
}

/// DELETE /api/v1/profile/tags/:kind/:value
pub async fn handle_remove_tag(
    State(state): State<AppState>,
    AppPath((kind, value)): AppPath<(String, String)>,
) -> Result<StatusCode, AppError> {
    let kind = parse_kind(&kind)?;
    state.editor.write().await.remove_tag(kind, &value);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/profile/tags/save
pub async fn handle_save_tags(State(state): State<AppState>) -> Json<Outcome<TagLists>> {
    Json(state.editor.read().await.save_tags())
}

/// POST /api/v1/profile/projects/:tab
pub async fn handle_submit_project(
    State(state): State<AppState>,
    AppPath(tab): AppPath<String>,
    AppJson(draft): AppJson<ProjectDraft>,
) -> Result<(StatusCode, Json<Outcome<Project>>), AppError> {
    let tab = parse_tab(&tab)?;
    let outcome = state.editor.write().await.submit_project(tab, draft)?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// DELETE /api/v1/profile/projects/:tab/at/:index
pub async fn handle_remove_project_at(
    State(state): State<AppState>,
    AppPath((tab, index)): AppPath<(String, usize)>,
) -> Result<Json<RemovedResponse<Project>>, AppError> {
    let tab = parse_tab(&tab)?;
    let removed = state.editor.write().await.remove_project_at(tab, index)?;
    Ok(Json(RemovedResponse { removed }))
}

/// DELETE /api/v1/profile/projects/:tab/:id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    AppPath((tab, id)): AppPath<(String, Uuid)>,
) -> Result<Json<RemovedResponse<Project>>, AppError> {
    let tab = parse_tab(&tab)?;
    let removed = state.editor.write().await.remove_project(tab, id)?;
    Ok(Json(RemovedResponse { removed }))
}

/// POST /api/v1/profile/education
pub async fn handle_submit_education(
    State(state): State<AppState>,
    AppJson(draft): AppJson<EducationDraft>,
) -> Result<(StatusCode, Json<Outcome<EducationEntry>>), AppError> {
    let outcome = state.editor.write().await.submit_education(draft)?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// DELETE /api/v1/profile/education/at/:index
pub async fn handle_remove_education_at(
    State(state): State<AppState>,
    AppPath(index): AppPath<usize>,
) -> Result<Json<RemovedResponse<EducationEntry>>, AppError> {
    let removed = state.editor.write().await.remove_education_at(index)?;
    Ok(Json(RemovedResponse { removed }))
}

/// DELETE /api/v1/profile/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<RemovedResponse<EducationEntry>>, AppError> {
    let removed = state.editor.write().await.remove_education(id)?;
    Ok(Json(RemovedResponse { removed }))
}

/// POST /api/v1/profile/certifications
pub async fn handle_submit_certification(
    State(state): State<AppState>,
    AppJson(draft): AppJson<CertificationDraft>,
) -> Result<(StatusCode, Json<Outcome<CertificationEntry>>), AppError> {
    let outcome = state.editor.write().await.submit_certification(draft)?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// DELETE /api/v1/profile/certifications/at/:index
pub async fn handle_remove_certification_at(
    State(state): State<AppState>,
    AppPath(index): AppPath<usize>,
) -> Result<Json<RemovedResponse<CertificationEntry>>, AppError> {
    let removed = state.editor.write().await.remove_certification_at(index)?;
    Ok(Json(RemovedResponse { removed }))
}

/// DELETE /api/v1/profile/certifications/:id
pub async fn handle_remove_certification(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<RemovedResponse<CertificationEntry>>, AppError> {
    let removed = state.editor.write().await.remove_certification(id)?;
    Ok(Json(RemovedResponse { removed }))
}
