use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::showcase::{ProjectDetail, ShowcasePage};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProjectDetailResponse {
    pub project: ProjectDetail,
    pub paragraphs: Vec<&'static str>,
    pub back: &'static str,
}

/// GET /api/v1/showcase
pub async fn handle_get_showcase(
    State(state): State<AppState>,
) -> Result<Json<ShowcasePage>, AppError> {
    Ok(Json(state.showcase.page().await?))
}

/// GET /api/v1/showcase/projects/:id
///
/// Unknown identifiers yield the "Project Not Found" state with a link home.
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    let project = state
        .showcase
        .project_detail(&id)
        .await?
        .ok_or(AppError::ProjectNotFound(id))?;

    Ok(Json(ProjectDetailResponse {
        paragraphs: project.paragraphs().collect(),
        project,
        back: "/",
    }))
}
