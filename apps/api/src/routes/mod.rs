pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::showcase::handlers as showcase;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Showcase (read-only)
        .route("/api/v1/showcase", get(showcase::handle_get_showcase))
        .route(
            "/api/v1/showcase/projects/:id",
            get(showcase::handle_get_project),
        )
        // Profile editor
        .route("/api/v1/profile", get(editor::handle_get_profile))
        .route(
            "/api/v1/profile/personal",
            put(editor::handle_update_personal),
        )
        .route("/api/v1/profile/about", put(editor::handle_update_about))
        .route("/api/v1/profile/tags/save", post(editor::handle_save_tags))
        .route("/api/v1/profile/tags/:kind", post(editor::handle_add_tag))
        .route(
            "/api/v1/profile/tags/:kind/:value",
            delete(editor::handle_remove_tag),
        )
        .route(
            "/api/v1/profile/projects/:tab",
            post(editor::handle_submit_project),
        )
        .route(
            "/api/v1/profile/projects/:tab/at/:index",
            delete(editor::handle_remove_project_at),
        )
        .route(
            "/api/v1/profile/projects/:tab/:id",
            delete(editor::handle_remove_project),
        )
        .route(
            "/api/v1/profile/education",
            post(editor::handle_submit_education),
        )
        .route(
            "/api/v1/profile/education/at/:index",
            delete(editor::handle_remove_education_at),
        )
        .route(
            "/api/v1/profile/education/:id",
            delete(editor::handle_remove_education),
        )
        .route(
            "/api/v1/profile/certifications",
            post(editor::handle_submit_certification),
        )
        .route(
            "/api/v1/profile/certifications/at/:index",
            delete(editor::handle_remove_certification_at),
        )
        .route(
            "/api/v1/profile/certifications/:id",
            delete(editor::handle_remove_certification),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::notify::RecordingSink;
    use crate::showcase::StaticShowcase;

    fn app() -> (Router, AppState) {
        let state = AppState::new(
            Config::default(),
            Arc::new(StaticShowcase),
            Arc::new(RecordingSink::default()),
        );
        (build_router(state.clone()), state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_project_detail_known_and_unknown() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/showcase/projects/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["project"]["title"], "Neural Network Visualization Tool");
        assert_eq!(body["back"], "/");

        let (status, body) = send(&app, Method::GET, "/api/v1/showcase/projects/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Project Not Found");
        assert_eq!(body["error"]["back"], "/");
    }

    #[tokio::test]
    async fn test_showcase_page() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/showcase", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["projects"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["contact"]["links"][0]["label"], "Email");
    }

    #[tokio::test]
    async fn test_personal_update_rejects_short_name() {
        let (app, state) = app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/profile/personal",
            Some(json!({
                "name": "A",
                "title": "Data Scientist",
                "description": "Long enough description text here.",
                "location": "Berlin",
                "age": "30",
                "email": "a@b.com"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["fields"]["name"],
            "Name must be at least 2 characters"
        );
        assert_eq!(body["notification"]["variant"], "destructive");
        assert_eq!(state.editor.read().await.snapshot().personal.name, "Alex Chen");
    }

    #[tokio::test]
    async fn test_personal_update_rejects_bad_email() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/profile/personal",
            Some(json!({
                "name": "Alex",
                "title": "Data Scientist",
                "description": "Long enough description text here.",
                "location": "Berlin",
                "age": "30",
                "email": "not-an-email"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["fields"]["email"], "Valid email is required");
    }

    #[tokio::test]
    async fn test_tag_add_duplicate_blank_and_remove() {
        let (app, _) = app();
        let uri = "/api/v1/profile/tags/skills";

        let (_, body) = send(&app, Method::POST, uri, Some(json!({ "value": "Rust" }))).await;
        assert_eq!(body["change"], "added");
        let (_, body) = send(&app, Method::POST, uri, Some(json!({ "value": "Rust" }))).await;
        assert_eq!(body["change"], "duplicate");
        let (_, body) = send(&app, Method::POST, uri, Some(json!({ "value": "  " }))).await;
        assert_eq!(body["change"], "blank");
        assert_eq!(body["tags"].as_array().map(Vec::len), Some(5));

        let (status, _) = send(&app, Method::DELETE, "/api/v1/profile/tags/skills/Go", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, profile) = send(&app, Method::GET, "/api/v1/profile", None).await;
        assert_eq!(profile["skills"].as_array().map(Vec::len), Some(5));

        let (status, _) = send(&app, Method::POST, "/api/v1/profile/tags/hobbies", Some(json!({ "value": "x" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_tags() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::POST, "/api/v1/profile/tags/save", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["notification"]["title"], "Skills & Interests Updated");
    }

    #[tokio::test]
    async fn test_submit_and_remove_project() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/profile/projects/featured",
            Some(json!({
                "title": "Test",
                "description": "A description of at least twenty characters",
                "technologies": "Go"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["value"]["technologies"][0]["label"], "Go");
        assert_eq!(body["notification"]["description"], "Project added successfully!");
        let id = body["value"]["id"].as_str().unwrap().to_string();

        let (_, profile) = send(&app, Method::GET, "/api/v1/profile", None).await;
        assert_eq!(profile["featured_projects"].as_array().map(Vec::len), Some(1));
        assert_eq!(profile["drafts"]["project"]["phase"], "empty");
        assert_eq!(profile["drafts"]["project"]["draft"]["title"], "");

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/v1/profile/projects/upcoming/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            Method::DELETE,
            &format!("/api/v1/profile/projects/featured/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed"]["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_positional_removal_and_unknown_tab() {
        let (app, _) = app();
        let (status, _) = send(&app, Method::DELETE, "/api/v1/profile/projects/featured/at/0", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/profile/projects/archived",
            Some(json!({ "title": "Test" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_path_params_use_error_envelope() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::DELETE,
            "/api/v1/profile/education/not-a-uuid",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");

        let (status, body) = send(
            &app,
            Method::DELETE,
            "/api/v1/profile/certifications/at/first",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_envelope() {
        let (app, state) = app();
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/api/v1/profile/about")
            .header("content-type", "application/json")
            .body(Body::from("{\"bio\": "))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(state.editor.read().await.snapshot().about.gpa, "3.8");
    }

    #[tokio::test]
    async fn test_project_without_technologies_rejected() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/profile/projects/upcoming",
            Some(json!({
                "title": "LLM Agent",
                "description": "A description of at least twenty characters",
                "technologies": []
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["fields"]["technologies"],
            "At least one technology is required"
        );
    }

    #[tokio::test]
    async fn test_education_years_verbatim() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/profile/education",
            Some(json!({
                "institution": "University of California, Berkeley",
                "degree": "Bachelor of Engineering",
                "field": "Data Science",
                "start_year": "2022",
                "end_year": "2026"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["value"]["start_year"], "2022");
        assert_eq!(body["value"]["end_year"], "2026");

        let (status, body) = send(&app, Method::DELETE, "/api/v1/profile/education/at/0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed"]["institution"], "University of California, Berkeley");
    }

    #[tokio::test]
    async fn test_certification_validation() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/profile/certifications",
            Some(json!({ "name": "AW", "issuer": "Amazon", "issue_date": "2024", "url": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]["fields"]["name"].is_string());
        assert!(body["error"]["fields"]["url"].is_null());
    }
}
