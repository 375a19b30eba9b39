use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::{
    error::ApiError,
    generator::generate,
    history::History,
    models::{GenerateResponse, HistoryEntry, HistoryPage, HistoryQuery},
    payload::build_payload,
};

#[derive(Clone)]
pub struct AppState {
    pub history: History,
    pub page_size: usize,
}

impl AppState {
    pub fn new(history_limit: usize, page_size: usize) -> Self {
        Self { history: History::new(history_limit), page_size: page_size.max(1) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_graphic))
        .route("/api/history", get(list_history))
        .route("/api/history/:id", get(get_history_entry))
        .route("/api/history/:id/svg", get(export_svg))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

/// Non-empty string field, or `None` when missing, empty or another JSON type.
fn text_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub async fn generate_graphic(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let prompt = text_field(&body, "prompt").ok_or(ApiError::MissingPrompt)?;
    let color = text_field(&body, "color").ok_or(ApiError::MissingColor)?;

    let preview: String = prompt.chars().take(60).collect();
    tracing::info!("🎨 Generating graphic for prompt: {} (color {})", preview, color);

    let payload = build_payload(&prompt, &color);

    // Rendering is CPU-only; run it off the reactor so a panic becomes a 500.
    let graphic = tokio::task::spawn_blocking(move || generate(&prompt, &color))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let entry = state.history.push(graphic);
    tracing::info!(
        "✅ Generated '{}' ({} bytes), history holds {} graphics",
        entry.graphic.title,
        entry.graphic.svg.len(),
        state.history.len()
    );

    Ok(Json(GenerateResponse { id: entry.id, graphic: entry.graphic, payload }))
}

pub async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryPage> {
    let offset = query.offset.unwrap_or(0);
    let limit = query
        .limit
        .unwrap_or(state.page_size)
        .clamp(1, state.history.capacity());
    Json(state.history.page(offset, limit))
}

pub async fn get_history_entry(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<HistoryEntry>, ApiError> {
    state.history.get(&id).map(Json).ok_or(ApiError::NotFound)
}

pub async fn export_svg(Path(id): Path<Uuid>, State(state): State<AppState>) -> Result<Response, ApiError> {
    let entry = state.history.get(&id).ok_or(ApiError::NotFound)?;
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/svg+xml"));
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"graphic_{}.svg\"", id))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    headers.insert(header::CONTENT_DISPOSITION, disposition);
    Ok((StatusCode::OK, headers, entry.graphic.svg).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_field_rejects_non_strings() {
        let body = json!({ "prompt": "mesh", "color": 12, "empty": "" });
        assert_eq!(text_field(&body, "prompt").as_deref(), Some("mesh"));
        assert_eq!(text_field(&body, "color"), None);
        assert_eq!(text_field(&body, "empty"), None);
        assert_eq!(text_field(&body, "missing"), None);
        assert_eq!(text_field(&json!(["prompt"]), "prompt"), None);
    }
}
