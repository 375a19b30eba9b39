use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Svg,
    Png,
}

/// Style intent handed to a future generation backend. Not read by the templates.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPayload {
    pub prompt: String,
    pub color: String,
    pub style_directives: Vec<String>,
    pub mood: String,
    pub target_format: TargetFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedGraphic {
    pub svg: String,
    pub title: String,
    pub tags: Vec<String>,
    pub style_description: String,
    pub color: String,
    pub prompt: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub graphic: GeneratedGraphic,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateResponse {
    pub id: Uuid,
    pub graphic: GeneratedGraphic,
    pub payload: GenerationPayload,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HistoryQuery {
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryPage {
    pub items: Vec<HistoryEntry>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    pub error: String,
}
