pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod history;
pub mod models;
pub mod payload;
pub mod routes;
pub mod selector;
pub mod templates;

pub use generator::generate;
pub use models::{GeneratedGraphic, GenerationPayload, TargetFormat};
pub use payload::build_payload;
pub use selector::classify;
pub use templates::TemplateKind;
