use crate::models::{GenerationPayload, TargetFormat};

pub const STYLE_DIRECTIVE: &str = "dystopian, minimal, HUD-like, generous negative space, thin luminous lines, subtle motion, presentation-ready overlay";

pub const MOOD: &str = "precise, cinematic, systems-oriented, ledger-inspired";

/// Describe the requested style for a generation backend.
///
/// Inputs pass through untouched. The result does not influence which
/// template renders, so it can evolve independently of the mock renderer.
pub fn build_payload(prompt: &str, color: &str) -> GenerationPayload {
    GenerationPayload {
        prompt: prompt.to_string(),
        color: color.to_string(),
        style_directives: vec![STYLE_DIRECTIVE.to_string()],
        mood: MOOD.to_string(),
        target_format: TargetFormat::Svg,
    }
}
