//! Entry point used by the transport layer.

use tracing::debug;

use crate::models::GeneratedGraphic;
use crate::selector::classify;

/// Produce a graphic for `prompt` in accent `color`.
///
/// Never fails: unknown prompts (including empty ones) land on the abstract
/// template and the color is only ever interpolated, never parsed.
pub fn generate(prompt: &str, color: &str) -> GeneratedGraphic {
    let kind = classify(prompt);
    debug!(%kind, prompt_chars = prompt.chars().count(), "template selected");
    kind.render(prompt, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn funnel_prompt() {
        let g = generate("3-step funnel diagram with arrows", "#6ef5c3");
        assert_eq!(g.title, "Signal funnel");
        assert!(g.tags.contains(&"funnel".to_string()));
        assert!(g.svg.matches("#6ef5c3").count() >= 3);
    }

    #[test]
    fn network_prompt() {
        let g = generate("network of interconnected nodes", "#ff0000");
        assert_eq!(g.title, "Network schematic");
        assert_eq!(g.svg.matches(r#"<circle class="node""#).count(), 11);
    }

    #[test]
    fn roadmap_prompt() {
        let g = generate("our roadmap for next quarter", "#112233");
        assert_eq!(g.title, "Timeline progression");
        assert_eq!(g.svg.matches(r#"<g class="step">"#).count(), 5);
    }

    #[test]
    fn empty_prompt_is_abstract() {
        let g = generate("", "#000000");
        assert_eq!(g.title, "Abstract signal");
        assert!(g.svg.contains("</svg>"));
    }

    #[test]
    fn color_case_is_preserved() {
        let g = generate("mesh", "#AbCdEf");
        assert!(g.svg.contains("#AbCdEf"));
        assert_eq!(g.color, "#AbCdEf");
    }

    #[test]
    fn same_input_same_document() {
        let a = generate("the tension between trust and control across a decentralized network", "#6ef5c3");
        let b = generate("the tension between trust and control across a decentralized network", "#6ef5c3");
        assert_eq!(a.svg, b.svg);
        assert_eq!(a.tags, b.tags);
    }
}
