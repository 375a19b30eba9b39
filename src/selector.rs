//! Prompt classification.
//!
//! Rules are tried top to bottom and the first hit wins; a prompt that hits
//! nothing falls through to [`TemplateKind::Abstract`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::templates::TemplateKind;

static RULES: Lazy<Vec<(Regex, TemplateKind)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"network|graph|mesh|grid|interconnect").unwrap(), TemplateKind::Network),
        (Regex::new(r"timeline|roadmap|progress|phase").unwrap(), TemplateKind::Timeline),
        (Regex::new(r"funnel|flow|pipeline|stream").unwrap(), TemplateKind::Funnel),
    ]
});

const FALLBACK: TemplateKind = TemplateKind::Abstract;

/// Pick a template for `prompt`. Substring match, case-insensitive, total.
pub fn classify(prompt: &str) -> TemplateKind {
    let lower = prompt.to_lowercase();
    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map(|(_, kind)| *kind)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_keywords_any_case() {
        for prompt in ["network", "MESH", "a Graph of things", "GridLock", "interconnected nodes"] {
            assert_eq!(classify(prompt), TemplateKind::Network, "{prompt}");
        }
    }

    #[test]
    fn timeline_keywords() {
        for prompt in ["our roadmap for next quarter", "Progress report", "phaser", "TIMELINE"] {
            assert_eq!(classify(prompt), TemplateKind::Timeline, "{prompt}");
        }
    }

    #[test]
    fn funnel_keywords() {
        for prompt in ["3-step funnel diagram with arrows", "data pipeline", "Workflow", "livestream"] {
            assert_eq!(classify(prompt), TemplateKind::Funnel, "{prompt}");
        }
    }

    #[test]
    fn priority_is_network_timeline_funnel() {
        assert_eq!(classify("roadmap with a flow stage"), TemplateKind::Timeline);
        assert_eq!(classify("network timeline"), TemplateKind::Network);
        assert_eq!(classify("funnel through the mesh"), TemplateKind::Network);
        assert_eq!(classify("stream phase"), TemplateKind::Timeline);
    }

    #[test]
    fn falls_back_to_abstract() {
        assert_eq!(classify("the color of silence"), TemplateKind::Abstract);
        assert_eq!(classify(""), TemplateKind::Abstract);
        assert_eq!(classify("🌌 ✨"), TemplateKind::Abstract);
    }
}
