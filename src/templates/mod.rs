//! The four fixed compositions and the metadata that travels with them.

pub mod abstract_signal;
pub mod funnel;
pub mod network;
pub mod timeline;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::document::{escape_xml, header, wrap};
use crate::models::GeneratedGraphic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Network,
    Timeline,
    Funnel,
    Abstract,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Network,
        TemplateKind::Timeline,
        TemplateKind::Funnel,
        TemplateKind::Abstract,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TemplateKind::Network => "Network schematic",
            TemplateKind::Timeline => "Timeline progression",
            TemplateKind::Funnel => "Signal funnel",
            TemplateKind::Abstract => "Abstract signal",
        }
    }

    pub fn tags(self) -> &'static [&'static str] {
        match self {
            TemplateKind::Network => &["network", "graph", "interconnected"],
            TemplateKind::Timeline => &["timeline", "steps", "sequence"],
            TemplateKind::Funnel => &["funnel", "flow", "conversion"],
            TemplateKind::Abstract => &["abstract", "geometric", "oscillation"],
        }
    }

    pub fn style_description(self) -> &'static str {
        match self {
            TemplateKind::Network => "Layered orbital network with glowing links and clustered nodes",
            TemplateKind::Timeline => "Linear HUD track with milestone beacons and dotted connective tissue",
            TemplateKind::Funnel => "Layered funnel geometry with concentric resonance and venting trail",
            TemplateKind::Abstract => "Radial interference pattern with layered vector shards",
        }
    }

    /// Uppercase HUD caption drawn above the prompt.
    pub fn heading(self) -> &'static str {
        match self {
            TemplateKind::Network => "NETWORK FIELD",
            TemplateKind::Timeline => "TIMELINE / PROGRESSION",
            TemplateKind::Funnel => "FLOW / FUNNEL",
            TemplateKind::Abstract => "ABSTRACT VECTOR CORE",
        }
    }

    pub fn render(self, prompt: &str, color: &str) -> GeneratedGraphic {
        match self {
            TemplateKind::Network => network::render(prompt, color),
            TemplateKind::Timeline => timeline::render(prompt, color),
            TemplateKind::Funnel => funnel::render(prompt, color),
            TemplateKind::Abstract => abstract_signal::render(prompt, color),
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TemplateKind::Network => "network",
            TemplateKind::Timeline => "timeline",
            TemplateKind::Funnel => "funnel",
            TemplateKind::Abstract => "abstract",
        };
        f.write_str(name)
    }
}

/// Full document for `kind`. `body` receives the already escaped accent.
pub(crate) fn document(kind: TemplateKind, prompt: &str, color: &str, body: fn(&str) -> String) -> String {
    let accent = escape_xml(color);
    let content = format!(
        "\n    <g filter=\"url(#softGlow)\">\n{}\n    </g>\n    {}\n  ",
        body(&accent),
        header(kind.heading(), prompt, color),
    );
    wrap(&content, color, kind.title())
}

pub(crate) fn compose(kind: TemplateKind, prompt: &str, color: &str, body: fn(&str) -> String) -> GeneratedGraphic {
    GeneratedGraphic {
        svg: document(kind, prompt, color, body),
        title: kind.title().to_string(),
        tags: kind.tags().iter().map(|t| t.to_string()).collect(),
        style_description: kind.style_description().to_string(),
        color: color.to_string(),
        prompt: prompt.to_string(),
        created_at: Utc::now().timestamp_millis(),
    }
}
