//! Horizontal milestone track.

use super::{compose, TemplateKind};
use crate::geometry::{fmt1, linear_x};
use crate::models::GeneratedGraphic;

pub const STEPS: [&str; 5] = ["T0", "T1", "T2", "T3", "T4"];

const TRACK_START: f64 = 220.0;
const STEP_SPACING: f64 = 190.0;
const TRACK_Y: f64 = 360.0;
const MARKER_RADIUS: f64 = 32.0;

pub fn render(prompt: &str, color: &str) -> GeneratedGraphic {
    compose(TemplateKind::Timeline, prompt, color, body)
}

fn body(color: &str) -> String {
    let y = fmt1(TRACK_Y);
    let mut out = vec![format!(
        r#"      <path d="M180 {y} H1020" stroke="{color}" stroke-width="0.8" stroke-opacity="0.45" />"#
    )];

    // dashed gap between neighbouring rings
    for index in 0..STEPS.len() - 1 {
        let x = linear_x(TRACK_START, STEP_SPACING, index) + MARKER_RADIUS;
        let end = x + STEP_SPACING - 2.0 * MARKER_RADIUS;
        out.push(format!(
            r#"      <path d="M{} {y} L{} {y}" stroke="{color}" stroke-width="1.2" stroke-dasharray="6 6" />"#,
            fmt1(x),
            fmt1(end),
        ));
    }

    for (index, label) in STEPS.iter().enumerate() {
        let x = fmt1(linear_x(TRACK_START, STEP_SPACING, index));
        let number = index + 1;
        let r = fmt1(MARKER_RADIUS);
        let label_y = fmt1(TRACK_Y + 50.0);
        out.push(format!(
            r##"      <g class="step">
        <circle cx="{x}" cy="{y}" r="{r}" fill="none" stroke="{color}" stroke-width="1.8" />
        <circle cx="{x}" cy="{y}" r="6" fill="{color}" />
        <text x="{x}" y="{y}" fill="#0f0f0f" font-family="'Space Grotesk', 'Inter', sans-serif" font-size="14" font-weight="600" text-anchor="middle" dy="5">{number}</text>
        <text x="{x}" y="{label_y}" fill="{color}" opacity="0.75" font-family="'Share Tech Mono', monospace" font-size="13" text-anchor="middle">{label}</text>
      </g>"##
        ));
    }

    out.join("\n")
}
