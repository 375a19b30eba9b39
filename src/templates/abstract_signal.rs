//! Fallback composition: concentric rings crossed by radial shards.

use super::{compose, TemplateKind};
use crate::geometry::{fmt1, slot_angle, wedge, CENTER};
use crate::models::GeneratedGraphic;

pub const RING_COUNT: usize = 5;
pub const SHARD_COUNT: usize = 8;

const SHARD_INNER: f64 = 210.0;
const SHARD_OUTER: f64 = 310.0;
const SHARD_HALF_WIDTH: f64 = 0.16;

pub fn render(prompt: &str, color: &str) -> GeneratedGraphic {
    compose(TemplateKind::Abstract, prompt, color, body)
}

fn body(color: &str) -> String {
    let (cx, cy) = (fmt1(CENTER.x), fmt1(CENTER.y));

    let rings = (0..RING_COUNT).map(|i| {
        let step = i as f64;
        format!(
            r#"      <circle class="ring" cx="{cx}" cy="{cy}" r="{}" stroke="{color}" stroke-width="{}" stroke-opacity="{:.2}" fill="none" />"#,
            fmt1(70.0 + step * 40.0),
            fmt1(1.0 + step * 0.4),
            0.8 - step * 0.12,
        )
    });

    let shards = (0..SHARD_COUNT).map(|i| {
        let angle = slot_angle(i, SHARD_COUNT);
        let [apex, left, right] = wedge(CENTER, angle, SHARD_INNER, SHARD_OUTER, SHARD_HALF_WIDTH);
        format!(
            r#"      <path class="shard" d="M{} L{} L{} Z" fill="{color}" fill-opacity="0.08" stroke="{color}" stroke-width="0.9" />"#,
            apex.space_pair(),
            left.space_pair(),
            right.space_pair(),
        )
    });

    let mut out: Vec<String> = rings.chain(shards).collect();
    out.push(format!(r#"      <circle cx="{cx}" cy="{cy}" r="14" fill="{color}" />"#));
    out.push(format!(
        r#"      <circle cx="{cx}" cy="{cy}" r="48" stroke="{color}" stroke-dasharray="6 10" fill="none" />"#
    ));
    out.join("\n")
}
