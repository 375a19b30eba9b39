//! Nested funnel cross-section with a target core and drop line.

use super::{compose, TemplateKind};
use crate::geometry::{fmt1, Point, CENTER};
use crate::models::GeneratedGraphic;

struct Layer {
    corners: [Point; 4],
    fill_opacity: Option<f64>,
    stroke_width: Option<f64>,
}

const LAYERS: [Layer; 3] = [
    Layer {
        corners: [
            Point::new(380.0, 220.0),
            Point::new(820.0, 220.0),
            Point::new(660.0, 520.0),
            Point::new(540.0, 520.0),
        ],
        fill_opacity: None,
        stroke_width: Some(1.6),
    },
    Layer {
        corners: [
            Point::new(420.0, 260.0),
            Point::new(780.0, 260.0),
            Point::new(640.0, 480.0),
            Point::new(580.0, 480.0),
        ],
        fill_opacity: Some(0.06),
        stroke_width: Some(1.1),
    },
    Layer {
        corners: [
            Point::new(460.0, 300.0),
            Point::new(740.0, 300.0),
            Point::new(630.0, 440.0),
            Point::new(610.0, 440.0),
        ],
        fill_opacity: Some(0.08),
        stroke_width: None,
    },
];

const DROP_END_Y: f64 = 520.0;

pub fn render(prompt: &str, color: &str) -> GeneratedGraphic {
    compose(TemplateKind::Funnel, prompt, color, body)
}

fn body(color: &str) -> String {
    let mut out: Vec<String> = LAYERS.iter().map(|layer| layer_path(layer, color)).collect();

    let (cx, cy) = (fmt1(CENTER.x), fmt1(CENTER.y));
    out.push(format!(r#"      <circle class="core" cx="{cx}" cy="{cy}" r="12" fill="{color}" />"#));
    out.push(format!(
        r#"      <circle cx="{cx}" cy="{cy}" r="38" stroke="{color}" stroke-dasharray="10 8" fill="none" />"#
    ));
    out.push(format!(
        r#"      <path d="M{cx} {cy} L{cx} {}" stroke="{color}" stroke-width="1.2" stroke-dasharray="4 6" />"#,
        fmt1(DROP_END_Y),
    ));
    out.join("\n")
}

fn layer_path(layer: &Layer, color: &str) -> String {
    let [a, b, c, d] = &layer.corners;
    let path = format!(
        "M{} L{} L{} L{} Z",
        a.space_pair(),
        b.space_pair(),
        c.space_pair(),
        d.space_pair()
    );
    let fill = match layer.fill_opacity {
        Some(opacity) => format!(r#"fill="{color}" fill-opacity="{opacity}""#),
        None => r#"fill="none""#.to_string(),
    };
    let stroke = match layer.stroke_width {
        Some(width) => format!(r#" stroke="{color}" stroke-width="{width}""#),
        None => String::new(),
    };
    format!(r#"      <path class="layer" d="{path}" {fill}{stroke} />"#)
}
