//! Orbital node field with woven quadratic links.

use super::{compose, TemplateKind};
use crate::geometry::{Orbit, Point};
use crate::models::GeneratedGraphic;

pub const NODE_COUNT: usize = 11;
/// Each node links to the node this many slots ahead...
const LINK_STRIDE: usize = 3;
/// ...bending through the node this many slots ahead.
const CONTROL_STRIDE: usize = 6;

pub fn render(prompt: &str, color: &str) -> GeneratedGraphic {
    compose(TemplateKind::Network, prompt, color, body)
}

fn body(color: &str) -> String {
    let points: Vec<Point> = (0..NODE_COUNT)
        .map(|i| Orbit::NETWORK.place(i, NODE_COUNT))
        .collect();

    let links = (0..NODE_COUNT).map(|i| {
        let from = points[i];
        let to = points[(i + LINK_STRIDE) % NODE_COUNT];
        let control = points[(i + CONTROL_STRIDE) % NODE_COUNT];
        format!(
            r#"      <path d="M{} Q{} {}" stroke="{color}" stroke-width="1.25" stroke-opacity="0.55" fill="none" />"#,
            from.comma_pair(),
            control.comma_pair(),
            to.comma_pair(),
        )
    });

    let nodes = points.iter().enumerate().map(|(i, p)| {
        format!(
            r#"      <circle class="node" cx="{:.1}" cy="{:.1}" r="{}" fill="{color}" fill-opacity="0.6" stroke="{color}" stroke-opacity="0.8" stroke-width="1.2" />"#,
            p.x,
            p.y,
            node_size(i),
        )
    });

    links.chain(nodes).collect::<Vec<_>>().join("\n")
}

/// Dot radius cycles 8, 9, 10, 11.
fn node_size(index: usize) -> usize {
    8 + index % 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn draws_eleven_nodes_and_eleven_links() {
        let g = render("network of interconnected nodes", "#ff0000");
        assert_eq!(g.svg.matches(r#"class="node""#).count(), NODE_COUNT);
        assert_eq!(g.svg.matches(" Q").count(), NODE_COUNT);
        assert_eq!(g.title, "Network schematic");
        assert_eq!(g.tags, vec!["network", "graph", "interconnected"]);
    }

    #[test]
    fn first_node_sits_right_of_center() {
        let svg = body("#ff0000");
        assert!(svg.contains(r#"<circle class="node" cx="800.0" cy="360.0" r="8""#));
    }

    #[test]
    fn first_link_skips_to_third_node_via_sixth() {
        let points: Vec<Point> = (0..NODE_COUNT)
            .map(|i| Orbit::NETWORK.place(i, NODE_COUNT))
            .collect();
        let expected = format!(
            "M800.0,360.0 Q{} {}",
            points[6].comma_pair(),
            points[3].comma_pair()
        );
        assert!(body("red").contains(&expected));
    }

    #[test]
    fn node_sizes_cycle() {
        let sizes: Vec<usize> = (0..6).map(node_size).collect();
        assert_eq!(sizes, vec![8, 9, 10, 11, 8, 9]);
    }

    #[test]
    fn geometry_is_deterministic() {
        let a = render("mesh", "#123456");
        let b = render("mesh", "#123456");
        assert_eq!(a.svg, b.svg);
    }
}
