//! Outer SVG scaffold shared by every template.

use crate::geometry::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Characters of the prompt shown under the heading.
pub const CAPTION_CHARS: usize = 48;

const MONO_FONT: &str = "'Share Tech Mono', 'DM Mono', monospace";
const SANS_FONT: &str = "'Inter', 'Space Grotesk', sans-serif";

/// Wrap template `content` into a complete 1200x720 document.
///
/// `content` is appended verbatim; `color` and `title` are escaped. The
/// scaffold provides the `glow` gradient and the `softGlow` filter that
/// templates reference by id.
pub fn wrap(content: &str, color: &str, title: &str) -> String {
    let color = escape_xml(color);
    let title = escape_xml(title);
    let (w, h) = (CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" role="img" aria-label="{title}">
  <defs>
    <radialGradient id="glow" cx="50%" cy="50%" r="70%">
      <stop offset="0%" stop-color="{color}" stop-opacity="0.35" />
      <stop offset="70%" stop-color="{color}" stop-opacity="0.05" />
      <stop offset="100%" stop-color="{color}" stop-opacity="0" />
    </radialGradient>
    <filter id="softGlow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="6" result="blur" />
      <feMerge>
        <feMergeNode in="blur" />
        <feMergeNode in="SourceGraphic" />
      </feMerge>
    </filter>
  </defs>
  <rect width="{w}" height="{h}" fill="none" />
  <g fill="url(#glow)" opacity="0.65">
    <rect x="120" y="80" width="960" height="560" rx="24" />
  </g>
  <g stroke="{color}" stroke-width="1" opacity="0.4">
    <path d="M160 120 H1040" />
    <path d="M160 600 H1040" />
    <path d="M180 140 V580" />
    <path d="M1020 140 V580" />
  </g>
  {content}
</svg>"##
    )
}

/// Heading plus prompt caption in the top-left of the ruled zone.
pub fn header(heading: &str, prompt: &str, color: &str) -> String {
    let color = escape_xml(color);
    format!(
        r#"<text x="160" y="160" fill="{color}" font-family="{MONO_FONT}" font-size="16" letter-spacing="2">{heading}</text>
    <text x="160" y="188" fill="{color}" opacity="0.7" font-family="{SANS_FONT}" font-size="14">{caption}</text>"#,
        heading = escape_xml(heading),
        caption = escape_xml(&caption(prompt)),
    )
}

/// First [`CAPTION_CHARS`] characters of the prompt followed by `...`.
///
/// Counts chars, so a multi-byte code point is never split.
pub fn caption(prompt: &str) -> String {
    let mut out: String = prompt.chars().take(CAPTION_CHARS).collect();
    out.push_str("...");
    out
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_declares_fixed_canvas() {
        let svg = wrap("<g/>", "#6ef5c3", "Signal funnel");
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains(r#"viewBox="0 0 1200 720""#));
        assert!(svg.contains(r#"<rect width="1200" height="720" fill="none" />"#));
        assert!(svg.contains(r#"aria-label="Signal funnel""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn wrap_threads_color_through_gradient_and_frame() {
        let svg = wrap("", "#ABCdef", "t");
        assert_eq!(svg.matches("#ABCdef").count(), 4);
        assert!(svg.contains(r#"<filter id="softGlow""#));
        assert!(svg.contains(r#"<radialGradient id="glow""#));
    }

    #[test]
    fn wrap_appends_content_verbatim() {
        let svg = wrap(r#"<circle r="1" />"#, "red", "t");
        assert!(svg.contains("  <circle r=\"1\" />\n</svg>"));
    }

    #[test]
    fn hostile_color_cannot_break_attributes() {
        let svg = wrap("", r#"red" onload="x"#, "t");
        assert!(!svg.contains(r#"onload="x""#));
        assert!(svg.contains("red&quot; onload=&quot;x"));
    }

    #[test]
    fn caption_truncates_by_chars() {
        assert_eq!(caption(""), "...");
        assert_eq!(caption("short"), "short...");
        let long = "é".repeat(60);
        let cut = caption(&long);
        assert_eq!(cut.chars().count(), CAPTION_CHARS + 3);
        assert!(cut.starts_with("éé"));
    }

    #[test]
    fn header_escapes_prompt() {
        let h = header("NETWORK FIELD", "<script>&", "#fff");
        assert!(h.contains("&lt;script&gt;&amp;..."));
        assert!(h.contains(">NETWORK FIELD</text>"));
    }

    #[test]
    fn escape_leaves_css_colors_alone() {
        for color in ["#6ef5c3", "rgb(10, 20, 30)", "hsl(120deg 50% 40%)", "rebeccapurple"] {
            assert_eq!(escape_xml(color), color);
        }
    }
}
