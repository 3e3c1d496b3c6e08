//! Inline SVG glyphs

use super::markup::Element;
use crate::content::Icon;

const WAVE_PATH: &str = "M0,32L48,37.3C96,43,192,53,288,58.7C384,64,480,64,576,58.7C672,53,768,43,864,37.3\
C960,32,1056,32,1152,37.3C1248,43,1344,53,1392,58.7L1440,64L1440,0L1392,0C1344,0,1248,0,1152,0\
C1056,0,960,0,864,0C768,0,672,0,576,0C480,0,384,0,288,0C192,0,96,0,48,0L0,0Z";

fn stroke_svg(class: &str) -> Element {
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .attr("aria-hidden", "true")
        .class(class)
}

fn path(d: &str) -> Element {
    Element::new("path").attr("d", d)
}

/// Glyph for a social link
pub fn icon(icon: Icon, class: &str) -> Element {
    match icon {
        Icon::Github => stroke_svg(class)
            .child(path(
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 \
                 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9\
                 c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            ))
            .child(path("M9 18c-4.51 2-5-2-7-2")),
        Icon::Linkedin => stroke_svg(class)
            .child(path(
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            ))
            .child(
                Element::new("rect")
                    .attr("width", "4")
                    .attr("height", "12")
                    .attr("x", "2")
                    .attr("y", "9"),
            )
            .child(
                Element::new("circle")
                    .attr("cx", "4")
                    .attr("cy", "4")
                    .attr("r", "2"),
            ),
    }
}

/// Up chevron used by the back-to-top control
pub fn chevron_up(class: &str) -> Element {
    stroke_svg(class).child(path("M5 15l7-7 7 7"))
}

/// Decorative section divider
pub fn wave(fill: &str, class: &str) -> Element {
    Element::new("svg")
        .class(class)
        .attr("height", "60")
        .attr("viewBox", "0 0 1440 60")
        .attr("fill", "none")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("aria-hidden", "true")
        .child(path(WAVE_PATH).attr("fill", fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_hidden_from_assistive_tech() {
        for i in [Icon::Github, Icon::Linkedin] {
            let svg = icon(i, "w-8 h-8");
            assert_eq!(svg.get_attr("aria-hidden"), Some("true"));
            assert_eq!(svg.get_attr("class"), Some("w-8 h-8"));
            assert!(!svg.children.is_empty());
        }
    }

    #[test]
    fn wave_carries_fill() {
        let html = wave("#fff", "absolute").to_html();
        assert!(html.contains("fill=\"#fff\""));
        assert!(html.starts_with("<svg class=\"absolute\""));
    }
}
