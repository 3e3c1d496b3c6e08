//! Accessibility tree export for rendered pages

use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityNode {
    pub id: String,
    pub role: String,
    pub name: Option<String>,
    pub children: Vec<AccessibilityNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityTree {
    pub root_id: Option<String>,
    pub nodes: Vec<AccessibilityNode>,
}

impl AccessibilityTree {
    /// Every node, depth-first
    pub fn walk(&self) -> Vec<&AccessibilityNode> {
        fn visit<'a>(n: &'a AccessibilityNode, out: &mut Vec<&'a AccessibilityNode>) {
            out.push(n);
            for c in &n.children {
                visit(c, out);
            }
        }
        let mut out = Vec::new();
        for n in &self.nodes {
            visit(n, &mut out);
        }
        out
    }
}

pub trait AccessibilityProvider {
    /// Export a reproducible accessibility tree snapshot
    fn export_tree(&self) -> Result<AccessibilityTree>;
}

/// Builds the tree from HTML markup.
///
/// Landmarks (`nav`, `section`) become top-level nodes holding their links,
/// buttons and images. Interactive elements outside any landmark are appended
/// at the top level after the landmarks.
pub struct MarkupAccessibility {
    html: String,
}

impl MarkupAccessibility {
    pub fn new(html: impl Into<String>) -> Self {
        MarkupAccessibility { html: html.into() }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::RenderError(format!("bad selector {:?}: {:?}", css, e)))
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn role_of(el: &ElementRef) -> &'static str {
    match el.value().name() {
        "nav" => "navigation",
        "section" => "region",
        "a" => "link",
        "button" => "button",
        "img" => "img",
        _ => "generic",
    }
}

fn accessible_name(el: &ElementRef) -> Option<String> {
    let v = el.value();
    let name = v
        .attr("aria-label")
        .or_else(|| v.attr("alt"))
        .map(collapse)
        .unwrap_or_else(|| collapse(&el.text().collect::<String>()));
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn node_for(el: &ElementRef, heading: &Selector, fallback_index: usize) -> AccessibilityNode {
    let role = role_of(el);
    let id = el
        .value()
        .id()
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{}-{}", role, fallback_index));
    // Landmarks are named by a label or their heading, never by their whole text.
    let name = if matches!(role, "navigation" | "region") {
        el.value()
            .attr("aria-label")
            .map(collapse)
            .or_else(|| el.select(heading).next().and_then(|h| accessible_name(&h)))
    } else {
        accessible_name(el)
    };
    AccessibilityNode {
        id,
        role: role.to_string(),
        name,
        children: Vec::new(),
    }
}

fn inside_landmark(el: &ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| matches!(a.value().name(), "nav" | "section"))
}

impl AccessibilityProvider for MarkupAccessibility {
    fn export_tree(&self) -> Result<AccessibilityTree> {
        let doc = Html::parse_document(&self.html);
        let landmarks = selector("nav, section")?;
        let interactive = selector("a[href], button, img")?;
        let heading = selector("h1, h2")?;

        let mut counter = 0usize;
        let mut nodes = Vec::new();
        for lm in doc.select(&landmarks) {
            counter += 1;
            let mut node = node_for(&lm, &heading, counter);
            for el in lm.select(&interactive) {
                counter += 1;
                node.children.push(node_for(&el, &heading, counter));
            }
            nodes.push(node);
        }
        for el in doc.select(&interactive).filter(|e| !inside_landmark(e)) {
            counter += 1;
            nodes.push(node_for(&el, &heading, counter));
        }

        Ok(AccessibilityTree {
            root_id: Some("document".to_string()),
            nodes,
        })
    }
}
