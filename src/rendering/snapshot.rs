//! Read-back views of rendered markup.
//!
//! These parse the final HTML with `scraper` rather than inspecting the node
//! tree, so they see exactly what a browser would receive.

use crate::{Error, Result};
use scraper::{Html, Selector};
use serde::Serialize;

/// A textual snapshot of a rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSnapshot {
    /// Document title
    pub title: String,
    /// Visible body text, whitespace-collapsed, scripts excluded
    pub text: String,
}

/// A link that navigates away from the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundLink {
    pub href: String,
    /// `aria-label` when present, else the link text
    pub label: String,
    pub target: Option<String>,
    pub rel: Option<String>,
}

impl OutboundLink {
    /// `mailto:` links hand off to the mail client and stay in place
    pub fn is_mailto(&self) -> bool {
        self.href.starts_with("mailto:")
    }

    /// Opens a new browsing context and withholds opener and referrer
    pub fn is_safe_external(&self) -> bool {
        let rel_ok = self.rel.as_deref().is_some_and(|rel| {
            let tokens: Vec<&str> = rel.split_whitespace().collect();
            tokens.contains(&"noopener") && tokens.contains(&"noreferrer")
        });
        self.target.as_deref() == Some("_blank") && rel_ok
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::RenderError(format!("bad selector {:?}: {:?}", css, e)))
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn text_snapshot(html: &str) -> Result<TextSnapshot> {
    let document = Html::parse_document(html);
    let title_sel = selector("title")?;
    let body_sel = selector("body")?;

    let title = document
        .select(&title_sel)
        .next()
        .map(|t| collapse(&t.text().collect::<String>()))
        .unwrap_or_default();

    let body = document
        .select(&body_sel)
        .next()
        .ok_or_else(|| Error::RenderError("document has no body".into()))?;

    let mut text = String::new();
    for node in body.descendants() {
        if let Some(t) = node.value().as_text() {
            let in_script = node
                .ancestors()
                .filter_map(|a| a.value().as_element())
                .any(|e| matches!(e.name(), "script" | "style"));
            if !in_script {
                text.push_str(t);
                text.push(' ');
            }
        }
    }

    Ok(TextSnapshot {
        title,
        text: collapse(&text),
    })
}

/// Every `<a>` whose `href` leaves the page (anything but `#fragment`)
pub fn outbound_links(html: &str) -> Result<Vec<OutboundLink>> {
    let document = Html::parse_document(html);
    let anchors = selector("a[href]")?;

    Ok(document
        .select(&anchors)
        .filter_map(|a| {
            let v = a.value();
            let href = v.attr("href")?;
            if href.starts_with('#') {
                return None;
            }
            let label = v
                .attr("aria-label")
                .map(collapse)
                .unwrap_or_else(|| collapse(&a.text().collect::<String>()));
            Some(OutboundLink {
                href: href.to_string(),
                label,
                target: v.attr("target").map(str::to_string),
                rel: v.attr("rel").map(str::to_string),
            })
        })
        .collect())
}
