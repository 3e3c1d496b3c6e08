//! Page rendering.
//!
//! `render_document` builds the node tree, `render_page` serializes it and
//! computes a content digest. Both are pure: the same config, content and
//! view state always produce identical output.

pub mod icons;
pub mod markup;
pub mod script;
pub mod sections;
pub mod snapshot;

use crate::content::Content;
use crate::platform::{is_past_threshold, ScrollMonitor, SCROLL_THRESHOLD};
use crate::{Error, PageConfig, Result};
use markup::{Element, Node};
use sha2::{Digest, Sha256};

/// Per-render UI state that is not content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Whether the floating back-to-top control is rendered
    pub show_back_to_top: bool,
}

impl ViewState {
    /// View of a page scrolled to `offset`
    pub fn at_offset(offset: f64) -> Self {
        ViewState {
            show_back_to_top: is_past_threshold(offset),
        }
    }
}

impl From<&ScrollMonitor<'_>> for ViewState {
    fn from(monitor: &ScrollMonitor<'_>) -> Self {
        ViewState {
            show_back_to_top: monitor.is_past_threshold(),
        }
    }
}

/// A serialized page
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub html: String,
    /// Hex SHA-256 of `html`
    pub digest: String,
    pub view: ViewState,
}

pub fn digest_hex(html: &str) -> String {
    hex::encode(Sha256::digest(html.as_bytes()))
}

fn page_title(config: &PageConfig, content: &Content) -> String {
    config.title.clone().unwrap_or_else(|| {
        match content.profile.headline.first() {
            Some(role) => format!("{} | {}", content.profile.name, role),
            None => content.profile.name.clone(),
        }
    })
}

/// Build the `<html>` element for `content`
pub fn render_document(config: &PageConfig, content: &Content, view: ViewState) -> Result<Element> {
    if config.lang.trim().is_empty() {
        return Err(Error::ConfigError("page language must not be empty".into()));
    }

    let mut head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(page_title(config, content)))
        .child(sections::nav_style());
    if let Some(href) = &config.stylesheet_href {
        head = head.child(Element::new("link").attr("rel", "stylesheet").attr("href", href.as_str()));
    }

    let theme = content.theme_table();
    let mut page = Element::new("div")
        .class(
            "min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-100 text-gray-900 font-sans \
             relative overflow-x-hidden pt-20 pb-24",
        )
        .child(sections::nav())
        .child(sections::hero(&content.profile, &content.social_links))
        .child(sections::about(&content.profile))
        .child(sections::skills(&content.skills))
        .child(sections::projects(&content.projects, &theme));
    if view.show_back_to_top {
        page = page.child(sections::back_to_top());
    }

    let mut body = Element::new("body").child(page);
    if config.embed_scroll_script {
        body = body.child(Element::new("script").child(Node::Raw(script::scroll_script(SCROLL_THRESHOLD)?)));
    }

    Ok(Element::new("html")
        .attr("lang", config.lang.as_str())
        .child(head)
        .child(body))
}

/// Validate `content`, render it and digest the result
pub fn render_page(config: &PageConfig, content: &Content, view: ViewState) -> Result<RenderedPage> {
    content.validate()?;
    let document = render_document(config, content, view)?;

    let mut html = String::from("<!DOCTYPE html>");
    document.write_to(&mut html);
    let digest = digest_hex(&html);
    log::info!(
        "rendered page: {} bytes, {} projects, back-to-top {}, digest {}",
        html.len(),
        content.projects.len(),
        if view.show_back_to_top { "shown" } else { "hidden" },
        &digest[..12]
    );

    Ok(RenderedPage { html, digest, view })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_state_follows_threshold() {
        assert!(!ViewState::at_offset(100.0).show_back_to_top);
        assert!(ViewState::at_offset(150.0).show_back_to_top);
        assert_eq!(ViewState::default(), ViewState::at_offset(0.0));
    }

    #[test]
    fn title_defaults_to_name_and_role() {
        let c = Content::builtin();
        let t = page_title(&PageConfig::default(), c);
        assert_eq!(t, "Manikanta | Freelance Full Stack Developer");
        let cfg = PageConfig { title: Some("Custom".into()), ..Default::default() };
        assert_eq!(page_title(&cfg, c), "Custom");
    }

    #[test]
    fn empty_lang_is_a_config_error() {
        let cfg = PageConfig { lang: " ".into(), ..Default::default() };
        let err = render_page(&cfg, Content::builtin(), ViewState::default()).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn stylesheet_link_is_optional() {
        let c = Content::builtin();
        let plain = render_page(&PageConfig::default(), c, ViewState::default()).unwrap();
        assert!(!plain.html.contains("rel=\"stylesheet\""));
        let cfg = PageConfig { stylesheet_href: Some("/app.css".into()), ..Default::default() };
        let styled = render_page(&cfg, c, ViewState::default()).unwrap();
        assert!(styled.html.contains("<link rel=\"stylesheet\" href=\"/app.css\">"));
        assert_ne!(plain.digest, styled.digest);
    }

    #[test]
    fn digest_is_hex_sha256() {
        let page = render_page(&PageConfig::default(), Content::builtin(), ViewState::default()).unwrap();
        assert_eq!(page.digest.len(), 64);
        assert_eq!(page.digest, digest_hex(&page.html));
        assert!(page.html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    }
}
