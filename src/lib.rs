//! Folio
//!
//! Renders a single static portfolio page (hero, about, skills, projects)
//! from typed content, and models the page's only piece of runtime behavior:
//! a floating "back to top" control that appears once the viewport has been
//! scrolled past a fixed threshold.
//!
//! # Features
//!
//! - **Typed content**: social links and projects are plain structs; project
//!   colors are a closed enum whose theme lookup cannot miss
//! - **Safe outbound links**: every external link opens a new browsing
//!   context with `rel="noopener noreferrer"`
//! - **Scoped scroll listener**: `ScrollMonitor` attaches on mount and
//!   detaches on drop
//!
//! # Example
//!
//! ```
//! use folio::{Content, PageConfig};
//! use folio::platform::{ScrollMonitor, SimulatedWindow};
//! use folio::rendering::{render_page, ViewState};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let window = SimulatedWindow::new();
//! let monitor = ScrollMonitor::mount(&window);
//! window.set_scroll_y(150.0);
//!
//! let page = render_page(&PageConfig::default(), Content::builtin(), ViewState::from(&monitor))?;
//! assert!(page.html.contains("id=\"back-to-top\""));
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error;
pub mod platform;
pub mod rendering;
pub mod theme;

pub use content::{Content, Icon, Profile, Project, Section, SocialLink};
pub use error::{Error, Result};
pub use theme::{ProjectColor, ThemeEntry, ThemeTable};

/// Configuration for a page render
///
/// Content is supplied separately; this only covers document-level output
/// choices.
///
/// # Examples
///
/// ```
/// let cfg = folio::PageConfig::default();
/// assert_eq!(cfg.lang, "en");
/// assert!(cfg.embed_scroll_script);
/// ```
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Document title; derived from the profile when `None`
    pub title: Option<String>,
    /// `lang` attribute of the root element
    pub lang: String,
    /// Optional stylesheet linked from `<head>`
    pub stylesheet_href: Option<String>,
    /// Whether to embed the client-side back-to-top script
    pub embed_scroll_script: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: None,
            lang: "en".to_string(),
            stylesheet_href: None,
            embed_scroll_script: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert!(config.title.is_none());
        assert!(config.stylesheet_href.is_none());
        assert!(config.embed_scroll_script);
    }
}
