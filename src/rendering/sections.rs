//! Page sections.
//!
//! Each function maps content to an element subtree without reordering or
//! filtering: collections render one block per entry, in input order.
//! Every link that leaves the page opens a new browsing context with
//! `rel="noopener noreferrer"`.

use super::icons;
use super::markup::{Element, Node};
use crate::content::{Profile, Project, Section, SocialLink};
use crate::theme::{ThemeEntry, ThemeTable};

/// `rel` value carried by every external link
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Element id of the floating back-to-top control
pub const BACK_TO_TOP_ID: &str = "back-to-top";

const NAV_LINK_CLASS: &str = "relative transition text-gray-900 hover:text-primary focus:text-primary px-1";
const ACTION_CLASS: &str = "inline-flex items-center justify-center rounded-md border border-gray-200 \
                            bg-white px-4 py-2 text-sm font-medium shadow-sm transition-colors";
const BACK_TO_TOP_CLASS: &str = "fixed bottom-6 right-6 z-50 bg-gradient-to-r from-blue-500 to-purple-500 \
                                 text-white p-3 rounded-full shadow-2xl hover:scale-110 focus:scale-110 \
                                 transition-transform animate-fade-in-up focus:outline-none focus:ring-4 \
                                 focus:ring-blue-300";

/// An anchor that opens `href` in a new browsing context without a referrer
pub fn external_link(href: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", EXTERNAL_REL)
}

fn section(which: Section, class: &str) -> Element {
    Element::new("section").id(which.id()).class(class)
}

const NAV_UNDERLINE_CLASS: &str = "absolute left-0 -bottom-1 w-full h-[2.5px] bg-gradient-to-r from-blue-500 \
                                   to-purple-500 rounded-full scale-x-0 group-hover:scale-x-100 \
                                   group-focus:scale-x-100 transition-transform duration-300 origin-left \
                                   pointer-events-none";

/// Underline animation for the navigation links
const NAV_STYLE: &str = "nav ul li a{position:relative;display:inline-block}\
nav ul li a::after{content:'';position:absolute;left:0;bottom:-2px;width:100%;height:2.5px;\
background:linear-gradient(to right,#3b82f6,#a21caf);border-radius:9999px;transform:scaleX(0);\
transform-origin:left;transition:transform 0.3s}\
nav ul li a:hover::after,nav ul li a:focus::after{transform:scaleX(1)}";

/// Global `<style>` element carrying the navigation underline
pub fn nav_style() -> Element {
    Element::new("style").child(Node::Raw(NAV_STYLE.to_string()))
}

pub fn nav() -> Element {
    let items = Section::ALL.iter().map(|s| {
        Element::new("li").child(
            Element::new("a")
                .attr("href", s.href())
                .class(NAV_LINK_CLASS)
                .text(s.label())
                .child(Element::new("span").class(NAV_UNDERLINE_CLASS)),
        )
    });
    Element::new("nav")
        .class(
            "fixed top-0 left-0 w-full z-50 bg-white/70 backdrop-blur-md border-b border-gray-200 \
             shadow-lg flex justify-center rounded-b-2xl transition-all",
        )
        .child(
            Element::new("ul")
                .class("flex gap-8 py-4 text-lg font-medium")
                .children(items),
        )
}

pub fn social_link(link: &SocialLink) -> Element {
    external_link(&link.url)
        .class("hover:scale-125 transition-transform text-gray-700 hover:text-primary")
        .attr("aria-label", link.name.as_str())
        .attr("data-social", link.name.as_str())
        .child(icons::icon(link.icon, "w-8 h-8"))
}

fn headline(parts: &[String]) -> Element {
    let mut h = Element::new("h2").class("text-2xl mb-6 text-gray-700 font-semibold");
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            h = h
                .text(" ")
                .child(Element::new("span").class("text-primary").text("|"))
                .text(" ");
        }
        h = h.text(part.as_str());
    }
    h
}

pub fn hero(profile: &Profile, links: &[SocialLink]) -> Element {
    section(
        Section::Hero,
        "flex flex-col items-center justify-center min-h-[80vh] text-center p-6 animate-fade-in relative",
    )
    .child(
        Element::new("h1")
            .class(
                "text-5xl font-extrabold mb-4 tracking-tight bg-gradient-to-r from-blue-600 via-purple-500 \
                 to-pink-500 bg-clip-text text-transparent drop-shadow-lg",
            )
            .text(format!("Hi, I'm {} ", profile.name))
            .child(Element::new("span").class("inline-block animate-wave").text("👋")),
    )
    .child(headline(&profile.headline))
    .child(
        Element::new("div")
            .class("flex gap-4 justify-center mb-6")
            .children(links.iter().map(social_link)),
    )
    .child(
        Element::new("a")
            .attr("href", profile.mailto())
            .class(
                "inline-block mt-2 px-8 py-3 bg-gradient-to-r from-blue-600 to-purple-500 text-white text-lg \
                 font-semibold rounded-full shadow-lg hover:scale-105 transition-transform focus:outline-none \
                 focus:ring-2 focus:ring-blue-400 animate-bounce",
            )
            .text("Hire Me"),
    )
    .child(icons::wave("#f3f4f6", "absolute bottom-0 left-0 w-full"))
}

/// Split `text` into plain and highlighted runs. At each position the
/// earliest match wins; ties go to the longer phrase.
pub fn highlight_segments<'a>(text: &'a str, highlights: &[String]) -> Vec<(&'a str, bool)> {
    let mut out = Vec::new();
    let mut rest = text;
    loop {
        let next = highlights
            .iter()
            .filter(|h| !h.is_empty())
            .filter_map(|h| rest.find(h.as_str()).map(|at| (at, h.len())))
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        match next {
            Some((at, len)) => {
                if at > 0 {
                    out.push((&rest[..at], false));
                }
                out.push((&rest[at..at + len], true));
                rest = &rest[at + len..];
            }
            None => {
                if !rest.is_empty() {
                    out.push((rest, false));
                }
                return out;
            }
        }
    }
}

pub fn about(profile: &Profile) -> Element {
    let body = highlight_segments(&profile.about, &profile.highlights)
        .into_iter()
        .map(|(run, emphasized)| -> Node {
            if emphasized {
                Element::new("span").class("text-primary font-semibold").text(run).into()
            } else {
                run.into()
            }
        });
    section(Section::About, "py-20 bg-white text-center px-6 animate-fade-in-up relative")
        .child(icons::wave("#f3f4f6", "absolute -top-16 left-0 w-full"))
        .child(Element::new("h2").class("text-4xl font-bold mb-4").text("About Me"))
        .child(
            Element::new("p")
                .class("max-w-2xl mx-auto text-lg text-gray-700")
                .children(body),
        )
}

pub fn skills(skills: &[String]) -> Element {
    let cards = skills.iter().map(|skill| {
        Element::new("div")
            .class("rounded-xl hover:scale-110 transition-transform shadow-lg bg-white/70 backdrop-blur border border-blue-100")
            .attr("data-skill", skill.as_str())
            .child(
                Element::new("div")
                    .class("p-4 font-medium text-lg text-blue-900 tracking-wide flex items-center justify-center")
                    .text(skill.as_str()),
            )
    });
    section(
        Section::Skills,
        "py-20 bg-gradient-to-br from-gray-100 via-white to-blue-50 text-center px-6 animate-fade-in-up relative",
    )
    .child(Element::new("h2").class("text-4xl font-bold mb-8").text("Skills"))
    .child(
        Element::new("div")
            .class("grid grid-cols-2 md:grid-cols-4 gap-6 max-w-3xl mx-auto")
            .children(cards),
    )
    .child(icons::wave("#fff", "absolute -bottom-16 left-0 w-full"))
}

fn action(href: &str, kind: &str, label: &str, theme: &ThemeEntry) -> Element {
    external_link(href)
        .class(format!("{} {}", ACTION_CLASS, theme.hover_bg))
        .attr("data-action", kind)
        .text(label)
}

pub fn project_card(project: &Project, theme: &ThemeEntry) -> Element {
    Element::new("article")
        .class(format!(
            "rounded-xl hover:shadow-2xl transition-shadow group bg-white/80 backdrop-blur border {}",
            theme.border
        ))
        .attr("data-project", project.title.as_str())
        .attr("data-color", project.color.as_str())
        .child(
            Element::new("div")
                .class("p-6 rounded-2xl")
                .child(
                    Element::new("img")
                        .attr("src", project.image.as_str())
                        .attr("alt", project.title.as_str())
                        .attr("loading", "lazy")
                        .class("w-16 h-16 mx-auto mb-4 group-hover:scale-110 transition-transform"),
                )
                .child(
                    Element::new("h3")
                        .class(format!(
                            "text-2xl font-semibold mb-2 {} group-hover:text-primary transition-colors duration-300",
                            theme.text
                        ))
                        .text(project.title.as_str()),
                )
                .child(
                    Element::new("p")
                        .class("mb-4 text-gray-700")
                        .text(project.description.as_str()),
                )
                .child(
                    Element::new("div")
                        .class("flex justify-center gap-4")
                        .child(action(&project.live, "live", "Live Demo", theme))
                        .child(action(&project.github, "github", "GitHub", theme)),
                ),
        )
}

pub fn projects(projects: &[Project], table: &ThemeTable) -> Element {
    let cards = projects
        .iter()
        .map(|p| project_card(p, table.get(p.color)));
    section(
        Section::Projects,
        "py-20 bg-white text-center px-6 animate-fade-in-up relative mb-8",
    )
    .child(Element::new("h2").class("text-4xl font-bold mb-8").text("Projects"))
    .child(
        Element::new("div")
            .class("grid grid-cols-1 md:grid-cols-2 gap-8 max-w-4xl mx-auto")
            .children(cards),
    )
    .child(icons::wave("#f3f4f6", "absolute -bottom-16 left-0 w-full"))
}

pub fn back_to_top() -> Element {
    Element::new("button")
        .attr("type", "button")
        .id(BACK_TO_TOP_ID)
        .class(BACK_TO_TOP_CLASS)
        .attr("aria-label", "Back to top")
        .child(icons::chevron_up("w-6 h-6"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Content, Icon};
    use crate::theme::ProjectColor;

    #[test]
    fn nav_links_target_section_anchors() {
        let html = nav().to_html();
        for s in Section::ALL {
            assert!(html.contains(&format!("href=\"#{}\"", s.id())));
            assert!(html.contains(s.label()));
        }
    }

    #[test]
    fn nav_links_carry_an_underline() {
        let html = nav().to_html();
        assert_eq!(html.matches("origin-left pointer-events-none\"></span></a>").count(), Section::ALL.len());
        let style = nav_style().to_html();
        assert!(style.starts_with("<style>nav ul li a{"));
        assert!(style.contains("nav ul li a:hover::after,nav ul li a:focus::after{transform:scaleX(1)}"));
        assert!(style.ends_with("}</style>"));
    }

    #[test]
    fn social_link_is_external_and_labelled() {
        let link = SocialLink {
            name: "GitHub".into(),
            url: "https://github.com/someone".into(),
            icon: Icon::Github,
        };
        let a = social_link(&link);
        assert_eq!(a.get_attr("href"), Some("https://github.com/someone"));
        assert_eq!(a.get_attr("target"), Some("_blank"));
        assert_eq!(a.get_attr("rel"), Some(EXTERNAL_REL));
        assert_eq!(a.get_attr("aria-label"), Some("GitHub"));
    }

    #[test]
    fn project_card_uses_theme_classes() {
        let p = &Content::builtin().projects[0];
        let theme = ThemeEntry::builtin(ProjectColor::Purple);
        let html = project_card(p, &theme).to_html();
        assert!(html.contains("border-purple-100"));
        assert!(html.contains("text-purple-700"));
        assert_eq!(html.matches("hover:bg-purple-50").count(), 2);
        assert!(html.contains(&format!("alt=\"{}\"", p.title)));
    }

    #[test]
    fn highlights_split_in_order() {
        let hl = vec!["Next.js".to_string(), "React.js".to_string()];
        let segs = highlight_segments("With React.js, Next.js and more", &hl);
        assert_eq!(
            segs,
            vec![
                ("With ", false),
                ("React.js", true),
                (", ", false),
                ("Next.js", true),
                (" and more", false)
            ]
        );
        assert!(highlight_segments("", &hl).is_empty());
        assert_eq!(highlight_segments("plain", &[]), vec![("plain", false)]);
    }

    #[test]
    fn longer_highlight_wins_at_same_position() {
        let hl = vec!["Node".to_string(), "Node.js".to_string()];
        let segs = highlight_segments("Node.js!", &hl);
        assert_eq!(segs, vec![("Node.js", true), ("!", false)]);
    }

    #[test]
    fn back_to_top_is_labelled_button() {
        let b = back_to_top();
        assert_eq!(b.tag, "button");
        assert_eq!(b.get_attr("id"), Some(BACK_TO_TOP_ID));
        assert_eq!(b.get_attr("aria-label"), Some("Back to top"));
    }
}
