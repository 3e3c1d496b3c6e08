//! Page content: profile, social links, skills and projects.
//!
//! Content is immutable once loaded. The builtin data is constructed once per
//! process; alternative content can be read from a JSON file and is validated
//! before it is handed to the renderer.

use crate::theme::{ProjectColor, ThemeEntry, ThemeTable};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

/// Glyph shown for a social link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Github,
    Linkedin,
}

/// An external profile link shown in the hero banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display and accessibility label; unique within the list
    pub name: String,
    /// Absolute external URL
    pub url: String,
    pub icon: Icon,
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique key; also used as the image alt text
    pub title: String,
    pub description: String,
    /// Local asset path
    pub image: String,
    pub color: ProjectColor,
    /// Live demo URL
    pub live: String,
    /// Source repository URL
    pub github: String,
}

/// Page sections, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::About, Section::Skills, Section::Projects];

    /// Element id used as the in-page anchor target
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Owner details rendered in the hero and about sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Role line followed by headline technologies, rendered `|`-separated
    pub headline: Vec<String>,
    pub about: String,
    /// Phrases emphasized wherever they occur in `about`
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Address used by the "Hire Me" mailto link
    pub email: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the renderer needs, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub profile: Profile,
    pub social_links: Vec<SocialLink>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    /// Per-color overrides merged onto the builtin theme table
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub theme: BTreeMap<ProjectColor, ThemeEntry>,
}

static BUILTIN: OnceLock<Content> = OnceLock::new();

impl Content {
    /// The builtin portfolio content, constructed on first use
    pub fn builtin() -> &'static Content {
        BUILTIN.get_or_init(builtin_content)
    }

    /// Parse and validate content from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        if !content.theme.is_empty() {
            log::warn!("content overrides {} theme entries", content.theme.len());
        }
        Ok(content)
    }

    /// Read, parse and validate a JSON content file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading content from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Builtin theme table with this content's overrides applied
    pub fn theme_table(&self) -> ThemeTable {
        ThemeTable::builtin().with_overrides(&self.theme)
    }

    /// Check the structural invariants the renderer relies on
    pub fn validate(&self) -> Result<()> {
        let email = self.profile.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::ContentError(format!(
                "contact email {:?} is not an address",
                self.profile.email
            )));
        }

        let mut names = HashSet::new();
        for link in &self.social_links {
            if link.name.trim().is_empty() {
                return Err(Error::ContentError("social link with empty name".into()));
            }
            if !names.insert(link.name.as_str()) {
                return Err(Error::ContentError(format!(
                    "duplicate social link name {:?}",
                    link.name
                )));
            }
            check_external_url(&link.url, &link.name)?;
        }

        let mut skills = HashSet::new();
        for skill in &self.skills {
            if skill.trim().is_empty() || !skills.insert(skill.as_str()) {
                return Err(Error::ContentError(format!("skill {:?} is empty or repeated", skill)));
            }
        }

        let mut titles = HashSet::new();
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(Error::ContentError("project with empty title".into()));
            }
            if !titles.insert(project.title.as_str()) {
                return Err(Error::ContentError(format!(
                    "duplicate project title {:?}",
                    project.title
                )));
            }
            if project.image.trim().is_empty() {
                return Err(Error::ContentError(format!(
                    "project {:?} has no image",
                    project.title
                )));
            }
            check_external_url(&project.live, &project.title)?;
            check_external_url(&project.github, &project.title)?;
        }

        for (color, entry) in &self.theme {
            if entry.has_blank_class() {
                return Err(Error::ContentError(format!(
                    "theme override for {} has a blank class",
                    color
                )));
            }
        }

        Ok(())
    }
}

fn check_external_url(raw: &str, owner: &str) -> Result<()> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| Error::ContentError(format!("{}: invalid URL {:?}: {}", owner, raw, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::ContentError(format!(
            "{}: URL {:?} uses unsupported scheme {:?}",
            owner, raw, other
        ))),
    }
}

fn builtin_content() -> Content {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    Content {
        profile: Profile {
            name: "Manikanta".to_string(),
            headline: strings(&["Freelance Full Stack Developer", "React", "Next.js", "Node.js"]),
            about: "I am a passionate and results-driven Full Stack Developer with a proven track record of \
                    delivering high-quality, scalable web applications. With expertise in React.js, Next.js, \
                    Node.js, and MongoDB, I help businesses and startups transform their ideas into robust \
                    digital solutions. My focus is on clean code, modern UI/UX, and seamless user experiences. \
                    I thrive in collaborative environments and am always eager to learn and implement the \
                    latest technologies."
                .to_string(),
            highlights: strings(&["React.js", "Next.js", "Node.js", "MongoDB"]),
            email: "mani3481300@gmail.com".to_string(),
        },
        social_links: vec![
            SocialLink {
                name: "GitHub".to_string(),
                url: "https://github.com/Mani2453".to_string(),
                icon: Icon::Github,
            },
            SocialLink {
                name: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/mani-freelance-developer-980289381/".to_string(),
                icon: Icon::Linkedin,
            },
        ],
        skills: strings(&[
            "React.js",
            "Next.js",
            "Node.js",
            "MongoDB",
            "Tailwind CSS",
            "Express.js",
            "JavaScript",
            "GitHub",
            "Python",
            "TypeScript",
            "MySQL",
            "PostgreSQL",
        ]),
        projects: vec![Project {
            title: "Task Management App".to_string(),
            description: "A modern, full-stack web application for organizing work efficiently. Features \
                          secure authentication (JWT), project and task management, real-time feedback, and \
                          a clean, responsive dashboard. Built with Next.js, MongoDB, and Tailwind CSS. All \
                          data is private to each user."
                .to_string(),
            image: "/next.svg".to_string(),
            color: ProjectColor::Purple,
            live: "https://task-management-seven-pearl.vercel.app/".to_string(),
            github: "https://github.com/Mani2453/task-management".to_string(),
        }],
        theme: BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> String {
        serde_json::to_string(Content::builtin()).unwrap()
    }

    #[test]
    fn builtin_content_is_valid() {
        let c = Content::builtin();
        c.validate().expect("builtin content must validate");
        assert_eq!(c.social_links.len(), 2);
        assert_eq!(c.skills.len(), 12);
        assert_eq!(c.projects[0].color, ProjectColor::Purple);
    }

    #[test]
    fn builtin_is_constructed_once() {
        assert!(std::ptr::eq(Content::builtin(), Content::builtin()));
    }

    #[test]
    fn json_round_trip_preserves_content() {
        let parsed = Content::from_json_str(&sample_json()).unwrap();
        assert_eq!(&parsed, Content::builtin());
    }

    #[test]
    fn unknown_color_is_rejected_at_load() {
        let json = sample_json().replace("\"purple\"", "\"orange\"");
        let err = Content::from_json_str(&json).unwrap_err();
        assert!(matches!(err, Error::ParseError(_)), "got {:?}", err);
    }

    #[test]
    fn duplicate_project_titles_are_rejected() {
        let mut c = Content::builtin().clone();
        c.projects.push(c.projects[0].clone());
        assert!(matches!(c.validate(), Err(Error::ContentError(_))));
    }

    #[test]
    fn duplicate_social_names_are_rejected() {
        let mut c = Content::builtin().clone();
        c.social_links[1].name = c.social_links[0].name.clone();
        assert!(matches!(c.validate(), Err(Error::ContentError(_))));
    }

    #[test]
    fn relative_and_non_http_urls_are_rejected() {
        let mut c = Content::builtin().clone();
        c.projects[0].live = "/demo".to_string();
        assert!(c.validate().is_err());

        let mut c = Content::builtin().clone();
        c.social_links[0].url = "javascript:alert(1)".to_string();
        let msg = c.validate().unwrap_err().to_string();
        assert!(msg.contains("unsupported scheme"), "{}", msg);
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut c = Content::builtin().clone();
        c.profile.email = "nobody".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn blank_theme_override_is_rejected() {
        let mut c = Content::builtin().clone();
        c.theme.insert(
            ProjectColor::Pink,
            ThemeEntry { border: "".into(), text: "text-pink-900".into(), hover_bg: "hover:bg-pink-100".into() },
        );
        assert!(c.validate().is_err());
    }

    #[test]
    fn theme_overrides_apply_to_table() {
        let json = sample_json().replacen(
            "{",
            r#"{"theme":{"purple":{"border":"border-violet-300","text":"text-violet-900","hoverBg":"hover:bg-violet-100"}},"#,
            1,
        );
        let c = Content::from_json_str(&json).unwrap();
        assert_eq!(c.theme_table().get(ProjectColor::Purple).border, "border-violet-300");
        assert_eq!(c.theme_table().get(ProjectColor::Blue).border, "border-blue-100");
    }

    #[test]
    fn sections_have_fixed_anchors() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["hero", "about", "skills", "projects"]);
        assert_eq!(Section::Skills.href(), "#skills");
    }
}
