use std::{collections::HashSet, sync::LazyLock};

use log::error;
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::config::SiteSettings;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(|| {
    let loaded = load(PORTFOLIO_FILE);
    if let Err(e) = &loaded {
        error!("content: {e}");
    }
    loaded
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    Missing(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("project id {0} is used more than once")]
    DuplicateProject(u32),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

/// The embedded portfolio, parsed once per process.
pub fn portfolio() -> Result<&'static Portfolio, &'static ContentError> {
    PORTFOLIO.as_ref()
}

pub fn load(file: &str) -> Result<Portfolio, ContentError> {
    let asset = ContentAssets::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    let text = std::str::from_utf8(&asset.data).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    })?;
    parse(text).map_err(|e| match e {
        ContentError::Parse { reason, .. } => ContentError::Parse {
            file: file.to_string(),
            reason,
        },
        other => other,
    })
}

pub fn parse(json: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = serde_json::from_str(json).map_err(|e| ContentError::Parse {
        file: "<inline>".to_string(),
        reason: e.to_string(),
    })?;
    portfolio.settings.check()?;

    let mut ids = HashSet::new();
    if let Some(dup) = portfolio.projects.iter().find(|p| !ids.insert(p.id)) {
        return Err(ContentError::DuplicateProject(dup.id));
    }
    Ok(portfolio)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub settings: SiteSettings,
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub accomplishments: Vec<Accomplishment>,
    pub contact: ContactDetails,
}

impl Portfolio {
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Cyan,
    Emerald,
    Amber,
    Violet,
}

impl Accent {
    pub fn text(self) -> &'static str {
        match self {
            Accent::Cyan => "text-cyan-400",
            Accent::Emerald => "text-emerald-400",
            Accent::Amber => "text-amber-400",
            Accent::Violet => "text-violet-400",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            Accent::Cyan => "border-cyan-400",
            Accent::Emerald => "border-emerald-400",
            Accent::Amber => "border-amber-400",
            Accent::Violet => "border-violet-400",
        }
    }

    pub fn bg(self) -> &'static str {
        match self {
            Accent::Cyan => "bg-cyan-400/10",
            Accent::Emerald => "bg-emerald-400/10",
            Accent::Amber => "bg-amber-400/10",
            Accent::Violet => "bg-violet-400/10",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Accent::Cyan => "from-cyan-400 to-cyan-600",
            Accent::Emerald => "from-emerald-400 to-emerald-600",
            Accent::Amber => "from-amber-400 to-amber-600",
            Accent::Violet => "from-violet-400 to-violet-600",
        }
    }

    pub fn glow(self) -> &'static str {
        match self {
            Accent::Cyan => "shadow-cyan-400/20",
            Accent::Emerald => "shadow-emerald-400/20",
            Accent::Amber => "shadow-amber-400/20",
            Accent::Violet => "shadow-violet-400/20",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub tagline: String,
    pub headline: String,
    pub summary: String,
    pub email: String,
    pub resume: String,
    pub footer_note: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub period: String,
    pub achievement: String,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub period: String,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
    pub short_description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub achievement: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    /// The first `limit` technologies for a card, plus how many were left off.
    pub fn preview_technologies(&self, limit: usize) -> (&[String], usize) {
        let shown = self.technologies.len().min(limit);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub summary: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
    /// Counts up on reveal instead of showing `value` as-is.
    #[serde(default)]
    pub animated: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Accomplishment {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub metric: Option<Metric>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactItem {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactDetails {
    pub intro: String,
    pub items: Vec<ContactItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_loads() {
        let p = portfolio().expect("embedded content should parse");
        assert_eq!(p.settings, SiteSettings::default());
        assert!(!p.projects.is_empty());
        assert_eq!(p.skills.len(), 3);
        assert_eq!(p.education.len(), 3);
        assert!(p
            .accomplishments
            .iter()
            .any(|a| a.metric.as_ref().is_some_and(|m| m.animated)));
        assert!(p.project(1).is_some());
        assert!(p.project(999).is_none());
    }

    #[test]
    fn test_preview_technologies() {
        let p = portfolio().expect("embedded content should parse");
        let attendify = p.project(1).expect("project 1 exists");
        let (shown, more) = attendify.preview_technologies(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, attendify.technologies.len() - 3);

        let (all, none) = attendify.preview_technologies(100);
        assert_eq!(all.len(), attendify.technologies.len());
        assert_eq!(none, 0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("{"), Err(ContentError::Parse { .. })));
        assert!(matches!(
            load("nope.json"),
            Err(ContentError::Missing(ref f)) if f == "nope.json"
        ));
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let json = r#"{
            "profile": {
                "name": "n", "greeting": "g", "tagline": "t", "headline": "h",
                "summary": "s", "email": "e@x.y", "resume": "/r.pdf",
                "footer_note": "f", "socials": []
            },
            "skills": [], "education": [], "experience": [], "accomplishments": [],
            "contact": { "intro": "i", "items": [] },
            "projects": [
                { "id": 7, "title": "a", "period": "p", "icon": "x",
                  "short_description": "s", "full_description": "f",
                  "technologies": [], "achievement": "a" },
                { "id": 7, "title": "b", "period": "p", "icon": "x",
                  "short_description": "s", "full_description": "f",
                  "technologies": [], "achievement": "a", "link": "https://example.com" }
            ]
        }"#;
        assert_eq!(parse(json).unwrap_err(), ContentError::DuplicateProject(7));
    }
}
