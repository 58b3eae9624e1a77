//! Profile data types served by the portfolio API.
//!
//! These types mirror the JSON bodies of the read endpoints. They're designed to be:
//!
//! - **Serializable** - bodies parse straight into them via serde
//! - **Lenient** - unknown fields are ignored, optional fields default
//! - **Clone-friendly** - components can share data without borrowing issues
//!
//! # Example
//!
//! ```rust
//! use portfolio_core::types::{Project, TechTag};
//!
//! let project = Project {
//!     id: 7,
//!     title: "Bento".into(),
//!     tech: vec![TechTag::new("Rust")],
//!     ..Default::default()
//! };
//! assert_eq!(project.tech[0].name, "Rust");
//! ```

use serde::{Deserialize, Serialize};

/// A technology tag attached to a project.
///
/// On the wire this is a full skill object; only `name` is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechTag {
    /// Display name ("Next.js", "PyTorch", ...)
    pub name: String,
}

impl TechTag {
    /// Build a tag from a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A showcased project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Backend identifier
    pub id: u64,
    /// Project title
    pub title: String,
    /// Short description (clamped to two lines in the card)
    pub description: String,
    /// Technologies, in display order
    #[serde(default)]
    pub tech: Vec<TechTag>,
    /// Source repository link - None or empty means no repo button
    #[serde(default)]
    pub repo_url: Option<String>,
    /// Live deployment link - None or empty links to "#"
    #[serde(default)]
    pub live_url: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub image: Option<String>,
    /// URL slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Featured projects are listed first by the backend
    #[serde(default)]
    pub featured: bool,
    /// Creation timestamp as sent by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Project {
    /// Live link for the card, `"#"` when absent.
    pub fn live_href(&self) -> &str {
        non_empty(self.live_url.as_deref()).unwrap_or("#")
    }

    /// Repository link, None when absent or empty.
    pub fn repo_href(&self) -> Option<&str> {
        non_empty(self.repo_url.as_deref())
    }

    /// Cover image, None when absent or empty.
    pub fn image_src(&self) -> Option<&str> {
        non_empty(self.image.as_deref())
    }
}

/// A skill with a proficiency score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Backend identifier
    pub id: u64,
    /// Skill name, also used to pick an icon
    pub name: String,
    /// Proficiency, nominally 0-100; kept as sent
    pub proficiency: i64,
    /// URL slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Backend-provided icon hint (unused by the page)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Skill {
    /// Proficiency clamped to 0-100 for bar widths.
    pub fn percent(&self) -> u8 {
        // clamped into u8 range before the cast
        self.proficiency.clamp(0, 100) as u8
    }
}

/// A position on the career timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Backend identifier
    pub id: u64,
    /// Role title
    pub title: String,
    /// Employer
    pub company: String,
    /// Start date as sent (ISO date or year)
    pub start_date: String,
    /// End date - None means ongoing
    #[serde(default)]
    pub end_date: Option<String>,
    /// What the role involved
    pub description: String,
    /// Manual sort key used by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl ExperienceEntry {
    /// `"start — end"`, with an absent end date shown as "Present".
    pub fn period(&self) -> String {
        let end = non_empty(self.end_date.as_deref()).unwrap_or("Present");
        format!("{} — {}", self.start_date, end)
    }

    /// True while the position has no end date.
    pub fn is_ongoing(&self) -> bool {
        non_empty(self.end_date.as_deref()).is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn project_parses_backend_shape() {
        let body = r#"{
            "id": 4,
            "title": "Ledger",
            "slug": "ledger",
            "description": "Double-entry bookkeeping",
            "tech": [{"id": 1, "name": "Rust", "slug": "rust", "proficiency": 80, "icon": ""}],
            "image": null,
            "live_url": "",
            "repo_url": "https://github.com/me/ledger",
            "featured": true,
            "created_at": "2025-01-02T10:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(body).unwrap();

        assert_eq!(project.tech, vec![TechTag::new("Rust")]);
        assert_eq!(project.live_href(), "#");
        assert_eq!(project.repo_href(), Some("https://github.com/me/ledger"));
        assert_eq!(project.image_src(), None);
        assert!(project.featured);
    }

    #[test]
    fn project_missing_title_is_rejected() {
        let body = r#"{"id": 1, "description": "x"}"#;
        assert!(serde_json::from_str::<Project>(body).is_err());
    }

    #[test]
    fn skill_percent_is_clamped() {
        let skill = Skill {
            id: 1,
            name: "Rust".into(),
            proficiency: 140,
            ..Default::default()
        };
        assert_eq!(skill.percent(), 100);
    }

    #[test]
    fn skill_accepts_any_integer_proficiency() {
        let body = r#"[
            {"id": 1, "name": "Rust", "proficiency": 300},
            {"id": 2, "name": "COBOL", "proficiency": -5},
            {"id": 3, "name": "Go", "proficiency": 64}
        ]"#;
        let skills: Vec<Skill> = serde_json::from_str(body).unwrap();

        assert_eq!(skills[0].proficiency, 300);
        let percents: Vec<u8> = skills.iter().map(Skill::percent).collect();
        assert_eq!(percents, vec![100, 0, 64]);
    }

    #[test]
    fn experience_period_defaults_to_present() {
        let mut entry = ExperienceEntry {
            start_date: "2021".into(),
            ..Default::default()
        };
        assert_eq!(entry.period(), "2021 — Present");
        assert!(entry.is_ongoing());

        entry.end_date = Some("2023".into());
        assert_eq!(entry.period(), "2021 — 2023");
        assert!(!entry.is_ongoing());
    }
}
