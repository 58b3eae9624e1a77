//! Endpoint configuration and static profile content.
//!
//! Everything here is compile-time data except the API base URL, which the
//! browser entry point may override from a `<meta>` tag.

use std::time::Duration;

/// How long the "Message Sent!" state stays up before the form re-arms.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

/// Backend endpoint locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix prepended to every path; empty means same origin
    pub base_url: String,
    /// Projects collection
    pub projects_path: &'static str,
    /// Skills collection
    pub skills_path: &'static str,
    /// Experience collection
    pub experiences_path: &'static str,
    /// Contact form sink
    pub contact_path: &'static str,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            projects_path: "/api/projects/",
            skills_path: "/api/skills/",
            experiences_path: "/api/experiences/",
            contact_path: "/contact/",
        }
    }
}

impl ApiConfig {
    /// Same-origin defaults with a different base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Absolute (or origin-relative) URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}{path}")
    }
}

/// A social profile link shown in the hero grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    /// Network name, used for aria labels and styling
    pub network: &'static str,
    /// Profile URL
    pub url: &'static str,
}

/// Owner details rendered around the API-driven sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteProfile {
    /// Full name
    pub name: &'static str,
    /// Brand handle in the header and footer
    pub handle: &'static str,
    /// Single letter in the logo mark
    pub monogram: &'static str,
    /// Caption under the profile photo
    pub role: &'static str,
    /// Hero sub-headline
    pub tagline: &'static str,
    /// Primary profile photo
    pub profile_image: &'static str,
    /// Featured reel
    pub featured_video: &'static str,
    /// Chips in the "Core Stack" tile
    pub core_stack: &'static [&'static str],
    /// Years of experience in the stats tile
    pub years: &'static str,
    /// Shipped projects in the stats tile
    pub shipped: &'static str,
    /// Social links tile
    pub socials: &'static [SocialLink],
}

impl SiteProfile {
    /// Generated avatar used when the profile photo fails to load.
    pub fn fallback_avatar(&self) -> String {
        let name = self.name.split_whitespace().collect::<Vec<_>>().join("+");
        format!("https://ui-avatars.com/api/?name={name}&background=random&size=512")
    }
}

/// The site owner.
pub const PROFILE: SiteProfile = SiteProfile {
    name: "Tushar Sune",
    handle: "Tushar.dev",
    monogram: "T",
    role: "Creator & Developer",
    tagline: "I craft high-performance web experiences that blend aesthetic perfection with robust engineering.",
    profile_image: "/static/profile.jpg",
    featured_video: "https://res.cloudinary.com/dhajxlbko/video/upload/v1769945029/featured_jr6bvl.mp4",
    core_stack: &["React", "Django", "Python", "AWS", "Next.js", "PostgreSQL", "Docker"],
    years: "3+",
    shipped: "15+",
    socials: &[
        SocialLink { network: "github", url: "#" },
        SocialLink { network: "linkedin", url: "#" },
        SocialLink { network: "twitter", url: "#" },
    ],
};
