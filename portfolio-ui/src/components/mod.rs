//! Leptos components for the portfolio page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioPage
//! ├── VideoModal (on demand)
//! ├── Nav (+ mobile menu)
//! ├── DemoBanner (demo mode only)
//! ├── BentoGrid
//! │   └── BentoCard x6 (intro, photo, stack, reel, stats, socials)
//! ├── ProjectsSection
//! │   └── ProjectCard
//! ├── SkillsPanel
//! │   └── SkillRow
//! ├── ExperiencePanel
//! │   └── TimelineEntry
//! ├── ContactSection
//! └── Footer
//! ```

mod contact;
mod experience;
mod footer;
mod hero;
mod icons;
mod nav;
mod page;
mod projects;
mod skills;

pub use contact::ContactSection;
pub use experience::{ExperiencePanel, TimelineEntry};
pub use footer::Footer;
pub use hero::{BentoGrid, VideoModal};
pub use icons::*;
pub use nav::Nav;
pub use page::{DemoBanner, PortfolioPage};
pub use projects::{ProjectCard, ProjectsSection};
pub use skills::{SkillRow, SkillsPanel};
