//! # portfolio-ui
//!
//! Leptos components for the portfolio page.
//!
//! The components take plain signals and callbacks; fetching, timers and
//! scroll tracking are wired up by the browser entry point (`portfolio-web`).
//! That keeps this crate renderable on the server side, which is how the
//! tests exercise it.
//!
//! ## Static Rendering
//!
//! ```rust,ignore
//! use portfolio_core::{PageState, ProfileData};
//!
//! let html = portfolio_ui::render_static(PageState::Ready(ProfileData::demo()));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Demo Mode Active"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - page layout and sections
//! - [`styles`] - the embedded stylesheet

pub mod components;
pub mod styles;

pub use components::PortfolioPage;

#[cfg(any(test, feature = "ssr"))]
use leptos::prelude::*;
#[cfg(any(test, feature = "ssr"))]
use leptos::tachys::view::RenderHtml;
#[cfg(any(test, feature = "ssr"))]
use portfolio_core::{ContactForm, PageState};

/// Render the page for a given data state to a complete HTML document.
///
/// Interactive parts render in their resting state: idle form, closed menu,
/// closed modal, top-of-page header.
#[cfg(any(test, feature = "ssr"))]
pub fn render_static(state: PageState) -> String {
    let html = Owner::new().with(|| {
        let view = view! {
            <PortfolioPage
                state=Signal::stored(state)
                form=RwSignal::new(ContactForm::new())
                on_submit=Callback::new(|_| {})
                scrolled=Signal::stored(false)
                clock=Signal::stored(String::new())
                year=2026
            />
        };
        view.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::ProfileData;
    use portfolio_core::loader::DataSource;
    use portfolio_core::types::{ExperienceEntry, Project, Skill};
    use pretty_assertions::assert_eq;

    fn live(data: ProfileData) -> PageState {
        PageState::Ready(ProfileData {
            source: DataSource::Live,
            ..data
        })
    }

    #[test]
    fn renders_demo_dataset() {
        let html = render_static(PageState::Ready(ProfileData::demo()));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Demo Mode Active"));
        assert!(html.contains("Nexus E-Commerce"));
        assert!(html.contains("Sentient AI"));
        assert!(html.contains("Crypto Watch"));
        assert!(html.contains("TechCorp"));
    }

    #[test]
    fn live_data_hides_demo_banner() {
        let html = render_static(live(ProfileData::default()));
        assert!(!html.contains("Demo Mode Active"));
    }

    #[test]
    fn empty_collections_render_without_cards() {
        let html = render_static(live(ProfileData::default()));

        assert!(html.contains("Featured Projects"));
        assert!(html.contains("Technical Arsenal"));
        assert!(html.contains("Career Timeline"));
        assert_eq!(html.matches(r#"class="project-card""#).count(), 0);
        assert_eq!(html.matches(r#"class="skill-row""#).count(), 0);
        assert!(!html.contains("Loading modules"));
    }

    #[test]
    fn loading_state_shows_loading_tile() {
        let html = render_static(PageState::Loading);

        assert!(html.contains("Loading modules..."));
        assert!(!html.contains("Demo Mode Active"));
    }

    #[test]
    fn over_range_proficiency_is_clamped() {
        let html = render_static(live(ProfileData {
            skills: vec![Skill {
                id: 1,
                name: "Rust".into(),
                proficiency: 140,
                ..Default::default()
            }],
            ..Default::default()
        }));

        assert!(html.contains(r#"style="width: 100%;""#));
        assert!(html.contains(r#"<span class="skill-percent">100%</span>"#));
        assert!(!html.contains("140%"));
    }

    #[test]
    fn ongoing_role_reads_present() {
        let html = render_static(live(ProfileData {
            experience: vec![ExperienceEntry {
                id: 1,
                title: "Engineer".into(),
                company: "Acme".into(),
                start_date: "2023".into(),
                end_date: None,
                description: "Builds things".into(),
                order: None,
            }],
            ..Default::default()
        }));

        assert!(html.contains("Present"));
        assert!(html.contains("timeline-entry ongoing"));
    }

    #[test]
    fn repo_button_only_with_repo_url() {
        let without = render_static(live(ProfileData {
            projects: vec![Project {
                id: 1,
                title: "Quiet".into(),
                repo_url: Some(String::new()),
                ..Default::default()
            }],
            ..Default::default()
        }));
        assert!(without.contains("Quiet"));
        assert!(!without.contains("View Source Code"));

        let with = render_static(live(ProfileData {
            projects: vec![Project {
                id: 2,
                title: "Open".into(),
                repo_url: Some("https://github.com/acme/open".into()),
                ..Default::default()
            }],
            ..Default::default()
        }));
        assert!(with.contains("https://github.com/acme/open"));
        assert!(with.contains("View Source Code"));
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let html = render_static(live(ProfileData {
            projects: vec![Project {
                id: 1,
                title: "Draft".into(),
                ..Default::default()
            }],
            ..Default::default()
        }));
        assert!(html.contains(r#"class="project-placeholder""#));
        assert!(!html.contains(r#"class="project-image""#));
    }

    #[test]
    fn idle_form_offers_send() {
        let html = render_static(live(ProfileData::default()));
        assert!(html.contains("Send Message"));
        assert!(html.contains(r#"data-status="idle""#));
        assert!(html.contains("Tushar.dev. Built with Rust &amp; Leptos."));
    }
}
