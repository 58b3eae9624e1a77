//! Featured projects grid.

use leptos::prelude::*;
use portfolio_core::PageState;
use portfolio_core::types::Project;

use super::{ICON_CODE, ICON_EXTERNAL, ICON_GITHUB, ICON_LOADER, ICON_TERMINAL, Icon};

/// Project cards, or a loading tile while the profile is in flight.
#[component]
pub fn ProjectsSection(#[prop(into)] state: Signal<PageState>) -> impl IntoView {
    view! {
        <section id="projects" class="projects-section">
            <div class="section-heading">
                <span class="section-icon">
                    <Icon path=ICON_TERMINAL size="24" />
                </span>
                <h3>"Featured Projects"</h3>
            </div>

            <div class="projects-grid">
                {move || {
                    state
                        .with(|state| state.data().map(|data| data.projects.clone()))
                        .map(|projects| {
                            projects
                                .into_iter()
                                .enumerate()
                                .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                                .collect_view()
                                .into_any()
                        })
                        .unwrap_or_else(|| view! { <LoadingTile /> }.into_any())
                }}
            </div>
        </section>
    }
}

#[component]
fn LoadingTile() -> impl IntoView {
    view! {
        <div class="loading-tile">
            <Icon path=ICON_LOADER size="24" class="spin" />
            <span>"Loading modules..."</span>
        </div>
    }
}

/// One project card. Cards fade in one after another.
#[component]
pub fn ProjectCard(project: Project, #[prop(default = 0)] index: usize) -> impl IntoView {
    let delay = format!("animation-delay: {}ms", index * 100 + 700);
    let live = project.live_href().to_string();
    let repo = project.repo_href().map(str::to_string);
    let image = project.image_src().map(str::to_string);
    let Project { title, description, tech, .. } = project;

    let cover = match image {
        Some(src) => view! { <img src=src alt=title.clone() class="project-image" /> }.into_any(),
        None => view! {
            <div class="project-placeholder">
                <Icon path=ICON_CODE size="48" />
            </div>
        }
        .into_any(),
    };

    view! {
        <article class="project-card" style=delay>
            <a href=live.clone() target="_blank" rel="noopener noreferrer" class="project-cover">
                {cover}
                <span class="project-badge">
                    "Visit Live "
                    <Icon path=ICON_EXTERNAL size="10" />
                </span>
            </a>

            <div class="project-body">
                <div class="project-head">
                    <a href=live target="_blank" rel="noopener noreferrer" class="project-title-link">
                        <h4 class="project-title">{title}</h4>
                    </a>
                    {repo.map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="repo-link"
                                title="View Source Code"
                            >
                                <Icon path=ICON_GITHUB />
                            </a>
                        }
                    })}
                </div>

                <p class="project-description">{description}</p>

                <div class="tech-tags">
                    {tech
                        .into_iter()
                        .map(|tag| view! { <span class="tech-tag">{tag.name}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
