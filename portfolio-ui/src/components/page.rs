//! Root page layout.

use leptos::prelude::*;
use portfolio_core::{ContactForm, PageState};

use super::{
    BentoGrid, ContactSection, ExperiencePanel, Footer, ICON_ALERT, Icon, Nav, ProjectsSection,
    SkillsPanel, VideoModal,
};
use crate::styles::PORTFOLIO_CSS;

/// The whole page. Browser wiring (fetch, timers, scroll) stays with the caller.
#[component]
pub fn PortfolioPage(
    /// Loading / live / demo data
    #[prop(into)]
    state: Signal<PageState>,
    /// Contact form values and status
    form: RwSignal<ContactForm>,
    /// Starts a submission
    on_submit: Callback<()>,
    /// Sticky-header flag
    #[prop(into)]
    scrolled: Signal<bool>,
    /// Header clock text
    #[prop(into)]
    clock: Signal<String>,
    /// Footer year
    year: i32,
) -> impl IntoView {
    let (video_open, set_video_open) = signal(false);

    view! {
        <style>{PORTFOLIO_CSS}</style>
        <div class="page">
            <div class="backdrop" aria-hidden="true">
                <div class="blob blob-indigo"></div>
                <div class="blob blob-purple"></div>
            </div>

            <Show when=move || video_open.get()>
                <VideoModal on_close=Callback::new(move |_| set_video_open.set(false)) />
            </Show>

            <Nav scrolled=scrolled clock=clock />

            <Show when=move || state.with(PageState::is_demo)>
                <DemoBanner />
            </Show>

            <main class="main">
                <BentoGrid on_play=Callback::new(move |_| set_video_open.set(true)) />
                <ProjectsSection state=state />
                <div id="stats" class="info-grid">
                    <SkillsPanel state=state />
                    <ExperiencePanel state=state />
                </div>
                <ContactSection form=form on_submit=on_submit />
            </main>

            <Footer year=year />
        </div>
    }
}

/// Shown when the backend could not be reached and sample data is displayed.
#[component]
pub fn DemoBanner() -> impl IntoView {
    view! {
        <div class="demo-banner" role="status">
            <Icon path=ICON_ALERT size="16" />
            <span>"Demo Mode Active"</span>
            <span class="demo-banner-dim">"- showing sample projects while the API is unavailable"</span>
        </div>
    }
}
