//! Bento grid hero: intro, photo, stack, reel, stats and socials.

use leptos::prelude::*;
use portfolio_core::config::{PROFILE, SocialLink};

use super::{
    ICON_ARROW_UP_RIGHT, ICON_GITHUB, ICON_LINKEDIN, ICON_PLAY, ICON_TWITTER, ICON_X, Icon,
};

/// A glass tile of the grid.
#[component]
fn BentoCard(
    /// Layout classes (span, order)
    #[prop(default = "")]
    class: &'static str,
    /// Small caption in the top-left corner
    #[prop(optional)]
    title: Option<&'static str>,
    /// Entry animation delay in ms
    #[prop(default = 0)]
    delay: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("bento-card {class}") style=format!("animation-delay: {delay}ms")>
            {title.map(|title| view! { <div class="bento-title">{title}</div> })}
            <div class="bento-body">{children()}</div>
        </div>
    }
}

/// The hero grid. `on_play` opens the reel modal.
#[component]
pub fn BentoGrid(on_play: Callback<()>) -> impl IntoView {
    view! {
        <div id="home" class="bento-grid">
            <BentoCard class="bento-intro" delay=100>
                <div class="intro-copy">
                    <h2 class="intro-title">
                        "Building the "
                        <br />
                        <span class="gradient-text">"Digital Future."</span>
                    </h2>
                    <p class="intro-tagline">{PROFILE.tagline}</p>
                </div>
                <div class="intro-actions">
                    <a href="#contact" class="btn btn-primary">
                        "Start a Project"
                        <Icon path=ICON_ARROW_UP_RIGHT size="18" />
                    </a>
                    <a href="#projects" class="btn btn-secondary">"View Work"</a>
                </div>
            </BentoCard>

            <BentoCard class="bento-photo" delay=200>
                <ProfilePhoto />
            </BentoCard>

            <BentoCard class="bento-stack" title="Core Stack" delay=300>
                <div class="stack-chips">
                    {PROFILE
                        .core_stack
                        .iter()
                        .map(|tech| view! { <span class="stack-chip">{*tech}</span> })
                        .collect_view()}
                </div>
            </BentoCard>

            <div class="bento-reel-slot" on:click=move |_| on_play.run(())>
                <BentoCard class="bento-reel" delay=400>
                    <video
                        class="reel-preview"
                        src=PROFILE.featured_video
                        autoplay=true
                        muted=true
                        playsinline=true
                    ></video>
                    <div class="reel-play">
                        <Icon path=ICON_PLAY size="24" />
                    </div>
                    <div class="reel-caption">"Watch Reel"</div>
                </BentoCard>
            </div>

            <BentoCard class="bento-stats" title="Experience" delay=500>
                <div class="stats-row">
                    <div>
                        <span class="stats-big">{PROFILE.years}</span>
                        <span class="stats-unit">"Years"</span>
                    </div>
                    <div class="stats-side">
                        <div class="stats-mid">{PROFILE.shipped}</div>
                        <div class="stats-caption">"Projects"</div>
                    </div>
                </div>
            </BentoCard>

            <BentoCard class="bento-social" delay=600>
                <div class="social-row">
                    {PROFILE.socials.iter().copied().map(social_button).collect_view()}
                </div>
            </BentoCard>
        </div>
    }
}

fn social_button(link: SocialLink) -> impl IntoView {
    let icon = match link.network {
        "github" => ICON_GITHUB,
        "linkedin" => ICON_LINKEDIN,
        _ => ICON_TWITTER,
    };
    view! {
        <a
            href=link.url
            class=format!("social-btn social-{}", link.network)
            aria-label=link.network
            target="_blank"
            rel="noopener noreferrer"
        >
            <Icon path=icon size="24" />
        </a>
    }
}

/// Profile photo with a one-shot fallback to a generated avatar.
#[component]
fn ProfilePhoto() -> impl IntoView {
    let (src, set_src) = signal(PROFILE.profile_image.to_string());
    let fallback = PROFILE.fallback_avatar();

    let on_error = move |_| {
        // only swap once, in case the fallback fails too
        if src.get_untracked() != fallback {
            set_src.set(fallback.clone());
        }
    };

    view! {
        <img class="photo" src=move || src.get() alt="Profile" on:error=on_error />
        <div class="photo-caption">
            <span class="photo-name">{PROFILE.name}</span>
            <span class="photo-role">{PROFILE.role}</span>
        </div>
    }
}

/// Full-screen reel player.
#[component]
pub fn VideoModal(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="video-modal">
            <button class="video-close" aria-label="Close video" on:click=move |_| on_close.run(())>
                <Icon path=ICON_X size="32" />
            </button>
            <div class="video-frame">
                <video src=PROFILE.featured_video controls=true autoplay=true></video>
            </div>
        </div>
    }
}
