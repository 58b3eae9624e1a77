//! "Technical Arsenal" skill bars.

use leptos::prelude::*;
use portfolio_core::PageState;
use portfolio_core::skill_icon::skill_icon;
use portfolio_core::types::Skill;

use super::{ICON_CPU, Icon, skill_icon_path};

/// Skill list. Empty while loading or when the backend has none.
#[component]
pub fn SkillsPanel(#[prop(into)] state: Signal<PageState>) -> impl IntoView {
    let skills = move || {
        state
            .with(|state| state.data().map(|data| data.skills.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="panel">
            <h3 class="panel-title">
                <Icon path=ICON_CPU class="accent-indigo" />
                "Technical Arsenal"
            </h3>
            <div class="skill-list">
                {move || skills().into_iter().map(|skill| view! { <SkillRow skill=skill /> }).collect_view()}
            </div>
        </div>
    }
}

/// Icon, name, percentage and bar for one skill.
#[component]
pub fn SkillRow(skill: Skill) -> impl IntoView {
    let percent = skill.percent();
    let icon = skill_icon_path(skill_icon(&skill.name));

    view! {
        <div class="skill-row">
            <div class="skill-icon">
                <Icon path=icon />
            </div>
            <div class="skill-meter">
                <div class="skill-label">
                    <span class="skill-name">{skill.name}</span>
                    <span class="skill-percent">{format!("{percent}%")}</span>
                </div>
                <div class="skill-track">
                    <div class="skill-fill" style=format!("width: {percent}%")></div>
                </div>
            </div>
        </div>
    }
}
