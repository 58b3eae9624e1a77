//! "Career Timeline" panel.

use leptos::prelude::*;
use portfolio_core::PageState;
use portfolio_core::types::ExperienceEntry;

use super::{ICON_BRIEFCASE, Icon};

/// Timeline of positions, in backend order.
#[component]
pub fn ExperiencePanel(#[prop(into)] state: Signal<PageState>) -> impl IntoView {
    let entries = move || {
        state
            .with(|state| state.data().map(|data| data.experience.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="panel">
            <h3 class="panel-title">
                <Icon path=ICON_BRIEFCASE class="accent-pink" />
                "Career Timeline"
            </h3>
            <div class="timeline">
                {move || {
                    entries()
                        .into_iter()
                        .map(|entry| view! { <TimelineEntry entry=entry /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// One position. Ongoing roles read "Present" and get a lit dot.
#[component]
pub fn TimelineEntry(entry: ExperienceEntry) -> impl IntoView {
    let period = entry.period();
    let class = if entry.is_ongoing() { "timeline-entry ongoing" } else { "timeline-entry" };

    view! {
        <div class=class>
            <div class="timeline-dot"></div>
            <h4 class="timeline-title">{entry.title}</h4>
            <div class="timeline-company">{entry.company}</div>
            <div class="timeline-period">{period}</div>
            <p class="timeline-description">{entry.description}</p>
        </div>
    }
}
