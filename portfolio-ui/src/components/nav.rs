//! Sticky header and mobile menu.

use leptos::prelude::*;
use portfolio_core::config::PROFILE;

use super::{ICON_CPU, ICON_FOLDER, ICON_HOME, ICON_MAIL, ICON_MENU, ICON_X, Icon};

/// Section anchor in the header.
struct NavTarget {
    id: &'static str,
    label: &'static str,
    menu_label: &'static str,
    icon: &'static str,
}

const NAV_TARGETS: &[NavTarget] = &[
    NavTarget { id: "home", label: "Home", menu_label: "Home", icon: ICON_HOME },
    NavTarget { id: "projects", label: "Work", menu_label: "Projects", icon: ICON_FOLDER },
    NavTarget { id: "stats", label: "Stats", menu_label: "About / Stats", icon: ICON_CPU },
    NavTarget { id: "contact", label: "Contact", menu_label: "Contact", icon: ICON_MAIL },
];

/// Fixed header; gains a blurred backdrop once the page has scrolled.
#[component]
pub fn Nav(
    /// True once `scrollY > 20`
    #[prop(into)]
    scrolled: Signal<bool>,
    /// Formatted local time
    #[prop(into)]
    clock: Signal<String>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || if scrolled.get() { "nav nav-scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    <div class="nav-logo">{PROFILE.monogram}</div>
                    <span class="nav-title">{PROFILE.handle}</span>
                </a>

                <div class="nav-links">
                    {NAV_TARGETS
                        .iter()
                        .map(|target| {
                            view! {
                                <a href=format!("#{}", target.id) class="nav-link">
                                    {target.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="nav-actions">
                    <span class="nav-clock">{move || clock.get()}</span>
                    <div class="open-to-work">
                        <span class="pulse-dot"></span>
                        <span>"Open to Work"</span>
                    </div>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon path=ICON_X /> }.into_any()
                            } else {
                                view! { <Icon path=ICON_MENU /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="mobile-menu">
                <div class="mobile-menu-inner">
                    <div class="mobile-menu-title">"Menu"</div>
                    {NAV_TARGETS
                        .iter()
                        .map(|target| {
                            view! {
                                <a
                                    href=format!("#{}", target.id)
                                    class="mobile-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    <Icon path=target.icon size="18" />
                                    {target.menu_label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
