//! Page footer.

use leptos::prelude::*;
use portfolio_core::config::PROFILE;

/// Copyright line for `year`.
#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{format!("© {year} {}. Built with Rust & Leptos.", PROFILE.handle)}</p>
        </footer>
    }
}
