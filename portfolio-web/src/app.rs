//! Root component and browser wiring.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::contact::{self, FormHandle};
use portfolio_core::{ContactForm, PageState, load_profile};
use portfolio_ui::PortfolioPage;
use tracing::debug;

use crate::api::{BrowserApi, BrowserTimer};

/// Header switches to its compact style past this many pixels.
const SCROLL_THRESHOLD: f64 = 20.0;

const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Owns page state and the contact form, and feeds browser events into them.
#[component]
pub fn App() -> impl IntoView {
    // local storage: the fetch client never leaves this thread
    let api = StoredValue::new_local(BrowserApi::from_document());

    let state = RwSignal::new(PageState::Loading);
    spawn_local({
        let api = api.get_value();
        async move {
            let data = load_profile(&api).await;
            state.update(|state| state.settle(data));
        }
    });

    let form = RwSignal::new(ContactForm::new());
    let on_submit = Callback::new(move |_| {
        let api = api.get_value();
        spawn_local(async move {
            let outcome = contact::submit(&SignalForm(form), &api, &BrowserTimer).await;
            debug!(?outcome, "contact submit finished");
        });
    });

    let (scrolled, set_scrolled) = signal(false);
    let _ = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        set_scrolled.set(y > SCROLL_THRESHOLD);
    });

    let (clock, set_clock) = signal(local_time());
    set_interval(move || set_clock.set(local_time()), CLOCK_TICK);

    view! {
        <PortfolioPage
            state=state
            form=form
            on_submit=on_submit
            scrolled=scrolled
            clock=clock
            year=current_year()
        />
    }
}

/// Contact form held in a signal. Updates after the owner is gone are dropped.
struct SignalForm(RwSignal<ContactForm>);

impl FormHandle for SignalForm {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

fn local_time() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes())
}

fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
}

/// `"09:05 PM"` style 12-hour time.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hours:02}:{minutes:02} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_uses_twelve_hour_time() {
        assert_eq!(format_clock(0, 0), "12:00 AM");
        assert_eq!(format_clock(9, 5), "09:05 AM");
        assert_eq!(format_clock(12, 30), "12:30 PM");
        assert_eq!(format_clock(23, 59), "11:59 PM");
    }
}
