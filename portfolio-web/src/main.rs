use leptos::prelude::*;
use portfolio_web::App;

fn main() {
    console_error_panic_hook::set_once();
    portfolio_web::telemetry::init();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
