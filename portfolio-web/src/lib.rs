//! # portfolio-web
//!
//! Browser entry point: mounts [`App`] and supplies the browser-side pieces
//! the other crates leave abstract.
//!
//! - [`api`] - `fetch`-backed [`ProfileApi`](portfolio_core::ProfileApi) and a `setTimeout` timer
//! - [`telemetry`] - `tracing` subscriber writing to the devtools console
//! - [`app`] - the root component: page state, contact form, scroll and clock

pub mod api;
pub mod app;
pub mod telemetry;

pub use app::App;
