//! # portfolio-core
//!
//! Target-independent logic behind the portfolio page: the profile data
//! model, the all-or-nothing loader with its demo fallback, and the contact
//! form state machine.
//!
//! Nothing here touches the browser. The page talks to the backend through
//! [`api::ProfileApi`] and waits through [`api::Timer`], so the same flows run
//! under `wasm-bindgen-futures` in the browser and under tokio in tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_core::contact::{ContactField, ContactForm, SubmissionStatus};
//!
//! let mut form = ContactForm::new();
//! form.edit(ContactField::Name, "Ada");
//! let body = form.begin_submit().expect("idle form accepts a submit");
//! assert_eq!(body.name, "Ada");
//! assert_eq!(form.status(), SubmissionStatus::Sending);
//! assert!(form.begin_submit().is_none());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Project / Skill / ExperienceEntry wire types
//! - [`loader`] - concurrent fetch, demo substitution, page state
//! - [`contact`] - submission status and the submit driver
//! - [`demo`] - the fixed sample dataset
//! - [`config`] - endpoint paths and owner profile
//! - [`skill_icon`] - skill name to icon lookup
//! - [`error`] - `ApiError` / `PortfolioError`

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod contact;
pub mod demo;
pub mod error;
pub mod loader;
pub mod skill_icon;
pub mod types;

pub use api::{ProfileApi, Timer};
pub use contact::{ContactField, ContactForm, ContactMessage, SubmissionStatus, SubmitOutcome};
pub use error::{ApiError, ApiResult, PortfolioError};
pub use loader::{DataSource, PageState, ProfileData, load_profile};
