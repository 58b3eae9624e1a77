//! Seams between the page logic and the browser.
//!
//! The browser entry point implements these with `fetch` and `setTimeout`;
//! tests implement them in memory. Futures are not `Send`: everything runs
//! on the page's single event loop.

#![allow(async_fn_in_trait)]

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::contact::ContactMessage;
use crate::error::{ApiError, ApiResult};
use crate::types::{ExperienceEntry, Project, Skill};

/// The backend the page talks to.
pub trait ProfileApi {
    /// `GET` the projects collection.
    async fn projects(&self) -> ApiResult<Vec<Project>>;

    /// `GET` the skills collection.
    async fn skills(&self) -> ApiResult<Vec<Skill>>;

    /// `GET` the experience collection.
    async fn experiences(&self) -> ApiResult<Vec<ExperienceEntry>>;

    /// `POST` a contact message. Only the status matters.
    async fn send_contact(&self, message: &ContactMessage) -> ApiResult<()>;
}

/// One-shot delays on the host event loop.
pub trait Timer {
    /// Resolve after `delay`.
    async fn sleep(&self, delay: Duration);
}

/// Parse a response body, tagging failures with the endpoint.
pub fn decode_json<T: DeserializeOwned>(endpoint: &str, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

/// Map an HTTP status to `Ok` for 2xx.
pub fn check_status(endpoint: &str, status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status,
        })
    }
}
