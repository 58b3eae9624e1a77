//! `reqwest` and `setTimeout` implementations of the core seams.

use std::time::Duration;

use js_sys::Promise;
use portfolio_core::api::{ProfileApi, Timer, check_status, decode_json};
use portfolio_core::config::ApiConfig;
use portfolio_core::types::{ExperienceEntry, Project, Skill};
use portfolio_core::{ApiError, ApiResult, ContactMessage};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Name of the `<meta>` tag that can point the page at another API origin.
pub const API_BASE_META: &str = "portfolio-api-base";

/// Backend client. On wasm32 `reqwest` runs on top of `window.fetch`.
#[derive(Clone, Debug, Default)]
pub struct BrowserApi {
    client: Client,
    config: ApiConfig,
}

impl BrowserApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Base URL from `<meta name="portfolio-api-base">`, else the page origin.
    ///
    /// `reqwest` only takes absolute URLs, so same-origin paths are resolved
    /// against `window.location.origin` here.
    pub fn from_document() -> Self {
        let window = web_sys::window();
        let meta = window
            .as_ref()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|base| !base.trim().is_empty());

        let base = match meta {
            Some(base) => {
                debug!(%base, "API base overridden");
                base
            }
            None => window
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default(),
        };
        Self::new(ApiConfig::with_base_url(base))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.client.get(self.config.url(path));
        let body = send(path, request).await?;
        decode_json(path, &body)
    }
}

/// Issue the request and return the body text of a 2xx response.
async fn send(path: &str, request: RequestBuilder) -> ApiResult<String> {
    let network = |err: reqwest::Error| ApiError::Network {
        endpoint: path.to_string(),
        message: err.to_string(),
    };

    let response = request.send().await.map_err(network)?;
    check_status(path, response.status().as_u16())?;
    response.text().await.map_err(network)
}

impl ProfileApi for BrowserApi {
    async fn projects(&self) -> ApiResult<Vec<Project>> {
        self.get(self.config.projects_path).await
    }

    async fn skills(&self) -> ApiResult<Vec<Skill>> {
        self.get(self.config.skills_path).await
    }

    async fn experiences(&self) -> ApiResult<Vec<ExperienceEntry>> {
        self.get(self.config.experiences_path).await
    }

    async fn send_contact(&self, message: &ContactMessage) -> ApiResult<()> {
        let path = self.config.contact_path;
        let request = self.client.post(self.config.url(path)).json(message);

        // The response body is not used
        send(path, request).await.map(|_| ())
    }
}

/// Sleeps via `window.setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, delay: Duration) {
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let promise = Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().map(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            });
            if !matches!(scheduled, Some(Ok(_))) {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        let _ = JsFuture::from(promise).await;
    }
}
