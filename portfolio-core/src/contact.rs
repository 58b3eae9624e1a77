//! Contact form state machine.
//!
//! ```text
//!            begin_submit              finish_submit(Ok)        settle (after 3s)
//!   Idle ───────────────> Sending ───────────────────> Success ─────────────────> Idle
//!    ^                      │
//!    │ edit / begin_submit  │ finish_submit(Err)
//!    └────────────────── Error <┘
//! ```
//!
//! `Error` re-arms the form: a submit from `Error` is accepted, and any edit
//! drops the status back to `Idle`. Fields survive a failure and are cleared
//! on success.

use std::cell::RefCell;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::{ProfileApi, Timer};
use crate::config::SUCCESS_RESET_DELAY;
use crate::error::{ApiResult, PortfolioError};

/// Submission status driving the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Ready to send
    #[default]
    Idle,
    /// One request in flight
    Sending,
    /// Sent; waiting out the reset delay
    Success,
    /// Last attempt failed; fields kept for a retry
    Error,
}

impl SubmissionStatus {
    /// Whether a submit is allowed right now.
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Error)
    }

    /// Lowercase label, as serialized.
    pub fn as_label(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }
}

/// The four form fields; also the JSON body of the contact request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

impl ContactMessage {
    /// JSON request body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Which input changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `subject`
    Subject,
    /// `message`
    Message,
}

/// Form values plus status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    status: SubmissionStatus,
}

impl ContactForm {
    /// Empty, idle form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Current values.
    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    /// Value of one field.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Subject => &self.fields.subject,
            ContactField::Message => &self.fields.message,
        }
    }

    /// Update one field. Editing after a failure re-arms the form.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Subject => &mut self.fields.subject,
            ContactField::Message => &mut self.fields.message,
        };
        *slot = value.into();
        if self.status == SubmissionStatus::Error {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Enter `Sending` and hand back the body to post.
    ///
    /// Returns `None` without touching state when a submit is not allowed.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if !self.status.accepts_submit() {
            return None;
        }
        self.status = SubmissionStatus::Sending;
        Some(self.fields.clone())
    }

    /// Apply the response of the request started by [`Self::begin_submit`].
    ///
    /// On success the fields are cleared and the caller gets the delay after
    /// which [`Self::settle`] must run.
    pub fn finish_submit(&mut self, result: ApiResult<()>) -> Result<Duration, PortfolioError> {
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.fields = ContactMessage::default();
                Ok(SUCCESS_RESET_DELAY)
            }
            Err(err) => {
                self.status = SubmissionStatus::Error;
                Err(PortfolioError::Submit(err))
            }
        }
    }

    /// Return from `Success` to `Idle`. No effect in other states.
    pub fn settle(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Shared access to a form that lives outside the submit future.
pub trait FormHandle {
    /// Run `f` against the form; `None` if the form is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormHandle for RefCell<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// What a call to [`submit`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was applied: the guard refused (a request was in flight or
    /// the success delay was running), or the form was dropped while the
    /// request was out
    Skipped,
    /// Delivered; the form has already returned to idle
    Sent,
    /// Request failed; form is in `Error` with fields intact
    Failed(PortfolioError),
}

/// Run one full submission: guard, post, apply, and the delayed reset.
///
/// No borrow of the form is held across an await point.
pub async fn submit<F, A, T>(form: &F, api: &A, timer: &T) -> SubmitOutcome
where
    F: FormHandle,
    A: ProfileApi,
    T: Timer,
{
    let Some(Some(message)) = form.with_form(ContactForm::begin_submit) else {
        debug!("contact submit ignored: form not idle");
        return SubmitOutcome::Skipped;
    };

    let result = api.send_contact(&message).await;

    match form.with_form(|f| f.finish_submit(result)) {
        Some(Ok(delay)) => {
            info!("contact message sent");
            timer.sleep(delay).await;
            form.with_form(ContactForm::settle);
            SubmitOutcome::Sent
        }
        Some(Err(err)) => {
            warn!("{err}");
            SubmitOutcome::Failed(err)
        }
        None => {
            debug!("contact response arrived after the form was dropped");
            SubmitOutcome::Skipped
        }
    }
}
