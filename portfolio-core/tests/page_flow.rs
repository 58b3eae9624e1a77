//! End-to-end page flows against an in-memory backend.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use futures::channel::oneshot;
use pretty_assertions::assert_eq;

use portfolio_core::api::decode_json;
use portfolio_core::contact::{
    self, ContactField, ContactForm, FormHandle, SubmissionStatus, SubmitOutcome,
};
use portfolio_core::types::{ExperienceEntry, Project, Skill};
use portfolio_core::{
    ApiError, ApiResult, ContactMessage, DataSource, PageState, ProfileApi, ProfileData, Timer,
    demo, load_profile,
};

const PROJECTS: &str = r#"[
    {"id": 9, "title": "Ledger", "slug": "ledger", "description": "Bookkeeping",
     "tech": [{"id": 3, "name": "Rust", "slug": "rust", "proficiency": 90, "icon": ""}],
     "image": "/media/ledger.png", "live_url": "https://ledger.dev", "repo_url": "",
     "featured": true, "created_at": "2025-03-01T09:00:00Z"},
    {"id": 4, "title": "Atlas", "description": "Maps", "tech": [],
     "image": null, "live_url": null, "repo_url": "https://github.com/me/atlas",
     "featured": false, "created_at": "2024-07-11T09:00:00Z"}
]"#;

const SKILLS: &str = r#"[
    {"id": 3, "name": "Rust", "slug": "rust", "proficiency": 90, "icon": ""},
    {"id": 5, "name": "PostgreSQL", "slug": "postgresql", "proficiency": 70, "icon": ""}
]"#;

const EXPERIENCES: &str = r#"[
    {"id": 2, "title": "Staff Engineer", "company": "Orbit", "start_date": "2023-02-01",
     "end_date": null, "description": "Platform team.", "order": 2}
]"#;

fn down(endpoint: &str) -> ApiError {
    ApiError::Status {
        endpoint: endpoint.into(),
        status: 503,
    }
}

/// In-memory backend. Each collection is a canned reply.
struct FakeApi {
    projects: ApiResult<Vec<Project>>,
    skills: ApiResult<Vec<Skill>>,
    experiences: ApiResult<Vec<ExperienceEntry>>,
    contact_replies: RefCell<Vec<ApiResult<()>>>,
    contact_gate: RefCell<Option<oneshot::Receiver<()>>>,
    sent: RefCell<Vec<ContactMessage>>,
}

impl FakeApi {
    fn live() -> Self {
        Self {
            projects: decode_json("/api/projects/", PROJECTS),
            skills: decode_json("/api/skills/", SKILLS),
            experiences: decode_json("/api/experiences/", EXPERIENCES),
            contact_replies: RefCell::new(Vec::new()),
            contact_gate: RefCell::new(None),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self {
            projects: Ok(vec![]),
            skills: Ok(vec![]),
            experiences: Ok(vec![]),
            ..Self::live()
        }
    }

    /// Replies for successive contact posts; missing replies succeed.
    fn with_contact_replies(self, mut replies: Vec<ApiResult<()>>) -> Self {
        replies.reverse();
        *self.contact_replies.borrow_mut() = replies;
        self
    }

    fn contact_calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl ProfileApi for FakeApi {
    async fn projects(&self) -> ApiResult<Vec<Project>> {
        self.projects.clone()
    }

    async fn skills(&self) -> ApiResult<Vec<Skill>> {
        self.skills.clone()
    }

    async fn experiences(&self) -> ApiResult<Vec<ExperienceEntry>> {
        self.experiences.clone()
    }

    async fn send_contact(&self, message: &ContactMessage) -> ApiResult<()> {
        self.sent.borrow_mut().push(message.clone());
        let gate = self.contact_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.contact_replies.borrow_mut().pop().unwrap_or(Ok(()))
    }
}

/// Records requested delays; optionally holds the first sleep until released.
#[derive(Default)]
struct FakeTimer {
    delays: RefCell<Vec<Duration>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    woke: Cell<usize>,
}

impl Timer for FakeTimer {
    async fn sleep(&self, delay: Duration) {
        self.delays.borrow_mut().push(delay);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.woke.set(self.woke.get() + 1);
    }
}

/// A form that disappears after its first use, like a signal whose owner
/// was disposed while the request was out.
struct VanishingForm(RefCell<Option<ContactForm>>);

impl FormHandle for VanishingForm {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.0.borrow_mut().take().map(|mut form| f(&mut form))
    }
}

fn filled_form() -> RefCell<ContactForm> {
    let mut form = ContactForm::new();
    form.edit(ContactField::Name, "Ada Lovelace");
    form.edit(ContactField::Email, "ada@example.com");
    form.edit(ContactField::Subject, "Engine");
    form.edit(ContactField::Message, "Shall we compute?");
    RefCell::new(form)
}

// ============================================================================
// Loader
// ============================================================================

#[tokio::test]
async fn live_collections_are_kept_verbatim() {
    let api = FakeApi::live();
    let data = load_profile(&api).await;

    assert_eq!(data.source, DataSource::Live);
    assert_eq!(data.projects, api.projects.clone().unwrap());
    assert_eq!(data.skills, api.skills.clone().unwrap());
    assert_eq!(data.experience, api.experiences.clone().unwrap());
    // order from the backend is preserved
    assert_eq!(data.projects[0].title, "Ledger");
    assert_eq!(data.projects[1].title, "Atlas");
}

#[tokio::test]
async fn any_failed_endpoint_means_full_demo() {
    for failing in ["/api/projects/", "/api/skills/", "/api/experiences/"] {
        let mut api = FakeApi::live();
        match failing {
            "/api/projects/" => api.projects = Err(down(failing)),
            "/api/skills/" => api.skills = Err(down(failing)),
            _ => api.experiences = Err(down(failing)),
        }

        let data = load_profile(&api).await;

        assert_eq!(data, ProfileData::demo(), "failing {failing}");
        assert!(data.is_demo());
    }
}

#[tokio::test]
async fn malformed_body_means_full_demo() {
    let mut api = FakeApi::live();
    api.skills = decode_json("/api/skills/", r#"[{"id": 1, "name": "Rust"}]"#);
    assert!(api.skills.is_err());

    let data = load_profile(&api).await;

    assert_eq!(data.projects, demo::projects());
    assert_eq!(data.skills, demo::skills());
    assert_eq!(data.experience, demo::experience());
}

#[tokio::test]
async fn empty_collections_stay_live_and_empty() {
    let data = load_profile(&FakeApi::empty()).await;

    assert_eq!(data.source, DataSource::Live);
    assert!(data.projects.is_empty());
    assert!(data.skills.is_empty());
    assert!(data.experience.is_empty());
}

#[tokio::test]
async fn out_of_range_proficiency_stays_live() {
    let mut api = FakeApi::live();
    api.skills = decode_json(
        "/api/skills/",
        r#"[{"id": 8, "name": "Rust", "slug": "rust", "proficiency": 300, "icon": ""}]"#,
    );

    let data = load_profile(&api).await;

    assert_eq!(data.source, DataSource::Live);
    assert_eq!(data.projects, api.projects.clone().unwrap());
    assert_eq!(data.skills[0].proficiency, 300);
    assert_eq!(data.skills[0].percent(), 100);
}

#[tokio::test]
async fn page_state_leaves_loading_after_fallback() {
    let mut api = FakeApi::live();
    api.projects = Err(ApiError::Network {
        endpoint: "/api/projects/".into(),
        message: "Failed to fetch".into(),
    });

    let mut state = PageState::default();
    assert!(state.is_loading());
    state.settle(load_profile(&api).await);

    assert!(!state.is_loading());
    assert!(state.is_demo());
}

// ============================================================================
// Contact form
// ============================================================================

#[tokio::test]
async fn second_submit_while_sending_is_ignored() {
    let (release, gate) = oneshot::channel();
    let api = FakeApi::live();
    *api.contact_gate.borrow_mut() = Some(gate);
    let timer = FakeTimer::default();
    let form = filled_form();

    let (form, api, timer) = (&form, &api, &timer);

    let first = contact::submit(form, api, timer);
    let second = async move {
        // first submit is parked on the gate
        assert_eq!(form.borrow().status(), SubmissionStatus::Sending);
        let outcome = contact::submit(form, api, timer).await;
        assert_eq!(api.contact_calls(), 1);
        let _ = release.send(());
        outcome
    };

    let (first, second) = futures::join!(first, second);

    assert_eq!(first, SubmitOutcome::Sent);
    assert_eq!(second, SubmitOutcome::Skipped);
    assert_eq!(api.contact_calls(), 1);
}

#[tokio::test]
async fn success_clears_fields_and_resets_after_delay() {
    let (wake, gate) = oneshot::channel();
    let api = FakeApi::live();
    let timer = FakeTimer::default();
    *timer.gate.borrow_mut() = Some(gate);
    let form = filled_form();
    let expected_body = form.borrow().fields().clone();

    let (form, timer) = (&form, &timer);

    let submit = contact::submit(form, &api, timer);
    let observe = async move {
        // parked in the reset delay
        assert_eq!(form.borrow().status(), SubmissionStatus::Success);
        assert_eq!(form.borrow().fields(), &ContactMessage::default());
        assert_eq!(timer.woke.get(), 0);
        let _ = wake.send(());
    };

    let (outcome, ()) = futures::join!(submit, observe);

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(*timer.delays.borrow(), vec![Duration::from_secs(3)]);
    assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
    assert_eq!(api.sent.borrow()[0], expected_body);
}

#[tokio::test]
async fn rejected_submit_keeps_values() {
    let api = FakeApi::live().with_contact_replies(vec![Err(ApiError::Status {
        endpoint: "/contact/".into(),
        status: 400,
    })]);
    let timer = FakeTimer::default();
    let form = filled_form();
    let before = form.borrow().fields().clone();

    let outcome = contact::submit(&form, &api, &timer).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(form.borrow().status(), SubmissionStatus::Error);
    assert_eq!(form.borrow().fields(), &before);
    assert!(timer.delays.borrow().is_empty());
}

#[tokio::test]
async fn retry_from_error_posts_again() {
    let api = FakeApi::live().with_contact_replies(vec![
        Err(ApiError::Network {
            endpoint: "/contact/".into(),
            message: "offline".into(),
        }),
        Ok(()),
    ]);
    let timer = FakeTimer::default();
    let form = filled_form();

    let first = contact::submit(&form, &api, &timer).await;
    let second = contact::submit(&form, &api, &timer).await;

    assert!(matches!(first, SubmitOutcome::Failed(_)));
    assert_eq!(second, SubmitOutcome::Sent);
    assert_eq!(api.contact_calls(), 2);
    let sent = api.sent.borrow();
    assert_eq!(sent[0], sent[1]);
    assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn response_after_form_dropped_is_skipped() {
    let api = FakeApi::live();
    let timer = FakeTimer::default();
    let form = VanishingForm(RefCell::new(Some(filled_form().into_inner())));

    let outcome = contact::submit(&form, &api, &timer).await;

    // the post went out, but there was nothing left to update
    assert_eq!(outcome, SubmitOutcome::Skipped);
    assert_eq!(api.contact_calls(), 1);
    assert!(timer.delays.borrow().is_empty());
}
