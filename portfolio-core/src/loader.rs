//! All-or-nothing profile loading with demo fallback.

use futures::try_join;
use tracing::{debug, info, warn};

use crate::api::ProfileApi;
use crate::demo;
use crate::error::PortfolioError;
use crate::types::{ExperienceEntry, Project, Skill};

/// Where the displayed collections came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Parsed backend responses
    #[default]
    Live,
    /// The fixed sample dataset
    Demo,
}

/// The three display collections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileData {
    /// Project cards
    pub projects: Vec<Project>,
    /// Skill bars
    pub skills: Vec<Skill>,
    /// Timeline entries
    pub experience: Vec<ExperienceEntry>,
    /// Live or demo
    pub source: DataSource,
}

impl ProfileData {
    /// The sample dataset, flagged as demo.
    pub fn demo() -> Self {
        Self {
            projects: demo::projects(),
            skills: demo::skills(),
            experience: demo::experience(),
            source: DataSource::Demo,
        }
    }

    /// True when showing sample data.
    pub fn is_demo(&self) -> bool {
        self.source == DataSource::Demo
    }
}

/// Page-level data state: loading until the first (and only) fetch settles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    /// Requests in flight
    #[default]
    Loading,
    /// Collections ready, immutable from here on
    Ready(ProfileData),
}

impl PageState {
    /// Loading flag for spinners.
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    /// Demo-mode flag; false while loading.
    pub fn is_demo(&self) -> bool {
        matches!(self, PageState::Ready(data) if data.is_demo())
    }

    /// Collections, if loaded.
    pub fn data(&self) -> Option<&ProfileData> {
        match self {
            PageState::Ready(data) => Some(data),
            PageState::Loading => None,
        }
    }

    /// Leave `Loading`. Later calls are ignored: there is no refresh.
    pub fn settle(&mut self, data: ProfileData) {
        if self.is_loading() {
            *self = PageState::Ready(data);
        }
    }
}

/// Fetch all three collections concurrently.
///
/// Short-circuits on the first failure; partial results are dropped.
pub async fn fetch_profile<A: ProfileApi>(api: &A) -> Result<ProfileData, PortfolioError> {
    debug!("requesting projects, skills and experiences");
    let (projects, skills, experience) =
        try_join!(api.projects(), api.skills(), api.experiences()).map_err(PortfolioError::Load)?;

    Ok(ProfileData {
        projects,
        skills,
        experience,
        source: DataSource::Live,
    })
}

/// Fetch the profile, substituting the demo dataset on any failure.
pub async fn load_profile<A: ProfileApi>(api: &A) -> ProfileData {
    match fetch_profile(api).await {
        Ok(data) => {
            info!(
                projects = data.projects.len(),
                skills = data.skills.len(),
                experience = data.experience.len(),
                "profile loaded"
            );
            data
        }
        Err(err) => {
            warn!("{err}; switching to demo mode");
            ProfileData::demo()
        }
    }
}
