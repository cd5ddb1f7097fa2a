//! # char-store
//!
//! Where project aggregates come from.
//!
//! - [`RestFetcher`]: a PostgREST (Supabase) view holding one aggregate row
//!   per project, with retry on transient failures
//! - [`FixtureFetcher`]: a directory of `<project_id>.json` files for
//!   offline use and tests
//!
//! Both sit behind [`AggregateFetcher`]; [`Source`] picks one from the
//! loaded config. [`validate::check_aggregate`] reports data-quality issues
//! in a fetched record.

pub mod fixtures;
pub mod rest;
pub mod retry;
pub mod validate;

mod error;
mod http;

use std::future::Future;

use char_config::CharviewConfig;
use char_core::entities::{ProjectAggregate, ProjectListing};
use char_core::errors::CoreError;

pub use error::StoreError;
pub use fixtures::FixtureFetcher;
pub use rest::RestFetcher;
pub use retry::RetryConfig;
pub use validate::{DataIssue, IssueKind, check_aggregate};

/// Read access to project aggregates.
pub trait AggregateFetcher: Send + Sync {
    /// The aggregate for `project_id`, or `None` if the project does not exist.
    fn fetch_project(
        &self,
        project_id: &str,
    ) -> impl Future<Output = Result<Option<ProjectAggregate>, StoreError>> + Send;

    /// Listing rows for every project.
    fn list_projects(&self) -> impl Future<Output = Result<Vec<ProjectListing>, StoreError>> + Send;

    /// Like [`fetch_project`](Self::fetch_project), but a missing project is an error.
    fn require_project(
        &self,
        project_id: &str,
    ) -> impl Future<Output = Result<ProjectAggregate, StoreError>> + Send {
        async move {
            let found = self.fetch_project(project_id).await?;
            found.ok_or_else(|| {
                StoreError::from(CoreError::NotFound {
                    entity_type: "project".into(),
                    id: project_id.to_string(),
                })
            })
        }
    }
}

impl AggregateFetcher for RestFetcher {
    fn fetch_project(
        &self,
        project_id: &str,
    ) -> impl Future<Output = Result<Option<ProjectAggregate>, StoreError>> + Send {
        Self::fetch_project(self, project_id)
    }

    fn list_projects(&self) -> impl Future<Output = Result<Vec<ProjectListing>, StoreError>> + Send {
        Self::list_projects(self)
    }
}

impl AggregateFetcher for FixtureFetcher {
    fn fetch_project(
        &self,
        project_id: &str,
    ) -> impl Future<Output = Result<Option<ProjectAggregate>, StoreError>> + Send {
        Self::fetch_project(self, project_id)
    }

    fn list_projects(&self) -> impl Future<Output = Result<Vec<ProjectListing>, StoreError>> + Send {
        Self::list_projects(self)
    }
}

/// The configured project source.
pub enum Source {
    Rest(RestFetcher),
    Fixtures(FixtureFetcher),
}

impl Source {
    /// The store when `[store]` is configured, else the fixture directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] when neither is set, or an HTTP
    /// client build error.
    pub fn from_config(config: &CharviewConfig) -> Result<Self, StoreError> {
        if config.store.is_configured() {
            return Ok(Self::Rest(RestFetcher::new(&config.store)?));
        }
        match config.fixtures.path() {
            Some(dir) => Ok(Self::Fixtures(FixtureFetcher::new(dir))),
            None => Err(StoreError::NotConfigured),
        }
    }

    /// Human-readable origin, for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Rest(rest) => format!("store {}", rest.base_url()),
            Self::Fixtures(fixtures) => format!("fixtures {}", fixtures.dir().display()),
        }
    }
}

impl AggregateFetcher for Source {
    async fn fetch_project(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectAggregate>, StoreError> {
        match self {
            Self::Rest(rest) => rest.fetch_project(project_id).await,
            Self::Fixtures(fixtures) => fixtures.fetch_project(project_id).await,
        }
    }

    async fn list_projects(&self) -> Result<Vec<ProjectListing>, StoreError> {
        match self {
            Self::Rest(rest) => rest.list_projects().await,
            Self::Fixtures(fixtures) => fixtures.list_projects().await,
        }
    }
}
