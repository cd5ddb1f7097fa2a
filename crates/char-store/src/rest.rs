//! PostgREST (Supabase) fetcher.
//!
//! One aggregate row per project is read from a view with
//! `GET /rest/v1/{view}?project_id=eq.{id}&select=*`.

use std::time::Duration;

use char_config::StoreConfig;
use char_core::entities::{ProjectAggregate, ProjectListing};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::http::check_response;
use crate::retry::{RetryConfig, with_backoff};

/// Columns needed for the project list.
const LIST_COLUMNS: &str = "project_id,project_name,location,start_date,feedstock_type";

/// HTTP client for the project store.
pub struct RestFetcher {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    schema: Option<String>,
    aggregate_view: String,
    list_view: String,
    retry: RetryConfig,
}

impl RestFetcher {
    /// Build a fetcher from the `[store]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] when the URL or API key is
    /// missing, or [`StoreError::Http`] if the client fails to build.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        if !config.is_configured() {
            return Err(StoreError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("charview/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            api_key: config.api_key.trim().to_string(),
            schema: config.schema().map(str::to_string),
            aggregate_view: config.aggregate_view.clone(),
            list_view: config.list_view.clone(),
            retry: RetryConfig::from_store(config),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the aggregate for `project_id`. `Ok(None)` when the view has no row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails after retries, the store
    /// returns a non-success status, the body cannot be parsed, or more than
    /// one row comes back.
    pub async fn fetch_project(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectAggregate>, StoreError> {
        let url = self.aggregate_url(project_id);
        tracing::debug!(project_id, %url, "fetching project aggregate");
        let rows: Vec<ProjectAggregate> = self.get_rows(&url).await?;
        at_most_one(rows, project_id)
    }

    /// Fetch the project list view.
    ///
    /// # Errors
    ///
    /// Same conditions as [`fetch_project`](Self::fetch_project), minus the
    /// row-count check.
    pub async fn list_projects(&self) -> Result<Vec<ProjectListing>, StoreError> {
        let url = self.list_url();
        tracing::debug!(%url, "fetching project list");
        self.get_rows(&url).await
    }

    fn aggregate_url(&self, project_id: &str) -> String {
        format!(
            "{}/rest/v1/{}?project_id=eq.{}&select=*",
            self.base_url,
            self.aggregate_view,
            urlencoding::encode(project_id)
        )
    }

    fn list_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select={LIST_COLUMNS}&order=project_name.asc",
            self.base_url, self.list_view
        )
    }

    async fn get_rows<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, StoreError> {
        let body = with_backoff(&self.retry, url, move || async move {
            let mut request = self
                .http
                .get(url)
                .header("apikey", &self.api_key)
                .header(AUTHORIZATION, format!("Bearer {}", self.api_key));
            if let Some(schema) = &self.schema {
                request = request.header("Accept-Profile", schema);
            }
            let resp = check_response(request.send().await?).await?;
            Ok(resp.text().await?)
        })
        .await?;
        parse_rows(&body)
    }
}

fn parse_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))
}

/// Enforce the one-row-per-project contract of the aggregate view.
fn at_most_one(
    mut rows: Vec<ProjectAggregate>,
    project_id: &str,
) -> Result<Option<ProjectAggregate>, StoreError> {
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        n => Err(StoreError::AmbiguousResult {
            project_id: project_id.to_string(),
            rows: n,
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ROWS: &str = r#"[
        {
            "project_id": "proj-042",
            "project_name": "Rift Valley Char",
            "feedstock_type": "maize stover",
            "topic_summaries": null,
            "subtopics": [
                {
                    "subtopic_id": 1,
                    "summary": {"topic": "Climate Science", "subtopic": "Permanence"},
                    "risk_factors": [
                        {"id": 11, "name": "Durability", "points": [
                            {"id": 111, "category": "strengths", "explanation": "Stable."}
                        ]}
                    ]
                }
            ],
            "main_insights": []
        }
    ]"#;

    fn fetcher(schema: &str) -> RestFetcher {
        RestFetcher::new(&StoreConfig {
            url: "https://abcd.supabase.co/".into(),
            api_key: "anon".into(),
            schema: schema.into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn new_requires_url_and_key() {
        let err = RestFetcher::new(&StoreConfig::default()).err().unwrap();
        assert!(matches!(err, StoreError::NotConfigured));
    }

    #[test]
    fn aggregate_url_filters_by_encoded_id() {
        let url = fetcher("").aggregate_url("proj 42&x");
        assert_eq!(
            url,
            "https://abcd.supabase.co/rest/v1/project_aggregates?project_id=eq.proj%2042%26x&select=*"
        );
    }

    #[test]
    fn list_url_selects_card_columns() {
        let url = fetcher("").list_url();
        assert!(url.starts_with("https://abcd.supabase.co/rest/v1/projects?select=project_id,"));
        assert!(url.ends_with("&order=project_name.asc"));
    }

    #[test]
    fn schema_is_kept_for_accept_profile() {
        assert_eq!(fetcher("analytics").schema.as_deref(), Some("analytics"));
        assert_eq!(fetcher(" ").schema, None);
    }

    #[test]
    fn parses_aggregate_rows() {
        let rows: Vec<ProjectAggregate> = parse_rows(ROWS).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].project_id, "proj-042");
        assert!(rows[0].topic_summaries.is_empty());
        assert_eq!(rows[0].subtopics[0].risk_factors[0].points.len(), 1);
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = parse_rows::<ProjectAggregate>("{\"not\": \"a list\"}").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn zero_rows_is_none() {
        assert_eq!(at_most_one(Vec::new(), "p").unwrap(), None);
    }

    #[test]
    fn one_row_is_some() {
        let rows: Vec<ProjectAggregate> = parse_rows(ROWS).unwrap();
        let found = at_most_one(rows, "proj-042").unwrap().unwrap();
        assert_eq!(found.project_name.as_deref(), Some("Rift Valley Char"));
    }

    #[test]
    fn two_rows_are_ambiguous() {
        let row = ProjectAggregate {
            project_id: "p".into(),
            ..Default::default()
        };
        let err = at_most_one(vec![row.clone(), row], "p").unwrap_err();
        assert!(matches!(err, StoreError::AmbiguousResult { rows: 2, .. }));
    }
}
