//! Data-quality checks on a fetched aggregate.
//!
//! The mappers tolerate every gap reported here, so issues are advisory:
//! they are logged and shown by `charview validate`, never used to reject a
//! record.

use std::collections::HashSet;
use std::fmt;

use char_core::entities::{ProjectAggregate, RawId};
use char_core::enums::{PointCategory, Topic};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    BlankProjectId,
    BlankProjectName,
    MissingId,
    NonNumericId,
    UnmatchedTopic,
    UnknownCategory,
    UnknownInsightType,
    DuplicateTopicSummary,
}

impl IssueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlankProjectId => "blank_project_id",
            Self::BlankProjectName => "blank_project_name",
            Self::MissingId => "missing_id",
            Self::NonNumericId => "non_numeric_id",
            Self::UnmatchedTopic => "unmatched_topic",
            Self::UnknownCategory => "unknown_category",
            Self::UnknownInsightType => "unknown_insight_type",
            Self::DuplicateTopicSummary => "duplicate_topic_summary",
        }
    }
}

/// One problem found in an aggregate. `path` locates it, e.g.
/// `subtopics[2].risk_factors[0].points[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataIssue {
    pub kind: IssueKind,
    pub path: String,
    pub message: String,
}

impl DataIssue {
    fn new(kind: IssueKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[must_use]
pub fn check_aggregate(aggregate: &ProjectAggregate) -> Vec<DataIssue> {
    let mut issues = Vec::new();

    if aggregate.project_id.trim().is_empty() {
        issues.push(DataIssue::new(
            IssueKind::BlankProjectId,
            "project_id",
            "project id is blank",
        ));
    }
    if aggregate
        .project_name
        .as_deref()
        .is_none_or(|name| name.trim().is_empty())
    {
        issues.push(DataIssue::new(
            IssueKind::BlankProjectName,
            "project_name",
            "project name is missing",
        ));
    }

    check_topic_summaries(aggregate, &mut issues);
    check_subtopics(aggregate, &mut issues);
    check_insights(aggregate, &mut issues);

    for issue in &issues {
        tracing::debug!(project_id = %aggregate.project_id, %issue, "data issue");
    }
    issues
}

fn check_topic_summaries(aggregate: &ProjectAggregate, issues: &mut Vec<DataIssue>) {
    let mut seen = HashSet::new();
    for (i, summary) in aggregate.topic_summaries.iter().enumerate() {
        let path = format!("topic_summaries[{i}]");
        let label = summary.topic.as_deref().unwrap_or_default();
        match Topic::ALL.into_iter().find(|t| t.matches_summary(label)) {
            Some(topic) if !seen.insert(topic) => issues.push(DataIssue::new(
                IssueKind::DuplicateTopicSummary,
                path,
                format!("second summary for '{}'; only the first is shown", topic.summary_label()),
            )),
            Some(_) => {}
            None => issues.push(DataIssue::new(
                IssueKind::UnmatchedTopic,
                path,
                format!("topic '{label}' matches no summary label"),
            )),
        }
    }
}

fn check_subtopics(aggregate: &ProjectAggregate, issues: &mut Vec<DataIssue>) {
    for (s, subtopic) in aggregate.subtopics.iter().enumerate() {
        let path = format!("subtopics[{s}]");
        if blank_id(subtopic.subtopic_id.as_ref()) {
            issues.push(DataIssue::new(
                IssueKind::MissingId,
                format!("{path}.subtopic_id"),
                "subtopic id is missing",
            ));
        }

        let label = subtopic.topic_label().unwrap_or_default();
        if !Topic::ALL.into_iter().any(|t| t.matches_subtopic(label)) {
            let hint = Topic::ALL
                .into_iter()
                .find(|t| t.matches_summary(label))
                .map(|t| format!(" (did you mean '{}'?)", t.subtopic_label()))
                .unwrap_or_default();
            issues.push(DataIssue::new(
                IssueKind::UnmatchedTopic,
                format!("{path}.summary.topic"),
                format!("topic '{label}' matches no subtopic label{hint}; subtopic is never shown"),
            ));
        }

        for (r, factor) in subtopic.risk_factors.iter().enumerate() {
            let factor_path = format!("{path}.risk_factors[{r}]");
            check_numeric_id(factor.id.as_ref(), &factor_path, issues);

            for (p, point) in factor.points.iter().enumerate() {
                let point_path = format!("{factor_path}.points[{p}]");
                check_numeric_id(point.id.as_ref(), &point_path, issues);

                let category = point.category.as_deref().unwrap_or_default();
                if PointCategory::parse(category).is_none() {
                    issues.push(DataIssue::new(
                        IssueKind::UnknownCategory,
                        format!("{point_path}.category"),
                        format!("category '{category}' is not recognized; shown as mixed"),
                    ));
                }
            }
        }
    }
}

fn check_insights(aggregate: &ProjectAggregate, issues: &mut Vec<DataIssue>) {
    for (i, insight) in aggregate.main_insights.iter().enumerate() {
        let kind = insight.insight_type.as_deref().unwrap_or_default();
        if PointCategory::from_insight_type(kind).is_none() {
            issues.push(DataIssue::new(
                IssueKind::UnknownInsightType,
                format!("main_insights[{i}].insight_type"),
                format!("insight type '{kind}' is not recognized; insight is dropped"),
            ));
        }
    }
}

fn check_numeric_id(id: Option<&RawId>, path: &str, issues: &mut Vec<DataIssue>) {
    if blank_id(id) {
        issues.push(DataIssue::new(
            IssueKind::MissingId,
            format!("{path}.id"),
            "id is missing; a positional key is used",
        ));
    } else if id.and_then(RawId::as_number).is_none() {
        issues.push(DataIssue::new(
            IssueKind::NonNumericId,
            format!("{path}.id"),
            "id is not numeric; a hashed key is used",
        ));
    }
}

fn blank_id(id: Option<&RawId>) -> bool {
    id.is_none_or(RawId::is_blank)
}
