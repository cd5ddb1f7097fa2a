//! Mappers from raw aggregate records to view-models.
//!
//! One file per level of the tree. Each mapper takes the raw record by
//! reference plus an [`IdScope`](crate::ids::IdScope) for fallback keys, and
//! never fails.

mod background;
mod insights;
mod point;
mod risk_factor;
mod subtopic;
mod topic;

pub use background::{capitalize, format_start_date, map_background};
pub use insights::map_insights;
pub use point::map_point;
pub use risk_factor::{dominant_category, map_risk_factor};
pub use subtopic::map_subtopic;
pub use topic::{find_topic_summary, map_project_to_topic_data, map_topic, select_subtopics};

pub const NO_DETAILS: &str = "No details provided";
pub const UNNAMED_RISK_FACTOR: &str = "Unnamed Risk Factor";
pub const UNNAMED_SUBTOPIC: &str = "Unnamed Subtopic";
pub const NO_SUMMARY: &str = "No summary available";
pub const UNNAMED_PROJECT: &str = "Unnamed Project";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_LOCATION: &str = "Location not specified";
pub const NO_START_DATE: &str = "Start date not specified";
pub const GENERAL_TOPIC: &str = "General";
