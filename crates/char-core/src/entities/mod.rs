//! Raw entity structs as returned by the hosted project store.
//!
//! One [`ProjectAggregate`] is a denormalized record per project: top-level
//! metadata plus nested topic summaries, subtopics, and insights. The
//! structs are read-only inputs to the mapping pipeline in `char-views`.
//! Every optional field is `Option`, every list defaults to empty (also when
//! the store sends `null`), and a field of the wrong JSON type decodes as
//! missing instead of failing the record. See [`crate::serde_helpers`].
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod insight;
mod project;
mod raw_id;
mod subtopic;
mod topic_summary;

pub use insight::InsightRaw;
pub use project::{OneOrMany, ProjectAggregate, ProjectListing};
pub use raw_id::RawId;
pub use subtopic::{PointRaw, RiskFactorRaw, SubtopicRaw, SubtopicSummary};
pub use topic_summary::TopicSummary;
