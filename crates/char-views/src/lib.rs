//! # char-views
//!
//! The project-data mapping pipeline for Charview.
//!
//! Turns one [`ProjectAggregate`](char_core::entities::ProjectAggregate) into
//! the view-models the pages render:
//!
//! ```text
//! aggregate ─► topic ─► subtopic ×N ─► risk factor ×N ─► point ×N   = TopicData
//!           └► background, insights                                = overview
//! ```
//!
//! Every mapper is a pure, total function: missing or malformed input
//! degrades to placeholder content and never to an error. Nothing is cached;
//! view-models are built per request from an aggregate fetched once.
//!
//! Also here: the project list (search + pagination), sidebar navigation
//! derived from a mapped topic, and page assembly.

pub mod ids;
pub mod listing;
pub mod mapping;
pub mod models;
pub mod navigation;
pub mod pages;

pub use mapping::{
    map_background, map_insights, map_point, map_project_to_topic_data, map_risk_factor,
    map_subtopic, map_topic,
};
