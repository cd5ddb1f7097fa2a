//! # char-core
//!
//! Core types and error types for Charview.
//!
//! This crate provides the foundational types shared across all Charview crates:
//! - Raw entity structs for the per-project aggregate served by the store
//! - The topic table and point-category enums
//! - Cross-cutting error types
//! - Serde helpers for tolerant decoding of store records

pub mod entities;
pub mod enums;
pub mod errors;
pub mod serde_helpers;
