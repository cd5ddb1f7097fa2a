//! Stable view-model keys.
//!
//! Lists in the rendering layer need a key per entity. Numeric raw ids are
//! used as-is. Anything else gets a fallback derived from a SHA-256 of the raw
//! id text or, when the id is absent, of the entity's position in the
//! aggregate ([`IdScope`]). Both are identical across renders of the same
//! record. Missing and non-numeric ids are also reported as data-quality
//! issues at the store boundary.

use std::fmt;

use char_core::entities::RawId;
use sha2::{Digest, Sha256};

/// Keys stay below 2^53 so JavaScript consumers read them exactly.
const JS_SAFE_MASK: u64 = (1 << 53) - 1;

/// Position of an entity inside an aggregate, e.g.
/// `proj-042/social/0/1/2` for the third point of the second risk factor of
/// the first social subtopic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdScope {
    path: String,
}

impl IdScope {
    #[must_use]
    pub fn root(project_id: &str) -> Self {
        Self {
            path: project_id.trim().to_string(),
        }
    }

    /// Scope one level down.
    #[must_use]
    pub fn child(&self, segment: impl fmt::Display) -> Self {
        Self {
            path: format!("{}/{segment}", self.path),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for IdScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Numeric key for a point or risk factor.
#[must_use]
pub fn numeric_id(raw: Option<&RawId>, scope: &IdScope) -> u64 {
    if let Some(number) = raw.and_then(RawId::as_number) {
        return number;
    }
    match raw.filter(|id| !id.is_blank()) {
        Some(id) => stable_hash(&id.to_string()) & JS_SAFE_MASK,
        None => stable_hash(scope.as_str()) & JS_SAFE_MASK,
    }
}

/// String key for a subtopic.
///
/// The raw id text when present, otherwise `"{prefix}-{hash}"` of the scope.
#[must_use]
pub fn text_id(raw: Option<&RawId>, scope: &IdScope, prefix: &str) -> String {
    match raw.filter(|id| !id.is_blank()) {
        Some(id) => id.to_string(),
        None => format!("{prefix}-{:012x}", stable_hash(scope.as_str()) & 0xffff_ffff_ffff),
    }
}

fn stable_hash(input: &str) -> u64 {
    let digest = Sha256::digest(input.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}
