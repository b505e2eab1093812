//! Customer reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// A published customer review.
///
/// Reviews are immutable once created; the only way one leaves the
/// collection is eviction past the retention cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: RecordId,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewRecord {
    /// Maximum reviewer name length in characters.
    pub const MAX_NAME: usize = 30;
    /// Lowest accepted star rating.
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted star rating.
    pub const MAX_RATING: u8 = 5;
    /// Maximum comment length in characters.
    pub const MAX_COMMENT: usize = 120;
}

/// Validated review fields, before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInput {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

/// The persisted reviews document: newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsDocument {
    pub reviews: Vec<ReviewRecord>,
}
