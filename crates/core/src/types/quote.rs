//! Quote requests submitted through the contact flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// A customer's request for a price quote.
///
/// `name` and `requirement` are optional free text and may be empty; `phone`
/// is the callback number the shop uses to follow up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub id: RecordId,
    pub topic: String,
    pub name: String,
    pub phone: String,
    pub requirement: String,
    pub created_at: DateTime<Utc>,
}

impl QuoteRecord {
    /// Maximum topic length in characters.
    pub const MAX_TOPIC: usize = 60;
    /// Maximum customer name length in characters.
    pub const MAX_NAME: usize = 40;
    /// Minimum phone digit count.
    pub const MIN_PHONE_DIGITS: usize = 10;
    /// Maximum phone digit count.
    pub const MAX_PHONE_DIGITS: usize = 15;
    /// Maximum requirement length in characters.
    pub const MAX_REQUIREMENT: usize = 200;
}

/// Validated quote fields, before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteInput {
    pub topic: String,
    pub name: String,
    pub phone: String,
    pub requirement: String,
}

/// The persisted quotes document: newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotesDocument {
    pub quotes: Vec<QuoteRecord>,
}
