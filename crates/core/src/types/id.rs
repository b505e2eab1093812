//! Short record identifiers.

use core::fmt;

use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};

/// A short, URL-safe record identifier.
///
/// Ids are random strings over the alphanumeric alphabet (62 characters), so
/// they can appear in URLs and file names without escaping. Uniqueness is
/// probabilistic: at 10 characters there are 62^10 (about 8e17) possible ids,
/// far beyond the collection caps in this system.
///
/// ## Examples
///
/// ```
/// use brickline_core::RecordId;
///
/// let id = RecordId::generate(10);
/// assert_eq!(id.as_str().len(), 10);
/// assert!(id.as_str().chars().all(char::is_alphanumeric));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh random id of `len` characters.
    #[must_use]
    pub fn generate(len: usize) -> Self {
        Self(Alphanumeric.sample_string(&mut rand::rng(), len))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
