//! Shop settings: FAQ entries and contact details.
//!
//! The settings document is a single record per deployment. Updates replace
//! the whole document; there is no partial merge.

use serde::{Deserialize, Serialize};

/// One question/answer pair shown on the FAQ page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    // The admin form posts the short key names; documents persist the long ones.
    #[serde(alias = "q")]
    pub question: String,
    #[serde(alias = "a")]
    pub answer: String,
}

impl FaqEntry {
    /// Maximum question length in characters.
    pub const MAX_QUESTION: usize = 200;
    /// Maximum answer length in characters.
    pub const MAX_ANSWER: usize = 300;
}

/// Shop contact details shown in the storefront header and footer.
///
/// Every field defaults to the empty string; the frontend hides what is
/// not filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    pub hours: String,
}

impl ShopInfo {
    /// Maximum shop name length in characters.
    pub const MAX_NAME: usize = 80;
    /// Maximum address length in characters.
    pub const MAX_ADDRESS: usize = 200;
    /// Maximum phone length in characters.
    pub const MAX_PHONE: usize = 25;
    /// Maximum WhatsApp number length in characters.
    pub const MAX_WHATSAPP: usize = 25;
    /// Maximum opening-hours length in characters.
    pub const MAX_HOURS: usize = 200;
}

/// The whole settings document, replaced atomically on every update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsDocument {
    pub faqs: Vec<FaqEntry>,
    pub shop_info: ShopInfo,
}
