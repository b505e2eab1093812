//! Core types for Brickline.
//!
//! Wire and persisted shapes for the three document collections. Field names
//! serialize in camelCase to match what the storefront frontend sends and
//! what operators see in the data files.

pub mod id;
pub mod quote;
pub mod review;
pub mod settings;

pub use id::RecordId;
pub use quote::{QuoteInput, QuoteRecord, QuotesDocument};
pub use review::{ReviewInput, ReviewRecord, ReviewsDocument};
pub use settings::{FaqEntry, SettingsDocument, ShopInfo};
