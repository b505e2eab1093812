//! Brickline Core - Shared types and validation.
//!
//! This crate provides the domain types and input validation used by the
//! Brickline server:
//!
//! - `server` - JSON API and static storefront serving
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP.
//! Everything client-submitted passes through [`sanitize`] before it is
//! persisted or echoed back.
//!
//! # Modules
//!
//! - [`types`] - Record shapes for settings, reviews, and quote requests
//! - [`sanitize`] - Per-record sanitizers and validators

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod sanitize;
pub mod types;

pub use sanitize::{ValidationError, sanitize_settings, validate_quote, validate_review};
pub use types::*;
