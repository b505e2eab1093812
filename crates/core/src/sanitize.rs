//! Input sanitization and validation for client-submitted records.
//!
//! Every function here is pure and total over arbitrary JSON input. Length
//! rules count characters, applied after trimming. Validators check fields
//! in a fixed order and report the first violated rule, so a payload that
//! breaks several rules always yields the same error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::{
    FaqEntry, QuoteInput, QuoteRecord, ReviewInput, ReviewRecord, SettingsDocument, ShopInfo,
};

/// Rejection of client input, one variant per rule.
///
/// The display strings are the exact messages returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `faqs` is not an array or `shopInfo` is not an object.
    #[error("Invalid settings payload")]
    InvalidSettingsPayload,
    /// Review name missing, empty after trim, or too long.
    #[error("Valid name required")]
    InvalidName,
    /// Rating is not an exact integer in 1..=5.
    #[error("Rating must be 1-5")]
    InvalidRating,
    /// Review comment missing, empty after trim, or too long.
    #[error("Valid comment required")]
    InvalidComment,
    /// Quote topic missing, empty after trim, or too long.
    #[error("Valid topic required")]
    InvalidTopic,
    /// Phone does not fully match 10-15 digits after trim.
    #[error("Valid phone required (10-15 digits)")]
    InvalidPhone,
    /// Optional quote name exceeds its cap.
    #[error("Name too long")]
    NameTooLong,
    /// Optional quote requirement exceeds its cap.
    #[error("Requirement too long")]
    RequirementTooLong,
}

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[0-9]{{{},{}}}$",
        QuoteRecord::MIN_PHONE_DIGITS,
        QuoteRecord::MAX_PHONE_DIGITS
    ))
    .expect("phone pattern is valid")
});

/// Normalize a raw settings payload into the stored document shape.
///
/// FAQ entries missing a string question or answer are dropped; both the
/// long (`question`/`answer`) and short (`q`/`a`) key names posted by the
/// admin form are accepted. Shop info fields are coerced to trimmed,
/// length-capped strings and default to empty.
///
/// Shape rejection (a non-array `faqs`, a non-object `shopInfo`) is the
/// caller's responsibility; absent fields fall back to defaults here.
#[must_use]
pub fn sanitize_settings(raw: &Value) -> SettingsDocument {
    let faqs = raw
        .get("faqs")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(sanitize_faq).collect())
        .unwrap_or_default();

    let shop = raw.get("shopInfo");
    let shop_info = ShopInfo {
        name: clip(&coerce_str(field(shop, "name")), ShopInfo::MAX_NAME),
        address: clip(&coerce_str(field(shop, "address")), ShopInfo::MAX_ADDRESS),
        phone: clip(&coerce_str(field(shop, "phone")), ShopInfo::MAX_PHONE),
        whatsapp: clip(&coerce_str(field(shop, "whatsapp")), ShopInfo::MAX_WHATSAPP),
        hours: clip(&coerce_str(field(shop, "hours")), ShopInfo::MAX_HOURS),
    };

    SettingsDocument { faqs, shop_info }
}

/// Validate a review submission.
///
/// Checks name, then rating, then comment; the first violated rule is the
/// reported error. Ratings accept JSON numbers and numeric strings, but only
/// exact integers in 1..=5 (so `"5"` passes and `5.5` does not).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidName`], [`ValidationError::InvalidRating`]
/// or [`ValidationError::InvalidComment`].
pub fn validate_review(raw: &Value) -> Result<ReviewInput, ValidationError> {
    let name = text_field(raw, "name");
    if name.is_empty() || name.chars().count() > ReviewRecord::MAX_NAME {
        return Err(ValidationError::InvalidName);
    }

    let rating = parse_rating(raw.get("rating"))
        .filter(|r| (ReviewRecord::MIN_RATING..=ReviewRecord::MAX_RATING).contains(r))
        .ok_or(ValidationError::InvalidRating)?;

    let comment = text_field(raw, "comment");
    if comment.is_empty() || comment.chars().count() > ReviewRecord::MAX_COMMENT {
        return Err(ValidationError::InvalidComment);
    }

    Ok(ReviewInput {
        name,
        rating,
        comment,
    })
}

/// Validate a quote request submission.
///
/// Checks topic, then phone, then the optional name and requirement; the
/// first violated rule is the reported error. The phone must fully match
/// 10-15 ASCII digits after trimming.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTopic`], [`ValidationError::InvalidPhone`],
/// [`ValidationError::NameTooLong`] or [`ValidationError::RequirementTooLong`].
pub fn validate_quote(raw: &Value) -> Result<QuoteInput, ValidationError> {
    let topic = text_field(raw, "topic");
    if topic.is_empty() || topic.chars().count() > QuoteRecord::MAX_TOPIC {
        return Err(ValidationError::InvalidTopic);
    }

    let phone = text_field(raw, "phone");
    if !PHONE_RE.is_match(&phone) {
        return Err(ValidationError::InvalidPhone);
    }

    let name = text_field(raw, "name");
    if name.chars().count() > QuoteRecord::MAX_NAME {
        return Err(ValidationError::NameTooLong);
    }

    let requirement = text_field(raw, "requirement");
    if requirement.chars().count() > QuoteRecord::MAX_REQUIREMENT {
        return Err(ValidationError::RequirementTooLong);
    }

    Ok(QuoteInput {
        topic,
        name,
        phone,
        requirement,
    })
}

fn sanitize_faq(entry: &Value) -> Option<FaqEntry> {
    let question = entry
        .get("question")
        .or_else(|| entry.get("q"))?
        .as_str()?;
    let answer = entry.get("answer").or_else(|| entry.get("a"))?.as_str()?;

    Some(FaqEntry {
        question: clip(question, FaqEntry::MAX_QUESTION),
        answer: clip(answer, FaqEntry::MAX_ANSWER),
    })
}

fn field<'a>(container: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    container?.get(key)
}

/// Trim and cap to at most `max` characters.
fn clip(raw: &str, max: usize) -> String {
    raw.trim().chars().take(max).collect()
}

/// String coercion for settings fields: strings pass through, numbers and
/// booleans are stringified, everything else becomes empty.
fn coerce_str(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// A trimmed string field; non-string values read as empty.
fn text_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_owned()
}

/// Parse a rating from a JSON number or numeric string.
///
/// Only exact integers survive: `5`, `5.0` and `"5"` parse, `5.5` and
/// `"4.2"` do not. Out-of-range values are left to the caller's range check.
fn parse_rating(value: Option<&Value>) -> Option<u8> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if n.fract() != 0.0 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation)] // fract()==0 checked; huge values saturate and fail try_from
    let whole = n as i64;
    u8::try_from(whole).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    #[test]
    fn test_sanitize_settings_trims_and_defaults() {
        let raw = json!({
            "faqs": [{"q": "  Open when? ", "a": "9-5"}],
            "shopInfo": {"name": " Shop "}
        });

        let doc = sanitize_settings(&raw);
        assert_eq!(doc.faqs.len(), 1);
        assert_eq!(doc.faqs[0].question, "Open when?");
        assert_eq!(doc.faqs[0].answer, "9-5");
        assert_eq!(doc.shop_info.name, "Shop");
        assert_eq!(doc.shop_info.address, "");
        assert_eq!(doc.shop_info.phone, "");
        assert_eq!(doc.shop_info.whatsapp, "");
        assert_eq!(doc.shop_info.hours, "");
    }

    #[test]
    fn test_sanitize_settings_accepts_long_key_names() {
        let raw = json!({
            "faqs": [{"question": "Delivery?", "answer": "Same day within town"}]
        });

        let doc = sanitize_settings(&raw);
        assert_eq!(doc.faqs[0].question, "Delivery?");
    }

    #[test]
    fn test_sanitize_settings_drops_malformed_faqs() {
        let raw = json!({
            "faqs": [
                {"q": "kept", "a": "yes"},
                {"q": 42, "a": "no string question"},
                {"q": "no answer"},
                "not an object",
                null
            ]
        });

        let doc = sanitize_settings(&raw);
        assert_eq!(doc.faqs.len(), 1);
        assert_eq!(doc.faqs[0].question, "kept");
    }

    #[test]
    fn test_sanitize_settings_clips_to_char_limits() {
        let long_q = "q".repeat(500);
        let raw = json!({"faqs": [{"q": long_q, "a": "a"}]});

        let doc = sanitize_settings(&raw);
        assert_eq!(doc.faqs[0].question.chars().count(), FaqEntry::MAX_QUESTION);

        // Multi-byte characters must clip on char boundaries, not bytes.
        let raw = json!({"shopInfo": {"name": "ß".repeat(200)}});
        let doc = sanitize_settings(&raw);
        assert_eq!(doc.shop_info.name.chars().count(), ShopInfo::MAX_NAME);
    }

    #[test]
    fn test_sanitize_settings_coerces_shop_info_scalars() {
        let raw = json!({"shopInfo": {"phone": 9434000000_u64, "name": null}});

        let doc = sanitize_settings(&raw);
        assert_eq!(doc.shop_info.phone, "9434000000");
        assert_eq!(doc.shop_info.name, "");
    }

    #[test]
    fn test_sanitize_settings_empty_payload() {
        let doc = sanitize_settings(&json!({}));
        assert_eq!(doc, SettingsDocument::default());
    }

    // ------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------

    fn review(name: &str, rating: Value, comment: &str) -> Value {
        json!({"name": name, "rating": rating, "comment": comment})
    }

    #[test]
    fn test_validate_review_accepts_all_valid_ratings() {
        for rating in 1u8..=5 {
            let input = validate_review(&review("Ravi", json!(rating), "ok")).unwrap();
            assert_eq!(input.rating, rating);
        }
    }

    #[test]
    fn test_validate_review_accepts_numeric_string_rating() {
        let input = validate_review(&review("Ravi", json!("4"), "ok")).unwrap();
        assert_eq!(input.rating, 4);
    }

    #[test]
    fn test_validate_review_rejects_bad_ratings() {
        for rating in [
            json!(0),
            json!(6),
            json!(-1),
            json!(3.5),
            json!("4.2"),
            json!("abc"),
            json!(null),
            json!(true),
            json!([3]),
        ] {
            let err = validate_review(&review("Ravi", rating, "ok")).unwrap_err();
            assert_eq!(err, ValidationError::InvalidRating);
        }
    }

    #[test]
    fn test_validate_review_accepts_whole_float_rating() {
        let input = validate_review(&review("Ravi", json!(5.0), "ok")).unwrap();
        assert_eq!(input.rating, 5);
    }

    #[test]
    fn test_validate_review_name_rules() {
        let err = validate_review(&review("", json!(5), "ok")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidName);

        let err = validate_review(&review("   ", json!(5), "ok")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidName);

        let long = "n".repeat(31);
        let err = validate_review(&review(&long, json!(5), "ok")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidName);

        let exact = "n".repeat(30);
        assert!(validate_review(&review(&exact, json!(5), "ok")).is_ok());
    }

    #[test]
    fn test_validate_review_comment_rules() {
        let err = validate_review(&review("Ravi", json!(5), "")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidComment);

        let long = "c".repeat(121);
        let err = validate_review(&review("Ravi", json!(5), &long)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidComment);

        let exact = "c".repeat(120);
        assert!(validate_review(&review("Ravi", json!(5), &exact)).is_ok());
    }

    #[test]
    fn test_validate_review_first_failing_rule_wins() {
        // Both name and rating are bad; name is checked first.
        let err = validate_review(&review("", json!(99), "")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidName);

        // Name fine, rating and comment bad; rating is checked first.
        let err = validate_review(&review("Ravi", json!(99), "")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidRating);
    }

    #[test]
    fn test_validate_review_trims_fields() {
        let input = validate_review(&review("  Ravi  ", json!(5), "  fine  ")).unwrap();
        assert_eq!(input.name, "Ravi");
        assert_eq!(input.comment, "fine");
    }

    // ------------------------------------------------------------------
    // Quotes
    // ------------------------------------------------------------------

    fn quote(topic: &str, phone: &str) -> Value {
        json!({"topic": topic, "phone": phone})
    }

    #[test]
    fn test_validate_quote_accepts_digit_phones() {
        for phone in ["9434000000", "943400000012345", " 9434000000 "] {
            let input = validate_quote(&quote("Cement", phone)).unwrap();
            assert_eq!(input.phone, phone.trim());
        }
    }

    #[test]
    fn test_validate_quote_rejects_bad_phones() {
        for phone in [
            "943400000",        // 9 digits
            "9434000000123456", // 16 digits
            "94340abc00",
            "+919434000000", // leading symbol, no partial match
            "9434 000000",
            "",
        ] {
            let err = validate_quote(&quote("Cement", phone)).unwrap_err();
            assert_eq!(err, ValidationError::InvalidPhone, "phone: {phone:?}");
        }
    }

    #[test]
    fn test_validate_quote_topic_rules() {
        let err = validate_quote(&quote("", "9434000000")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidTopic);

        let long = "t".repeat(61);
        let err = validate_quote(&quote(&long, "9434000000")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidTopic);
    }

    #[test]
    fn test_validate_quote_optional_fields() {
        let raw = json!({"topic": "TMT rods", "phone": "9434000000"});
        let input = validate_quote(&raw).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.requirement, "");

        let raw = json!({
            "topic": "TMT rods",
            "phone": "9434000000",
            "name": "n".repeat(41),
        });
        assert_eq!(
            validate_quote(&raw).unwrap_err(),
            ValidationError::NameTooLong
        );

        let raw = json!({
            "topic": "TMT rods",
            "phone": "9434000000",
            "requirement": "r".repeat(201),
        });
        assert_eq!(
            validate_quote(&raw).unwrap_err(),
            ValidationError::RequirementTooLong
        );
    }

    #[test]
    fn test_validate_quote_first_failing_rule_wins() {
        // Topic and phone both bad; topic is checked first.
        let err = validate_quote(&quote("", "123")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidTopic);

        // Phone bad and name too long; phone is checked first.
        let raw = json!({"topic": "Cement", "phone": "123", "name": "n".repeat(41)});
        assert_eq!(
            validate_quote(&raw).unwrap_err(),
            ValidationError::InvalidPhone
        );
    }

    #[test]
    fn test_error_messages_are_client_facing() {
        assert_eq!(
            ValidationError::InvalidSettingsPayload.to_string(),
            "Invalid settings payload"
        );
        assert_eq!(ValidationError::InvalidName.to_string(), "Valid name required");
        assert_eq!(ValidationError::InvalidRating.to_string(), "Rating must be 1-5");
        assert_eq!(
            ValidationError::InvalidComment.to_string(),
            "Valid comment required"
        );
        assert_eq!(
            ValidationError::InvalidTopic.to_string(),
            "Valid topic required"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Valid phone required (10-15 digits)"
        );
        assert_eq!(ValidationError::NameTooLong.to_string(), "Name too long");
        assert_eq!(
            ValidationError::RequirementTooLong.to_string(),
            "Requirement too long"
        );
    }
}
