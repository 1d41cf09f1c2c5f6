//! Input validation helpers
//!
//! Field-level checks shared by the services. Each helper returns a [`ValidationError`]
//! naming the field so clients can highlight it.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::validation::ValidationError;

/// Names: outlet, venue, manager, bartender, labels and descriptors
pub const MAX_NAME_LEN: usize = 255;

/// Countries
pub const MAX_COUNTRY_LEN: usize = 100;

/// Email addresses
pub const MAX_EMAIL_LEN: usize = 320;

/// Image and document URLs
pub const MAX_URL_LEN: usize = 2048;

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is valid"));
static GST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}[A-Z]{5}\d{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("GST pattern is valid")
});
static IFSC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("IFSC pattern is valid"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));
static ISD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{1,4}$").expect("ISD pattern is valid"));

/// Join a payload prefix and a field name, `details` + `pincode` gives `details.pincode`.
///
/// An empty prefix returns the bare field name.
pub fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{field} must not be empty")));
    }
    validate_length(value, field, max_len)
}

/// Validate that an optional string, if present, is non-empty and within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => validate_required_text(value, field, max_len),
        None => Ok(()),
    }
}

fn validate_length(value: &str, field: &str, max_len: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ValidationError::new(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// Validate that a value is made of exactly `len` ASCII digits.
pub fn validate_digits(value: &str, field: &str, len: usize) -> Result<(), ValidationError> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("{field} must be exactly {len} digits"),
        ));
    }
    Ok(())
}

/// Validate a 10 digit phone number.
pub fn validate_phone(value: &str, field: &str) -> Result<(), ValidationError> {
    validate_digits(value, field, 10)
}

/// Validate that a number lies within an inclusive range.
pub fn validate_range(value: f64, field: &str, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
    }
    Ok(())
}

/// Validate that an amount is zero or more.
pub fn validate_non_negative(value: i32, field: &str) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(
            field,
            format!("{field} must not be negative"),
        ));
    }
    Ok(())
}

/// Validate that an amount is strictly positive.
pub fn validate_positive(value: i32, field: &str) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::new(
            field,
            format!("{field} must be greater than 0"),
        ));
    }
    Ok(())
}

/// Validate an email address shape and length.
pub fn validate_email(value: &str, field: &str) -> Result<(), ValidationError> {
    validate_length(value, field, MAX_EMAIL_LEN)?;
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::new(
            field,
            format!("{field} must be a valid email address"),
        ));
    }
    Ok(())
}

/// Validate a PAN card number, e.g. `ABCDE1234F`.
pub fn validate_pan(value: &str, field: &str) -> Result<(), ValidationError> {
    validate_pattern(&PAN_RE, value, field, "a valid PAN number")
}

/// Validate a 15 character GST identification number.
pub fn validate_gst(value: &str, field: &str) -> Result<(), ValidationError> {
    validate_pattern(&GST_RE, value, field, "a valid GST number")
}

/// Validate an 11 character IFSC bank branch code.
pub fn validate_ifsc(value: &str, field: &str) -> Result<(), ValidationError> {
    validate_pattern(&IFSC_RE, value, field, "a valid IFSC code")
}

/// Validate an international dialling prefix such as `+91`.
pub fn validate_isd_code(value: &str, field: &str) -> Result<(), ValidationError> {
    validate_pattern(&ISD_RE, value, field, "a + followed by 1 to 4 digits")
}

fn validate_pattern(
    re: &Regex,
    value: &str,
    field: &str,
    expected: &str,
) -> Result<(), ValidationError> {
    if !re.is_match(value) {
        return Err(ValidationError::new(
            field,
            format!("{field} must be {expected}"),
        ));
    }
    Ok(())
}
