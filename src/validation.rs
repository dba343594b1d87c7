//! Input validation for the checkout boundary.
//!
//! Arrivals come from an untrusted source (a form field, a stdin line).
//! This module turns raw input into values the core accepts and rejects
//! everything else before it reaches the assigner:
//! - Non-numeric item counts
//! - Zero or negative item counts
//! - Item counts that do not fit the core's integer width
//! - Zero counters
//!
//! Parsing follows the lenient leading-integer rule of a browser number field:
//! surrounding whitespace is ignored, trailing garbage after the digits
//! (`"12abc"`, `"3.9"`) is dropped, and a `0x`/`0X` prefix switches to
//! hexadecimal (`"0x10"` is 16).

/// User-facing message shown for any rejected item count.
pub const INVALID_ITEM_COUNT_MESSAGE: &str = "Please enter a valid number of items (at least 1)";

/// Validation result.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Input has no leading integer.
    NotANumber,
    /// Item count is zero or negative.
    NonPositive,
    /// Item count exceeds the supported range.
    OutOfRange,
    /// Counter count is zero.
    NoCounters,
    /// Minimum item count exceeds the maximum, or is zero.
    InvalidItemRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parses a raw item count.
///
/// # Returns
/// The positive item count, or an error carrying
/// [`INVALID_ITEM_COUNT_MESSAGE`].
pub fn parse_item_count(raw: &str) -> ValidationResult<u32> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_end = rest
        .bytes()
        .position(|b| !(b as char).is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if digits.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::NotANumber,
            INVALID_ITEM_COUNT_MESSAGE,
        ));
    }

    let all_zero = digits.bytes().all(|b| b == b'0');
    if negative || all_zero {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositive,
            INVALID_ITEM_COUNT_MESSAGE,
        ));
    }

    u32::from_str_radix(digits, radix).map_err(|_| {
        ValidationError::new(ValidationErrorKind::OutOfRange, INVALID_ITEM_COUNT_MESSAGE)
    })
}

/// Rejects an item count of zero.
pub fn validate_item_count(item_count: u32) -> ValidationResult<u32> {
    if item_count == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositive,
            INVALID_ITEM_COUNT_MESSAGE,
        ));
    }
    Ok(item_count)
}

/// Rejects a counter count of zero.
pub fn validate_counter_count(counters: usize) -> ValidationResult<usize> {
    if counters == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NoCounters,
            "at least one checkout counter is required",
        ));
    }
    Ok(counters)
}

/// Checks a `[min, max]` item-count range used for generated arrivals.
pub fn validate_item_range(min_items: u32, max_items: u32) -> ValidationResult<()> {
    if min_items == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidItemRange,
            "minimum item count must be at least 1",
        ));
    }
    if min_items > max_items {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidItemRange,
            format!("minimum item count {min_items} exceeds maximum {max_items}"),
        ));
    }
    Ok(())
}
