//! Book domain model and operator input parsing.
//!
//! # Responsibility
//! - Define the canonical book record persisted by the reading log.
//! - Parse raw prompt input into typed fields with explicit errors.
//!
//! # Invariants
//! - `title` is never empty after trimming.
//! - `rating` stays within `RATING_MIN..=RATING_MAX` when set.
//! - Read dates are calendar-valid ISO `YYYY-MM-DD` values.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by storage in insertion order.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i64;

/// Lowest accepted rating value.
pub const RATING_MIN: u8 = 1;
/// Highest accepted rating value.
pub const RATING_MAX: u8 = 5;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Field-level validation error for book input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    InvalidDateFormat { value: String },
    InvalidCalendarDate { value: String },
    InvalidRatingFormat { value: String },
    RatingOutOfRange { value: i64 },
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::InvalidDateFormat { value } => {
                write!(f, "read date `{value}` must use YYYY-MM-DD format")
            }
            Self::InvalidCalendarDate { value } => {
                write!(f, "read date `{value}` is not a real calendar date")
            }
            Self::InvalidRatingFormat { value } => {
                write!(f, "rating `{value}` must be a whole number")
            }
            Self::RatingOutOfRange { value } => write!(
                f,
                "rating {value} must be between {RATING_MIN} and {RATING_MAX}"
            ),
        }
    }
}

impl Error for BookValidationError {}

/// Canonical book record as persisted in the `books` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Storage-assigned id, ascending in insertion order.
    pub id: BookId,
    /// Required display title, trimmed and non-empty.
    pub title: String,
    /// Optional author name. `None` when left blank at entry.
    pub author: Option<String>,
    /// Optional date the book was finished.
    pub read_date: Option<NaiveDate>,
    /// Optional rating within `RATING_MIN..=RATING_MAX`.
    pub rating: Option<u8>,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

/// Insert draft for a book not yet assigned a storage id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: Option<String>,
    pub read_date: Option<NaiveDate>,
    pub rating: Option<u8>,
    pub notes: Option<String>,
}

impl NewBook {
    /// Creates a draft with the required title and all optional fields unset.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            read_date: None,
            rating: None,
            notes: None,
        }
    }

    /// Checks draft invariants before persistence.
    ///
    /// # Invariants
    /// - `title` must contain at least one non-whitespace character.
    /// - `rating` must fall within `RATING_MIN..=RATING_MAX` when set.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }

        if let Some(rating) = self.rating {
            if !(RATING_MIN..=RATING_MAX).contains(&rating) {
                return Err(BookValidationError::RatingOutOfRange {
                    value: i64::from(rating),
                });
            }
        }

        Ok(())
    }
}

/// Parses a required title from raw prompt input.
///
/// Surrounding whitespace is stripped. Whitespace-only input is rejected.
pub fn parse_title(input: &str) -> Result<String, BookValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BookValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Parses an optional ISO `YYYY-MM-DD` read date from raw prompt input.
///
/// Blank input means the field was skipped and yields `Ok(None)`.
/// Shape is checked before calendar validity, so `15-01-2023` reports a
/// format error while `2023-02-30` reports an impossible calendar date.
pub fn parse_read_date(input: &str) -> Result<Option<NaiveDate>, BookValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if !ISO_DATE_RE.is_match(trimmed) {
        return Err(BookValidationError::InvalidDateFormat {
            value: trimmed.to_string(),
        });
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(_) => Err(BookValidationError::InvalidCalendarDate {
            value: trimmed.to_string(),
        }),
    }
}

/// Parses an optional rating from raw prompt input.
///
/// Blank input yields `Ok(None)`. Non-integer input is a format error;
/// integers outside `RATING_MIN..=RATING_MAX` (including negatives) are
/// range errors.
pub fn parse_rating(input: &str) -> Result<Option<u8>, BookValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| BookValidationError::InvalidRatingFormat {
            value: trimmed.to_string(),
        })?;

    if value < i64::from(RATING_MIN) || value > i64::from(RATING_MAX) {
        return Err(BookValidationError::RatingOutOfRange { value });
    }

    Ok(Some(value as u8))
}

/// Normalizes optional free-text input such as author or notes.
///
/// Blank input yields `None`; anything else is trimmed and kept.
pub fn parse_optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
