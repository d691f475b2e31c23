//! Domain model for to-do lists and their items.
//!
//! # Responsibility
//! - Define the canonical records persisted by the repository layer.
//! - Enforce field-level invariants before anything reaches storage.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil UUID.
//! - Titles are required and never exceed [`list::TITLE_MAX_CHARS`] characters.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod item;
pub mod list;

/// Field-level validation failure for list and item records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Record carries the nil UUID.
    NilId,
    /// Title is empty or whitespace-only.
    MissingTitle,
    /// Title exceeds the maximum character count.
    TitleTooLong { chars: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "id must not be the nil uuid"),
            Self::MissingTitle => write!(f, "title is required"),
            Self::TitleTooLong { chars } => write!(
                f,
                "title is {chars} characters; maximum is {}",
                list::TITLE_MAX_CHARS
            ),
        }
    }
}

impl Error for ValidationError {}

/// Current wall-clock time in epoch milliseconds.
///
/// A clock before the unix epoch collapses to 0 rather than panicking.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    let chars = title.chars().count();
    if chars > list::TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong { chars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{now_epoch_ms, validate_title, ValidationError};

    #[test]
    fn validate_title_rejects_blank_and_whitespace() {
        assert_eq!(validate_title(""), Err(ValidationError::MissingTitle));
        assert_eq!(validate_title("   "), Err(ValidationError::MissingTitle));
        assert_eq!(validate_title("Groceries"), Ok(()));
    }

    #[test]
    fn validate_title_counts_characters_not_bytes() {
        let exactly_max = "ä".repeat(super::list::TITLE_MAX_CHARS);
        assert_eq!(validate_title(&exactly_max), Ok(()));

        let one_over = "ä".repeat(super::list::TITLE_MAX_CHARS + 1);
        assert_eq!(
            validate_title(&one_over),
            Err(ValidationError::TitleTooLong {
                chars: super::list::TITLE_MAX_CHARS + 1
            })
        );
    }

    #[test]
    fn now_epoch_ms_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }
}
