//! To-do item domain record.
//!
//! # Responsibility
//! - Define the item record and its due-date defaulting rule.
//!
//! # Invariants
//! - Every item belongs to exactly one list (`list_uuid` is never nil).
//! - `created_at` is set once at construction and never rewritten.
//! - A missing due date defaults to exactly one week after creation.

use crate::model::list::ListId;
use crate::model::{now_epoch_ms, validate_title, ValidationError};
use crate::route::Route;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a to-do item.
pub type ItemId = Uuid;

/// Default due-date offset: one week, in milliseconds.
pub const DEFAULT_DUE_OFFSET_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// A single to-do task owned by one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable global id.
    pub uuid: ItemId,
    /// Owning list. Must reference an existing list at write time.
    pub list_uuid: ListId,
    /// Short task name, at most [`crate::model::list::TITLE_MAX_CHARS`] characters.
    pub title: String,
    /// Optional free-form detail text.
    pub description: Option<String>,
    /// Creation time in epoch milliseconds. Immutable after insert.
    pub created_at: i64,
    /// Deadline in epoch milliseconds.
    pub due_at: i64,
}

impl TodoItem {
    /// Creates a new item stamped with the current time.
    ///
    /// # Contract
    /// - `due_at = None` yields `created_at + DEFAULT_DUE_OFFSET_MS` exactly.
    pub fn new(
        list_uuid: ListId,
        title: impl Into<String>,
        description: Option<String>,
        due_at: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let created_at = now_epoch_ms();
        Self::with_parts(
            Uuid::new_v4(),
            list_uuid,
            title,
            description,
            created_at,
            due_at.unwrap_or_else(|| default_due_date(created_at)),
        )
    }

    /// Creates an item from explicit parts.
    ///
    /// Used by read paths reconstructing persisted rows and by tests that
    /// need a fixed creation time.
    pub fn with_parts(
        uuid: ItemId,
        list_uuid: ListId,
        title: impl Into<String>,
        description: Option<String>,
        created_at: i64,
        due_at: i64,
    ) -> Result<Self, ValidationError> {
        let item = Self {
            uuid,
            list_uuid,
            title: title.into(),
            description,
            created_at,
            due_at,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks field-level invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.uuid.is_nil() || self.list_uuid.is_nil() {
            return Err(ValidationError::NilId);
        }
        validate_title(&self.title)
    }

    /// Destination of this item's edit form within its owning list.
    pub fn update_route(&self) -> Route {
        Route::ItemUpdate {
            list: self.list_uuid,
            item: self.uuid,
        }
    }
}

/// Computes the default deadline for an item created at `created_at`.
pub fn default_due_date(created_at: i64) -> i64 {
    created_at + DEFAULT_DUE_OFFSET_MS
}

#[cfg(test)]
mod tests {
    use super::{default_due_date, TodoItem, DEFAULT_DUE_OFFSET_MS};
    use crate::model::ValidationError;
    use uuid::Uuid;

    #[test]
    fn omitted_due_date_defaults_to_one_week_after_creation() {
        let item = TodoItem::new(Uuid::new_v4(), "Milk", None, None).unwrap();
        assert_eq!(item.due_at, item.created_at + DEFAULT_DUE_OFFSET_MS);
    }

    #[test]
    fn explicit_due_date_is_kept_verbatim() {
        let item = TodoItem::new(Uuid::new_v4(), "Milk", None, Some(42)).unwrap();
        assert_eq!(item.due_at, 42);
    }

    #[test]
    fn default_due_date_is_exact() {
        assert_eq!(default_due_date(1_000), 1_000 + 604_800_000);
    }

    #[test]
    fn nil_owning_list_is_rejected() {
        let err = TodoItem::new(Uuid::nil(), "Milk", None, None).unwrap_err();
        assert_eq!(err, ValidationError::NilId);
    }

    #[test]
    fn over_long_title_is_rejected() {
        let title = "x".repeat(101);
        let err = TodoItem::new(Uuid::new_v4(), title, None, None).unwrap_err();
        assert_eq!(err, ValidationError::TitleTooLong { chars: 101 });
    }
}
