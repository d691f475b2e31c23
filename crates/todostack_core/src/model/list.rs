//! To-do list domain record.
//!
//! # Invariants
//! - `uuid` is stable, non-nil, and never reused for another list.
//! - `title` is unique across all lists, enforced at write time by the
//!   repository layer.

use crate::model::{validate_title, ValidationError};
use crate::route::Route;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a to-do list.
pub type ListId = Uuid;

/// Maximum title length for lists and items, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// A named container of to-do items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Stable global id used for linking and navigation.
    pub uuid: ListId,
    /// Unique display name, at most [`TITLE_MAX_CHARS`] characters.
    pub title: String,
}

impl TodoList {
    /// Creates a new list with a generated stable id.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a list with a caller-provided stable id.
    ///
    /// Used by read paths reconstructing persisted rows.
    pub fn with_id(uuid: ListId, title: impl Into<String>) -> Result<Self, ValidationError> {
        let list = Self {
            uuid,
            title: title.into(),
        };
        list.validate()?;
        Ok(list)
    }

    /// Checks field-level invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.uuid.is_nil() {
            return Err(ValidationError::NilId);
        }
        validate_title(&self.title)
    }

    /// Destination of this list's detail view.
    pub fn detail_route(&self) -> Route {
        Route::ListDetail(self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoList, ValidationError};
    use crate::route::Route;
    use uuid::Uuid;

    #[test]
    fn new_assigns_a_non_nil_id() {
        let list = TodoList::new("Groceries").unwrap();
        assert!(!list.uuid.is_nil());
        assert_eq!(list.title, "Groceries");
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = TodoList::with_id(Uuid::nil(), "Groceries").unwrap_err();
        assert_eq!(err, ValidationError::NilId);
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = TodoList::new("  ").unwrap_err();
        assert_eq!(err, ValidationError::MissingTitle);
    }

    #[test]
    fn detail_route_points_at_this_list() {
        let list = TodoList::new("Errands").unwrap();
        assert_eq!(list.detail_route(), Route::ListDetail(list.uuid));
    }
}
