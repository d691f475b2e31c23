//! Navigation destinations handed back to the presentation boundary.
//!
//! # Responsibility
//! - Name the view a caller should land on after a successful operation.
//! - Render each destination as a stable path string.
//!
//! # Invariants
//! - Paths are stable; front ends may treat them as routing keys.

use crate::model::item::ItemId;
use crate::model::list::ListId;
use std::fmt::{Display, Formatter};

/// Where the caller should navigate after an operation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The all-lists index view.
    Index,
    /// Detail view of one list and its items.
    ListDetail(ListId),
    /// Edit form of one item, addressed through its owning list.
    ItemUpdate { list: ListId, item: ItemId },
}

impl Route {
    /// Renders this destination as a path.
    pub fn path(&self) -> String {
        match self {
            Self::Index => "/".to_string(),
            Self::ListDetail(list) => format!("/list/{list}/"),
            Self::ItemUpdate { list, item } => format!("/list/{list}/item/{item}/"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
