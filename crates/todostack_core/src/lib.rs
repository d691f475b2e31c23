//! Core domain logic for TodoStack, a minimal multi-list to-do manager.
//! All business invariants live in this crate; front ends stay thin.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod route;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemId, TodoItem, DEFAULT_DUE_OFFSET_MS};
pub use model::list::{ListId, TodoList, TITLE_MAX_CHARS};
pub use model::ValidationError;
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::list_repo::{ListRepository, SqliteListRepository};
pub use repo::{RepoError, RepoResult};
pub use route::Route;
pub use service::item_service::{ItemChanges, ItemDraft, ItemService, NewItem};
pub use service::list_service::{ListDetail, ListService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
