//! Item use-case service.
//!
//! # Responsibility
//! - Provide the item-level operations: draft, create, get, update, delete.
//! - Compute the server-side due-date default when the caller omits one.
//!
//! # Invariants
//! - The owning list comes from navigation context, never from the item
//!   form itself.
//! - Every successful mutation reports the owning list's detail view as the
//!   next destination (for deletes: the pre-deletion owner).

use crate::model::item::{default_due_date, ItemId, TodoItem};
use crate::model::list::{ListId, TodoList};
use crate::model::now_epoch_ms;
use crate::repo::item_repo::ItemRepository;
use crate::repo::list_repo::ListRepository;
use crate::repo::RepoResult;
use crate::route::Route;
use log::info;

/// Caller input for creating one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
    /// Deadline in epoch milliseconds; `None` defaults to one week after
    /// creation.
    pub due_at: Option<i64>,
}

/// Caller input for rewriting one item's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChanges {
    /// Owning list after the update; may differ from the current owner.
    pub list_uuid: ListId,
    pub title: String,
    pub description: Option<String>,
    pub due_at: i64,
}

/// Form seed for the item-create flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Owning list pre-populated from navigation context.
    pub list: TodoList,
    /// Default deadline offered to the caller.
    pub due_at: i64,
}

/// Use-case service for item operations.
pub struct ItemService<L: ListRepository, I: ItemRepository> {
    lists: L,
    items: I,
}

impl<L: ListRepository, I: ItemRepository> ItemService<L, I> {
    /// Creates a service over the provided repository implementations.
    pub fn new(lists: L, items: I) -> Self {
        Self { lists, items }
    }

    /// Seeds the create form for one list.
    ///
    /// Fails with `ListNotFound` when the navigation context points at a
    /// list that no longer exists.
    pub fn draft_item(&self, list_id: ListId) -> RepoResult<ItemDraft> {
        let list = self.lists.get_list(list_id)?;
        Ok(ItemDraft {
            list,
            due_at: default_due_date(now_epoch_ms()),
        })
    }

    /// Creates an item inside `list_id` and returns it with the owning
    /// list's detail view as destination.
    pub fn create_item(&self, list_id: ListId, input: NewItem) -> RepoResult<(TodoItem, Route)> {
        let item = TodoItem::new(list_id, input.title, input.description, input.due_at)?;
        self.items.create_item(&item)?;
        info!(
            "event=item_created module=service item={} list={list_id}",
            item.uuid
        );
        let destination = Route::ListDetail(list_id);
        Ok((item, destination))
    }

    /// Loads one item, e.g. to seed the edit form.
    pub fn get_item(&self, id: ItemId) -> RepoResult<TodoItem> {
        self.items.get_item(id)
    }

    /// Rewrites an item's editable fields, possibly moving it to another
    /// list. `created_at` is preserved.
    pub fn update_item(&self, id: ItemId, changes: ItemChanges) -> RepoResult<(TodoItem, Route)> {
        let existing = self.items.get_item(id)?;
        let updated = TodoItem::with_parts(
            existing.uuid,
            changes.list_uuid,
            changes.title,
            changes.description,
            existing.created_at,
            changes.due_at,
        )?;
        self.items.update_item(&updated)?;
        info!(
            "event=item_updated module=service item={id} list={}",
            updated.list_uuid
        );
        let destination = Route::ListDetail(updated.list_uuid);
        Ok((updated, destination))
    }

    /// Deletes one item and returns the pre-deletion owner's detail view.
    pub fn delete_item(&self, id: ItemId) -> RepoResult<Route> {
        let owner = self.items.get_item(id)?.list_uuid;
        self.items.delete_item(id)?;
        info!("event=item_deleted module=service item={id} list={owner}");
        Ok(Route::ListDetail(owner))
    }
}
