//! List use-case service.
//!
//! # Responsibility
//! - Provide the list-level operations: overview, detail, create, delete.
//!
//! # Invariants
//! - `list_detail` fails for a missing list instead of returning an empty
//!   item set.
//! - Items inside a detail are sorted ascending by due date.

use crate::model::item::TodoItem;
use crate::model::list::{ListId, TodoList};
use crate::repo::item_repo::ItemRepository;
use crate::repo::list_repo::ListRepository;
use crate::repo::RepoResult;
use crate::route::Route;
use log::info;

/// One list together with its items, sorted soonest deadline first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDetail {
    pub list: TodoList,
    pub items: Vec<TodoItem>,
}

/// Use-case service for list operations.
pub struct ListService<L: ListRepository, I: ItemRepository> {
    lists: L,
    items: I,
}

impl<L: ListRepository, I: ItemRepository> ListService<L, I> {
    /// Creates a service over the provided repository implementations.
    pub fn new(lists: L, items: I) -> Self {
        Self { lists, items }
    }

    /// Returns every list for the index view.
    pub fn overview(&self) -> RepoResult<Vec<TodoList>> {
        self.lists.list_lists()
    }

    /// Returns one list plus its items.
    ///
    /// A missing list id is a `ListNotFound` error, never a silent empty
    /// result.
    pub fn list_detail(&self, id: ListId) -> RepoResult<ListDetail> {
        let list = self.lists.get_list(id)?;
        let items = self.items.list_items_for_list(id)?;
        Ok(ListDetail { list, items })
    }

    /// Creates a list and returns it with its detail-view destination.
    ///
    /// # Contract
    /// - Blank or over-long titles are rejected before persistence.
    /// - A title collision fails with `DuplicateTitle` and leaves the
    ///   existing list untouched.
    pub fn create_list(&self, title: &str) -> RepoResult<(TodoList, Route)> {
        let list = TodoList::new(title)?;
        self.lists.create_list(&list)?;
        info!("event=list_created module=service list={}", list.uuid);
        let destination = list.detail_route();
        Ok((list, destination))
    }

    /// Deletes a list and everything it owns.
    ///
    /// The success destination is the all-lists index view.
    pub fn delete_list(&self, id: ListId) -> RepoResult<Route> {
        self.lists.delete_list(id)?;
        info!("event=list_deleted module=service list={id}");
        Ok(Route::Index)
    }
}
