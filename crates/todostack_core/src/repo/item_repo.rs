//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `todo_items` storage.
//! - Keep per-list queries sorted by due date inside the persistence
//!   boundary.
//!
//! # Invariants
//! - `created_at` is written on insert and never appears in an UPDATE.
//! - Writes referencing a missing list surface as `ListNotFound`.
//! - Per-list listings are ordered `due_at ASC, uuid ASC`.

use crate::model::item::{ItemId, TodoItem};
use crate::model::list::ListId;
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    list_uuid,
    title,
    description,
    created_at,
    due_at
FROM todo_items";

/// Repository interface for item CRUD operations.
pub trait ItemRepository {
    /// Persists one item and returns its stable id.
    fn create_item(&self, item: &TodoItem) -> RepoResult<ItemId>;
    /// Loads one item by id.
    fn get_item(&self, id: ItemId) -> RepoResult<TodoItem>;
    /// Returns the items of one list, soonest deadline first.
    fn list_items_for_list(&self, list_uuid: ListId) -> RepoResult<Vec<TodoItem>>;
    /// Rewrites the editable fields of one item, including its owning list.
    fn update_item(&self, item: &TodoItem) -> RepoResult<()>;
    /// Deletes one item by id.
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &TodoItem) -> RepoResult<ItemId> {
        item.validate()?;

        self.conn
            .execute(
                "INSERT INTO todo_items (
                    uuid,
                    list_uuid,
                    title,
                    description,
                    created_at,
                    due_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    item.uuid.to_string(),
                    item.list_uuid.to_string(),
                    item.title.as_str(),
                    item.description.as_deref(),
                    item.created_at,
                    item.due_at,
                ],
            )
            .map_err(|err| map_missing_list(err, item.list_uuid))?;

        Ok(item.uuid)
    }

    fn get_item(&self, id: ItemId) -> RepoResult<TodoItem> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => parse_item_row(row),
            None => Err(RepoError::ItemNotFound(id)),
        }
    }

    fn list_items_for_list(&self, list_uuid: ListId) -> RepoResult<Vec<TodoItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             WHERE list_uuid = ?1
             ORDER BY due_at ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([list_uuid.to_string()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn update_item(&self, item: &TodoItem) -> RepoResult<()> {
        item.validate()?;

        let changed = self
            .conn
            .execute(
                "UPDATE todo_items
                 SET
                    list_uuid = ?1,
                    title = ?2,
                    description = ?3,
                    due_at = ?4
                 WHERE uuid = ?5;",
                params![
                    item.list_uuid.to_string(),
                    item.title.as_str(),
                    item.description.as_deref(),
                    item.due_at,
                    item.uuid.to_string(),
                ],
            )
            .map_err(|err| map_missing_list(err, item.list_uuid))?;

        if changed == 0 {
            return Err(RepoError::ItemNotFound(item.uuid));
        }

        Ok(())
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todo_items WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::ItemNotFound(id));
        }

        Ok(())
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<TodoItem> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid(&uuid_text, "todo_items.uuid")?;

    let list_text: String = row.get("list_uuid")?;
    let list_uuid = parse_uuid(&list_text, "todo_items.list_uuid")?;

    TodoItem::with_parts(
        uuid,
        list_uuid,
        row.get::<_, String>("title")?,
        row.get("description")?,
        row.get("created_at")?,
        row.get("due_at")?,
    )
    .map_err(|err| RepoError::InvalidData(format!("todo_items row {uuid_text}: {err}")))
}

fn map_missing_list(err: rusqlite::Error, list_uuid: ListId) -> RepoError {
    if is_foreign_key_violation(&err) {
        RepoError::ListNotFound(list_uuid)
    } else {
        err.into()
    }
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}
