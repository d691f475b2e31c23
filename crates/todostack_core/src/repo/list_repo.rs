//! List repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `todo_lists` storage.
//! - Own the cascading list deletion (items first, then the list) as one
//!   transaction.
//!
//! # Invariants
//! - Title uniqueness violations surface as `DuplicateTitle`, never as raw
//!   constraint errors.
//! - `delete_list` removes every owned item in the same transaction; a
//!   missing list rolls the whole deletion back.

use crate::model::list::{ListId, TodoList};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

/// Repository interface for list CRUD operations.
pub trait ListRepository {
    /// Persists one list and returns its stable id.
    fn create_list(&self, list: &TodoList) -> RepoResult<ListId>;
    /// Loads one list by id.
    fn get_list(&self, id: ListId) -> RepoResult<TodoList>;
    /// Returns every list in insertion order.
    fn list_lists(&self) -> RepoResult<Vec<TodoList>>;
    /// Deletes one list and all items it owns.
    fn delete_list(&self, id: ListId) -> RepoResult<()>;
}

/// SQLite-backed list repository.
pub struct SqliteListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ListRepository for SqliteListRepository<'_> {
    fn create_list(&self, list: &TodoList) -> RepoResult<ListId> {
        list.validate()?;

        self.conn
            .execute(
                "INSERT INTO todo_lists (uuid, title) VALUES (?1, ?2);",
                params![list.uuid.to_string(), list.title.as_str()],
            )
            .map_err(|err| {
                if is_unique_violation(&err) {
                    RepoError::DuplicateTitle(list.title.clone())
                } else {
                    err.into()
                }
            })?;

        Ok(list.uuid)
    }

    fn get_list(&self, id: ListId) -> RepoResult<TodoList> {
        let row = self
            .conn
            .query_row(
                "SELECT uuid, title FROM todo_lists WHERE uuid = ?1;",
                [id.to_string()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match row {
            Some((uuid_text, title)) => parse_list_parts(&uuid_text, title),
            None => Err(RepoError::ListNotFound(id)),
        }
    }

    fn list_lists(&self) -> RepoResult<Vec<TodoList>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, title FROM todo_lists ORDER BY rowid ASC;")?;

        let mut rows = stmt.query([])?;
        let mut lists = Vec::new();
        while let Some(row) = rows.next()? {
            lists.push(parse_list_row(row)?);
        }

        Ok(lists)
    }

    fn delete_list(&self, id: ListId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let uuid = id.to_string();

        tx.execute("DELETE FROM todo_items WHERE list_uuid = ?1;", [uuid.as_str()])?;
        let changed = tx.execute("DELETE FROM todo_lists WHERE uuid = ?1;", [uuid.as_str()])?;
        if changed == 0 {
            return Err(RepoError::ListNotFound(id));
        }

        tx.commit()?;
        Ok(())
    }
}

fn parse_list_row(row: &Row<'_>) -> RepoResult<TodoList> {
    let uuid_text: String = row.get("uuid")?;
    parse_list_parts(&uuid_text, row.get("title")?)
}

fn parse_list_parts(uuid_text: &str, title: String) -> RepoResult<TodoList> {
    let uuid = parse_uuid(uuid_text, "todo_lists.uuid")?;
    TodoList::with_id(uuid, title)
        .map_err(|err| RepoError::InvalidData(format!("todo_lists row {uuid_text}: {err}")))
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
