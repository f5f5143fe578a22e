//! Persistence context shared by all roster repositories.
//!
//! # Responsibility
//! - Own the migrated SQLite connection used by every repository.
//! - Stage add/update/upsert/remove requests until an explicit save.
//! - Apply staged writes atomically in `save_changes`.
//!
//! # Invariants
//! - Reads (`find`, `list`, `list_where`) observe committed rows only.
//! - Staged writes are applied in staging order inside one transaction.
//! - A failed save rolls back and keeps the staged list intact.

use super::entity::{Entity, TableSpec};
use super::{RepoError, RepoResult};
use crate::db::migrations::latest_version;
use crate::db::{open_db, open_db_in_memory};
use log::{debug, error, info};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use std::cell::RefCell;
use std::path::Path;
use std::time::Instant;

const REQUIRED_TABLES: &[&str] = &["players", "statistics", "teams"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteKind {
    /// Plain insert; a duplicate key fails at save time.
    Insert,
    /// Update by key; a missing row fails at save time.
    Update,
    /// Insert, or overwrite every value column of the existing row.
    Upsert,
    /// Delete by key; a missing row fails at save time.
    Remove,
}

impl WriteKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Upsert => "upsert",
            Self::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone)]
struct StagedChange {
    spec: &'static TableSpec,
    kind: WriteKind,
    key: i64,
    values: Vec<Value>,
}

/// Storage handle with explicit unit-of-work semantics.
///
/// Repositories borrow the context immutably; staging uses interior
/// mutability, so the type is deliberately not `Sync`.
pub struct RosterContext {
    conn: Connection,
    staged: RefCell<Vec<StagedChange>>,
}

impl RosterContext {
    /// Wraps a connection that already carries the latest roster schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` is not the latest.
    /// - `MissingRequiredTable` when a roster table is absent.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        ensure_context_ready(&conn)?;
        Ok(Self {
            conn,
            staged: RefCell::new(Vec::new()),
        })
    }

    /// Opens an isolated in-memory store.
    pub fn open_in_memory() -> RepoResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }

    /// Opens (or creates) a file-backed store.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Self::try_new(open_db(path)?)
    }

    /// Read access to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Stages an insert of `entity`.
    pub fn add<T: Entity>(&self, entity: &T) {
        self.stage(WriteKind::Insert, entity);
    }

    /// Stages inserts for every entity, in slice order.
    pub fn add_range<T: Entity>(&self, entities: &[T]) {
        for entity in entities {
            self.stage(WriteKind::Insert, entity);
        }
    }

    /// Stages an update of the row keyed by `entity.key()`.
    pub fn update<T: Entity>(&self, entity: &T) {
        self.stage(WriteKind::Update, entity);
    }

    /// Stages an insert-or-update keyed by `entity.key()`.
    pub fn upsert<T: Entity>(&self, entity: &T) {
        self.stage(WriteKind::Upsert, entity);
    }

    /// Stages removal of the row keyed by `entity.key()`.
    pub fn remove<T: Entity>(&self, entity: &T) {
        let spec = T::table();
        self.push(StagedChange {
            spec,
            kind: WriteKind::Remove,
            key: entity.key(),
            values: Vec::new(),
        });
    }

    /// Finds one committed row by key.
    pub fn find<T: Entity>(&self, key: i64) -> RepoResult<Option<T>> {
        let spec = T::table();
        let sql = format!("{} WHERE {} = ?1;", spec.select_sql(), spec.key_column);
        let found = self
            .conn
            .query_row(&sql, [key], |row| T::from_row(row))
            .optional()?;
        Ok(found)
    }

    /// Lists all committed rows ordered by key.
    pub fn list<T: Entity>(&self) -> RepoResult<Vec<T>> {
        let spec = T::table();
        let sql = format!("{} ORDER BY {} ASC;", spec.select_sql(), spec.key_column);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| T::from_row(row))?;
        let items = rows.collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(items)
    }

    /// Lists committed rows whose text `column` equals `value` exactly.
    ///
    /// Comparison uses SQLite's default `BINARY` collation, so it is
    /// case-sensitive.
    ///
    /// # Errors
    /// - `InvalidData` when `column` is not part of the entity mapping.
    pub fn list_where<T: Entity>(&self, column: &str, value: &str) -> RepoResult<Vec<T>> {
        let spec = T::table();
        if !spec.has_column(column) {
            return Err(RepoError::InvalidData(format!(
                "unknown column `{column}` for table `{}`",
                spec.table
            )));
        }

        let sql = format!(
            "{} WHERE {column} = ?1 ORDER BY {} ASC;",
            spec.select_sql(),
            spec.key_column
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([value], |row| T::from_row(row))?;
        let items = rows.collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(items)
    }

    /// Counts committed rows of one entity table.
    pub fn count<T: Entity>(&self) -> RepoResult<usize> {
        let spec = T::table();
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {};", spec.table),
            [],
            |row| row.get(0),
        )?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count {count}")))
    }

    /// Number of writes waiting for `save_changes`.
    pub fn pending_changes(&self) -> usize {
        self.staged.borrow().len()
    }

    /// Drops staged writes without touching storage. Returns how many were dropped.
    pub fn discard_changes(&self) -> usize {
        let dropped = self.staged.borrow_mut().drain(..).count();
        if dropped > 0 {
            debug!("event=discard_changes module=context status=ok changes={dropped}");
        }
        dropped
    }

    /// Applies all staged writes in one transaction.
    ///
    /// Returns the number of rows affected. With nothing staged this is a
    /// no-op returning `0`.
    ///
    /// # Errors
    /// - `NotFound` when a staged update/removal matches no row.
    /// - `Db` for storage failures such as a duplicate key on insert.
    pub fn save_changes(&self) -> RepoResult<usize> {
        let mut staged = self.staged.borrow_mut();
        if staged.is_empty() {
            return Ok(0);
        }

        let started_at = Instant::now();
        let change_count = staged.len();
        match apply_staged(&self.conn, &staged) {
            Ok(rows) => {
                staged.clear();
                info!(
                    "event=save_changes module=context status=ok changes={change_count} rows={rows} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(rows)
            }
            Err(err) => {
                error!(
                    "event=save_changes module=context status=error changes={change_count} duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn stage<T: Entity>(&self, kind: WriteKind, entity: &T) {
        self.push(StagedChange {
            spec: T::table(),
            kind,
            key: entity.key(),
            values: entity.values(),
        });
    }

    fn push(&self, change: StagedChange) {
        debug!(
            "event=stage module=context entity={} kind={} key={}",
            change.spec.entity,
            change.kind.as_str(),
            change.key
        );
        self.staged.borrow_mut().push(change);
    }
}

fn apply_staged(conn: &Connection, staged: &[StagedChange]) -> RepoResult<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut rows = 0;
    for change in staged {
        rows += apply_change(&tx, change)?;
    }
    tx.commit()?;
    Ok(rows)
}

fn apply_change(conn: &Connection, change: &StagedChange) -> RepoResult<usize> {
    let spec = change.spec;
    let changed = match change.kind {
        WriteKind::Insert => conn.execute(&spec.insert_sql(), params_from_iter(bind_row(change)))?,
        WriteKind::Update => conn.execute(&spec.update_sql(), params_from_iter(bind_row(change)))?,
        WriteKind::Upsert => conn.execute(&spec.upsert_sql(), params_from_iter(bind_row(change)))?,
        WriteKind::Remove => conn.execute(&spec.delete_sql(), [change.key])?,
    };

    if changed == 0 && matches!(change.kind, WriteKind::Update | WriteKind::Remove) {
        return Err(RepoError::NotFound {
            entity: spec.entity,
            id: change.key,
        });
    }

    Ok(changed)
}

fn bind_row(change: &StagedChange) -> Vec<Value> {
    let mut values = Vec::with_capacity(change.values.len() + 1);
    values.push(Value::Integer(change.key));
    values.extend(change.values.iter().cloned());
    values
}

fn ensure_context_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for &table in REQUIRED_TABLES {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
