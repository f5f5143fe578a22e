//! Repository layer: persistence context, table mappings and per-entity
//! data access contracts.
//!
//! # Responsibility
//! - Own every SQL statement issued against roster tables.
//! - Stage writes in [`RosterContext`] until the caller saves them.
//!
//! # Invariants
//! - Lookups by key report misses as `Ok(None)`, never as errors.
//! - Writes reach storage only through `RosterContext::save_changes`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod context;
pub mod entity;
pub mod player_repo;
pub mod statistic_repo;
pub mod team_repo;

pub use context::RosterContext;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from the persistence context and entity repositories.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// A staged update or removal matched no row at save time.
    NotFound { entity: &'static str, id: i64 },
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Query referenced something the table mapping does not know.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "roster context requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "roster context requires table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid roster query: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
