//! Table mappings between roster records and SQLite rows.
//!
//! A [`TableSpec`] names the table, its integer key column and the remaining
//! value columns in bind order. SQL for every write kind is derived from it,
//! so each entity only describes its columns once.

use rusqlite::types::Value;
use rusqlite::Row;

/// Static description of one roster table.
#[derive(Debug)]
pub struct TableSpec {
    /// Entity label used in errors and log events.
    pub entity: &'static str,
    pub table: &'static str,
    pub key_column: &'static str,
    /// Non-key columns, in the order produced by [`Entity::values`].
    pub columns: &'static [&'static str],
}

impl TableSpec {
    pub(crate) fn has_column(&self, column: &str) -> bool {
        self.key_column == column || self.columns.contains(&column)
    }

    pub(crate) fn select_sql(&self) -> String {
        format!(
            "SELECT {}, {} FROM {}",
            self.key_column,
            self.columns.join(", "),
            self.table
        )
    }

    pub(crate) fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} ({}, {}) VALUES ({});",
            self.table,
            self.key_column,
            self.columns.join(", "),
            placeholders(self.columns.len() + 1)
        )
    }

    pub(crate) fn upsert_sql(&self) -> String {
        let assignments = self
            .columns
            .iter()
            .map(|column| format!("{column} = excluded.{column}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}, {}) VALUES ({})
             ON CONFLICT({}) DO UPDATE SET {};",
            self.table,
            self.key_column,
            self.columns.join(", "),
            placeholders(self.columns.len() + 1),
            self.key_column,
            assignments
        )
    }

    /// Key binds as `?1`, value columns follow from `?2`.
    pub(crate) fn update_sql(&self) -> String {
        let assignments = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 2))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {} WHERE {} = ?1;",
            self.table, assignments, self.key_column
        )
    }

    pub(crate) fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE {} = ?1;", self.table, self.key_column)
    }
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A record persisted in one roster table.
pub trait Entity: Sized {
    fn table() -> &'static TableSpec;
    fn key(&self) -> i64;
    /// Non-key column values in [`TableSpec::columns`] order.
    fn values(&self) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::TableSpec;

    static WIDGETS: TableSpec = TableSpec {
        entity: "widget",
        table: "widgets",
        key_column: "id",
        columns: &["name", "size"],
    };

    #[test]
    fn insert_and_upsert_bind_key_first() {
        assert_eq!(
            WIDGETS.insert_sql(),
            "INSERT INTO widgets (id, name, size) VALUES (?1, ?2, ?3);"
        );
        let upsert = WIDGETS.upsert_sql();
        assert!(upsert.contains(
            "ON CONFLICT(id) DO UPDATE SET name = excluded.name, size = excluded.size"
        ));
    }

    #[test]
    fn update_binds_key_as_first_parameter() {
        assert_eq!(
            WIDGETS.update_sql(),
            "UPDATE widgets SET name = ?2, size = ?3 WHERE id = ?1;"
        );
    }

    #[test]
    fn has_column_covers_key_and_values() {
        assert!(WIDGETS.has_column("id"));
        assert!(WIDGETS.has_column("size"));
        assert!(!WIDGETS.has_column("size; DROP TABLE widgets"));
    }
}
