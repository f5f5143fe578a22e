//! Statistic repository contract and SQLite mapping.

use super::context::RosterContext;
use super::entity::{Entity, TableSpec};
use super::RepoResult;
use crate::model::statistic::{Statistic, StatisticId};
use rusqlite::types::Value;
use rusqlite::Row;

static STATISTIC_TABLE: TableSpec = TableSpec {
    entity: "statistic",
    table: "statistics",
    key_column: "id",
    columns: &[
        "player_name",
        "total_points",
        "attack_points",
        "block_points",
        "serve_points",
        "efficiency",
    ],
};

impl Entity for Statistic {
    fn table() -> &'static TableSpec {
        &STATISTIC_TABLE
    }

    fn key(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.player_name.clone()),
            Value::Integer(i64::from(self.total_points)),
            Value::Integer(i64::from(self.attack_points)),
            Value::Integer(i64::from(self.block_points)),
            Value::Integer(i64::from(self.serve_points)),
            efficiency_to_db(self.efficiency),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            player_name: row.get("player_name")?,
            total_points: row.get("total_points")?,
            attack_points: row.get("attack_points")?,
            block_points: row.get("block_points")?,
            serve_points: row.get("serve_points")?,
            efficiency: row
                .get::<_, Option<f64>>("efficiency")?
                .unwrap_or(f64::NAN),
        })
    }
}

/// SQLite has no NaN; it is stored as NULL and read back as NaN.
fn efficiency_to_db(efficiency: f64) -> Value {
    if efficiency.is_nan() {
        Value::Null
    } else {
        Value::Real(efficiency)
    }
}

/// Repository interface for statistic rows.
pub trait StatisticRepository {
    fn list_statistics(&self) -> RepoResult<Vec<Statistic>>;
    fn get_statistic(&self, id: StatisticId) -> RepoResult<Option<Statistic>>;
    fn stage_add_statistics(&self, statistics: &[Statistic]) -> RepoResult<()>;
    fn stage_upsert_statistic(&self, statistic: &Statistic) -> RepoResult<()>;
    fn stage_remove_statistic(&self, statistic: &Statistic) -> RepoResult<()>;
}

/// Statistic repository backed by a [`RosterContext`].
pub struct SqliteStatisticRepository<'ctx> {
    ctx: &'ctx RosterContext,
}

impl<'ctx> SqliteStatisticRepository<'ctx> {
    pub fn new(ctx: &'ctx RosterContext) -> Self {
        Self { ctx }
    }
}

impl StatisticRepository for SqliteStatisticRepository<'_> {
    fn list_statistics(&self) -> RepoResult<Vec<Statistic>> {
        self.ctx.list()
    }

    fn get_statistic(&self, id: StatisticId) -> RepoResult<Option<Statistic>> {
        self.ctx.find(id)
    }

    fn stage_add_statistics(&self, statistics: &[Statistic]) -> RepoResult<()> {
        self.ctx.add_range(statistics);
        Ok(())
    }

    fn stage_upsert_statistic(&self, statistic: &Statistic) -> RepoResult<()> {
        self.ctx.upsert(statistic);
        Ok(())
    }

    fn stage_remove_statistic(&self, statistic: &Statistic) -> RepoResult<()> {
        self.ctx.remove(statistic);
        Ok(())
    }
}
