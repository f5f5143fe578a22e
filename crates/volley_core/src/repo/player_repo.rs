//! Player repository contract and SQLite mapping.
//!
//! # Invariants
//! - Position filtering is an exact, case-sensitive match.
//! - Write methods only stage; `RosterContext::save_changes` persists.

use super::context::RosterContext;
use super::entity::{Entity, TableSpec};
use super::RepoResult;
use crate::model::player::{Player, PlayerId};
use rusqlite::types::Value;
use rusqlite::Row;

static PLAYER_TABLE: TableSpec = TableSpec {
    entity: "player",
    table: "players",
    key_column: "player_id",
    columns: &[
        "player_name",
        "number",
        "team_name",
        "position",
        "age",
        "height",
    ],
};

impl Entity for Player {
    fn table() -> &'static TableSpec {
        &PLAYER_TABLE
    }

    fn key(&self) -> i64 {
        self.player_id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.player_name.clone()),
            Value::Integer(i64::from(self.number)),
            Value::Text(self.team_name.clone()),
            Value::Text(self.position.clone()),
            Value::Text(self.age.clone()),
            Value::Text(self.height.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            player_id: row.get("player_id")?,
            player_name: row.get("player_name")?,
            number: row.get("number")?,
            team_name: row.get("team_name")?,
            position: row.get("position")?,
            age: row.get("age")?,
            height: row.get("height")?,
        })
    }
}

/// Repository interface for player rows.
pub trait PlayerRepository {
    fn list_players(&self) -> RepoResult<Vec<Player>>;
    fn list_players_by_position(&self, position: &str) -> RepoResult<Vec<Player>>;
    fn get_player(&self, id: PlayerId) -> RepoResult<Option<Player>>;
    /// Stages inserts for a batch of new players.
    fn stage_add_players(&self, players: &[Player]) -> RepoResult<()>;
    /// Stages an insert-or-update keyed by `player_id`.
    fn stage_upsert_player(&self, player: &Player) -> RepoResult<()>;
    fn stage_remove_player(&self, player: &Player) -> RepoResult<()>;
}

/// Player repository backed by a [`RosterContext`].
pub struct SqlitePlayerRepository<'ctx> {
    ctx: &'ctx RosterContext,
}

impl<'ctx> SqlitePlayerRepository<'ctx> {
    pub fn new(ctx: &'ctx RosterContext) -> Self {
        Self { ctx }
    }
}

impl PlayerRepository for SqlitePlayerRepository<'_> {
    fn list_players(&self) -> RepoResult<Vec<Player>> {
        self.ctx.list()
    }

    fn list_players_by_position(&self, position: &str) -> RepoResult<Vec<Player>> {
        self.ctx.list_where("position", position)
    }

    fn get_player(&self, id: PlayerId) -> RepoResult<Option<Player>> {
        self.ctx.find(id)
    }

    fn stage_add_players(&self, players: &[Player]) -> RepoResult<()> {
        self.ctx.add_range(players);
        Ok(())
    }

    fn stage_upsert_player(&self, player: &Player) -> RepoResult<()> {
        self.ctx.upsert(player);
        Ok(())
    }

    fn stage_remove_player(&self, player: &Player) -> RepoResult<()> {
        self.ctx.remove(player);
        Ok(())
    }
}
