//! Team repository contract and SQLite mapping.
//!
//! # Invariants
//! - Teams have no upsert: inserts and updates are staged separately and
//!   fail at save time on a duplicate or missing key respectively.
//! - League filtering is an exact, case-sensitive match.

use super::context::RosterContext;
use super::entity::{Entity, TableSpec};
use super::RepoResult;
use crate::model::team::{Team, TeamId};
use rusqlite::types::Value;
use rusqlite::Row;

static TEAM_TABLE: TableSpec = TableSpec {
    entity: "team",
    table: "teams",
    key_column: "id",
    columns: &["team_name", "location", "league_type", "category", "gender"],
};

impl Entity for Team {
    fn table() -> &'static TableSpec {
        &TEAM_TABLE
    }

    fn key(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.team_name.clone()),
            Value::Text(self.location.clone()),
            Value::Text(self.league_type.clone()),
            Value::Text(self.category.clone()),
            Value::Text(self.gender.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            team_name: row.get("team_name")?,
            location: row.get("location")?,
            league_type: row.get("league_type")?,
            category: row.get("category")?,
            gender: row.get("gender")?,
        })
    }
}

/// Repository interface for team rows.
pub trait TeamRepository {
    fn list_teams(&self) -> RepoResult<Vec<Team>>;
    fn list_teams_by_league(&self, league_type: &str) -> RepoResult<Vec<Team>>;
    fn get_team(&self, id: TeamId) -> RepoResult<Option<Team>>;
    fn stage_add_teams(&self, teams: &[Team]) -> RepoResult<()>;
    fn stage_insert_team(&self, team: &Team) -> RepoResult<()>;
    fn stage_update_team(&self, team: &Team) -> RepoResult<()>;
    fn stage_remove_team(&self, team: &Team) -> RepoResult<()>;
}

/// Team repository backed by a [`RosterContext`].
pub struct SqliteTeamRepository<'ctx> {
    ctx: &'ctx RosterContext,
}

impl<'ctx> SqliteTeamRepository<'ctx> {
    pub fn new(ctx: &'ctx RosterContext) -> Self {
        Self { ctx }
    }
}

impl TeamRepository for SqliteTeamRepository<'_> {
    fn list_teams(&self) -> RepoResult<Vec<Team>> {
        self.ctx.list()
    }

    fn list_teams_by_league(&self, league_type: &str) -> RepoResult<Vec<Team>> {
        self.ctx.list_where("league_type", league_type)
    }

    fn get_team(&self, id: TeamId) -> RepoResult<Option<Team>> {
        self.ctx.find(id)
    }

    fn stage_add_teams(&self, teams: &[Team]) -> RepoResult<()> {
        self.ctx.add_range(teams);
        Ok(())
    }

    fn stage_insert_team(&self, team: &Team) -> RepoResult<()> {
        self.ctx.add(team);
        Ok(())
    }

    fn stage_update_team(&self, team: &Team) -> RepoResult<()> {
        self.ctx.update(team);
        Ok(())
    }

    fn stage_remove_team(&self, team: &Team) -> RepoResult<()> {
        self.ctx.remove(team);
        Ok(())
    }
}
