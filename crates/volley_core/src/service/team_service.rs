//! Team use-case service.
//!
//! # Invariants
//! - `add_team` is insert-only and `update_team` is update-only; a wrong
//!   choice surfaces as an error from `RosterContext::save_changes`.
//! - League filtering is an exact match; no match yields an empty list.

use crate::model::team::{Team, TeamId};
use crate::repo::team_repo::TeamRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for team operations.
pub struct TeamService<R: TeamRepository> {
    repo: R,
}

impl<R: TeamRepository> TeamService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all_teams(&self) -> RepoResult<Vec<Team>> {
        self.repo.list_teams()
    }

    /// Returns teams whose league type equals `league_type` exactly.
    pub fn get_teams_by_league(&self, league_type: &str) -> RepoResult<Vec<Team>> {
        self.repo.list_teams_by_league(league_type)
    }

    /// Gets one team by id, `Ok(None)` when absent.
    pub fn get_team(&self, id: TeamId) -> RepoResult<Option<Team>> {
        self.repo.get_team(id)
    }

    /// Stages an insert of a new team.
    pub fn add_team(&self, team: &Team) -> RepoResult<()> {
        self.repo.stage_insert_team(team)
    }

    pub fn add_teams(&self, teams: &[Team]) -> RepoResult<()> {
        self.repo.stage_add_teams(teams)
    }

    /// Stages an overwrite of an existing team's fields.
    pub fn update_team(&self, team: &Team) -> RepoResult<()> {
        self.repo.stage_update_team(team)
    }

    pub fn delete_team(&self, team: &Team) -> RepoResult<()> {
        self.repo.stage_remove_team(team)
    }
}
