//! Player use-case service.
//!
//! # Responsibility
//! - Provide roster entry points for reading and staging player changes.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Writes are staged only; the caller owns the save.
//! - Lookup misses are `Ok(None)` and filter misses are an empty list.

use crate::model::player::{Player, PlayerId};
use crate::repo::player_repo::PlayerRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for player operations.
pub struct PlayerService<R: PlayerRepository> {
    repo: R,
}

impl<R: PlayerRepository> PlayerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every stored player.
    pub fn get_all_players(&self) -> RepoResult<Vec<Player>> {
        self.repo.list_players()
    }

    /// Returns players whose position equals `position` exactly.
    pub fn get_players_by_position(&self, position: &str) -> RepoResult<Vec<Player>> {
        self.repo.list_players_by_position(position)
    }

    pub fn get_player_by_id(&self, id: PlayerId) -> RepoResult<Option<Player>> {
        self.repo.get_player(id)
    }

    /// Stages an insert for a new key, or a full overwrite of an existing one.
    pub fn add_or_update_player(&self, player: &Player) -> RepoResult<()> {
        self.repo.stage_upsert_player(player)
    }

    /// Stages inserts for a batch of players, e.g. when seeding a roster.
    pub fn add_players(&self, players: &[Player]) -> RepoResult<()> {
        self.repo.stage_add_players(players)
    }

    /// Stages removal of the player's row by key.
    pub fn delete_player(&self, player: &Player) -> RepoResult<()> {
        self.repo.stage_remove_player(player)
    }
}
