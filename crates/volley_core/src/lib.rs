//! Core roster logic for the volleyball team manager.
//! Player, statistic and team services over a SQLite-backed persistence
//! context with explicit save semantics.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::player::{Player, PlayerId};
pub use model::statistic::{Statistic, StatisticId};
pub use model::team::{Team, TeamId};
pub use repo::entity::{Entity, TableSpec};
pub use repo::player_repo::{PlayerRepository, SqlitePlayerRepository};
pub use repo::statistic_repo::{SqliteStatisticRepository, StatisticRepository};
pub use repo::team_repo::{SqliteTeamRepository, TeamRepository};
pub use repo::{RepoError, RepoResult, RosterContext};
pub use service::player_service::PlayerService;
pub use service::statistic_service::StatisticService;
pub use service::team_service::TeamService;

/// Minimal health-check API for integration smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
