//! Statistic use-case service.
//!
//! Mirrors the player service: reads go straight to the repository, writes
//! are staged for the caller's save.

use crate::model::statistic::{Statistic, StatisticId};
use crate::repo::statistic_repo::StatisticRepository;
use crate::repo::RepoResult;

pub struct StatisticService<R: StatisticRepository> {
    repo: R,
}

impl<R: StatisticRepository> StatisticService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all_statistics(&self) -> RepoResult<Vec<Statistic>> {
        self.repo.list_statistics()
    }

    /// Returns `Ok(None)` for an unknown id.
    pub fn get_statistic_by_id(&self, id: StatisticId) -> RepoResult<Option<Statistic>> {
        self.repo.get_statistic(id)
    }

    /// Stages an insert-or-update keyed by `statistic.id`.
    pub fn add_or_update_statistic(&self, statistic: &Statistic) -> RepoResult<()> {
        self.repo.stage_upsert_statistic(statistic)
    }

    pub fn add_statistics(&self, statistics: &[Statistic]) -> RepoResult<()> {
        self.repo.stage_add_statistics(statistics)
    }

    pub fn delete_statistic(&self, statistic: &Statistic) -> RepoResult<()> {
        self.repo.stage_remove_statistic(statistic)
    }
}
