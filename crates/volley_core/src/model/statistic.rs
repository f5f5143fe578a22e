//! Per-player scoring statistic record.

use serde::{Deserialize, Serialize};

/// Primary key of a statistic row.
pub type StatisticId = i64;

/// Scoring summary for one player.
///
/// `efficiency` is a percentage (`31.25` means 31.25%). No relation between
/// the point columns is enforced, and any `f64` (including NaN) is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub id: StatisticId,
    pub player_name: String,
    pub total_points: i32,
    pub attack_points: i32,
    pub block_points: i32,
    pub serve_points: i32,
    pub efficiency: f64,
}
