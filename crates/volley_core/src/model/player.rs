//! Player roster record.

use serde::{Deserialize, Serialize};

/// Primary key of a player row.
pub type PlayerId = i64;

/// One rostered player.
///
/// `age` and `height` are free-form display strings (`"27"`, `"175cm"`) and
/// are stored without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub player_name: String,
    /// Shirt number.
    pub number: i32,
    /// Team name as text; not a key into `teams`.
    pub team_name: String,
    /// Court position, matched exactly by position filters.
    pub position: String,
    pub age: String,
    pub height: String,
}
