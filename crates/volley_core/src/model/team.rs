//! Team record.

use serde::{Deserialize, Serialize};

/// Primary key of a team row.
pub type TeamId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
    pub location: String,
    /// Competition label (`"2020 Olympics"`), matched exactly by league filters.
    pub league_type: String,
    /// Discipline, e.g. `"Indoor"` or `"Beach"`.
    pub category: String,
    pub gender: String,
}
