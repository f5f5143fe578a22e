//! Roster domain records.
//!
//! # Responsibility
//! - Define the persisted shapes for players, statistics and teams.
//!
//! # Invariants
//! - Every record is identified by an integer key unique within its table.
//! - Records never reference each other by key; names are plain text.

pub mod player;
pub mod statistic;
pub mod team;
