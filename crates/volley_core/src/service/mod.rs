//! Roster use-case services.
//!
//! # Responsibility
//! - Expose player, statistic and team operations to the enclosing layer.
//! - Keep callers decoupled from storage details via repository traits.
//!
//! Services are independent of each other; they only share the
//! `RosterContext` their repositories borrow.

pub mod player_service;
pub mod statistic_service;
pub mod team_service;
