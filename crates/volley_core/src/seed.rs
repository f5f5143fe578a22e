//! Demo roster: the men's Argentina squad from the 2020 Olympics plus the
//! teams it faced. Used by the CLI probe and as the shared test fixture.

use crate::model::player::Player;
use crate::model::statistic::Statistic;
use crate::model::team::Team;
use crate::repo::{RepoResult, RosterContext};

pub fn demo_players() -> Vec<Player> {
    vec![
        player(1, "Matias Sanchez", 1, "Setter", "27", "175cm"),
        player(2, "Federico Pereyra", 2, "Opposite Hitter", "35", "200cm"),
        player(3, "Cristian Poglajen", 6, "Outside Hitter", "34", "195cm"),
    ]
}

pub fn demo_statistics() -> Vec<Statistic> {
    vec![
        statistic(1, "Matias Sanchez", [0, 0, 0, 0], 0.0),
        statistic(2, "Federico Pereyra", [7, 5, 2, 0], 31.25),
        statistic(3, "Cristian Poglajen", [28, 25, 2, 1], 50.0),
    ]
}

pub fn demo_teams() -> Vec<Team> {
    ["Argentina", "Brazil", "Canada"]
        .into_iter()
        .zip(1..)
        .map(|(country, id)| Team {
            id,
            team_name: country.to_string(),
            location: country.to_string(),
            league_type: "2020 Olympics".to_string(),
            category: "Indoor".to_string(),
            gender: "Men".to_string(),
        })
        .collect()
}

/// Stages and saves the whole demo roster. Returns the number of rows written.
///
/// Fails with a storage error if any demo key is already present.
pub fn seed_demo_roster(ctx: &RosterContext) -> RepoResult<usize> {
    ctx.add_range(&demo_players());
    ctx.add_range(&demo_statistics());
    ctx.add_range(&demo_teams());
    ctx.save_changes()
}

fn player(
    player_id: i64,
    name: &str,
    number: i32,
    position: &str,
    age: &str,
    height: &str,
) -> Player {
    Player {
        player_id,
        player_name: name.to_string(),
        number,
        team_name: "Argentina".to_string(),
        position: position.to_string(),
        age: age.to_string(),
        height: height.to_string(),
    }
}

/// `points` is `[total, attack, block, serve]`.
fn statistic(id: i64, name: &str, points: [i32; 4], efficiency: f64) -> Statistic {
    let [total_points, attack_points, block_points, serve_points] = points;
    Statistic {
        id,
        player_name: name.to_string(),
        total_points,
        attack_points,
        block_points,
        serve_points,
        efficiency,
    }
}
