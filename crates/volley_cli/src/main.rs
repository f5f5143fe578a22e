//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `volley_core` linkage and configuration from the environment.
//! - Seed the demo roster into an empty store and print a short summary.

use std::process::ExitCode;
use volley_core::seed::seed_demo_roster;
use volley_core::{
    CoreConfig, Player, PlayerService, RosterContext, SqlitePlayerRepository,
    SqliteTeamRepository, TeamService,
};

fn main() -> ExitCode {
    println!("volley_core ping={}", volley_core::ping());
    println!("volley_core version={}", volley_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("volley_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CoreConfig::from_env()?;
    config.init_logging()?;

    let ctx = config.open_context()?;
    if ctx.count::<Player>()? == 0 {
        let rows = seed_demo_roster(&ctx)?;
        println!("seeded demo roster rows={rows}");
    }

    print_summary(&ctx)
}

fn print_summary(ctx: &RosterContext) -> Result<(), Box<dyn std::error::Error>> {
    let players = PlayerService::new(SqlitePlayerRepository::new(ctx));
    let teams = TeamService::new(SqliteTeamRepository::new(ctx));

    println!("players={}", players.get_all_players()?.len());
    println!("teams={}", teams.get_all_teams()?.len());
    for setter in players.get_players_by_position("Setter")? {
        println!("setter #{} {}", setter.number, setter.player_name);
    }
    Ok(())
}
