use volley_core::seed::demo_teams;
use volley_core::{RepoError, RosterContext, SqliteTeamRepository, Team, TeamService};

fn seeded_context() -> RosterContext {
    let ctx = RosterContext::open_in_memory().unwrap();
    ctx.add_range(&demo_teams());
    ctx.save_changes().unwrap();
    ctx
}

fn service(ctx: &RosterContext) -> TeamService<SqliteTeamRepository<'_>> {
    TeamService::new(SqliteTeamRepository::new(ctx))
}

fn france() -> Team {
    Team {
        id: 4,
        team_name: "France".to_string(),
        location: "France".to_string(),
        league_type: "2020 Olympics".to_string(),
        category: "Indoor".to_string(),
        gender: "Men".to_string(),
    }
}

#[test]
fn get_all_teams_returns_all_teams() {
    let ctx = seeded_context();

    let teams = service(&ctx).get_all_teams().unwrap();
    assert_eq!(teams.len(), 3);
    assert!(teams.iter().any(|t| t.team_name == "Argentina"));
}

#[test]
fn get_teams_by_league_with_valid_league_returns_matches() {
    let ctx = seeded_context();
    let mut beach = france();
    beach.id = 5;
    beach.league_type = "World Tour".to_string();
    ctx.add(&beach);
    ctx.save_changes().unwrap();

    let teams = service(&ctx).get_teams_by_league("2020 Olympics").unwrap();
    assert_eq!(teams.len(), 3);
    assert!(teams.iter().all(|t| t.league_type == "2020 Olympics"));
}

#[test]
fn get_teams_by_league_with_unknown_league_returns_empty() {
    let ctx = seeded_context();

    let teams = service(&ctx).get_teams_by_league("NonExistingLeague").unwrap();
    assert!(teams.is_empty());
}

#[test]
fn get_team_returns_team_or_none() {
    let ctx = seeded_context();
    let service = service(&ctx);

    assert_eq!(service.get_team(1).unwrap().unwrap().team_name, "Argentina");
    assert!(service.get_team(99).unwrap().is_none());
}

#[test]
fn add_team_with_new_team_adds_it() {
    let ctx = seeded_context();

    service(&ctx).add_team(&france()).unwrap();
    ctx.save_changes().unwrap();

    assert_eq!(ctx.find::<Team>(4).unwrap(), Some(france()));
}

#[test]
fn add_team_with_existing_key_fails_on_save() {
    let ctx = seeded_context();
    let mut duplicate = france();
    duplicate.id = 1;

    service(&ctx).add_team(&duplicate).unwrap();
    let err = ctx.save_changes().unwrap_err();

    assert!(matches!(err, RepoError::Db(_)), "unexpected error: {err}");
    assert_eq!(ctx.find::<Team>(1).unwrap().unwrap().team_name, "Argentina");
}

#[test]
fn update_team_with_existing_team_updates_it() {
    let ctx = seeded_context();
    let service = service(&ctx);
    let mut team = service.get_team(1).unwrap().unwrap();
    team.location = "New Argentina".to_string();

    service.update_team(&team).unwrap();
    ctx.save_changes().unwrap();

    assert_eq!(ctx.find::<Team>(1).unwrap().unwrap().location, "New Argentina");
    assert_eq!(service.get_all_teams().unwrap().len(), 3);
}

#[test]
fn update_team_with_unknown_key_fails_on_save() {
    let ctx = seeded_context();

    service(&ctx).update_team(&france()).unwrap();
    let err = ctx.save_changes().unwrap_err();

    assert!(matches!(err, RepoError::NotFound { entity: "team", id: 4 }));
    assert!(ctx.find::<Team>(4).unwrap().is_none());
}

#[test]
fn delete_team_with_existing_team_deletes_it() {
    let ctx = seeded_context();
    let service = service(&ctx);
    let team = service.get_team(1).unwrap().unwrap();

    service.delete_team(&team).unwrap();
    ctx.save_changes().unwrap();

    assert!(service.get_team(1).unwrap().is_none());
}

#[test]
fn add_teams_stages_every_team() {
    let ctx = RosterContext::open_in_memory().unwrap();
    let service = service(&ctx);

    service.add_teams(&demo_teams()).unwrap();
    assert_eq!(ctx.pending_changes(), 3);
    ctx.save_changes().unwrap();

    assert_eq!(service.get_all_teams().unwrap(), demo_teams());
}
