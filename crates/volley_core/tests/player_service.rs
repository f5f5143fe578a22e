use volley_core::seed::demo_players;
use volley_core::{Player, PlayerService, RosterContext, SqlitePlayerRepository};

fn seeded_context() -> RosterContext {
    let ctx = RosterContext::open_in_memory().unwrap();
    ctx.add_range(&demo_players());
    ctx.save_changes().unwrap();
    ctx
}

fn service(ctx: &RosterContext) -> PlayerService<SqlitePlayerRepository<'_>> {
    PlayerService::new(SqlitePlayerRepository::new(ctx))
}

#[test]
fn get_all_players_returns_all_players() {
    let ctx = seeded_context();

    let players = service(&ctx).get_all_players().unwrap();
    assert_eq!(players.len(), 3);
    assert!(players.iter().any(|p| p.player_name == "Matias Sanchez"));
}

#[test]
fn get_players_by_position_returns_only_exact_matches() {
    let ctx = seeded_context();
    let service = service(&ctx);

    let setters = service.get_players_by_position("Setter").unwrap();
    assert_eq!(setters.len(), 1);
    assert_eq!(setters[0].player_name, "Matias Sanchez");

    assert!(service.get_players_by_position("setter").unwrap().is_empty());
    assert!(service.get_players_by_position("Libero").unwrap().is_empty());
}

#[test]
fn get_player_by_id_returns_player_or_none() {
    let ctx = seeded_context();
    let service = service(&ctx);

    let player = service.get_player_by_id(1).unwrap().unwrap();
    assert_eq!(player, demo_players()[0]);
    assert!(service.get_player_by_id(99).unwrap().is_none());
}

#[test]
fn add_or_update_player_with_new_key_adds_player() {
    let ctx = seeded_context();
    let service = service(&ctx);
    let new_player = Player {
        player_id: 4,
        player_name: "Facundo Conte".to_string(),
        number: 7,
        team_name: "Argentina".to_string(),
        position: "Outside Hitter".to_string(),
        age: "34".to_string(),
        height: "197cm".to_string(),
    };

    service.add_or_update_player(&new_player).unwrap();
    assert!(ctx.find::<Player>(4).unwrap().is_none(), "not persisted before save");
    ctx.save_changes().unwrap();

    assert_eq!(ctx.find::<Player>(4).unwrap(), Some(new_player));
    assert_eq!(service.get_players_by_position("Outside Hitter").unwrap().len(), 2);
}

#[test]
fn add_or_update_player_with_existing_key_updates_in_place() {
    let ctx = seeded_context();
    let service = service(&ctx);
    let mut player = ctx.find::<Player>(1).unwrap().unwrap();
    player.height = "180cm".to_string();

    service.add_or_update_player(&player).unwrap();
    ctx.save_changes().unwrap();

    let updated = ctx.find::<Player>(1).unwrap().unwrap();
    assert_eq!(updated.height, "180cm");
    assert_eq!(updated.player_name, "Matias Sanchez");
    assert_eq!(service.get_all_players().unwrap().len(), 3);
}

#[test]
fn add_players_stages_a_batch() {
    let ctx = RosterContext::open_in_memory().unwrap();
    let service = service(&ctx);

    service.add_players(&demo_players()).unwrap();
    assert!(service.get_all_players().unwrap().is_empty());
    ctx.save_changes().unwrap();

    assert_eq!(service.get_all_players().unwrap(), demo_players());
}

#[test]
fn delete_player_removes_player_after_save() {
    let ctx = seeded_context();
    let service = service(&ctx);
    let player = ctx.find::<Player>(1).unwrap().unwrap();

    service.delete_player(&player).unwrap();
    ctx.save_changes().unwrap();

    assert!(ctx.find::<Player>(1).unwrap().is_none());
    assert!(service.get_players_by_position("Setter").unwrap().is_empty());
}
