//! Whole-game walkthroughs through the public API.

use std::time::{Duration, Instant};

use pairdice_state::{
    GameConfig, GameState, JsonFileStore, LevelStore, MemoryStore, RoundPhase, SequenceRandom,
};
use pretty_assertions::assert_eq;

fn instant_game(rolls: Vec<u32>) -> GameState {
    let config = GameConfig {
        roll_duration_ms: 0,
        ..GameConfig::default()
    };
    GameState::new(
        config,
        Box::new(SequenceRandom::new(rolls)),
        Box::new(MemoryStore::new()),
    )
}

fn pick(game: &mut GameState, a: usize, b: usize) {
    assert!(game.select_die(a));
    assert!(game.select_die(b));
}

#[test]
fn test_first_pair_then_same_pair_again() {
    // Second roll covers only the five survivors
    let mut game = instant_game(vec![3, 4, 6, 6, 6, 6, 6, 3, 4, 5, 5, 5]);
    let now = Instant::now();

    assert_eq!(game.remaining_dice(), 7);
    assert!(!game.has_rolled());

    game.roll_all(now);
    assert!(game.has_rolled());
    pick(&mut game, 0, 1);
    assert_eq!(game.selected_count(), 2);

    let first = game.confirm_selection().unwrap();
    assert_eq!((first.number_points, first.combination_points), (20, 10));
    assert_eq!(game.score(), 30);
    assert_eq!(game.remaining_dice(), 5);
    assert!(!game.is_game_over());
    assert_eq!(game.tracker().times_number_played(3), 1);
    assert_eq!(game.tracker().times_combination_played(7), 1);

    game.roll_all(now);
    pick(&mut game, 0, 1);
    let second = game.confirm_selection().unwrap();
    assert_eq!((second.number_points, second.combination_points), (40, 20));
    assert_eq!(second.total, 60);
    assert_eq!(game.score(), 90);
    assert_eq!(game.remaining_dice(), 3);
}

#[test]
fn test_running_out_of_dice_ends_game_until_restart() {
    let mut game = instant_game(vec![6, 6, 1, 1, 1, 1, 1, 3, 4, 1, 5, 2, 4, 6]);
    let now = Instant::now();

    game.roll_all(now);
    pick(&mut game, 0, 1);
    game.confirm_selection();
    assert_eq!(game.level(), 2);
    assert_eq!(game.current_level_target(), 150);

    game.roll_all(now);
    for _ in 0..3 {
        pick(&mut game, 0, 1);
        game.confirm_selection();
    }

    assert!(game.is_game_over());
    assert_eq!(game.phase(), RoundPhase::GameOver);
    assert!(!game.roll_all(now));
    assert!(!game.select_die(0));
    assert!(game.confirm_selection().is_none());

    game.reset();
    assert!(!game.is_game_over());
    assert_eq!(game.level(), 1);
    assert_eq!(game.remaining_dice(), 7);
    assert_eq!(game.highest_level(), 2);
    assert!(game.roll_all(now));
}

#[test]
fn test_reaching_target_on_last_pair_advances() {
    let mut game = instant_game(vec![3, 4, 1, 6, 2, 5, 1]);
    game.roll_all(Instant::now());
    for _ in 0..3 {
        pick(&mut game, 0, 1);
        game.confirm_selection();
    }

    assert!(!game.is_game_over());
    assert_eq!(game.level(), 2);
    assert_eq!(game.score(), 0);
    assert_eq!(game.remaining_dice(), 7);
    assert_eq!(game.tracker().times_number_played(3), 1);
    assert_eq!(game.phase(), RoundPhase::NotRolled);
}

#[test]
fn test_animated_roll_settles_in_range() {
    let mut game = GameState::with_store(GameConfig::default(), Box::new(MemoryStore::new()));
    let start = Instant::now();

    game.roll_all(start);
    let mut t = start;
    while game.tick(t) {
        t += Duration::from_millis(16);
    }

    assert!(t >= start + Duration::from_millis(1000));
    assert!(game.dice().iter().all(|d| (1..=6).contains(&d.value())));
}

#[test]
fn test_highest_level_persists_to_file() {
    let path = std::env::temp_dir()
        .join(format!("pairdice-scenario-{}", std::process::id()))
        .join("highest_level.json");

    let config = GameConfig {
        roll_duration_ms: 0,
        ..GameConfig::default()
    };
    let mut game = GameState::new(
        config.clone(),
        Box::new(SequenceRandom::new(vec![6, 6, 1, 1, 1, 1, 1])),
        Box::new(JsonFileStore::new(&path)),
    );
    game.roll_all(Instant::now());
    pick(&mut game, 0, 1);
    game.confirm_selection();
    assert_eq!(game.level(), 2);

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load_highest_level().unwrap(), Some(2));

    let game = GameState::with_store(config, Box::new(reopened));
    assert_eq!(game.highest_level(), 2);
    assert_eq!(game.level(), 1);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
