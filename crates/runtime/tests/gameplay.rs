use game_content::create_player;
use game_core::{
    Action, CardinalDirection, CharacterCreation, CombatStats, DungeonGenerator, Enemy,
    GameConfig, GameState, PlayerClass, PlayerRace, Tile, TileKind,
};
use runtime::{RuntimeConfig, Session};

const DIRECTIONS: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::East,
    CardinalDirection::South,
    CardinalDirection::West,
];

fn party() -> Vec<CharacterCreation> {
    vec![
        CharacterCreation::new("Aria", PlayerClass::Warrior, PlayerRace::Human),
        CharacterCreation::new("Bram", PlayerClass::Cleric, PlayerRace::Dwarf),
        CharacterCreation::new("Cato", PlayerClass::Rogue, PlayerRace::Halfling),
        CharacterCreation::new("Dara", PlayerClass::Mage, PlayerRace::Elf),
    ]
}

/// Fights whatever shares the tile, otherwise wanders and sometimes casts.
fn next_action(state: &GameState, step: usize) -> Action {
    let Some(player) = state.current_player() else {
        return Action::Attack;
    };
    if state.enemy_at(player.position).is_some() {
        return Action::Attack;
    }
    if step % 5 == 0 {
        return Action::UseAbility(step % 3);
    }
    Action::Move(DIRECTIONS[(step / 3) % DIRECTIONS.len()])
}

fn check_invariants(state: &GameState) {
    for player in &state.players {
        assert!(state.board.is_valid_position(player.position));
        let stats = &player.stats.combat;
        assert!((0..=stats.max_health).contains(&stats.current_health));
        assert_eq!(player.is_alive, stats.current_health > 0);
        assert!(player.abilities.iter().all(|ability| ability.current_cooldown <= ability.cooldown));
    }

    assert_eq!(state.is_game_over, state.all_players_dead());
    if !state.is_game_over {
        let actor = state.current_player().expect("current player");
        assert!(actor.is_alive);
    }

    for tile in state.board.tiles() {
        assert_eq!(tile.enemy.is_some(), tile.kind.is_hostile());
    }
}

fn play(seed: &str, width: u32, height: u32, steps: usize) -> Session {
    let config = RuntimeConfig::default()
        .with_seed(seed)
        .with_game(GameConfig::with_board_size(width, height));
    let mut session = Session::new(config);
    session.start_game(&party(), 4).expect("game starts");

    for step in 0..steps {
        let before = session.state().cloned().expect("state");
        let log_len = session.log().len();

        let action = next_action(&before, step);
        let after = session.dispatch(action).expect("dispatched").clone();

        check_invariants(&after);
        assert!(after.board.depth >= before.board.depth);
        assert!(after.turn.turn_number >= before.turn.turn_number);
        assert_eq!(after.seed, before.seed);
        assert!(session.log().len() >= log_len);

        if after.is_game_over {
            break;
        }
    }
    session
}

#[test]
fn long_runs_keep_state_consistent() {
    for seed in ["alpha", "bravo", "charlie"] {
        play(seed, 10, 10, 400);
    }
}

#[test]
fn replaying_a_seed_replays_the_game() {
    let first = play("replay", 8, 8, 200);
    let second = play("replay", 8, 8, 200);

    // only the wall-clock start differs between the two runs
    let (a, b) = (
        first.state().expect("first state"),
        second.state().expect("second state"),
    );
    assert_eq!(a.board, b.board);
    assert_eq!(a.players, b.players);
    assert_eq!(a.turn, b.turn);
    assert_eq!(a.is_game_over, b.is_game_over);
    assert_eq!(first.log(), second.log());
}

/// A lone mage standing on a monster far out of their league.
fn doomed_state() -> GameState {
    let board = DungeonGenerator::new(GameConfig::with_board_size(3, 3)).generate(1, "doom");
    let start = board.center();
    let mage = CharacterCreation::new("Dara", PlayerClass::Mage, PlayerRace::Elf);
    let mut state = GameState::new(board, vec![create_player(0, &mage, start)], "doom", 0);

    let brute = Enemy {
        id: "enemy_brute".into(),
        name: "Brute".into(),
        level: 20,
        stats: CombatStats::new(1_000, 500, 100),
        position: start,
        gold_reward: 0,
        exp_reward: 0,
    };
    state.board.set_tile(
        start,
        Tile::new(start, TileKind::Enemy).revealed().with_enemy(brute),
    );
    state
}

#[test]
fn finished_games_reject_everything() {
    let mut session = Session::new(RuntimeConfig::default());
    session.resume(doomed_state());

    let state = session.attack().expect("dispatched").clone();
    assert!(state.is_game_over);
    assert!(!state.players[0].is_alive);
    assert_eq!(state.players[0].stats.combat.current_health, 0);
    assert_eq!(
        session.log().entries()[1..],
        [
            "Brute attacks Dara for 500 damage!",
            "Dara has been defeated!",
            "Game Over! All players have fallen!",
        ]
    );

    for action in [
        Action::Attack,
        Action::UseAbility(0),
        Action::Move(CardinalDirection::North),
    ] {
        let after = session.dispatch(action).expect("dispatched");
        assert_eq!(*after, state);
        assert_eq!(session.log().last(), Some("The game is over."));
    }
    assert_eq!(session.log().len(), 7);
}
