//! Plain-text views of the game state.
use std::fmt::Write;

use game_core::{GameState, Player, TileKind};

/// Party overview followed by what lies on the current hero's tile.
pub fn status(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Level {} | Turn {} | Seed {}",
        state.board.depth, state.turn.turn_number, state.seed
    );

    for (index, player) in state.players.iter().enumerate() {
        let marker = if index == state.turn.current_player_index && !state.is_game_over {
            '>'
        } else {
            ' '
        };
        let _ = writeln!(out, "{marker} {}", player_line(player));
    }

    if state.is_game_over {
        out.push_str("Game over.");
        return out;
    }

    if let Some(player) = state.current_player() {
        out.push_str(&tile_line(state, player));
    }
    out
}

fn player_line(player: &Player) -> String {
    let stats = &player.stats.combat;
    let abilities = player
        .abilities
        .iter()
        .enumerate()
        .map(|(slot, ability)| match ability.current_cooldown {
            0 => format!("{}:{}", slot + 1, ability.name),
            turns => format!("{}:{} ({turns})", slot + 1, ability.name),
        })
        .collect::<Vec<_>>()
        .join(", ");
    let condition = if player.is_alive {
        format!("HP {}/{}", stats.current_health, stats.max_health)
    } else {
        "DEAD".to_string()
    };

    format!(
        "{} the {} {} | {condition} | ATK {} DEF {} | {} gold | at {} | {abilities}",
        player.name, player.race, player.class, stats.attack, stats.defense, player.gold,
        player.position
    )
}

fn tile_line(state: &GameState, player: &Player) -> String {
    let Some(tile) = state.board.tile(player.position) else {
        return String::new();
    };
    match (&tile.enemy, tile.kind) {
        (Some(enemy), _) => format!(
            "{} faces {} (level {}, HP {}/{}).",
            player.name,
            enemy.name,
            enemy.level,
            enemy.stats.current_health,
            enemy.stats.max_health
        ),
        (None, TileKind::Start) => format!("{} stands at the dungeon entrance.", player.name),
        (None, TileKind::Event) => format!("{} senses something strange here.", player.name),
        (None, _) => format!("{} stands in an empty room.", player.name),
    }
}
