use crate::combat::update_cooldowns;

use super::GameEngine;

/// Turn bookkeeping methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Closes the current hero's turn.
    ///
    /// Ticks the acting hero's cooldowns, then hands the turn to the next
    /// living hero in roster order. The scan is capped at one full lap, so
    /// with nobody alive it stops one step past the acting hero. The round
    /// counter advances only when the turn lands on the first roster slot.
    pub fn end_turn(&mut self) {
        let count = self.state.players.len();
        if count == 0 {
            return;
        }

        let current = self.state.turn.current_player_index;
        if let Some(player) = self.state.players.get_mut(current) {
            update_cooldowns(player);
        }

        let mut next = (current + 1) % count;
        let mut attempts = 0;
        while attempts < count && self.state.players.get(next).is_some_and(|p| !p.is_alive) {
            next = (next + 1) % count;
            attempts += 1;
        }

        self.state.turn.current_player_index = next;
        if next == 0 {
            self.state.turn.turn_number += 1;
        }
    }

    /// Ends the game once every hero has fallen.
    ///
    /// Returns true only on the call that flips the game over; a finished
    /// game is never re-evaluated.
    pub fn check_game_over(&mut self, log: &mut Vec<String>) -> bool {
        if self.state.is_game_over || !self.state.all_players_dead() {
            return false;
        }
        self.state.is_game_over = true;
        log.push("Game Over! All players have fallen!".to_string());
        true
    }
}
