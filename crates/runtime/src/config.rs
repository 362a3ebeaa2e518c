use game_core::GameConfig;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Fixed seed for every game; `None` seeds from the clock at game start.
    pub seed: Option<String>,
    /// How many recent log lines a front end should show.
    pub log_window: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_LOG_WINDOW: usize = 10;

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            log_window: Self::DEFAULT_LOG_WINDOW,
        }
    }
}
