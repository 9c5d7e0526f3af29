use serde::{Deserialize, Serialize};

/// Session-wide tally of resolved rounds. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
    /// Largest amount credited by a single win or cash-out
    pub highest_win: f64,
    pub total_games: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one resolved round. `amount` only matters for wins.
    pub fn record(&mut self, won: bool, amount: f64) {
        if won {
            self.wins += 1;
            self.highest_win = self.highest_win.max(amount);
        } else {
            self.losses += 1;
        }
        self.total_games += 1;
    }

    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}
