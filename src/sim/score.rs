//! Match scoring

use serde::{Deserialize, Serialize};

/// One of the two competitors
///
/// The player defends the bottom edge of the field, the computer the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    PlayerWon,
    ComputerWon,
}

impl MatchOutcome {
    pub fn winner(self) -> Side {
        match self {
            MatchOutcome::PlayerWon => Side::Player,
            MatchOutcome::ComputerWon => Side::Computer,
        }
    }
}

/// Running score of the current match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
    winning_score: u32,
}

impl Score {
    pub fn new(winning_score: u32) -> Self {
        Self {
            player: 0,
            computer: 0,
            winning_score,
        }
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    /// Award a point to `side`
    ///
    /// When that point reaches the winning score both counters go back to
    /// zero and the outcome is returned; otherwise play continues.
    pub fn record(&mut self, side: Side) -> Option<MatchOutcome> {
        let counter = match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        };
        *counter += 1;

        if *counter < self.winning_score {
            return None;
        }

        self.reset();
        Some(match side {
            Side::Player => MatchOutcome::PlayerWon,
            Side::Computer => MatchOutcome::ComputerWon,
        })
    }

    pub fn reset(&mut self) {
        self.player = 0;
        self.computer = 0;
    }
}
