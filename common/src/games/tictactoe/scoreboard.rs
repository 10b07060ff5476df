use super::types::{Mark, TerminalStatus};

/// Running totals for one session. Owned by the session and updated once per
/// finished round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: TerminalStatus) {
        match status {
            TerminalStatus::Won(Mark::X) => self.x_wins += 1,
            TerminalStatus::Won(Mark::O) => self.o_wins += 1,
            TerminalStatus::Tied => self.ties += 1,
            TerminalStatus::Ongoing => {}
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}
