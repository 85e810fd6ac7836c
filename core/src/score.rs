use serde::{Deserialize, Serialize};

/// Match bookkeeping: every resolution pass counts as one match, and the
/// score rises by one every `matches_per_score` passes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    matches: u32,
    score: u32,
    matches_per_score: u32,
}

impl ScoreState {
    pub const fn new(matches_per_score: u32) -> Self {
        let matches_per_score = if matches_per_score == 0 {
            1
        } else {
            matches_per_score
        };
        Self {
            matches: 0,
            score: 0,
            matches_per_score,
        }
    }

    pub const fn matches(&self) -> u32 {
        self.matches
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Records one resolution pass; true when the score stepped.
    pub fn record_pass(&mut self) -> bool {
        self.matches += 1;
        if self.matches % self.matches_per_score == 0 {
            self.score += 1;
            true
        } else {
            false
        }
    }
}
