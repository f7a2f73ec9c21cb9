use std::fmt;

use serde::{Deserialize, Serialize};

/// The server's scored outcome for a completed quiz attempt.
///
/// Created exactly once per attempt, from a confirmed submission
/// response, and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    score: u32,
    total: u32,
    points_earned: u32,
}

impl QuizOutcome {
    /// Create a new outcome.
    pub fn new(score: u32, total: u32, points_earned: u32) -> Self {
        Self {
            score,
            total,
            points_earned,
        }
    }

    /// Number of correctly answered questions.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions in the attempt.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Reward points awarded for the attempt.
    pub fn points_earned(&self) -> u32 {
        self.points_earned
    }

    /// Score as a whole-number percentage, rounded to nearest.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.score) / f64::from(self.total) * 100.0).round() as u32
    }
}

/// Identifier of a challenge; part of the challenge action URLs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeId(u32);

impl ChallengeId {
    /// Create a new challenge id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of joining or completing a challenge.
///
/// Joining awards no points, so `points_earned` is only present for
/// completions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    message: String,
    points_earned: Option<u32>,
}

impl ChallengeOutcome {
    /// Create a new challenge outcome.
    pub fn new(message: impl Into<String>, points_earned: Option<u32>) -> Self {
        Self {
            message: message.into(),
            points_earned,
        }
    }

    /// The server's confirmation message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reward points, for completed challenges.
    pub fn points_earned(&self) -> Option<u32> {
        self.points_earned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(QuizOutcome::new(1, 2, 10).percentage(), 50);
        assert_eq!(QuizOutcome::new(2, 3, 10).percentage(), 67);
        assert_eq!(QuizOutcome::new(1, 3, 10).percentage(), 33);
    }

    #[test]
    fn percentage_of_empty_attempt_is_zero() {
        assert_eq!(QuizOutcome::new(0, 0, 0).percentage(), 0);
    }
}
