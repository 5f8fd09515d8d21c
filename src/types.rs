//! Common types used throughout the rating engine

use crate::error::RatingError;
use crate::rating::scale::{INITIAL_DEVIATION, INITIAL_RATING, INITIAL_VOLATILITY};
use serde::{Deserialize, Serialize};

/// Unique identifier for players
pub type PlayerId = String;

/// A player's rating state at one point in time.
///
/// Immutable value: updates produce a new `RatingState`, never mutate one in
/// place. The constructor enforces the invariants `deviation > 0` and
/// `volatility > 0`; states deserialized from untrusted data can be re-checked
/// with [`RatingState::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingState {
    pub rating: f64,
    pub deviation: f64,
    pub volatility: f64,
}

impl RatingState {
    /// Create a rating state, rejecting invalid values up front
    pub fn new(rating: f64, deviation: f64, volatility: f64) -> crate::error::Result<Self> {
        let state = Self {
            rating,
            deviation,
            volatility,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the rating-state invariants
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.rating.is_finite() {
            return Err(RatingError::InvalidInput {
                reason: format!("rating must be finite, got {}", self.rating),
            }
            .into());
        }

        if !self.deviation.is_finite() || self.deviation <= 0.0 {
            return Err(RatingError::InvalidInput {
                reason: format!("deviation must be positive, got {}", self.deviation),
            }
            .into());
        }

        if !self.volatility.is_finite() || self.volatility <= 0.0 {
            return Err(RatingError::InvalidInput {
                reason: format!("volatility must be positive, got {}", self.volatility),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for RatingState {
    /// The unrated player: 1500 rating, 350 deviation, 0.06 volatility
    fn default() -> Self {
        Self {
            rating: INITIAL_RATING,
            deviation: INITIAL_DEVIATION,
            volatility: INITIAL_VOLATILITY,
        }
    }
}

/// An opponent as seen by the player being updated.
///
/// A frozen snapshot of the opponent's prior-period rating and deviation.
/// Opponent volatility never enters the update math, so it is not carried;
/// converting from a `RatingState` drops it. Snapshots are taken by value,
/// so a concurrently-updated player can never leak into another player's
/// calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub rating: f64,
    pub deviation: f64,
}

impl Opponent {
    /// Create an opponent snapshot, rejecting invalid values up front
    pub fn new(rating: f64, deviation: f64) -> crate::error::Result<Self> {
        let opponent = Self { rating, deviation };
        opponent.validate()?;
        Ok(opponent)
    }

    /// Check the opponent invariants
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.rating.is_finite() {
            return Err(RatingError::InvalidInput {
                reason: format!("opponent rating must be finite, got {}", self.rating),
            }
            .into());
        }

        if !self.deviation.is_finite() || self.deviation <= 0.0 {
            return Err(RatingError::InvalidInput {
                reason: format!("opponent deviation must be positive, got {}", self.deviation),
            }
            .into());
        }

        Ok(())
    }
}

impl From<RatingState> for Opponent {
    fn from(state: RatingState) -> Self {
        Self {
            rating: state.rating,
            deviation: state.deviation,
        }
    }
}

/// Outcome of a single match from the updated player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// The canonical score value: 1 for a win, 0.5 for a draw, 0 for a loss
    pub fn score(&self) -> f64 {
        match self {
            MatchResult::Win => 1.0,
            MatchResult::Draw => 0.5,
            MatchResult::Loss => 0.0,
        }
    }

    /// Validate a raw numeric score from an external record
    pub fn from_score(score: f64) -> crate::error::Result<Self> {
        if score == 1.0 {
            Ok(MatchResult::Win)
        } else if score == 0.5 {
            Ok(MatchResult::Draw)
        } else if score == 0.0 {
            Ok(MatchResult::Loss)
        } else {
            Err(RatingError::InvalidInput {
                reason: format!("score must be 0, 0.5 or 1, got {}", score),
            }
            .into())
        }
    }
}

/// One match in a rating period: the result plus the opponent it was
/// played against. A period is a slice of these; order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub opponent: Opponent,
}

impl MatchOutcome {
    pub fn new(result: MatchResult, opponent: Opponent) -> Self {
        Self { result, opponent }
    }

    /// A win against the given opponent
    pub fn win(opponent: Opponent) -> Self {
        Self::new(MatchResult::Win, opponent)
    }

    /// A draw against the given opponent
    pub fn draw(opponent: Opponent) -> Self {
        Self::new(MatchResult::Draw, opponent)
    }

    /// A loss against the given opponent
    pub fn loss(opponent: Opponent) -> Self {
        Self::new(MatchResult::Loss, opponent)
    }
}

/// One player's input row for a batch update: who they are, where they
/// started the period, and what they played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPeriod {
    pub player_id: PlayerId,
    pub prior: RatingState,
    pub outcomes: Vec<MatchOutcome>,
}

/// Rating change information for a player after a period update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old: RatingState,
    pub new: RatingState,
}
