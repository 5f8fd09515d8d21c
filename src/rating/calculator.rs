//! Rating calculator trait and implementations
//!
//! This module defines the interface that storage and scheduling
//! collaborators program against when applying period updates.

use crate::rating::engine::Glicko2Engine;
use crate::types::{MatchOutcome, RatingState};

/// Trait for computing period rating updates
pub trait RatingCalculator: Send + Sync {
    /// Compute a player's new rating state from their prior state and the
    /// period's match outcomes
    ///
    /// # Arguments
    /// * `prior` - The player's rating state at the start of the period
    /// * `period` - The player's match outcomes for the period (may be empty)
    ///
    /// # Returns
    /// The new rating state, or an error if the inputs are invalid or the
    /// volatility solve does not converge. A failed update must not be
    /// applied by the caller.
    fn rate_period(
        &self,
        prior: &RatingState,
        period: &[MatchOutcome],
    ) -> crate::error::Result<RatingState>;

    /// Get the initial rating for new players
    fn initial_rating(&self) -> RatingState;
}

impl RatingCalculator for Glicko2Engine {
    fn rate_period(
        &self,
        prior: &RatingState,
        period: &[MatchOutcome],
    ) -> crate::error::Result<RatingState> {
        self.rate(prior, period)
    }

    fn initial_rating(&self) -> RatingState {
        Glicko2Engine::initial_rating(self)
    }
}

/// Rating calculator that never changes a rating, for wiring tests or as a
/// fallback while a real calculator is unavailable
#[derive(Debug, Clone)]
pub struct NoOpRatingCalculator {
    initial_rating: RatingState,
}

impl NoOpRatingCalculator {
    /// Create a new no-op rating calculator
    pub fn new(initial_rating: RatingState) -> Self {
        Self { initial_rating }
    }
}

impl Default for NoOpRatingCalculator {
    fn default() -> Self {
        Self::new(RatingState::default())
    }
}

impl RatingCalculator for NoOpRatingCalculator {
    fn rate_period(
        &self,
        prior: &RatingState,
        _period: &[MatchOutcome],
    ) -> crate::error::Result<RatingState> {
        prior.validate()?;
        Ok(*prior)
    }

    fn initial_rating(&self) -> RatingState {
        self.initial_rating
    }
}
