//! Glicko-2 period update engine
//!
//! This module implements the rating update pipeline: opponent impact
//! weighting and expected scores, aggregation of a period's outcomes into
//! variance and improvement estimates, the volatility solve, and the final
//! state update back onto the public scale.
//!
//! Every update is a pure function of the prior state, the period outcomes,
//! and the engine configuration. Updates for different players are fully
//! independent (opponents enter as frozen prior-period snapshots), so callers
//! may shard a population across threads without locking.

use crate::config::GlickoConfig;
use crate::rating::scale;
use crate::rating::solver;
use crate::types::{MatchOutcome, Opponent, PlayerPeriod, RatingChange, RatingState};
use std::f64::consts::PI;
use tracing::debug;

/// Impact weight of an opponent with internal deviation `phi`.
///
/// Monotonically decreasing in `phi`: outcomes against uncertain opponents
/// carry less information.
fn impact(phi: f64) -> f64 {
    1.0 / (1.0 + 3.0 * phi * phi / (PI * PI)).sqrt()
}

/// Expected score against an opponent, on the internal scale
fn expectation(mu: f64, opponent_mu: f64, opponent_phi: f64) -> f64 {
    1.0 / (1.0 + (-impact(opponent_phi) * (mu - opponent_mu)).exp())
}

/// Quantities aggregated over one rating period
struct PeriodEstimates {
    /// Estimated outcome variance v
    variance: f64,
    /// Weighted sum of score surprises, before scaling by v
    improvement: f64,
    /// Estimated rating improvement delta = v * improvement
    delta: f64,
}

/// Fold a nonempty period into its variance and improvement estimates
fn aggregate(mu: f64, period: &[MatchOutcome]) -> PeriodEstimates {
    let mut variance_sum = 0.0;
    let mut improvement = 0.0;

    for outcome in period {
        let opponent_mu = scale::rating_to_internal(outcome.opponent.rating);
        let opponent_phi = scale::deviation_to_internal(outcome.opponent.deviation);
        let weight = impact(opponent_phi);
        let expected = expectation(mu, opponent_mu, opponent_phi);

        variance_sum += weight * weight * expected * (1.0 - expected);
        improvement += weight * (outcome.result.score() - expected);
    }

    let variance = variance_sum.recip();
    PeriodEstimates {
        variance,
        improvement,
        delta: variance * improvement,
    }
}

/// Glicko-2 rating engine.
///
/// Holds only the validated, read-only configuration; `rate` is a one-shot
/// pure pipeline per (player, period) pair.
#[derive(Debug, Clone)]
pub struct Glicko2Engine {
    config: GlickoConfig,
}

impl Glicko2Engine {
    /// Create a new engine, validating the configuration once up front
    pub fn new(config: GlickoConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &GlickoConfig {
        &self.config
    }

    /// The configured rating state for new players
    pub fn initial_rating(&self) -> RatingState {
        RatingState {
            rating: self.config.initial_rating,
            deviation: self.config.initial_deviation,
            volatility: self.config.initial_volatility,
        }
    }

    /// Win probability for `player` against `opponent`, on the public scale
    pub fn expected_score(&self, player: &RatingState, opponent: &Opponent) -> f64 {
        expectation(
            scale::rating_to_internal(player.rating),
            scale::rating_to_internal(opponent.rating),
            scale::deviation_to_internal(opponent.deviation),
        )
    }

    /// Compute a player's new rating state from their prior state and one
    /// period of match outcomes.
    ///
    /// An empty period is the defined inactivity path: the deviation grows by
    /// the prior volatility while rating and volatility pass through
    /// unchanged. All inputs are validated before any computation; a
    /// validation or convergence failure leaves no partial update.
    pub fn rate(
        &self,
        prior: &RatingState,
        period: &[MatchOutcome],
    ) -> crate::error::Result<RatingState> {
        prior.validate()?;
        for outcome in period {
            outcome.opponent.validate()?;
        }

        let mu = scale::rating_to_internal(prior.rating);
        let phi = scale::deviation_to_internal(prior.deviation);

        if period.is_empty() {
            // Uncertainty grows with inactivity; nothing else moves
            let phi_star = (phi * phi + prior.volatility * prior.volatility).sqrt();
            return RatingState::new(
                prior.rating,
                scale::deviation_to_public(phi_star),
                prior.volatility,
            );
        }

        let estimates = aggregate(mu, period);

        let new_volatility = solver::solve(
            prior.volatility,
            phi,
            estimates.variance,
            estimates.delta,
            self.config.tau,
            self.config.convergence_tolerance,
        )?;

        let phi_star = (phi * phi + new_volatility * new_volatility).sqrt();
        let new_phi = 1.0 / (1.0 / (phi_star * phi_star) + 1.0 / estimates.variance).sqrt();
        let new_mu = mu + new_phi * new_phi * estimates.improvement;

        RatingState::new(
            scale::rating_to_public(new_mu),
            scale::deviation_to_public(new_phi),
            new_volatility,
        )
    }

    /// Update a whole population of players for one period.
    ///
    /// Each row is computed from its own prior state and outcomes only, so
    /// results are identical no matter how callers split the input. Fails
    /// fast on the first invalid or non-converging player; callers wanting
    /// per-player skip semantics can call [`Glicko2Engine::rate`] directly.
    pub fn rate_all(&self, players: &[PlayerPeriod]) -> crate::error::Result<Vec<RatingChange>> {
        let mut changes = Vec::with_capacity(players.len());

        for player in players {
            let new = self.rate(&player.prior, &player.outcomes)?;
            changes.push(RatingChange {
                player_id: player.player_id.clone(),
                old: player.prior,
                new,
            });
        }

        debug!("Updated ratings for {} players", changes.len());
        Ok(changes)
    }
}
