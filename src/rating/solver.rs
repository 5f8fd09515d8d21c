//! New-volatility solver for the Glicko-2 update
//!
//! Finds the root of the volatility objective with a bracketed
//! secant/false-position iteration using the Illinois modification (one
//! endpoint's function value is halved whenever that endpoint repeats, which
//! prevents the plain method from stalling). A bracketed method is used
//! because the objective is not reliably convex and undamped Newton steps can
//! diverge near its asymptote.
//!
//! Both loops are iteration-capped so the solver terminates on pathological
//! inputs instead of spinning; the caps are far above what well-formed inputs
//! ever need.

use crate::error::RatingError;
use tracing::{trace, warn};

/// Cap on the downward bracket search for B
const MAX_BRACKET_STEPS: usize = 100;

/// Cap on the Illinois iteration
const MAX_ITERATIONS: usize = 300;

/// Solve for the new volatility sigma'.
///
/// `phi` is the player's prior internal deviation, `variance` and `delta`
/// come from the period aggregation, `tau` and `tolerance` from the system
/// configuration. Returns `NonConvergence` if either loop exceeds its cap,
/// the secant denominator collapses to zero, or the objective stops being
/// finite (exp overflow on extreme inputs).
pub(crate) fn solve(
    prior_volatility: f64,
    phi: f64,
    variance: f64,
    delta: f64,
    tau: f64,
    tolerance: f64,
) -> crate::error::Result<f64> {
    let a = (prior_volatility * prior_volatility).ln();
    let delta_sq = delta * delta;
    let phi_sq = phi * phi;

    let f = |x: f64| -> f64 {
        let ex = x.exp();
        let numerator = ex * (delta_sq - phi_sq - variance - ex);
        let denominator = 2.0 * (phi_sq + variance + ex).powi(2);
        numerator / denominator - (x - a) / (tau * tau)
    };

    let mut lower = a;
    let mut upper = if delta_sq > phi_sq + variance {
        (delta_sq - phi_sq - variance).ln()
    } else {
        // Walk down in steps of tau until the objective changes sign
        let mut k = 1usize;
        loop {
            let candidate = a - k as f64 * tau;
            let value = f(candidate);
            if !value.is_finite() {
                warn!("Volatility objective not finite at bracket candidate {}", candidate);
                return Err(RatingError::NonConvergence {
                    detail: format!("objective not finite at bracket candidate {}", candidate),
                }
                .into());
            }
            if value >= 0.0 {
                break candidate;
            }
            k += 1;
            if k > MAX_BRACKET_STEPS {
                warn!("Bracket search exceeded {} steps", MAX_BRACKET_STEPS);
                return Err(RatingError::NonConvergence {
                    detail: format!("no sign change within {} bracket steps", MAX_BRACKET_STEPS),
                }
                .into());
            }
        }
    };

    let mut f_lower = f(lower);
    let mut f_upper = f(upper);
    if !f_lower.is_finite() || !f_upper.is_finite() {
        return Err(RatingError::NonConvergence {
            detail: format!(
                "objective not finite at initial bracket [{}, {}]",
                lower, upper
            ),
        }
        .into());
    }

    let mut iterations = 0usize;
    while (upper - lower).abs() > tolerance {
        iterations += 1;
        if iterations > MAX_ITERATIONS {
            warn!("Volatility iteration exceeded {} iterations", MAX_ITERATIONS);
            return Err(RatingError::NonConvergence {
                detail: format!("no convergence within {} iterations", MAX_ITERATIONS),
            }
            .into());
        }

        if f_upper - f_lower == 0.0 {
            return Err(RatingError::NonConvergence {
                detail: "secant denominator is zero".to_string(),
            }
            .into());
        }

        let candidate = lower + (lower - upper) * f_lower / (f_upper - f_lower);
        let f_candidate = f(candidate);
        if !f_candidate.is_finite() {
            return Err(RatingError::NonConvergence {
                detail: format!("objective not finite at iterate {}", candidate),
            }
            .into());
        }

        if f_candidate * f_upper < 0.0 {
            lower = upper;
            f_lower = f_upper;
        } else {
            // Illinois step: halve the retained endpoint's value
            f_lower /= 2.0;
        }
        upper = candidate;
        f_upper = f_candidate;
    }

    trace!("Volatility solver converged after {} iterations", iterations);
    Ok((lower / 2.0).exp())
}
