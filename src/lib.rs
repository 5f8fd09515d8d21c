//! Ladder Rating - Glicko-2 rating-period engine
//!
//! This crate computes updated skill ratings for competitors after a rating
//! period: given a player's prior rating, deviation, and volatility plus
//! their period match outcomes against known opponents, it produces the new
//! rating state. Persistence, period scheduling, and tournament structure
//! are left to the caller.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use config::GlickoConfig;
pub use error::{RatingError, Result};
pub use rating::{Glicko2Engine, NoOpRatingCalculator, RatingCalculator};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
