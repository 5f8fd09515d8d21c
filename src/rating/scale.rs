//! Conversions between the public Glicko scale and the internal Glicko-2 scale
//!
//! The public scale is the human-facing one, centered near 1500. The math
//! runs on the internal scale, centered at 0. Both directions are pure and
//! total: a fixed nonzero constant in, the same constant out.

/// Ratio between the public Glicko scale and the internal Glicko-2 scale
pub const GLICKO_SCALE: f64 = 173.7178;

/// Center of the public rating scale
pub const RATING_CENTER: f64 = 1500.0;

/// Rating assigned to an unrated player
pub const INITIAL_RATING: f64 = 1500.0;

/// Deviation assigned to an unrated player
pub const INITIAL_DEVIATION: f64 = 350.0;

/// Volatility assigned to an unrated player
pub const INITIAL_VOLATILITY: f64 = 0.06;

/// Convert a public rating to the internal scale
pub fn rating_to_internal(rating: f64) -> f64 {
    (rating - RATING_CENTER) / GLICKO_SCALE
}

/// Convert a public deviation to the internal scale
pub fn deviation_to_internal(deviation: f64) -> f64 {
    deviation / GLICKO_SCALE
}

/// Convert an internal rating back to the public scale
pub fn rating_to_public(mu: f64) -> f64 {
    GLICKO_SCALE * mu + RATING_CENTER
}

/// Convert an internal deviation back to the public scale
pub fn deviation_to_public(phi: f64) -> f64 {
    GLICKO_SCALE * phi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_zero() {
        assert_eq!(rating_to_internal(1500.0), 0.0);
        assert_eq!(rating_to_public(0.0), 1500.0);
    }

    #[test]
    fn test_known_conversions() {
        // Reference values from the standard Glicko-2 worked scenario
        assert!((rating_to_internal(1400.0) - (-0.5756)).abs() < 1e-4);
        assert!((rating_to_internal(1550.0) - 0.2878).abs() < 1e-4);
        assert!((rating_to_internal(1700.0) - 1.1513).abs() < 1e-4);
        assert!((deviation_to_internal(200.0) - 1.1513).abs() < 1e-4);
        assert!((deviation_to_internal(30.0) - 0.1727).abs() < 1e-4);
    }

    #[test]
    fn test_round_trip() {
        for rating in [0.0, 1234.5, 1500.0, 2874.2] {
            let back = rating_to_public(rating_to_internal(rating));
            assert!((back - rating).abs() < 1e-9);
        }

        for deviation in [30.0, 200.0, 350.0] {
            let back = deviation_to_public(deviation_to_internal(deviation));
            assert!((back - deviation).abs() < 1e-9);
        }
    }
}
