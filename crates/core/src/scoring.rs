//! Confidence scoring and severity classification for heat anomalies.

use rand::Rng;

use crate::core_types::units::round1;
use crate::core_types::{ConfidenceFactors, Severity};

/// Weight of the satellite heat reading, the primary signal.
const HEAT_WEIGHT: f64 = 0.5;
/// Weight of the probabilistic smoke check.
const SMOKE_WEIGHT: f64 = 0.3;
/// Weight of wind influence on spread risk.
const WIND_WEIGHT: f64 = 0.1;
/// Weight of vegetation fuel load.
const VEGETATION_WEIGHT: f64 = 0.1;

/// Weighted multi-factor confidence estimate for a single hotspot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceScore {
    /// Overall confidence percentage in [0, 100], one decimal place.
    pub confidence: f64,
    /// Per-factor contributions, each reported as a 0-100 percentage.
    pub factors: ConfidenceFactors,
}

/// Score a hotspot from raw signal inputs.
///
/// `intensity` is the satellite heat reading (0.0-1.0+), `wind_speed` is in
/// km/h, and `vegetation_density` is a 0.0-1.0 fuel-load fraction. Smoke is
/// only plausibly present over strong heat and its check is probabilistic,
/// so the caller supplies the random source. The result is always within
/// [0, 100] because the weights sum to 1 and every factor saturates at 1.
pub fn score_confidence<R: Rng>(
    rng: &mut R,
    intensity: f64,
    wind_speed: f64,
    vegetation_density: f64,
) -> ConfidenceScore {
    // Boost high intensity readings, saturating at 1.0.
    let heat_score = (intensity * 1.2).min(1.0);

    // Normalise 0-50 km/h onto 0.0-1.0: faster wind means faster spread,
    // so a heat source in wind is more likely a serious fire.
    let wind_factor = (wind_speed / 50.0).min(1.0);

    let veg_factor = vegetation_density;

    // Smoke check modelled as sensor uncertainty over a strong heat source.
    let smoke_detected = if heat_score > 0.7 && rng.random::<f64>() > 0.2 {
        1.0
    } else {
        0.0
    };

    let combined = heat_score * HEAT_WEIGHT
        + smoke_detected * SMOKE_WEIGHT
        + wind_factor * WIND_WEIGHT
        + veg_factor * VEGETATION_WEIGHT;

    ConfidenceScore {
        confidence: round1(combined * 100.0),
        factors: ConfidenceFactors {
            heat_anomaly: round1(heat_score * 100.0),
            smoke_detection: round1(smoke_detected * 100.0),
            wind_influence: round1(wind_factor * 100.0),
            vegetation_fuel: round1(veg_factor * 100.0),
        },
    }
}

/// Map a confidence percentage onto a severity bucket.
///
/// Thresholds are exclusive lower bounds: exactly 90, 75 and 50 classify
/// into the lower bracket.
#[must_use]
pub fn classify_severity(confidence: f64) -> Severity {
    if confidence > 90.0 {
        Severity::MegaFire
    } else if confidence > 75.0 {
        Severity::Severe
    } else if confidence > 50.0 {
        Severity::Moderate
    } else {
        Severity::Low
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn severity_thresholds_are_exclusive_lower_bounds() {
        assert_eq!(classify_severity(95.0), Severity::MegaFire);
        assert_eq!(classify_severity(90.0), Severity::Severe);
        assert_eq!(classify_severity(80.0), Severity::Severe);
        assert_eq!(classify_severity(75.0), Severity::Moderate);
        assert_eq!(classify_severity(60.0), Severity::Moderate);
        assert_eq!(classify_severity(50.01), Severity::Moderate);
        assert_eq!(classify_severity(50.0), Severity::Low);
        assert_eq!(classify_severity(0.0), Severity::Low);
    }

    #[test]
    fn weak_heat_never_reports_smoke() {
        // heat_score = 0.5 * 1.2 = 0.6, below the smoke gate, so the score
        // is deterministic regardless of the random draw.
        let mut rng = StdRng::seed_from_u64(1);
        let score = score_confidence(&mut rng, 0.5, 25.0, 0.8);
        assert_eq!(score.factors.smoke_detection, 0.0);
        // 0.5*0.6 + 0.1*0.5 + 0.1*0.8 = 0.43
        assert_eq!(score.confidence, 43.0);
        assert_eq!(score.factors.heat_anomaly, 60.0);
        assert_eq!(score.factors.wind_influence, 50.0);
        assert_eq!(score.factors.vegetation_fuel, 80.0);
    }

    #[test]
    fn heat_score_saturates_at_one() {
        let mut rng = StdRng::seed_from_u64(2);
        let score = score_confidence(&mut rng, 1.5, 0.0, 0.0);
        assert_eq!(score.factors.heat_anomaly, 100.0);
    }
}
