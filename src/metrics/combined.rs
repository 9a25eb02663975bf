//! Overall suitability: weighted blend of the two composites.
//!
//! Default weighting favours power availability slightly over cooling, since
//! power constraints are harder to engineer around.

use crate::utils::{clamp_score, round2, CombinedWeights};

/// Blend stranded and cooling composites, rounded to 2 decimals
pub fn combined_score(stranded: f64, cooling: f64, weights: &CombinedWeights) -> f64 {
    round2(clamp_score(weights.w_stranded * stranded + weights.w_cooling * cooling))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_blend() {
        let w = CombinedWeights::default();
        assert_relative_eq!(combined_score(52.31, 54.05, &w), 53.09, epsilon = 1e-9);
        assert_eq!(combined_score(100.0, 100.0, &w), 100.0);
        assert_eq!(combined_score(0.0, 0.0, &w), 0.0);
    }

    #[test]
    fn test_shifting_weight_toward_higher_input_raises_score() {
        // stranded > cooling: moving weight onto stranded never lowers the blend
        let (stranded, cooling) = (80.0, 40.0);
        let mut previous = combined_score(stranded, cooling, &CombinedWeights::from_stranded(0.0));
        for step in 1..=10 {
            let w = CombinedWeights::from_stranded(step as f64 / 10.0);
            let score = combined_score(stranded, cooling, &w);
            assert!(score >= previous, "blend dropped at w_stranded={}", w.w_stranded);
            previous = score;
        }
        assert_eq!(previous, 80.0);
    }

    #[test]
    fn test_monotone_in_each_input() {
        let w = CombinedWeights::default();
        assert!(combined_score(60.0, 50.0, &w) > combined_score(59.0, 50.0, &w));
        assert!(combined_score(60.0, 51.0, &w) > combined_score(60.0, 50.0, &w));
    }
}
