use serde::{Deserialize, Serialize};

/// Progress-to-value curve applied by counters.
///
/// The choice is made per call site: plain counters run linear while KPI and
/// progress-ring numbers decelerate with a cubic ease-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// `1 - (1 - p)^3`
    EaseOutCubic,
}

impl Easing {
    /// Maps progress to eased progress. Input is clamped to `[0, 1]` and
    /// non-finite input is treated as `0`.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let p = clamp_progress(progress);
        match self {
            Self::Linear => p,
            Self::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
        }
    }
}

#[must_use]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_hits_endpoints() {
        assert_eq!(Easing::EaseOutCubic.apply(0.0), 0.0);
        assert_eq!(Easing::EaseOutCubic.apply(1.0), 1.0);
        assert!((Easing::EaseOutCubic.apply(0.5) - 0.875).abs() <= 1e-12);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-3.0), 0.0);
        assert_eq!(Easing::Linear.apply(7.5), 1.0);
        assert_eq!(Easing::EaseOutCubic.apply(f64::NAN), 0.0);
    }
}
