//! Piecewise-linear mapping of raw metrics onto 0-100 dimension scores.

use crate::config::Breakpoint;

/// Interpolate `value` along `points`.
///
/// Below the first point the first score applies, beyond the last point
/// the last score applies. `points` must be sorted by `at`; an empty curve
/// is treated as neutral-perfect.
pub fn piecewise_linear(value: f64, points: &[Breakpoint]) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 100.0;
    };
    if value <= first.at {
        return clamp_score(first.score);
    }
    if value >= last.at {
        return clamp_score(last.score);
    }

    let score = points
        .windows(2)
        .find(|w| value >= w[0].at && value <= w[1].at)
        .map(|w| {
            let (lo, hi) = (w[0], w[1]);
            let ratio = (value - lo.at) / (hi.at - lo.at);
            lo.score + ratio * (hi.score - lo.score)
        })
        .unwrap_or(last.score);
    clamp_score(score)
}

pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
