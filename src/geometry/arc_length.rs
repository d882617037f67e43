use crate::error::{InvalidArgumentError, Result};

use super::curve::Curve;

/// Default number of chords used to approximate arc length.
pub const DEFAULT_ARC_DIVISIONS: usize = 200;

/// Cumulative chord lengths of a curve, used to map arc fraction `u` to
/// raw parameter `t`.
///
/// Entry `k` holds the polyline length from `t = 0` to `t = k / divisions`.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    lengths: Vec<f64>,
}

impl ArcLengthTable {
    /// Samples `curve` at `divisions + 1` evenly spaced parameters over its domain.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisions` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn build<C: Curve + ?Sized>(curve: &C, divisions: usize) -> Result<Self> {
        if divisions == 0 {
            return Err(InvalidArgumentError::Zero {
                parameter: "divisions",
            }
            .into());
        }

        let domain = curve.domain();
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut last = curve.evaluate(domain.t_min);
        let mut sum = 0.0;
        lengths.push(sum);

        for k in 1..=divisions {
            let t = domain.t_min + domain.span() * (k as f64 / divisions as f64);
            let current = curve.evaluate(t);
            sum += nalgebra::distance(&current, &last);
            lengths.push(sum);
            last = current;
        }

        Ok(Self { lengths })
    }

    /// Returns the approximate total length of the curve.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Returns the number of chords in the table.
    #[must_use]
    pub fn divisions(&self) -> usize {
        self.lengths.len() - 1
    }

    /// Maps arc fraction `u` in `[0, 1]` to a normalized curve parameter in `[0, 1]`.
    ///
    /// Inputs outside `[0, 1]` are clamped.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn u_to_t(&self, u: f64) -> f64 {
        let total = self.total_length();
        if total <= 0.0 {
            return u.clamp(0.0, 1.0);
        }
        let target = u.clamp(0.0, 1.0) * total;
        let last = self.lengths.len() - 1;

        // Index of the last entry not above the target.
        let i = self
            .lengths
            .partition_point(|&len| len <= target)
            .saturating_sub(1)
            .min(last);

        if i == last {
            return 1.0;
        }

        let before = self.lengths[i];
        let after = self.lengths[i + 1];
        let segment = after - before;
        let fraction = if segment > 0.0 {
            (target - before) / segment
        } else {
            0.0
        };

        (i as f64 + fraction) / last as f64
    }
}
