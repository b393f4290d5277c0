//! Integer ranges, coin flips and probabilities.

use tracing::debug;

use crate::Error;
use crate::Result;
use crate::Sampler;
use crate::UniformSource;

/// Orders a bound pair so the smaller value comes first.
///
/// Works for anything comparable: numbers, chars, strings.
///
/// ```
/// assert_eq!(randkit::normalize_min_max(10, 3), (3, 10));
/// assert_eq!(randkit::normalize_min_max("ba", "ab"), ("ab", "ba"));
/// ```
pub fn normalize_min_max<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

impl<S: UniformSource> Sampler<S> {
    /// Draws an integer uniformly from the inclusive range spanned by `min`
    /// and `max`, in either order.
    pub fn int_between(&self, min: i64, max: i64) -> i64 {
        let (lo, hi) = normalize_min_max(min, max);
        self.draw_inclusive(lo, hi)
    }

    /// Like [`Sampler::int_between`] for fractional bounds.
    ///
    /// After ordering, the lower bound is rounded up and the upper bound
    /// rounded down, so `(1.5, 3.2)` draws from `{2, 3}`. Fails with
    /// [`Error::DegenerateRange`] when no integer is left (`(1.1, 1.2)`),
    /// when a bound is not finite, or when it does not fit an `i64`.
    pub fn int_between_fractional(&self, min: f64, max: f64) -> Result<i64> {
        let degenerate = || Error::DegenerateRange { min, max };
        if !min.is_finite() || !max.is_finite() {
            debug!(min, max, "non-finite bound");
            return Err(degenerate());
        }
        let (lo, hi) = normalize_min_max(min, max);
        let (lo, hi) = (lo.ceil(), hi.floor());
        #[allow(clippy::cast_precision_loss)]
        let fits = |value: f64| value >= i64::MIN as f64 && value < i64::MAX as f64;
        if lo > hi || !fits(lo) || !fits(hi) {
            debug!(min, max, "no integer between bounds");
            return Err(degenerate());
        }
        #[allow(clippy::cast_possible_truncation)]
        let (lo, hi) = (lo as i64, hi as i64);
        Ok(self.draw_inclusive(lo, hi))
    }

    /// `true` with probability one half.
    pub fn boolean(&self) -> bool {
        self.uniform() < 0.5
    }

    /// `true` with the given probability.
    ///
    /// Fails with [`Error::InvalidProbability`] unless `0 <= probability <= 1`.
    pub fn chance(&self, probability: f64) -> Result<bool> {
        if !(0.0..=1.0).contains(&probability) {
            debug!(probability, "rejecting probability");
            return Err(Error::InvalidProbability(probability));
        }
        Ok(self.uniform() < probability)
    }

    /// `floor(u * (hi - lo + 1) + lo)` with `lo <= hi`.
    ///
    /// The span is computed in `i128` so the full `i64` domain is allowed.
    /// For spans beyond 2^53 the float product can round up to the span
    /// itself, hence the clamp.
    fn draw_inclusive(&self, lo: i64, hi: i64) -> i64 {
        debug_assert!(lo <= hi);
        let span = i128::from(hi) - i128::from(lo) + 1;
        #[allow(clippy::cast_precision_loss)]
        let offset = (self.uniform() * span as f64).floor();
        #[allow(clippy::cast_possible_truncation)]
        let value = i128::from(lo) + offset as i128;
        i64::try_from(value.min(i128::from(hi))).unwrap_or(hi)
    }
}
