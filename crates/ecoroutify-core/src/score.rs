//! RouteScore - Emission-weighted route cost

use std::cmp::Ordering;
use std::fmt;

/// Cost of travelling to a destination under the sampled conditions.
///
/// Unlike solver scores, lower is better: the optimal destination is the one
/// with the smallest score. Ordering is total (via [`f64::total_cmp`]) so scores
/// can be sorted and compared without `partial_cmp` gymnastics.
///
/// # Examples
///
/// ```
/// use ecoroutify_core::RouteScore;
///
/// let near = RouteScore::of(0.3);
/// let far = RouteScore::of(0.9);
///
/// assert!(near.is_better_than(&far));
/// assert!(!RouteScore::INFINITE.is_finite());
/// ```
#[derive(Clone, Copy, Default)]
pub struct RouteScore {
    value: f64,
}

impl RouteScore {
    /// The zero score.
    pub const ZERO: RouteScore = RouteScore { value: 0.0 };

    /// Sentinel for a destination whose score could not be computed.
    pub const INFINITE: RouteScore = RouteScore {
        value: f64::INFINITY,
    };

    /// Creates a new RouteScore with the given value.
    #[inline]
    pub const fn of(value: f64) -> Self {
        RouteScore { value }
    }

    /// Returns the score value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns true unless this is the failure sentinel (or NaN).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// Returns true if this score is strictly cheaper than `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Approximate equality for comparing computed scores.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        if self.value == other.value {
            return true;
        }
        (self.value - other.value).abs() <= epsilon
    }
}

impl PartialEq for RouteScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RouteScore {}

impl Ord for RouteScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl PartialOrd for RouteScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for RouteScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteScore({})", self.value)
    }
}

impl fmt::Display for RouteScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<f64> for RouteScore {
    fn from(value: f64) -> Self {
        RouteScore::of(value)
    }
}
