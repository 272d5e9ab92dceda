//! Metric-space primitives: fixed-dimension points and distance metrics.
//!
//! Node positions are `Point<T, D>` values with `T` one of `f32`/`f64`
//! and `D` a const-generic dimension. Distances are always computed in
//! `f64`, which is the currency of the cost domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WayfarerError;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Numeric element type of a node value. Sealed: implemented for `f32`
/// and `f64` only.
pub trait Scalar:
    sealed::Sealed + Copy + Default + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// A fixed-length numeric vector, the value a node carries in the
/// metric space. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Scalar, const D: usize>([T; D]);

impl<T: Scalar, const D: usize> Point<T, D> {
    pub fn new(components: [T; D]) -> Self {
        Point(components)
    }

    /// The origin: every component at the scalar default (zero).
    pub fn zero() -> Self {
        Point([T::default(); D])
    }

    pub fn components(&self) -> &[T; D] {
        &self.0
    }
}

impl<T: Scalar, const D: usize> Default for Point<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const D: usize> From<[T; D]> for Point<T, D> {
    fn from(components: [T; D]) -> Self {
        Point(components)
    }
}

impl<T: Scalar, const D: usize> fmt::Display for Point<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// Distance metric used for edge costs and the A* heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean distance (L2 norm). The default.
    #[default]
    Euclidean,
    /// Manhattan distance (L1 norm).
    Manhattan,
}

impl DistanceMetric {
    /// Calculates the distance between two points under this metric.
    pub fn distance<T: Scalar, const D: usize>(&self, a: &Point<T, D>, b: &Point<T, D>) -> f64 {
        let diffs = a
            .components()
            .iter()
            .zip(b.components().iter())
            .map(|(x, y)| x.to_f64() - y.to_f64());
        match self {
            DistanceMetric::Euclidean => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            DistanceMetric::Manhattan => diffs.map(f64::abs).sum(),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = WayfarerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" | "l2" => Ok(DistanceMetric::Euclidean),
            "manhattan" | "l1" => Ok(DistanceMetric::Manhattan),
            other => Err(WayfarerError::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Euclidean => write!(f, "euclidean"),
            DistanceMetric::Manhattan => write!(f, "manhattan"),
        }
    }
}
