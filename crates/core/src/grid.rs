use std::convert::Infallible;

use thiserror::Error;

/// Errors that can occur when constructing a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The grid has fewer than two points.
    #[error("time grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// A grid point is NaN or infinite.
    #[error("non-finite time at index {index}")]
    NonFinite { index: usize },

    /// A grid point is not greater than its predecessor.
    #[error("time grid is not strictly increasing at index {index}")]
    NotIncreasing { index: usize },

    /// A uniform grid was requested with zero steps or an unusable step size.
    #[error("step count must be positive and step size finite and positive")]
    InvalidStep,
}

impl From<Infallible> for GridError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// A validated, strictly increasing sequence of time points.
///
/// A grid with `N + 1` points describes `N` integration steps. The spacing
/// between points may vary. Once constructed the grid cannot be modified.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// Creates a grid from explicit time points.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two points, if any point is
    /// non-finite, or if the points are not strictly increasing.
    pub fn new(points: Vec<f64>) -> Result<Self, GridError> {
        if points.len() < 2 {
            return Err(GridError::TooFewPoints(points.len()));
        }
        if let Some(index) = points.iter().position(|t| !t.is_finite()) {
            return Err(GridError::NonFinite { index });
        }
        if let Some(index) = points.windows(2).position(|w| w[1] <= w[0]) {
            return Err(GridError::NotIncreasing { index: index + 1 });
        }

        Ok(Self { points })
    }

    /// Creates a grid of `steps + 1` evenly spaced points from `start` to `stop`.
    ///
    /// The final point is exactly `stop`.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero or too large to allocate, or if the
    /// resulting points are not finite and strictly increasing.
    pub fn uniform(start: f64, stop: f64, steps: usize) -> Result<Self, GridError> {
        if steps == 0 {
            return Err(GridError::InvalidStep);
        }
        let len = steps.checked_add(1).ok_or(GridError::InvalidStep)?;

        let mut points = Vec::new();
        points
            .try_reserve_exact(len)
            .map_err(|_| GridError::InvalidStep)?;

        #[allow(clippy::cast_precision_loss)]
        let dt = (stop - start) / steps as f64;

        #[allow(clippy::cast_precision_loss)]
        let spaced = (0..=steps).map(|k| if k == steps { stop } else { start + k as f64 * dt });
        points.extend(spaced);

        Self::new(points)
    }

    /// Creates a uniform grid from `start` to `stop` with spacing close to `dt`.
    ///
    /// The number of steps is `(stop - start) / dt` rounded to the nearest
    /// integer (at least one), so the last point lands exactly on `stop`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive, if it is so small
    /// that the step count cannot be represented, or if the interval does not
    /// produce a valid grid.
    pub fn with_step(start: f64, stop: f64, dt: f64) -> Result<Self, GridError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(GridError::InvalidStep);
        }

        let ratio = ((stop - start) / dt).round();
        #[allow(clippy::cast_precision_loss)]
        let max_steps = usize::MAX as f64;
        if !ratio.is_finite() || ratio >= max_steps {
            return Err(GridError::InvalidStep);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = ratio.max(1.0) as usize;

        Self::uniform(start, stop, steps)
    }

    /// Returns the time points.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Returns the number of time points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a valid grid has at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of steps (one less than the number of points).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the first time point.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Returns the last time point.
    #[must_use]
    pub fn stop(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Returns the step size from point `k` to point `k + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `k + 1` is out of bounds.
    #[must_use]
    pub fn dt(&self, k: usize) -> f64 {
        self.points[k + 1] - self.points[k]
    }

    /// Consumes the grid and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<f64> {
        self.points
    }
}

impl std::ops::Index<usize> for TimeGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.points[index]
    }
}

impl TryFrom<Vec<f64>> for TimeGrid {
    type Error = GridError;

    fn try_from(points: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl TryFrom<&[f64]> for TimeGrid {
    type Error = GridError;

    fn try_from(points: &[f64]) -> Result<Self, Self::Error> {
        Self::new(points.to_vec())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            points: Vec<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.points).map_err(serde::de::Error::custom)
    }
}
