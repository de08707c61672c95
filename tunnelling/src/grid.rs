use std::ops::Deref;

use quantum::utility::{linspace, max_finite};
use serde::Serialize;

use crate::error::TunnellingError;

/// Ordered positions or energies on which curves are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Grid(Vec<f64>);

impl Grid {
    pub fn new(points: Vec<f64>) -> Self {
        Self(points)
    }

    /// Evenly spaced grid over `[start, end]` with `n` points.
    pub fn linspace(start: f64, end: f64, n: usize) -> Self {
        Self(linspace(start, end, n))
    }

    pub fn points(&self) -> &[f64] {
        &self.0
    }

    /// Checks that every point is finite, so no curve is silently filled with NaN.
    pub fn validate(&self) -> Result<(), TunnellingError> {
        match self.0.iter().position(|x| !x.is_finite()) {
            Some(index) => Err(TunnellingError::NonFiniteGrid {
                index,
                value: self.0[index],
            }),
            None => Ok(()),
        }
    }

    /// Evaluates `f` at every grid point, the curve is aligned with the grid.
    pub fn evaluate(&self, f: impl Fn(f64) -> f64) -> Curve {
        Curve(self.0.iter().map(|&x| f(x)).collect())
    }
}

impl From<Vec<f64>> for Grid {
    fn from(points: Vec<f64>) -> Self {
        Self(points)
    }
}

impl Deref for Grid {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Values aligned index-for-index with the [`Grid`] they were computed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Curve(Vec<f64>);

impl Curve {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Largest finite value, `None` for an empty curve.
    pub fn max(&self) -> Option<f64> {
        max_finite(&self.0)
    }

    pub fn scaled(&self, factor: f64) -> Curve {
        Curve(self.0.iter().map(|x| x * factor).collect())
    }
}

impl From<Vec<f64>> for Curve {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl Deref for Curve {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
