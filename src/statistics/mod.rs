//! Reductions over a whole array.
//!
//! `sum` and `product` are defined for empty arrays (0.0 and 1.0). Everything that
//! needs at least one element reports [`ArrayError::Empty`] instead.
use log::warn;

use crate::array::NumericArray;
use crate::error::{ArrayError, Result};

pub trait ArraySum {
    fn sum(&self) -> f64;

    /// Multiplicative fold, identity `1.0`.
    fn product(&self) -> f64;

    fn mean(&self) -> Result<f64>;
}

pub trait ArrayMinMax {
    fn min(&self) -> Result<f64>;

    fn max(&self) -> Result<f64>;

    /// Index of the first occurrence of the minimum.
    fn argmin(&self) -> Result<usize>;

    /// Index of the first occurrence of the maximum.
    fn argmax(&self) -> Result<usize>;
}

pub trait ArrayVariance {
    /// Population variance (divides by `n`).
    fn variance(&self) -> Result<f64>;

    fn std(&self) -> Result<f64>;
}

fn require_non_empty(array: &NumericArray, op: &'static str) -> Result<()> {
    if array.is_empty() {
        warn!("{}: called on an empty array", op);
        return Err(ArrayError::Empty { op });
    }
    Ok(())
}

/// Linear scan seeded with the first element; `better(candidate, best)` must be strict
/// so ties keep the earliest index.
fn scan_extreme<F>(values: &[f64], better: F) -> (usize, f64)
where
    F: Fn(f64, f64) -> bool,
{
    let mut best_index = 0;
    let mut best_value = values[0];
    for (index, &value) in values.iter().enumerate().skip(1) {
        if better(value, best_value) {
            best_index = index;
            best_value = value;
        }
    }
    (best_index, best_value)
}

impl ArraySum for NumericArray {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn product(&self) -> f64 {
        self.iter().product()
    }

    fn mean(&self) -> Result<f64> {
        require_non_empty(self, "mean")?;
        Ok(self.sum() / self.len() as f64)
    }
}

impl ArrayMinMax for NumericArray {
    fn min(&self) -> Result<f64> {
        require_non_empty(self, "min")?;
        Ok(scan_extreme(self.as_slice(), |v, best| v < best).1)
    }

    fn max(&self) -> Result<f64> {
        require_non_empty(self, "max")?;
        Ok(scan_extreme(self.as_slice(), |v, best| v > best).1)
    }

    fn argmin(&self) -> Result<usize> {
        require_non_empty(self, "argmin")?;
        Ok(scan_extreme(self.as_slice(), |v, best| v < best).0)
    }

    fn argmax(&self) -> Result<usize> {
        require_non_empty(self, "argmax")?;
        Ok(scan_extreme(self.as_slice(), |v, best| v > best).0)
    }
}

impl ArrayVariance for NumericArray {
    fn variance(&self) -> Result<f64> {
        require_non_empty(self, "variance")?;
        let mean = self.mean()?;
        let squared: f64 = self
            .iter()
            .map(|&v| {
                let diff = v - mean;
                diff * diff
            })
            .sum();
        Ok(squared / self.len() as f64)
    }

    fn std(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }
}
