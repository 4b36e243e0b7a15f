//! In-place rewrites (`fill`, `reverse`, `sort`) and the small predicates and
//! derived-array helpers that go with them.
use log::{debug, warn};

use crate::array::NumericArray;
use crate::error::{ArrayError, Result};
use crate::utils::try_with_capacity;

impl NumericArray {
    pub fn fill(&mut self, value: f64) {
        self.as_mut_slice().fill(value);
    }

    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Ascending sort in place.
    ///
    /// Uses the IEEE total order, which agrees with `<` for NaN-free data and
    /// places NaNs at the ends instead of leaving the result unspecified.
    pub fn sort(&mut self) {
        debug!("sorting {} elements", self.len());
        self.as_mut_slice().sort_unstable_by(f64::total_cmp);
    }

    /// Exact elementwise comparison; arrays of different length are never equal.
    pub fn equal(&self, other: &NumericArray) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    /// `true` if at least one element is non-zero.
    pub fn any(&self) -> bool {
        self.iter().any(|&v| v != 0.0)
    }

    /// `true` if every element is non-zero; vacuously `true` when empty.
    pub fn all(&self) -> bool {
        self.iter().all(|&v| v != 0.0)
    }

    /// Clamps every element into `[lo, hi]`. NaN elements stay NaN.
    pub fn clip(&self, lo: f64, hi: f64) -> Result<NumericArray> {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            warn!("clip: rejected bounds [{}, {}]", lo, hi);
            return Err(ArrayError::InvalidBounds { lo, hi });
        }
        self.map_values(|v| v.clamp(lo, hi))
    }

    /// Sorted distinct values, each once.
    pub fn unique(&self) -> Result<NumericArray> {
        let mut sorted = self.copy()?;
        sorted.sort();

        let mut data = try_with_capacity(sorted.len())?;
        for &value in sorted.iter() {
            if data.last() != Some(&value) {
                data.push(value);
            }
        }
        data.shrink_to_fit();
        Ok(NumericArray::from_vec(data))
    }
}
