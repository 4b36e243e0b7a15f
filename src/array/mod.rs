//! The owned one-dimensional `f64` buffer every operation works on.
//!
//! Storage is a `Vec<f64>` sized exactly at construction; the length never changes
//! afterwards. In-place utilities rewrite contents only, everything else returns a
//! fresh array. Dropping the array releases the buffer.
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use log::debug;

use crate::error::{ArrayError, Result};
use crate::utils::{try_collect, try_with_capacity};

mod convert;
mod format;

pub use format::PrintOptions;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericArray {
    data: Vec<f64>,
}

impl NumericArray {
    /// Copies `values` into newly allocated storage.
    pub fn new(values: &[f64]) -> Result<Self> {
        let mut data = try_with_capacity(values.len())?;
        data.extend_from_slice(values);
        Ok(Self { data })
    }

    /// Takes ownership of an existing buffer without copying.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn zeros(len: usize) -> Result<Self> {
        Self::full(len, 0.0)
    }

    pub fn ones(len: usize) -> Result<Self> {
        Self::full(len, 1.0)
    }

    pub fn full(len: usize, value: f64) -> Result<Self> {
        let mut data = try_with_capacity(len)?;
        data.resize(len, value);
        Ok(Self { data })
    }

    /// `ceil((stop - start) / step)` values starting at `start`, spaced by `step`.
    ///
    /// A step pointing away from `stop` produces an empty array.
    pub fn range(start: f64, stop: f64, step: f64) -> Result<Self> {
        if step == 0.0 || !step.is_finite() {
            log::warn!("range: rejected step {}", step);
            return Err(ArrayError::InvalidStep { step });
        }
        let count = ((stop - start) / step).ceil();
        if !count.is_finite() {
            return Err(ArrayError::InvalidRange { start, stop, step });
        }
        let len = if count <= 0.0 { 0 } else { count as usize };
        debug!("range({}, {}, {}) -> {} elements", start, stop, step, len);
        let data = try_collect((0..len).map(|i| start + step * i as f64))?;
        Ok(Self { data })
    }

    /// `len` evenly spaced points over `[start, stop]`, both ends included.
    pub fn linspace(start: f64, stop: f64, len: usize) -> Result<Self> {
        if len == 1 {
            return Self::new(&[start]);
        }
        let span = stop - start;
        let last = len.saturating_sub(1) as f64;
        let data = try_collect((0..len).map(|i| start + span * i as f64 / last))?;
        Ok(Self { data })
    }

    /// Deep copy with fallible allocation. `Clone` does the same but aborts on OOM.
    pub fn copy(&self) -> Result<Self> {
        Self::new(&self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Builds a same-length array by applying `f` to every element.
    pub(crate) fn map_values<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        let data = try_collect(self.data.iter().map(|&v| f(v)))?;
        Ok(Self { data })
    }
}

impl Index<usize> for NumericArray {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for NumericArray {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a> IntoIterator for &'a NumericArray {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
