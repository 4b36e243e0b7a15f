use log::debug;

use crate::array::NumericArray;
use crate::error::Result;
use crate::utils::require_same_len;

/// Sum of elementwise products.
pub fn dot(a: &NumericArray, b: &NumericArray) -> Result<f64> {
    require_same_len("dot", a.len(), b.len())?;
    debug!("dot over {} elements", a.len());
    Ok(dot_unchecked(a.as_slice(), b.as_slice()))
}

/// Euclidean norm. An empty array has norm `0.0`.
pub fn l2_norm(a: &NumericArray) -> f64 {
    a.iter().map(|&v| v * v).sum::<f64>().sqrt()
}

/// Euclidean distance between two equal-length arrays.
pub fn distance(a: &NumericArray, b: &NumericArray) -> Result<f64> {
    require_same_len("distance", a.len(), b.len())?;
    let squared: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let diff = x - y;
            diff * diff
        })
        .sum();
    Ok(squared.sqrt())
}

/// Unit-length copy of `a`. A zero-norm array comes back unchanged.
pub fn normalized(a: &NumericArray) -> Result<NumericArray> {
    let norm = l2_norm(a);
    if norm == 0.0 {
        return a.copy();
    }
    a.map_values(|v| v / norm)
}

pub(crate) fn dot_unchecked(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl NumericArray {
    pub fn dot(&self, other: &NumericArray) -> Result<f64> {
        dot(self, other)
    }

    pub fn l2_norm(&self) -> f64 {
        l2_norm(self)
    }
}
