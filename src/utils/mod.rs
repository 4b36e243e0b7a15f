use log::trace;

use crate::error::{ArrayError, Result};

/// Reserves exactly `len` slots, reporting failure instead of aborting.
pub(crate) fn try_with_capacity(len: usize) -> Result<Vec<f64>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| ArrayError::Allocation { requested: len })?;
    trace!("allocated buffer for {} elements", len);
    Ok(data)
}

/// Collects an exact-size iterator into freshly reserved storage.
pub(crate) fn try_collect<I>(iter: I) -> Result<Vec<f64>>
where
    I: ExactSizeIterator<Item = f64>,
{
    let mut data = try_with_capacity(iter.len())?;
    data.extend(iter);
    Ok(data)
}

/// `a / b`, or `0.0` when the divisor is exactly zero.
#[inline]
pub(crate) fn saturating_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Floating remainder (sign follows the dividend), or `0.0` for a zero divisor.
#[inline]
pub(crate) fn saturating_rem(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a % b
    }
}

pub(crate) fn require_same_len(op: &'static str, left: usize, right: usize) -> Result<()> {
    if left != right {
        log::warn!("{}: length mismatch ({}, {})", op, left, right);
        return Err(ArrayError::ShapeMismatch { op, left, right });
    }
    Ok(())
}
