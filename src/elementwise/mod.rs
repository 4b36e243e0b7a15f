//! Elementwise arithmetic between two arrays or an array and a scalar.
//!
//! Division and remainder by an exactly-zero divisor produce `0.0` for that position.
//! Everything else follows IEEE-754, so NaN and infinities flow through untouched.
use log::debug;

use crate::array::NumericArray;
use crate::error::Result;
use crate::utils::{require_same_len, saturating_div, saturating_rem, try_collect};

mod math;

pub use math::UnaryOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
            BinaryOp::Modulo => "modulo",
        }
    }

    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => saturating_div(a, b),
            BinaryOp::Modulo => saturating_rem(a, b),
        }
    }
}

impl NumericArray {
    /// Combines two equal-length arrays position by position.
    pub fn binary(&self, other: &NumericArray, op: BinaryOp) -> Result<NumericArray> {
        require_same_len(op.name(), self.len(), other.len())?;
        debug!("{} over {} elements", op.name(), self.len());
        let data = try_collect(
            self.iter()
                .zip(other.iter())
                .map(|(&a, &b)| op.apply(a, b)),
        )?;
        Ok(NumericArray::from_vec(data))
    }

    /// Applies `op` with `value` as the right operand of every element.
    pub fn scalar(&self, value: f64, op: BinaryOp) -> Result<NumericArray> {
        self.map_values(|v| op.apply(v, value))
    }

    /// Same as [`NumericArray::scalar`] but overwrites this array.
    pub fn apply_scalar_inplace(&mut self, value: f64, op: BinaryOp) {
        for v in self.iter_mut() {
            *v = op.apply(*v, value);
        }
    }

    pub fn add(&self, other: &NumericArray) -> Result<NumericArray> {
        self.binary(other, BinaryOp::Add)
    }

    pub fn subtract(&self, other: &NumericArray) -> Result<NumericArray> {
        self.binary(other, BinaryOp::Subtract)
    }

    pub fn multiply(&self, other: &NumericArray) -> Result<NumericArray> {
        self.binary(other, BinaryOp::Multiply)
    }

    pub fn divide(&self, other: &NumericArray) -> Result<NumericArray> {
        self.binary(other, BinaryOp::Divide)
    }

    pub fn modulo(&self, other: &NumericArray) -> Result<NumericArray> {
        self.binary(other, BinaryOp::Modulo)
    }

    pub fn add_scalar(&self, value: f64) -> Result<NumericArray> {
        self.scalar(value, BinaryOp::Add)
    }

    pub fn subtract_scalar(&self, value: f64) -> Result<NumericArray> {
        self.scalar(value, BinaryOp::Subtract)
    }

    pub fn multiply_scalar(&self, value: f64) -> Result<NumericArray> {
        self.scalar(value, BinaryOp::Multiply)
    }

    pub fn divide_scalar(&self, value: f64) -> Result<NumericArray> {
        self.scalar(value, BinaryOp::Divide)
    }

    pub fn modulo_scalar(&self, value: f64) -> Result<NumericArray> {
        self.scalar(value, BinaryOp::Modulo)
    }
}
