use crate::array::NumericArray;
use crate::error::Result;

/// The fixed set of elementwise math functions.
///
/// Domain errors are not intercepted: `Sqrt` of a negative value is NaN,
/// `Ln` of zero is negative infinity, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Abs,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Ln,
    Log10,
    Sqrt,
    Floor,
    Ceil,
    /// Half-way cases round away from zero.
    Round,
}

impl UnaryOp {
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryOp::Abs => x.abs(),
            UnaryOp::Sin => x.sin(),
            UnaryOp::Cos => x.cos(),
            UnaryOp::Tan => x.tan(),
            UnaryOp::Asin => x.asin(),
            UnaryOp::Acos => x.acos(),
            UnaryOp::Atan => x.atan(),
            UnaryOp::Exp => x.exp(),
            UnaryOp::Ln => x.ln(),
            UnaryOp::Log10 => x.log10(),
            UnaryOp::Sqrt => x.sqrt(),
            UnaryOp::Floor => x.floor(),
            UnaryOp::Ceil => x.ceil(),
            UnaryOp::Round => x.round(),
        }
    }
}

impl NumericArray {
    pub fn unary(&self, op: UnaryOp) -> Result<NumericArray> {
        self.map_values(|v| op.apply(v))
    }

    /// Raises every element to the same power.
    pub fn pow(&self, exponent: f64) -> Result<NumericArray> {
        self.map_values(|v| v.powf(exponent))
    }

    pub fn abs(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Abs)
    }

    pub fn sin(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Sin)
    }

    pub fn cos(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Cos)
    }

    pub fn tan(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Tan)
    }

    pub fn asin(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Asin)
    }

    pub fn acos(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Acos)
    }

    pub fn atan(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Atan)
    }

    pub fn exp(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Exp)
    }

    /// Natural logarithm.
    pub fn ln(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Ln)
    }

    pub fn log10(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Log10)
    }

    pub fn sqrt(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Sqrt)
    }

    pub fn floor(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Floor)
    }

    pub fn ceil(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Ceil)
    }

    pub fn round(&self) -> Result<NumericArray> {
        self.unary(UnaryOp::Round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

    fn assert_all_close(got: &NumericArray, want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want.iter()) {
            assert_relative_eq!(*g, *w, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_trigonometry() {
        let a = NumericArray::new(&[0.0, FRAC_PI_2, PI]).unwrap();
        assert_all_close(&a.sin().unwrap(), &[0.0, 1.0, 0.0]);
        assert_all_close(&a.cos().unwrap(), &[1.0, 0.0, -1.0]);

        let b = NumericArray::new(&[0.0, FRAC_PI_4]).unwrap();
        assert_all_close(&b.tan().unwrap(), &[0.0, 1.0]);

        let c = NumericArray::new(&[0.0, 1.0]).unwrap();
        assert_all_close(&c.asin().unwrap(), &[0.0, FRAC_PI_2]);
        assert_all_close(&c.acos().unwrap(), &[FRAC_PI_2, 0.0]);
        assert_all_close(&c.atan().unwrap(), &[0.0, FRAC_PI_4]);
    }

    #[test]
    fn test_exponentials_and_logs() {
        let a = NumericArray::new(&[0.0, 1.0, 2.0]).unwrap();
        assert_all_close(&a.exp().unwrap(), &[1.0, E, E * E]);

        let b = NumericArray::new(&[1.0, E, 100.0]).unwrap();
        assert_all_close(&b.ln().unwrap(), &[0.0, 1.0, 100f64.ln()]);
        assert_all_close(&b.log10().unwrap(), &[0.0, E.log10(), 2.0]);
    }

    #[test]
    fn test_rounding_family() {
        let a = NumericArray::new(&[-2.5, -1.2, 0.5, 1.5, 2.7]).unwrap();
        assert_eq!(a.floor().unwrap().as_slice(), &[-3.0, -2.0, 0.0, 1.0, 2.0]);
        assert_eq!(a.ceil().unwrap().as_slice(), &[-2.0, -1.0, 1.0, 2.0, 3.0]);
        assert_eq!(a.round().unwrap().as_slice(), &[-3.0, -1.0, 1.0, 2.0, 3.0]);
        assert_eq!(a.abs().unwrap().as_slice(), &[2.5, 1.2, 0.5, 1.5, 2.7]);
    }

    #[test]
    fn test_pow() {
        let a = NumericArray::new(&[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
        assert_all_close(
            &a.pow(3.0).unwrap(),
            &[8.0, 64.0, 216.0, 512.0, 1000.0],
        );
        assert_all_close(&a.pow(0.0).unwrap(), &[1.0; 5]);
        assert_all_close(&a.pow(0.5).unwrap(), &a.sqrt().unwrap().into_vec());
    }

    #[test]
    fn test_domain_results_pass_through() {
        let a = NumericArray::new(&[-1.0, 0.0, 2.0]).unwrap();
        let roots = a.sqrt().unwrap();
        assert!(roots[0].is_nan());
        assert_eq!(roots[1], 0.0);

        let logs = a.ln().unwrap();
        assert!(logs[0].is_nan());
        assert_eq!(logs[1], f64::NEG_INFINITY);

        assert!(a.asin().unwrap().iter().skip(2).all(|v| v.is_nan()));
    }

    #[test]
    fn test_unary_tag_matches_named_method() {
        let a = NumericArray::linspace(-1.0, 1.0, 9).unwrap();
        assert_eq!(a.unary(UnaryOp::Atan).unwrap(), a.atan().unwrap());
        assert_eq!(UnaryOp::Round.apply(-0.5), -1.0);
    }
}
