use std::iter::FromIterator;

use super::NumericArray;

impl From<Vec<f64>> for NumericArray {
    fn from(value: Vec<f64>) -> Self {
        NumericArray::from_vec(value)
    }
}

impl From<&[f64]> for NumericArray {
    fn from(value: &[f64]) -> Self {
        NumericArray::from_vec(value.to_vec())
    }
}

impl From<NumericArray> for Vec<f64> {
    fn from(value: NumericArray) -> Self {
        value.into_vec()
    }
}

impl FromIterator<f64> for NumericArray {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        NumericArray::from_vec(iter.into_iter().collect())
    }
}

#[cfg(feature = "ndarray")]
mod ndarray_interop {
    use ndarray::{Array1, ArrayView1};

    use super::NumericArray;

    impl From<Array1<f64>> for NumericArray {
        fn from(value: Array1<f64>) -> Self {
            NumericArray::from_vec(value.to_vec())
        }
    }

    impl From<NumericArray> for Array1<f64> {
        fn from(value: NumericArray) -> Self {
            Array1::from_vec(value.into_vec())
        }
    }

    impl NumericArray {
        /// Borrows the buffer as an `ndarray` view without copying.
        pub fn view(&self) -> ArrayView1<'_, f64> {
            ArrayView1::from(self.as_slice())
        }
    }

}
