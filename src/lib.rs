pub mod array;
pub mod elementwise;
pub mod error;
pub mod linalg;
pub mod similarity;
pub mod statistics;
mod utility;
mod utils;

pub use array::{NumericArray, PrintOptions};
pub use elementwise::{BinaryOp, UnaryOp};
pub use error::{ArrayError, Result};
pub use statistics::{ArrayMinMax, ArraySum, ArrayVariance};

pub mod prelude {
    pub use crate::array::{NumericArray, PrintOptions};
    pub use crate::elementwise::{BinaryOp, UnaryOp};
    pub use crate::error::{ArrayError, Result};
    pub use crate::linalg::{dot, l2_norm};
    pub use crate::statistics::{ArrayMinMax, ArraySum, ArrayVariance};
}
