use std::fmt::{self, Write};

use super::NumericArray;

/// Rendering options for [`NumericArray::to_string_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    /// Digits after the decimal point.
    pub precision: usize,
    pub separator: String,
}

impl PrintOptions {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 8,
            separator: ", ".to_string(),
        }
    }
}

impl NumericArray {
    /// Renders the values as `[v0, v1, ...]` with a fixed number of decimals.
    pub fn to_string_with(&self, options: &PrintOptions) -> String {
        let mut out = String::with_capacity(2 + self.len() * (options.precision + 4));
        out.push('[');
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                out.push_str(&options.separator);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{:.*}", options.precision, value);
        }
        out.push(']');
        out
    }
}

impl fmt::Display for NumericArray {
    /// Honours the formatter precision, e.g. `format!("{:.2}", array)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, value)?,
                None => write!(f, "{}", value)?,
            }
        }
        write!(f, "]")
    }
}
