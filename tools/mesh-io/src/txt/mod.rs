//! Plain-text numeric arrays, one row per line, columns separated by
//! whitespace.
//!
//! This is the format mesh generators commonly dump their point and
//! triangulation arrays in:
//!
//! ```text
//! 0 0
//! 1 0
//! 0 1
//! ```
//!
//! Blank lines are skipped and `#` starts a comment that runs to the end of
//! the line.

use std::fmt;
use std::num;
use std::str;

pub use parser::parse;
pub use parser::read_file;
pub use parser::Error;
pub use parser::ErrorKind;
pub use serializer::write;

mod parser;
mod serializer;

/// Element types a [`Table`] can be parsed into.
pub trait Value: Copy + fmt::Display + str::FromStr {
    #[doc(hidden)]
    fn bad_value(token: &str, err: <Self as str::FromStr>::Err) -> ErrorKind;
}

macro_rules! impl_value {
    ( $variant:ident, $err:ty, $( $t:ty ),* ) => {
        $(
            impl Value for $t {
                fn bad_value(token: &str, err: $err) -> ErrorKind {
                    ErrorKind::$variant {
                        token: token.to_owned(),
                        err,
                    }
                }
            }
        )*
    };
}

impl_value!(BadFloat, num::ParseFloatError, f32, f64);
impl_value!(BadInteger, num::ParseIntError, i32, i64, u32, u64, usize);

/// Returned by [`Table::to_fixed_rows`] when the table does not have the
/// requested number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} columns, found {}",
            self.expected, self.found,
        )
    }
}

impl std::error::Error for ShapeError {}

/// A dense, row-major, two-dimensional array.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    cols: usize,
    data: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    /// Builds a table out of its row-major values.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not a multiple of `cols`, or if `cols` is
    /// zero while `data` is not empty.
    pub fn from_raw_parts(cols: usize, data: Vec<T>) -> Self {
        if cols == 0 {
            assert!(data.is_empty(), "a table without columns must be empty");
        } else {
            assert_eq!(data.len() % cols, 0);
        }
        Self { cols, data }
    }

    /// Returns the number of rows (lines of data) in the table.
    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.data.len() / self.cols
        }
    }

    /// Returns the number of columns, zero for an empty table.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the values of the table, row after row.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn row(&self, idx: usize) -> &[T] {
        &self.data[idx * self.cols..(idx + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(usize::max(self.cols, 1))
    }

    /// Returns the values of the `col`-th column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data.iter().skip(col).step_by(self.cols)
    }

    pub fn into_raw_parts(self) -> (usize, Vec<T>) {
        (self.cols, self.data)
    }
}

impl<T: Copy> Table<T> {
    /// Converts each row into a fixed-size array.
    ///
    /// An empty table converts into an empty list, whatever `N` is.
    pub fn to_fixed_rows<const N: usize>(&self) -> Result<Vec<[T; N]>, ShapeError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        if self.cols != N {
            return Err(ShapeError {
                expected: N,
                found: self.cols,
            });
        }
        Ok(self
            .iter_rows()
            .map(|row| <[T; N]>::try_from(row).unwrap())
            .collect())
    }
}

impl<T: Value> str::FromStr for Table<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes())
    }
}
