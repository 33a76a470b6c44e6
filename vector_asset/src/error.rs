use crate::float_table::*;
use crate::color_table::*;

///
/// Errors that can occur when decoding or validating a stored vector asset
///
/// These are only produced when reading data back: encoding a drawing never fails.
///
#[derive(Clone, Copy, PartialEq, Debug, thiserror::Error)]
pub enum AssetError {
    /// A float index refers to an entry past the end of the float table
    #[error("float index {} is out of range (the float table has {table_len} entries)", .index.0)]
    FloatIndexOutOfRange { index: FloatIndex, table_len: usize },

    /// A color index refers to an entry past the end of the color table
    #[error("color index {} is out of range (the color table has {table_len} entries)", .index.0)]
    ColorIndexOutOfRange { index: ColorIndex, table_len: usize },

    /// A line cap instruction used a code that isn't a known line cap style
    #[error("unknown line cap style code {0}")]
    UnknownLineCapStyle(i32),
}
