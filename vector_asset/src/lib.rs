//!
//! # flo_vector_asset
//!
//! `flo_vector_asset` converts vector drawings - sequences of paths made up of `Instruction`s with
//! full-precision coordinates and colors - into a compact form where every number is a reference
//! into a shared, deduplicated table of floats and every color is an entry in a shared color table.
//!
//! The compact form (`DataPath`, `DataInstruction` and the two tables) is what gets written into a
//! small asset file: a coordinate that appears many times in a drawing is stored once and referenced
//! by index everywhere else. The `AssetEncoding` trait performs the conversion, and the `AssetDecoding`
//! trait performs the inverse so that an encoded asset can be verified or loaded back again.
//!
//! `VectorAssetWriter` is the usual entry point: it owns the tables for a single encoding session,
//! registers the palette of colors used by the paths and produces a `VectorAsset` that can be handed
//! to whatever is responsible for the on-disk format.
//!
//! ```
//! # use flo_vector_asset::*;
//! let mut path = Path::new();
//! path.move_to(1.0, 2.0);
//! path.line_to(1.0, 3.0);
//! path.close_path();
//!
//! let mut writer  = VectorAssetWriter::new();
//! let data_paths  = writer.write_paths(&[path]);
//!
//! assert!(writer.tables().floats.len() == 3);
//! assert!(data_paths[0].instructions.len() == 3);
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod error;
mod color;
mod asset;
mod writer;
mod context;
mod geometry;
mod encoding;
mod decoding;
mod instruction;
mod float_table;
mod color_table;
mod data_instruction;

pub use self::error::*;
pub use self::color::*;
pub use self::asset::*;
pub use self::writer::*;
pub use self::context::*;
pub use self::geometry::*;
pub use self::encoding::*;
pub use self::decoding::*;
pub use self::instruction::*;
pub use self::float_table::*;
pub use self::color_table::*;
pub use self::data_instruction::*;
