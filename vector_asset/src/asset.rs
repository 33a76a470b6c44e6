use crate::error::*;
use crate::encoding::*;
use crate::decoding::*;
use crate::instruction::*;
use crate::float_table::*;
use crate::color_table::*;
use crate::data_instruction::*;

use itertools::*;

use std::result::Result;

///
/// An encoded drawing: the contents of the float and color tables, and the paths that refer to them
///
/// This is the form that is handed over to be stored in an asset file. Nothing here depends on how it's
/// stored: it can be serialized with serde, or written out field by field.
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct VectorAsset {
    pub floats: Vec<DataFloat>,
    pub colors: Vec<DataColor>,
    pub paths:  Vec<DataPath>
}

impl VectorAsset {
    ///
    /// Rebuilds the tables for this asset
    ///
    pub fn tables(&self) -> AssetTables {
        AssetTables {
            floats: FloatTable::from_entries(self.floats.clone()),
            colors: ColorTable::from_entries(self.colors.clone())
        }
    }

    ///
    /// Checks that every index in this asset refers to an entry in its tables
    ///
    pub fn validate(&self) -> Result<(), AssetError> {
        let table_len       = self.floats.len();
        let color_indices   = self.colors.iter().flat_map(|color| color.indices());
        let path_indices    = self.paths.iter()
            .flat_map(|path| path.instructions.iter())
            .flat_map(|instruction| instruction.float_indices());

        // The first index past the end of the float table is the error
        if let Some(index) = color_indices.chain(path_indices).find(|index| index.0 as usize >= table_len) {
            return Err(AssetError::FloatIndexOutOfRange { index, table_len });
        }

        // Line caps need to be valid codes
        self.paths.iter()
            .flat_map(|path| path.instructions.iter())
            .filter_map(|instruction| match instruction {
                DataInstruction::SetLineCapStyle(code)  => Some(*code),
                _                                       => None
            })
            .map(|code| LineCapStyle::from_raw_value(code).ok_or(AssetError::UnknownLineCapStyle(code)))
            .fold_ok((), |_, _| ())
    }

    ///
    /// Decodes the paths in this asset
    ///
    pub fn decode_paths(&self) -> Result<Vec<Path>, AssetError> {
        self.paths.decode_asset(&self.tables())
    }
}
