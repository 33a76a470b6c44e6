use crate::color::*;
use crate::geometry::*;
use crate::instruction::*;
use crate::float_table::*;
use crate::color_table::*;
use crate::data_instruction::*;

use log::*;

///
/// The float and color tables shared by everything encoded in a single session
///
/// Every path encoded with the same tables shares their entries, so a value that appears in more than
/// one path is only stored once.
///
#[derive(Clone, Debug, Default)]
pub struct AssetTables {
    pub floats: FloatTable,
    pub colors: ColorTable
}

impl AssetTables {
    ///
    /// Creates a set of empty tables
    ///
    pub fn new() -> AssetTables {
        AssetTables {
            floats: FloatTable::new(),
            colors: ColorTable::new()
        }
    }
}

///
/// Trait implemented by items that can be converted to their compact form
///
/// Encoding adds any values that aren't already present to the float table. Colors are looked up in
/// the color table, which must already contain them.
///
pub trait AssetEncoding {
    /// The compact form of this item
    type Data;

    ///
    /// Converts this item to its compact form, adding new values to the tables as needed
    ///
    fn encode_asset(&self, tables: &mut AssetTables) -> Self::Data;
}

impl AssetEncoding for f32 {
    type Data = FloatIndex;

    #[inline]
    fn encode_asset(&self, tables: &mut AssetTables) -> FloatIndex {
        tables.floats.index_for(*self)
    }
}

impl AssetEncoding for Point {
    type Data = DataPoint;

    #[inline]
    fn encode_asset(&self, tables: &mut AssetTables) -> DataPoint {
        // x is always added before y
        let x_index = self.x.encode_asset(tables);
        let y_index = self.y.encode_asset(tables);

        DataPoint { x_index, y_index }
    }
}

impl AssetEncoding for Rect {
    type Data = DataRect;

    fn encode_asset(&self, tables: &mut AssetTables) -> DataRect {
        let x_index         = self.origin.x.encode_asset(tables);
        let y_index         = self.origin.y.encode_asset(tables);
        let width_index     = self.size.x.encode_asset(tables);
        let height_index    = self.size.y.encode_asset(tables);

        DataRect { x_index, y_index, width_index, height_index }
    }
}

impl AssetEncoding for Color {
    type Data = DataColor;

    #[inline]
    fn encode_asset(&self, tables: &mut AssetTables) -> DataColor {
        tables.colors.data_color_for(&tables.floats, self)
    }
}

impl AssetEncoding for Instruction {
    type Data = DataInstruction;

    fn encode_asset(&self, tables: &mut AssetTables) -> DataInstruction {
        use self::Instruction::*;

        match self {
            Move(point)                             => DataInstruction::Move(point.encode_asset(tables)),
            AddLine(point)                          => DataInstruction::AddLine(point.encode_asset(tables)),
            AddCurve { to, control1, control2 }     => {
                let to          = to.encode_asset(tables);
                let control1    = control1.encode_asset(tables);
                let control2    = control2.encode_asset(tables);

                DataInstruction::AddCurve { to, control1, control2 }
            }
            Close                                   => DataInstruction::Close,
            Fill(color)                             => DataInstruction::Fill(color.encode_asset(tables)),
            Stroke(color)                           => DataInstruction::Stroke(color.encode_asset(tables)),
            SetLineWidth(width)                     => DataInstruction::SetLineWidth(width.encode_asset(tables)),
            SetLineCapStyle(cap)                    => DataInstruction::SetLineCapStyle(cap.raw_value()),
            UsesEvenOddFillRule                     => DataInstruction::UsesEvenOddFillRule,

            InitRect(rect)                          => DataInstruction::InitRect(rect.encode_asset(tables)),
            InitRoundedRect { rect, corner_radius } => {
                let rect                = rect.encode_asset(tables);
                let corner_radius_index = corner_radius.encode_asset(tables);

                DataInstruction::InitRoundedRect { rect, corner_radius_index }
            }
            InitOval(rect)                          => DataInstruction::InitOval(rect.encode_asset(tables)),

            ContextSave                             => DataInstruction::ContextSave,
            ContextRestore                          => DataInstruction::ContextRestore,
            ContextTranslate(x, y)                  => {
                let x_index = x.encode_asset(tables);
                let y_index = y.encode_asset(tables);

                DataInstruction::ContextTranslate { x_index, y_index }
            }
            ContextRotate(angle)                    => DataInstruction::ContextRotate(angle.encode_asset(tables)),
        }
    }
}

impl AssetEncoding for Path {
    type Data = DataPath;

    fn encode_asset(&self, tables: &mut AssetTables) -> DataPath {
        DataPath {
            instructions: self.instructions.iter()
                .map(|instruction| instruction.encode_asset(tables))
                .collect()
        }
    }
}

impl AssetEncoding for [Path] {
    type Data = Vec<DataPath>;

    fn encode_asset(&self, tables: &mut AssetTables) -> Vec<DataPath> {
        let initial_floats  = tables.floats.len();
        let data_paths      = self.iter().map(|path| path.encode_asset(tables)).collect::<Vec<_>>();

        debug!("Encoded {} paths ({} new floats, {} floats in total)", data_paths.len(), tables.floats.len() - initial_floats, tables.floats.len());

        data_paths
    }
}
