use crate::error::*;
use crate::color::*;
use crate::geometry::*;
use crate::encoding::*;
use crate::instruction::*;
use crate::float_table::*;
use crate::color_table::*;
use crate::data_instruction::*;

use std::result::Result;

///
/// Trait implemented by compact items that can be converted back to their verbose form
///
/// Decoding is used for data that has been loaded from elsewhere, so indices that don't refer to
/// anything in the tables are reported as errors rather than treated as bugs.
///
pub trait AssetDecoding {
    /// The verbose form of this item
    type Value;

    ///
    /// Converts this item back to its verbose form using the values in a set of tables
    ///
    fn decode_asset(&self, tables: &AssetTables) -> Result<Self::Value, AssetError>;
}

impl AssetDecoding for FloatIndex {
    type Value = f32;

    #[inline]
    fn decode_asset(&self, tables: &AssetTables) -> Result<f32, AssetError> {
        tables.floats.try_value_for(*self)
            .ok_or(AssetError::FloatIndexOutOfRange { index: *self, table_len: tables.floats.len() })
    }
}

impl AssetDecoding for ColorIndex {
    type Value = Color;

    fn decode_asset(&self, tables: &AssetTables) -> Result<Color, AssetError> {
        tables.colors.get(*self)
            .ok_or(AssetError::ColorIndexOutOfRange { index: *self, table_len: tables.colors.len() })?
            .decode_asset(tables)
    }
}

impl AssetDecoding for DataPoint {
    type Value = Point;

    #[inline]
    fn decode_asset(&self, tables: &AssetTables) -> Result<Point, AssetError> {
        Ok(Point {
            x: self.x_index.decode_asset(tables)?,
            y: self.y_index.decode_asset(tables)?
        })
    }
}

impl AssetDecoding for DataRect {
    type Value = Rect;

    fn decode_asset(&self, tables: &AssetTables) -> Result<Rect, AssetError> {
        Ok(Rect {
            origin: Point::new(self.x_index.decode_asset(tables)?, self.y_index.decode_asset(tables)?),
            size:   Point::new(self.width_index.decode_asset(tables)?, self.height_index.decode_asset(tables)?)
        })
    }
}

impl AssetDecoding for DataColor {
    type Value = Color;

    fn decode_asset(&self, tables: &AssetTables) -> Result<Color, AssetError> {
        Ok(Color {
            red:    self.red_index.decode_asset(tables)?,
            green:  self.green_index.decode_asset(tables)?,
            blue:   self.blue_index.decode_asset(tables)?,
            alpha:  self.alpha_index.decode_asset(tables)?
        })
    }
}

impl AssetDecoding for DataInstruction {
    type Value = Instruction;

    fn decode_asset(&self, tables: &AssetTables) -> Result<Instruction, AssetError> {
        use self::DataInstruction::*;

        Ok(match self {
            Move(point)                                     => Instruction::Move(point.decode_asset(tables)?),
            AddLine(point)                                  => Instruction::AddLine(point.decode_asset(tables)?),
            AddCurve { to, control1, control2 }             => Instruction::AddCurve {
                to:         to.decode_asset(tables)?,
                control1:   control1.decode_asset(tables)?,
                control2:   control2.decode_asset(tables)?
            },
            Close                                           => Instruction::Close,
            Fill(color)                                     => Instruction::Fill(color.decode_asset(tables)?),
            Stroke(color)                                   => Instruction::Stroke(color.decode_asset(tables)?),
            SetLineWidth(width)                             => Instruction::SetLineWidth(width.decode_asset(tables)?),
            SetLineCapStyle(code)                           => Instruction::SetLineCapStyle(LineCapStyle::from_raw_value(*code).ok_or(AssetError::UnknownLineCapStyle(*code))?),
            UsesEvenOddFillRule                             => Instruction::UsesEvenOddFillRule,

            InitRect(rect)                                  => Instruction::InitRect(rect.decode_asset(tables)?),
            InitRoundedRect { rect, corner_radius_index }   => Instruction::InitRoundedRect {
                rect:           rect.decode_asset(tables)?,
                corner_radius:  corner_radius_index.decode_asset(tables)?
            },
            InitOval(rect)                                  => Instruction::InitOval(rect.decode_asset(tables)?),

            ContextSave                                     => Instruction::ContextSave,
            ContextRestore                                  => Instruction::ContextRestore,
            ContextTranslate { x_index, y_index }           => Instruction::ContextTranslate(x_index.decode_asset(tables)?, y_index.decode_asset(tables)?),
            ContextRotate(angle)                            => Instruction::ContextRotate(angle.decode_asset(tables)?),
        })
    }
}

impl AssetDecoding for DataPath {
    type Value = Path;

    fn decode_asset(&self, tables: &AssetTables) -> Result<Path, AssetError> {
        let instructions = self.instructions.iter()
            .map(|instruction| instruction.decode_asset(tables))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Path { instructions })
    }
}

impl AssetDecoding for [DataPath] {
    type Value = Vec<Path>;

    fn decode_asset(&self, tables: &AssetTables) -> Result<Vec<Path>, AssetError> {
        self.iter()
            .map(|path| path.decode_asset(tables))
            .collect()
    }
}
