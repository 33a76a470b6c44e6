//!
//! The compact form of a drawing, where every value is a reference into the float or color tables
//!

use crate::float_table::*;
use crate::color_table::*;

use smallvec::*;

///
/// A point stored as references into the float table
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DataPoint {
    pub x_index: FloatIndex,
    pub y_index: FloatIndex
}

///
/// A rectangle stored as references into the float table
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DataRect {
    pub x_index:        FloatIndex,
    pub y_index:        FloatIndex,
    pub width_index:    FloatIndex,
    pub height_index:   FloatIndex
}

///
/// The compact equivalent of an `Instruction`
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DataInstruction {
    Move(DataPoint),
    AddLine(DataPoint),
    AddCurve { to: DataPoint, control1: DataPoint, control2: DataPoint },
    Close,
    Fill(DataColor),
    Stroke(DataColor),
    SetLineWidth(FloatIndex),

    /// The raw code for a `LineCapStyle`
    SetLineCapStyle(i32),
    UsesEvenOddFillRule,
    InitRect(DataRect),
    InitRoundedRect { rect: DataRect, corner_radius_index: FloatIndex },
    InitOval(DataRect),
    ContextSave,
    ContextRestore,
    ContextTranslate { x_index: FloatIndex, y_index: FloatIndex },
    ContextRotate(FloatIndex),
}

///
/// The compact equivalent of a `Path`
///
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct DataPath {
    pub instructions: Vec<DataInstruction>
}

impl DataPoint {
    #[inline]
    pub fn indices(&self) -> [FloatIndex; 2] {
        [self.x_index, self.y_index]
    }
}

impl DataRect {
    #[inline]
    pub fn indices(&self) -> [FloatIndex; 4] {
        [self.x_index, self.y_index, self.width_index, self.height_index]
    }
}

impl DataInstruction {
    ///
    /// Every float table index that this instruction refers to, including those used by colors
    ///
    pub fn float_indices(&self) -> SmallVec<[FloatIndex; 8]> {
        use self::DataInstruction::*;

        match self {
            Move(point)                                     => SmallVec::from_slice(&point.indices()),
            AddLine(point)                                  => SmallVec::from_slice(&point.indices()),
            AddCurve { to, control1, control2 }             => to.indices().iter()
                                                                .chain(control1.indices().iter())
                                                                .chain(control2.indices().iter())
                                                                .copied()
                                                                .collect(),
            Fill(color)                                     => SmallVec::from_slice(&color.indices()),
            Stroke(color)                                   => SmallVec::from_slice(&color.indices()),
            SetLineWidth(width)                             => smallvec![*width],
            InitRect(rect)                                  => SmallVec::from_slice(&rect.indices()),
            InitRoundedRect { rect, corner_radius_index }   => rect.indices().iter().chain(Some(corner_radius_index)).copied().collect(),
            InitOval(rect)                                  => SmallVec::from_slice(&rect.indices()),
            ContextTranslate { x_index, y_index }           => smallvec![*x_index, *y_index],
            ContextRotate(angle)                            => smallvec![*angle],

            Close                                           |
            SetLineCapStyle(_)                              |
            UsesEvenOddFillRule                             |
            ContextSave                                     |
            ContextRestore                                  => smallvec![]
        }
    }
}

impl From<Vec<DataInstruction>> for DataPath {
    fn from(instructions: Vec<DataInstruction>) -> DataPath {
        DataPath { instructions }
    }
}
