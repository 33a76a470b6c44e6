//!
//! The verbose form of a drawing: paths made up of instructions with their values stored inline
//!

use crate::color::*;
use crate::geometry::*;

///
/// How to cap lines
///
/// The raw values match the line cap codes used by the drawing model, and are what is stored in
/// the compact form of a path.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LineCapStyle {
    Butt    = 0,
    Round   = 1,
    Square  = 2
}

impl LineCapStyle {
    ///
    /// The code stored for this line cap style
    ///
    #[inline]
    pub fn raw_value(&self) -> i32 {
        *self as i32
    }

    ///
    /// Retrieves the line cap style for a stored code, if the code is known
    ///
    pub fn from_raw_value(raw_value: i32) -> Option<LineCapStyle> {
        match raw_value {
            0 => Some(LineCapStyle::Butt),
            1 => Some(LineCapStyle::Round),
            2 => Some(LineCapStyle::Square),
            _ => None
        }
    }
}

///
/// A single step in a path
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Instruction {
    /// Begins a new subpath at a point
    Move(Point),

    /// Adds a line from the current point
    AddLine(Point),

    /// Adds a bezier curve from the current point
    AddCurve { to: Point, control1: Point, control2: Point },

    /// Closes the current subpath
    Close,

    /// Fills the path with a color
    Fill(Color),

    /// Draws the outline of the path with a color
    Stroke(Color),

    /// Sets the width of stroked lines
    SetLineWidth(f32),

    /// Sets how lines should be capped
    SetLineCapStyle(LineCapStyle),

    /// Fills using the even-odd rule rather than the non-zero rule
    UsesEvenOddFillRule,

    /// Starts the path as a rectangle
    InitRect(Rect),

    /// Starts the path as a rectangle with rounded corners
    InitRoundedRect { rect: Rect, corner_radius: f32 },

    /// Starts the path as an oval inscribed in a rectangle
    InitOval(Rect),

    /// Saves the graphics state
    ContextSave,

    /// Restores the last saved graphics state
    ContextRestore,

    /// Moves the origin of the graphics context
    ContextTranslate(f32, f32),

    /// Rotates the graphics context by an angle in radians
    ContextRotate(f32),
}

///
/// An ordered list of drawing instructions
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Path {
    pub instructions: Vec<Instruction>
}

impl Path {
    ///
    /// Creates a path with no instructions
    ///
    pub fn new() -> Path {
        Path { instructions: vec![] }
    }

    ///
    /// Returns the colors used by this path, in the order that they're used
    ///
    pub fn colors<'a>(&'a self) -> impl 'a + Iterator<Item=Color> {
        self.instructions.iter()
            .filter_map(|instruction| match instruction {
                Instruction::Fill(color)    |
                Instruction::Stroke(color)  => Some(*color),
                _                           => None
            })
    }
}

impl From<Vec<Instruction>> for Path {
    fn from(instructions: Vec<Instruction>) -> Path {
        Path { instructions }
    }
}
