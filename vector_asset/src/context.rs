use crate::color::*;
use crate::geometry::*;
use crate::instruction::*;

///
/// A path context provides the set of drawing actions that make up a path
///
/// Only `instruction()` needs to be implemented: the other methods are conveniences that generate the
/// corresponding `Instruction`.
///
pub trait PathContext {
    ///
    /// Adds an instruction to the end of this path
    ///
    fn instruction(&mut self, instruction: Instruction);

    fn move_to(&mut self, x: f32, y: f32)                               { self.instruction(Instruction::Move(Point::new(x, y))); }
    fn line_to(&mut self, x: f32, y: f32)                               { self.instruction(Instruction::AddLine(Point::new(x, y))); }
    fn close_path(&mut self)                                            { self.instruction(Instruction::Close); }
    fn fill(&mut self, color: Color)                                    { self.instruction(Instruction::Fill(color)); }
    fn stroke(&mut self, color: Color)                                  { self.instruction(Instruction::Stroke(color)); }
    fn line_width(&mut self, width: f32)                                { self.instruction(Instruction::SetLineWidth(width)); }
    fn line_cap(&mut self, cap: LineCapStyle)                           { self.instruction(Instruction::SetLineCapStyle(cap)); }
    fn even_odd_fill_rule(&mut self)                                    { self.instruction(Instruction::UsesEvenOddFillRule); }
    fn rect(&mut self, rect: Rect)                                      { self.instruction(Instruction::InitRect(rect)); }
    fn rounded_rect(&mut self, rect: Rect, corner_radius: f32)          { self.instruction(Instruction::InitRoundedRect { rect, corner_radius }); }
    fn oval(&mut self, rect: Rect)                                      { self.instruction(Instruction::InitOval(rect)); }
    fn save_state(&mut self)                                            { self.instruction(Instruction::ContextSave); }
    fn restore_state(&mut self)                                         { self.instruction(Instruction::ContextRestore); }
    fn translate(&mut self, x: f32, y: f32)                             { self.instruction(Instruction::ContextTranslate(x, y)); }
    fn rotate(&mut self, angle: f32)                                    { self.instruction(Instruction::ContextRotate(angle)); }

    ///
    /// Adds a bezier curve to (x, y) from the current point
    ///
    fn curve_to(&mut self, x: f32, y: f32, cp1_x: f32, cp1_y: f32, cp2_x: f32, cp2_y: f32) {
        self.instruction(Instruction::AddCurve {
            to:         Point::new(x, y),
            control1:   Point::new(cp1_x, cp1_y),
            control2:   Point::new(cp2_x, cp2_y)
        });
    }

    ///
    /// Adds a list of instructions to this path
    ///
    fn instructions<Instructions: IntoIterator<Item=Instruction>>(&mut self, instructions: Instructions)
    where Self: Sized {
        instructions.into_iter().for_each(|instruction| self.instruction(instruction));
    }
}

impl PathContext for Vec<Instruction> {
    #[inline]
    fn instruction(&mut self, instruction: Instruction) {
        self.push(instruction);
    }
}

impl PathContext for Path {
    #[inline]
    fn instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }
}
