///
/// A color, as a set of red, green, blue and alpha components
///
/// Components are conventionally in the range 0-1 but no attempt is made to enforce this. `==` compares
/// the components numerically; the color table matches colors with `is_identical_to()` instead.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub red:    f32,
    pub green:  f32,
    pub blue:   f32,
    pub alpha:  f32
}

impl Color {
    ///
    /// Creates a color from its components
    ///
    #[inline]
    pub fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Color {
        Color { red, green, blue, alpha }
    }

    ///
    /// True if every component of this color has exactly the same bit pattern as the other color
    ///
    /// This matches colors the same way the float table matches values: a NaN component is identical to
    /// itself, and `-0.0` is not identical to `0.0`.
    ///
    #[inline]
    pub fn is_identical_to(&self, other: &Color) -> bool {
        self.to_bits() == other.to_bits()
    }

    #[inline]
    fn to_bits(&self) -> [u32; 4] {
        [self.red.to_bits(), self.green.to_bits(), self.blue.to_bits(), self.alpha.to_bits()]
    }
}
