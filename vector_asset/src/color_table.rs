use crate::color::*;
use crate::instruction::*;
use crate::float_table::*;

use log::*;

///
/// Reference to an entry in a `ColorTable`
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct ColorIndex(pub u32);

///
/// A color stored as four references into a float table
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DataColor {
    pub red_index:      FloatIndex,
    pub green_index:    FloatIndex,
    pub blue_index:     FloatIndex,
    pub alpha_index:    FloatIndex
}

///
/// The palette of colors used by a drawing
///
/// Colors are matched against this table by decoding each entry through the float table and comparing
/// the result, so entries are found by value even if two entries happen to use different float indices.
/// The comparison is on the exact bit pattern of each component, as for the float table: a color with a
/// NaN component matches itself, and a `-0.0` component never matches a `0.0` one. The palette for an
/// asset is small, so lookups are a linear search in table order.
///
#[derive(Clone, Debug, Default)]
pub struct ColorTable {
    entries: Vec<DataColor>
}

impl DataColor {
    ///
    /// The float indices for this color, in red, green, blue, alpha order
    ///
    #[inline]
    pub fn indices(&self) -> [FloatIndex; 4] {
        [self.red_index, self.green_index, self.blue_index, self.alpha_index]
    }
}

impl ColorTable {
    ///
    /// Creates an empty color table
    ///
    pub fn new() -> ColorTable {
        ColorTable { entries: vec![] }
    }

    ///
    /// Creates a color table from a set of existing entries
    ///
    pub fn from_entries(entries: Vec<DataColor>) -> ColorTable {
        ColorTable { entries }
    }

    ///
    /// Decodes a color, or returns `None` if any of its components are not in the float table
    ///
    pub fn try_color_for(floats: &FloatTable, data_color: &DataColor) -> Option<Color> {
        Some(Color {
            red:    floats.try_value_for(data_color.red_index)?,
            green:  floats.try_value_for(data_color.green_index)?,
            blue:   floats.try_value_for(data_color.blue_index)?,
            alpha:  floats.try_value_for(data_color.alpha_index)?
        })
    }

    ///
    /// Decodes a color using the values in a float table
    ///
    /// The indices must all be in the float table: if they are not, the two tables have gone out of sync
    /// and this will panic.
    ///
    pub fn color_for(floats: &FloatTable, data_color: &DataColor) -> Color {
        Color {
            red:    floats.value_for(data_color.red_index),
            green:  floats.value_for(data_color.green_index),
            blue:   floats.value_for(data_color.blue_index),
            alpha:  floats.value_for(data_color.alpha_index)
        }
    }

    ///
    /// Finds the entry for a color, if it has been registered
    ///
    pub fn find_data_color(&self, floats: &FloatTable, color: &Color) -> Option<(ColorIndex, DataColor)> {
        self.entries.iter()
            .enumerate()
            .find(|(_, data_color)| Self::color_for(floats, data_color).is_identical_to(color))
            .map(|(idx, data_color)| (ColorIndex(idx as u32), *data_color))
    }

    ///
    /// Returns the entry for a color that is already in this table
    ///
    /// Every color used by a path must be registered before the path is encoded. A color that can't be
    /// found means that hasn't happened, which is a bug in the caller, so this will panic rather than
    /// produce an encoding that refers to the wrong color.
    ///
    pub fn data_color_for(&self, floats: &FloatTable, color: &Color) -> DataColor {
        match self.find_data_color(floats, color) {
            Some((_, data_color))   => data_color,
            None                    => {
                error!("Color {:?} was not registered before encoding ({} colors in the table)", color, self.entries.len());
                panic!("Couldn't find color: {:?}", color);
            }
        }
    }

    ///
    /// Adds a color to this table if it's not already present, and returns its index
    ///
    /// The components of a new color are added to the float table in red, green, blue, alpha order.
    ///
    pub fn register_color(&mut self, floats: &mut FloatTable, color: Color) -> ColorIndex {
        if let Some((index, _)) = self.find_data_color(floats, &color) {
            return index;
        }

        let data_color = DataColor {
            red_index:      floats.index_for(color.red),
            green_index:    floats.index_for(color.green),
            blue_index:     floats.index_for(color.blue),
            alpha_index:    floats.index_for(color.alpha)
        };

        let index = ColorIndex(self.entries.len() as u32);
        debug!("Registered color {:?} as {:?}", color, index);

        self.entries.push(data_color);
        index
    }

    ///
    /// Registers every color that is filled or stroked by a set of paths, in the order they first appear
    ///
    pub fn register_path_colors<'a, Paths>(&mut self, floats: &mut FloatTable, paths: Paths)
    where Paths: IntoIterator<Item=&'a Path> {
        for color in paths.into_iter().flat_map(|path| path.colors()) {
            self.register_color(floats, color);
        }
    }

    ///
    /// Retrieves the entry at a particular index
    ///
    #[inline]
    pub fn get(&self, index: ColorIndex) -> Option<&DataColor> {
        self.entries.get(index.0 as usize)
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    ///
    /// The entries in this table, in index order
    ///
    #[inline]
    pub fn entries(&self) -> &[DataColor] {
        &self.entries
    }
}
