use crate::asset::*;
use crate::color::*;
use crate::encoding::*;
use crate::instruction::*;
use crate::color_table::*;
use crate::data_instruction::*;

use log::*;

///
/// Converts a drawing into a `VectorAsset`
///
/// A writer owns the float and color tables for a single encoding session. Paths are encoded in the
/// order they're supplied, and all of them share the same tables, so repeated coordinates and colors are
/// only stored once across the whole asset.
///
/// Colors must be in the color table before a path that uses them is encoded: `write_paths()` takes care
/// of this, while `data_paths()` expects that `add_colors()` (or `with_palette()`) has already been used.
///
#[derive(Clone, Debug, Default)]
pub struct VectorAssetWriter {
    tables: AssetTables,
    paths:  Vec<DataPath>
}

impl VectorAssetWriter {
    ///
    /// Creates a writer with empty tables
    ///
    pub fn new() -> VectorAssetWriter {
        VectorAssetWriter {
            tables: AssetTables::new(),
            paths:  vec![]
        }
    }

    ///
    /// Creates a writer with a color table that already contains a palette of colors
    ///
    /// The palette is registered in order, so the first color in the palette has index 0
    ///
    pub fn with_palette<Palette: IntoIterator<Item=Color>>(palette: Palette) -> VectorAssetWriter {
        let mut writer = VectorAssetWriter::new();

        for color in palette {
            writer.add_color(color);
        }

        writer
    }

    ///
    /// Adds a color to the color table, if it's not already present
    ///
    pub fn add_color(&mut self, color: Color) -> ColorIndex {
        let AssetTables { floats, colors } = &mut self.tables;
        colors.register_color(floats, color)
    }

    ///
    /// Adds every color used by a set of paths to the color table
    ///
    pub fn add_colors(&mut self, paths: &[Path]) {
        let AssetTables { floats, colors } = &mut self.tables;
        colors.register_path_colors(floats, paths);
    }

    ///
    /// Encodes a set of paths, whose colors must already be in the color table
    ///
    /// The encoded paths are returned and also kept to be written out by `finish()`
    ///
    pub fn data_paths(&mut self, paths: &[Path]) -> Vec<DataPath> {
        let data_paths = paths.encode_asset(&mut self.tables);
        self.paths.extend(data_paths.iter().cloned());

        data_paths
    }

    ///
    /// Registers the colors used by a set of paths and then encodes them
    ///
    pub fn write_paths(&mut self, paths: &[Path]) -> Vec<DataPath> {
        self.add_colors(paths);
        self.data_paths(paths)
    }

    ///
    /// The tables built up so far by this writer
    ///
    #[inline]
    pub fn tables(&self) -> &AssetTables {
        &self.tables
    }

    ///
    /// The paths that have been encoded so far
    ///
    #[inline]
    pub fn paths(&self) -> &[DataPath] {
        &self.paths
    }

    ///
    /// Finishes this session, returning the tables and paths as an asset
    ///
    pub fn finish(self) -> VectorAsset {
        debug!("Finished vector asset: {} paths, {} floats, {} colors", self.paths.len(), self.tables.floats.len(), self.tables.colors.len());

        VectorAsset {
            floats: self.tables.floats.entries().to_vec(),
            colors: self.tables.colors.entries().to_vec(),
            paths:  self.paths
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::*;
    use crate::float_table::*;
    use crate::context::*;

    #[test]
    fn write_example_path() {
        let mut writer  = VectorAssetWriter::new();
        let mut path    = Path::new();

        path.move_to(1.0, 2.0);
        path.line_to(1.0, 3.0);
        path.close_path();

        let data_paths  = writer.write_paths(&[path]);
        let values      = writer.tables().floats.entries().iter().map(|entry| entry.value).collect::<Vec<_>>();

        assert!(values == vec![1.0, 2.0, 3.0]);
        assert!(data_paths[0].instructions == vec![
            DataInstruction::Move(DataPoint { x_index: FloatIndex(0), y_index: FloatIndex(1) }),
            DataInstruction::AddLine(DataPoint { x_index: FloatIndex(0), y_index: FloatIndex(2) }),
            DataInstruction::Close
        ]);
    }

    #[test]
    fn palette_is_registered_in_order() {
        let writer = VectorAssetWriter::with_palette(vec![Color::rgba(0.0, 0.0, 1.0, 1.0), Color::rgba(1.0, 0.0, 0.0, 1.0)]);

        assert!(writer.tables().colors.len() == 2);
        assert!(ColorTable::color_for(&writer.tables().floats, &writer.tables().colors.entries()[1]) == Color::rgba(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn fill_with_palette_color() {
        let red         = Color::rgba(1.0, 0.0, 0.0, 1.0);
        let mut writer  = VectorAssetWriter::with_palette(vec![red]);
        let data_color  = writer.tables().colors.entries()[0];

        let data_paths  = writer.data_paths(&[Path::from(vec![Instruction::InitRect(Rect::new(0.0, 0.0, 1.0, 1.0)), Instruction::Fill(red)])]);

        assert!(data_paths[0].instructions[1] == DataInstruction::Fill(data_color));
    }

    #[test]
    #[should_panic(expected = "Couldn't find color")]
    fn fill_with_color_outside_palette() {
        let mut writer = VectorAssetWriter::with_palette(vec![Color::rgba(1.0, 0.0, 0.0, 1.0)]);

        writer.data_paths(&[Path::from(vec![Instruction::Fill(Color::rgba(0.0, 1.0, 0.0, 1.0))])]);
    }

    #[test]
    fn finish_keeps_every_path() {
        let mut writer = VectorAssetWriter::new();

        writer.write_paths(&[Path::from(vec![Instruction::Move(Point::new(1.0, 1.0))])]);
        writer.write_paths(&[Path::from(vec![Instruction::Stroke(Color::rgba(0.0, 0.0, 0.0, 1.0))]), Path::new()]);

        let asset = writer.finish();

        assert!(asset.paths.len() == 3);
        assert!(asset.colors.len() == 1);
        assert!(asset.floats == vec![DataFloat { value: 1.0 }, DataFloat { value: 0.0 }]);
    }
}
