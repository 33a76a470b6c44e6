use flo_vector_asset::*;

fn red() -> Color { Color::rgba(1.0, 0.0, 0.0, 1.0) }
fn green() -> Color { Color::rgba(0.0, 1.0, 0.0, 1.0) }
fn translucent_blue() -> Color { Color::rgba(0.0, 0.0, 1.0, 0.25) }

///
/// A drawing that uses every kind of instruction
///
fn mascot() -> Vec<Path> {
    let mut body = Path::new();
    body.save_state();
    body.translate(50.0, 50.0);
    body.rotate(0.25);
    body.oval(Rect::new(-20.0, -30.0, 40.0, 60.0));
    body.fill(red());
    body.line_width(2.0);
    body.line_cap(LineCapStyle::Round);
    body.stroke(green());
    body.restore_state();

    let mut face = Path::new();
    face.move_to(-5.0, 10.0);
    face.line_to(5.0, 10.0);
    face.curve_to(0.0, 20.0, 5.0, 15.0, -5.0, 15.0);
    face.close_path();
    face.even_odd_fill_rule();
    face.fill(translucent_blue());

    let mut frame = Path::new();
    frame.instructions(vec![
        Instruction::InitRect(Rect::new(0.0, 0.0, 100.0, 100.0)),
        Instruction::Stroke(green()),
    ]);
    frame.rounded_rect(Rect::new(10.0, 10.0, 80.0, 80.0), 5.0);
    frame.line_cap(LineCapStyle::Square);
    frame.stroke(red());

    vec![body, face, frame]
}

#[test_log::test]
fn encoding_is_deterministic() {
    let mut first_writer    = VectorAssetWriter::new();
    let mut second_writer   = VectorAssetWriter::new();

    first_writer.write_paths(&mascot());
    second_writer.write_paths(&mascot());

    assert!(first_writer.finish() == second_writer.finish());
}

#[test]
fn instruction_count_and_order_are_preserved() {
    let paths           = mascot();
    let mut writer      = VectorAssetWriter::new();
    let data_paths      = writer.write_paths(&paths);

    assert!(data_paths.len() == paths.len());

    for (path, data_path) in paths.iter().zip(data_paths.iter()) {
        assert!(path.instructions.len() == data_path.instructions.len());

        for (instruction, data_instruction) in path.instructions.iter().zip(data_path.instructions.iter()) {
            let decoded = data_instruction.decode_asset(writer.tables()).unwrap();
            assert!(decoded == *instruction);
        }
    }
}

#[test]
fn float_table_has_no_duplicates() {
    let mut writer = VectorAssetWriter::new();
    writer.write_paths(&mascot());

    let floats = writer.tables().floats.entries();

    for (idx, entry) in floats.iter().enumerate() {
        for other in floats[idx+1..].iter() {
            assert!(entry.value.to_bits() != other.value.to_bits());
        }
    }
}

#[test]
fn float_table_grows_by_one_on_miss() {
    let mut floats = FloatTable::new();

    for (value, expected_len) in vec![(1.0, 1), (2.0, 2), (1.0, 2), (0.5, 3), (2.0, 3)] {
        floats.index_for(value);
        assert!(floats.len() == expected_len);
    }
}

#[test]
fn float_indices_decode_to_original_values() {
    let mut tables  = AssetTables::new();
    let values      = vec![0.0, 1.0, -1.0, 0.1, 1.0/3.0, 1e-30, 1e30, std::f32::consts::E];

    let indices     = values.iter().map(|value| value.encode_asset(&mut tables)).collect::<Vec<_>>();

    for (value, index) in values.iter().zip(indices.iter()) {
        assert!(tables.floats.value_for(*index).to_bits() == value.to_bits());
    }
}

#[test]
fn paths_share_one_set_of_tables() {
    let paths           = mascot();
    let mut together    = VectorAssetWriter::new();
    together.write_paths(&paths);

    let separate_floats = paths.iter()
        .map(|path| {
            let mut writer = VectorAssetWriter::new();
            writer.write_paths(&[path.clone()]);
            writer.tables().floats.len()
        })
        .sum::<usize>();

    // 0.0, 5.0, 10.0 and others appear in more than one path, so the shared table is smaller
    assert!(together.tables().floats.len() < separate_floats);
}

#[test]
fn every_palette_color_is_found() {
    let palette     = vec![red(), green(), translucent_blue(), Color::rgba(0.5, 0.5, 0.5, 0.5)];
    let writer      = VectorAssetWriter::with_palette(palette.clone());
    let tables      = writer.tables();

    for color in palette.iter() {
        let data_color = tables.colors.data_color_for(&tables.floats, color);
        assert!(ColorTable::color_for(&tables.floats, &data_color) == *color);
    }
}

#[test]
#[should_panic(expected = "Couldn't find color")]
fn unregistered_color_is_fatal() {
    let mut writer = VectorAssetWriter::with_palette(vec![red()]);

    writer.data_paths(&[Path::from(vec![Instruction::Fill(green())])]);
}

#[test_log::test]
fn asset_survives_serialization() {
    let mut writer  = VectorAssetWriter::new();
    writer.write_paths(&mascot());
    let asset       = writer.finish();

    let json        = serde_json::to_string(&asset).unwrap();
    let loaded      = serde_json::from_str::<VectorAsset>(&json).unwrap();

    assert!(loaded == asset);
    assert!(loaded.validate() == Ok(()));
    assert!(loaded.decode_paths() == Ok(mascot()));
}

#[test]
fn loaded_asset_can_be_extended() {
    let mut writer  = VectorAssetWriter::new();
    writer.write_paths(&mascot());
    let asset       = writer.finish();

    let mut tables  = asset.tables();
    let before      = tables.floats.len();
    let extra       = Path::from(vec![Instruction::Move(Point::new(50.0, 100.0)), Instruction::Stroke(red())]);
    let data_path   = extra.encode_asset(&mut tables);

    assert!(tables.floats.len() == before);
    assert!(data_path.decode_asset(&tables) == Ok(extra));
}

#[test]
fn nan_color_is_registered_once_and_encodes() {
    let nan_red     = Color::rgba(f32::NAN, 0.0, 0.0, 1.0);
    let paths       = vec![
        Path::from(vec![Instruction::Fill(nan_red)]),
        Path::from(vec![Instruction::Stroke(nan_red)]),
    ];

    let mut writer  = VectorAssetWriter::new();
    let data_paths  = writer.write_paths(&paths);

    assert!(writer.tables().colors.len() == 1);
    assert!(data_paths[0].instructions[0] == DataInstruction::Fill(writer.tables().colors.entries()[0]));

    let decoded     = writer.finish().decode_paths().unwrap();

    match decoded[1].instructions[0] {
        Instruction::Stroke(color)  => assert!(color.is_identical_to(&nan_red)),
        other                       => panic!("Expected a stroke, found {:?}", other)
    }
}

#[test]
fn negative_zero_color_round_trips() {
    let black       = Color::rgba(0.0, 0.0, 0.0, 1.0);
    let neg_black   = Color::rgba(-0.0, 0.0, 0.0, 1.0);
    let path        = Path::from(vec![Instruction::Fill(black), Instruction::Fill(neg_black)]);

    let mut writer  = VectorAssetWriter::new();
    writer.write_paths(&[path]);

    assert!(writer.tables().colors.len() == 2);

    let decoded     = writer.finish().decode_paths().unwrap();

    match (decoded[0].instructions[0], decoded[0].instructions[1]) {
        (Instruction::Fill(first), Instruction::Fill(second)) => {
            assert!(first.is_identical_to(&black));
            assert!(second.is_identical_to(&neg_black));
            assert!(second.red.is_sign_negative());
        }

        other => panic!("Expected two fills, found {:?}", other)
    }
}
