// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end assembly of GUIs from chained configurations.

use hudkit::component::GuiComponent;
use hudkit::gui::GuiConfig;
use hudkit::image::ImageConfig;
use hudkit::metrics::FontMetrics;
use hudkit::slice9::Slice9;
use hudkit::BuildError;

fn ascii_metrics() -> FontMetrics {
    let mut metrics = FontMetrics::new();
    for unit in 0x20..0x7F {
        metrics.set(unit, 6.0);
    }
    metrics
}

#[test]
fn mixed_gui_assembles_in_insertion_order() -> Result<(), BuildError> {
    let gui = GuiConfig::new()
        .button(|b| {
            Ok(b.text("Hello Button")
                .id("b1")
                .background("[local]button.png", Some("[local]button_.png".into()))
                .calculate_size(&ascii_metrics(), 20, 20, 10, 10))
        })?
        .scope(|g| {
            g.offset(77, 20)
                .image(|i| {
                    Ok(i.background("[local]button.png")
                        .image_size(68, 16)
                        .size(34, 8))
                })?
                .text(|t| Ok(t.add_line("HUM>").offset(0, 20)))
        })?
        .input(|f| Ok(f.offset(0, 40).size(30, 20).value("Default Value")))?
        .calculate_size(&ascii_metrics())
        .build("[local]login.png", -1, -1);

    assert_eq!(gui.components.len(), 4);
    match &gui.components[0] {
        GuiComponent::Button(button) => {
            // 12 glyphs at 6px plus 40px padding; one line plus 20px.
            assert_eq!((button.width, button.height), (112, 29));
        }
        other => panic!("unexpected component {other:?}"),
    }
    match &gui.components[2] {
        GuiComponent::Text(text) => assert_eq!((text.x, text.y), (77, 40)),
        other => panic!("unexpected component {other:?}"),
    }
    match &gui.components[3] {
        // The scope was left before the input was placed.
        GuiComponent::TextField(field) => assert_eq!((field.x, field.y), (0, 40)),
        other => panic!("unexpected component {other:?}"),
    }
    // Wide enough for the button, tall enough for the input.
    assert_eq!(gui.width, 112);
    assert_eq!(gui.height, 60);
    Ok(())
}

#[test]
fn configurations_copy_as_plain_values() {
    let base = ImageConfig::new()
        .background("sheet.png")
        .size(10, 10)
        .offset(5, 5);
    let moved = base.clone().offset(100, 0);

    let first = base.build().unwrap();
    let second = moved.build().unwrap();
    assert_eq!((first.x, first.y), (5, 5));
    assert_eq!((second.x, second.y), (105, 5));
}

#[test]
fn slice9_background_fills_the_calculated_gui() -> Result<(), BuildError> {
    let slice = Slice9::new()
        .insets(3, 3, 3, 3)
        .image_size(7, 7, 1, 1)
        .address("[local]slice9.png", "[local]slice9.center.png");
    let gui = GuiConfig::new()
        .text(|t| Ok(t.add_line("FAQ").add_line("HUM?")))?
        .calculate_size(&ascii_metrics())
        .build_with(&slice, -1, -1)?;

    assert_eq!(gui.background, "[local]slice9.center.png");
    // Eight border tiles, then the text.
    assert_eq!(gui.components.len(), 9);
    let far_corner = gui
        .components
        .iter()
        .filter_map(|c| match c {
            GuiComponent::SplitImage(split) => Some((split.x, split.y)),
            _ => None,
        })
        .max();
    assert_eq!(far_corner, Some((gui.width - 3, gui.height - 3)));
    Ok(())
}

#[test]
fn metrics_survive_the_binary_round_trip() {
    let metrics = ascii_metrics();
    let restored = FontMetrics::from_bytes(&metrics.to_bytes()).unwrap();
    assert_eq!(restored.line_width("FAQ"), metrics.line_width("FAQ"));
    let err = FontMetrics::from_bytes(&[0; 3]).unwrap_err();
    assert_eq!(
        err,
        BuildError::MetricsLength {
            expected: FontMetrics::BYTE_LEN,
            found: 3,
        }
    );
}
