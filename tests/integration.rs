//! Integration tests for the wallplan arrangement pipeline.
//!
//! These tests exercise the full path from gallery JSON to wall JSON.
//! They verify:
//! - JSON deserialization works correctly
//! - Every strategy produces a complete, overlap-free wall
//! - Realignment pins the wall to the positive quadrant
//! - A fixed seed reproduces a wall exactly
//! - Errors surface for empty galleries and bad configuration

use wallplan::error::ArrangeError;
use wallplan::model::{ArrangeOptions, Gallery, Picture, Strategy};
use wallplan::{arrange, arrange_json};

// ─── Helpers ────────────────────────────────────────────────────

fn pic(id: u64, width: f64, height: f64) -> Picture {
    Picture::new(id, width, height)
}

fn options(strategy: Strategy, seed: u64) -> ArrangeOptions {
    ArrangeOptions {
        margin: 2,
        strategy,
        seed: Some(seed),
    }
}

/// The three-picture gallery from the original test wall:
/// 4x4, 6x6, 10x8 → padded 6x6, 8x8, 12x10 at margin 2.
fn small_gallery() -> Vec<Picture> {
    vec![pic(41, 4.0, 4.0), pic(42, 6.0, 6.0), pic(49, 10.0, 8.0)]
}

fn mixed_gallery() -> Vec<Picture> {
    vec![
        pic(1, 8.0, 10.5),
        pic(2, 12.0, 15.0),
        pic(3, 7.5, 9.5),
        pic(4, 11.0, 14.0),
        pic(5, 8.5, 6.5),
        pic(6, 15.0, 11.0),
        pic(7, 19.5, 16.5),
        pic(8, 13.0, 15.5),
    ]
}

/// Reconstruct the padded rectangle behind a placement: peel the half-margin
/// inset and rounding slack back off, exactly inverting what
/// `produce_placements` applies.
fn padded_rect(picture: &Picture, placement: wallplan::Placement, margin: i64) -> (f64, f64, f64, f64) {
    let x1 = placement.x - margin as f64 / 2.0 - (picture.width.ceil() - picture.width) / 2.0;
    let y1 = placement.y - margin as f64 / 2.0 - (picture.height.ceil() - picture.height) / 2.0;
    let w = picture.width.ceil() + margin as f64;
    let h = picture.height.ceil() + margin as f64;
    (x1, y1, x1 + w, y1 + h)
}

fn assert_no_overlap(pictures: &[Picture], wall: &wallplan::ArrangedWall, margin: i64) {
    let rects: Vec<_> = pictures
        .iter()
        .map(|p| padded_rect(p, wall.placements[&p.id], margin))
        .collect();
    for (i, a) in rects.iter().enumerate() {
        for b in rects.iter().skip(i + 1) {
            let disjoint = a.2 <= b.0 + 1e-9 || b.2 <= a.0 + 1e-9 || a.3 <= b.1 + 1e-9 || b.3 <= a.1 + 1e-9;
            assert!(disjoint, "pictures overlap: {:?} vs {:?}", a, b);
        }
    }
}

// ─── Linear walls ───────────────────────────────────────────────

#[test]
fn test_linear_wall_dimensions() {
    let wall = arrange(&small_gallery(), &options(Strategy::Linear, 13)).unwrap();
    // One row: width is the sum of padded widths, height the tallest pic.
    assert_eq!(wall.width, 26);
    assert_eq!(wall.height, 10);
    assert_eq!(wall.placements.len(), 3);
}

#[test]
fn test_linear_row_tiles_the_wall() {
    let pictures = small_gallery();
    let wall = arrange(&pictures, &options(Strategy::Linear, 13)).unwrap();

    // Padded intervals reconstructed from fine placements must tile [0, 26]
    // with no gaps, whatever order the shuffle produced.
    let mut spans: Vec<(f64, f64)> = pictures
        .iter()
        .map(|p| {
            let r = padded_rect(p, wall.placements[&p.id], 2);
            (r.0, r.2)
        })
        .collect();
    spans.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    assert!((spans[0].0).abs() < 1e-9);
    for pair in spans.windows(2) {
        assert!((pair[0].1 - pair[1].0).abs() < 1e-9);
    }
    assert!((spans[2].1 - 26.0).abs() < 1e-9);
}

#[test]
fn test_linear_vertical_centering_exact() {
    // Padded heights 6, 8, 10 center on a shared baseline; realigned, the
    // fine y of each picture is fixed regardless of shuffle order.
    let wall = arrange(&small_gallery(), &options(Strategy::Linear, 77)).unwrap();
    assert!((wall.placements[&41].y - 3.0).abs() < 1e-9);
    assert!((wall.placements[&42].y - 2.0).abs() < 1e-9);
    assert!((wall.placements[&49].y - 1.0).abs() < 1e-9);
}

// ─── All strategies ─────────────────────────────────────────────

#[test]
fn test_every_strategy_produces_an_overlap_free_wall() {
    let pictures = mixed_gallery();
    for strategy in [Strategy::Linear, Strategy::Grid, Strategy::Columns] {
        for seed in [0, 7, 99] {
            let wall = arrange(&pictures, &options(strategy, seed)).unwrap();
            assert_eq!(wall.placements.len(), pictures.len());
            assert!(wall.width > 0);
            assert!(wall.height > 0);
            assert_no_overlap(&pictures, &wall, 2);
        }
    }
}

#[test]
fn test_placements_stay_inside_the_wall() {
    let pictures = mixed_gallery();
    for strategy in [Strategy::Linear, Strategy::Grid, Strategy::Columns] {
        let wall = arrange(&pictures, &options(strategy, 5)).unwrap();
        for picture in &pictures {
            let r = padded_rect(picture, wall.placements[&picture.id], 2);
            assert!(r.0 >= -1e-9);
            assert!(r.1 >= -1e-9);
            assert!(r.2 <= wall.width as f64 + 1e-9);
            assert!(r.3 <= wall.height as f64 + 1e-9);
        }
    }
}

#[test]
fn test_same_seed_reproduces_the_wall() {
    let pictures = mixed_gallery();
    for strategy in [Strategy::Linear, Strategy::Grid, Strategy::Columns] {
        let a = arrange(&pictures, &options(strategy, 42)).unwrap();
        let b = arrange(&pictures, &options(strategy, 42)).unwrap();
        assert_eq!(a, b);
    }
}

// ─── JSON boundary ──────────────────────────────────────────────

#[test]
fn test_arrange_json_round_trip() {
    let input = r#"{
        "pictures": [
            { "id": 41, "width": 4.0, "height": 4.0 },
            { "id": 42, "width": 6.0, "height": 6.0 },
            { "id": 49, "width": 10.0, "height": 8.0 }
        ],
        "options": { "margin": 2, "strategy": "linear", "seed": 13 }
    }"#;

    let output = arrange_json(input).unwrap();
    let wall: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(wall["width"], 26);
    assert_eq!(wall["height"], 10);
    for id in ["41", "42", "49"] {
        assert!(wall["placements"][id]["x"].is_number());
        assert!(wall["placements"][id]["y"].is_number());
    }
}

#[test]
fn test_arrange_json_defaults_apply() {
    // No options block at all: margin 2, linear strategy.
    let output =
        arrange_json(r#"{ "pictures": [{ "id": 1, "width": 4.0, "height": 4.0 }] }"#).unwrap();
    let wall: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(wall["width"], 6);
    assert_eq!(wall["height"], 6);
    assert_eq!(wall["placements"]["1"]["x"], 1.0);
    assert_eq!(wall["placements"]["1"]["y"], 1.0);
}

#[test]
fn test_arrange_json_parse_error() {
    let err = arrange_json(r#"{ "pictures": "#).unwrap_err();
    assert!(matches!(err, ArrangeError::Parse { .. }));
}

#[test]
fn test_gallery_document_round_trips_through_serde() {
    let gallery = Gallery {
        pictures: small_gallery(),
        options: options(Strategy::Grid, 3),
    };
    let json = serde_json::to_string(&gallery).unwrap();
    let back: Gallery = serde_json::from_str(&json).unwrap();
    assert_eq!(back.pictures, gallery.pictures);
    assert_eq!(back.options, gallery.options);
}

// ─── Error surfaces ─────────────────────────────────────────────

#[test]
fn test_empty_gallery_is_empty_pool() {
    let err = arrange(&[], &ArrangeOptions::default()).unwrap_err();
    assert!(matches!(err, ArrangeError::EmptyPool { .. }));
}

#[test]
fn test_negative_margin_is_config_error() {
    let bad = ArrangeOptions {
        margin: -1,
        strategy: Strategy::Linear,
        seed: None,
    };
    let err = arrange(&small_gallery(), &bad).unwrap_err();
    assert!(matches!(err, ArrangeError::Config(_)));
}

#[test]
fn test_zero_dimension_picture_is_config_error() {
    let err = arrange(&[pic(1, 0.0, 4.0)], &ArrangeOptions::default()).unwrap_err();
    assert!(matches!(err, ArrangeError::Config(_)));
}

#[test]
fn test_no_partial_results_on_failure() {
    // A bad picture anywhere fails the whole request, even though the rest
    // of the gallery is arrangeable.
    let mut pictures = mixed_gallery();
    pictures.push(pic(9, -3.0, 4.0));
    assert!(arrange(&pictures, &ArrangeOptions::default()).is_err());
}
