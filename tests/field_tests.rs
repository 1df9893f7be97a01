// Host-side tests for the displacement field and the pointer reducer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod field {
        include!("../src/core/field.rs");
    }
}

use crate::core::field::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn moving_cursor(x: f32, y: f32, vx: f32, vy: f32) -> CursorState {
    CursorState {
        x,
        y,
        prev_x: x,
        prev_y: y,
        vx,
        vy,
    }
}

#[test]
fn seeded_offsets_fall_in_seed_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = DisplacementField::seeded(10, &mut rng).unwrap();
    assert_eq!(field.as_slice().len(), 4 * 10 * 10);
    for j in 0..10 {
        for i in 0..10 {
            let (dx, dy) = field.cell(i, j);
            assert!((-125.0..130.0).contains(&dx), "dx={dx}");
            assert!((-125.0..130.0).contains(&dy), "dy={dy}");
        }
    }
    assert!(field.max_abs() > 0.0);
}

#[test]
fn still_cursor_only_decays() {
    for r in [0.5_f32, 0.9, 0.99] {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = DisplacementField::seeded(12, &mut rng).unwrap();
        let params = DistortionParams {
            relaxation: r,
            ..DistortionParams::default()
        };
        let cursor = moving_cursor(0.5, 0.5, 0.0, 0.0);
        let mut last = field.max_abs();
        for _ in 0..50 {
            field.step(&cursor, &params).unwrap();
            let now = field.max_abs();
            assert!(now <= last, "r={r}: {now} > {last}");
            if last > 0.0 {
                assert!(now < last, "r={r}: no decay");
            }
            last = now;
        }
    }
}

#[test]
fn default_params_settle_after_a_hundred_idle_frames() {
    let mut rng = StdRng::seed_from_u64(1);
    let params = DistortionParams::default();
    let mut field = DisplacementField::seeded(params.grid as usize, &mut rng).unwrap();
    let initial = field.max_abs();
    let cursor = CursorState::default();
    for _ in 0..100 {
        field.step(&cursor, &params).unwrap();
    }
    let bound = initial * 0.9_f32.powi(100) * (1.0 + 1e-3);
    assert!(field.max_abs() <= bound, "{} > {}", field.max_abs(), bound);
}

#[test]
fn injection_hits_cursor_cell_with_capped_power() {
    let params = DistortionParams::default();
    let mut field = DisplacementField::zeroed(10).unwrap();
    // grid 10 * mouse 0.1 -> radius of one cell: only the cell under the cursor.
    field.inject(&moving_cursor(0.5, 0.5, 0.1, 0.1), &params);
    let (dx, dy) = field.cell(5, 5);
    // strength 0.15 * 100 * v 0.1 * power cap 10
    assert!((dx - 15.0).abs() < 1e-4, "dx={dx}");
    assert!((dy + 15.0).abs() < 1e-4, "dy={dy}");
    assert_eq!(field.cell(0, 0), (0.0, 0.0));
    assert_eq!(field.cell(6, 5), (0.0, 0.0));
}

#[test]
fn injection_falls_off_with_distance() {
    let params = DistortionParams {
        mouse: 0.5,
        ..DistortionParams::default()
    };
    let mut field = DisplacementField::zeroed(10).unwrap();
    field.inject(&moving_cursor(0.5, 0.5, 0.01, 0.0), &params);
    let (center, _) = field.cell(5, 5);
    let (two_away, _) = field.cell(5, 7);
    let (outside, _) = field.cell(0, 0);
    // power = 5 / 2 at two cells, capped at 10 at the cursor
    assert!((center - 0.15 * 100.0 * 0.01 * 10.0).abs() < 1e-4);
    assert!((two_away - 0.15 * 100.0 * 0.01 * 2.5).abs() < 1e-4);
    assert_eq!(outside, 0.0);
}

#[test]
fn still_cursor_injects_nothing() {
    let params = DistortionParams {
        mouse: 0.5,
        ..DistortionParams::default()
    };
    let spots = [
        (0.5, 0.5),
        (0.0, 0.0),
        (1.0, 1.0),
        (0.0, 1.0),
        (1.0, 0.0),
        (0.5, 0.0),
        (0.0, 0.5),
    ];
    for (x, y) in spots {
        let mut field = DisplacementField::zeroed(10).unwrap();
        field.inject(&moving_cursor(x, y, 0.0, 0.0), &params);
        assert_eq!(field.max_abs(), 0.0, "cursor at ({x}, {y})");
    }
}

#[test]
fn released_field_reports_layout_error() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = DisplacementField::seeded(10, &mut rng).unwrap();
    field.release();
    assert!(field.is_released());
    let err = field
        .step(&CursorState::default(), &DistortionParams::default())
        .unwrap_err();
    assert_eq!(
        err,
        FieldError::Layout {
            expected: 400,
            actual: 0
        }
    );
}

#[test]
fn reducer_accumulates_velocity_between_frames() {
    let s = CursorState::default()
        .apply(PointerSample::Moved { x: 0.5, y: 0.5 })
        .consume_velocity();
    assert!(s.is_still());
    assert_eq!((s.x, s.y), (0.5, 0.5));

    let s = s
        .apply(PointerSample::Moved { x: 0.6, y: 0.5 })
        .apply(PointerSample::Moved { x: 0.7, y: 0.4 });
    assert!((s.vx - 0.2).abs() < 1e-6);
    assert!((s.vy + 0.1).abs() < 1e-6);
    assert_eq!((s.prev_x, s.prev_y), (0.7, 0.4));

    let consumed = s.consume_velocity();
    assert!(consumed.is_still());
    assert_eq!((consumed.x, consumed.y), (0.7, 0.4));
}

#[test]
fn leaving_resets_cursor() {
    let s = CursorState::default()
        .apply(PointerSample::Moved { x: 0.3, y: 0.8 })
        .apply(PointerSample::Left);
    assert_eq!(s, CursorState::default());
}

#[test]
fn client_coordinates_flip_y() {
    let top_left = PointerSample::from_client(100.0, 50.0, 100.0, 50.0, 200.0, 100.0);
    assert_eq!(top_left, Some(PointerSample::Moved { x: 0.0, y: 1.0 }));
    let middle = PointerSample::from_client(200.0, 100.0, 100.0, 50.0, 200.0, 100.0);
    assert_eq!(middle, Some(PointerSample::Moved { x: 0.5, y: 0.5 }));
    assert_eq!(
        PointerSample::from_client(10.0, 10.0, 0.0, 0.0, 0.0, 100.0),
        None
    );
}

#[test]
fn params_validation() {
    assert!(DistortionParams::default().validate().is_ok());
    let p = DistortionParams {
        grid: 0,
        ..DistortionParams::default()
    };
    assert_eq!(p.validate(), Err(ParamsError::EmptyGrid));
    let p = DistortionParams {
        relaxation: 1.0,
        ..DistortionParams::default()
    };
    assert_eq!(p.validate(), Err(ParamsError::Relaxation(1.0)));
    let p = DistortionParams {
        strength: f32::NAN,
        ..DistortionParams::default()
    };
    assert!(matches!(
        p.validate(),
        Err(ParamsError::NotFinite { name: "strength", .. })
    ));
    let p = DistortionParams {
        grid: u32::MAX,
        ..DistortionParams::default()
    };
    assert_eq!(
        p.validate(),
        Err(ParamsError::GridTooLarge {
            grid: u32::MAX,
            max: crate::constants::MAX_GRID
        })
    );
    let p = DistortionParams {
        grid: crate::constants::MAX_GRID,
        ..DistortionParams::default()
    };
    assert!(p.validate().is_ok());
    assert!((DistortionParams::default().max_dist() - 1.0).abs() < 1e-6);
}

#[test]
fn oversized_field_is_refused_not_wrapped() {
    assert_eq!(buffer_len(10), Ok(400));
    assert_eq!(buffer_len(usize::MAX), Err(FieldError::TooLarge(usize::MAX)));
    let mut rng = StdRng::seed_from_u64(9);
    assert!(matches!(
        DisplacementField::seeded(usize::MAX, &mut rng),
        Err(FieldError::TooLarge(_))
    ));
    // Square fits but the per-cell float count does not.
    let side = 1usize << (usize::BITS / 2 - 1);
    assert!(buffer_len(side).is_err());
}
