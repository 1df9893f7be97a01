// Host-side tests for hero configuration and the plane projection.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod projection {
        include!("../src/core/projection.rs");
    }
}

use crate::constants::*;
use crate::core::config::*;
use crate::core::field::ParamsError;
use crate::core::projection::Projection;
use glam::Vec3;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn config(pairs: &[(&str, &str)]) -> Result<HeroConfig, ParamsError> {
    let map = attrs(pairs);
    HeroConfig::from_attrs(|name| map.get(name).cloned())
}

#[test]
fn empty_attributes_give_defaults() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg, HeroConfig::default());
    assert_eq!(cfg.variant, HeroVariant::Distortion);
    assert_eq!(cfg.image_src, DEFAULT_IMAGE_SRC);
    assert_eq!(cfg.params.grid, DEFAULT_GRID);
    assert_eq!(cfg.params.strength, DEFAULT_STRENGTH);
}

#[test]
fn variant_aliases() {
    for (value, expected) in [
        ("particles", HeroVariant::Particles),
        ("Mitosis", HeroVariant::Particles),
        ("grid", HeroVariant::Distortion),
        ("distortion", HeroVariant::Distortion),
        ("fireworks", HeroVariant::Distortion),
    ] {
        assert_eq!(config(&[("data-hero", value)]).unwrap().variant, expected);
    }
}

#[test]
fn numeric_overrides_apply() {
    let cfg = config(&[
        ("data-image", "/lab.jpg"),
        ("data-grid", " 24 "),
        ("data-mouse", "0.2"),
        ("data-strength", "0.3"),
        ("data-relaxation", "0.95"),
    ])
    .unwrap();
    assert_eq!(cfg.image_src, "/lab.jpg");
    assert_eq!(cfg.params.grid, 24);
    assert_eq!(cfg.params.mouse, 0.2);
    assert_eq!(cfg.params.strength, 0.3);
    assert_eq!(cfg.params.relaxation, 0.95);
}

#[test]
fn unparsable_values_keep_defaults() {
    let cfg = config(&[("data-grid", "lots"), ("data-image", "  ")]).unwrap();
    assert_eq!(cfg.params.grid, DEFAULT_GRID);
    assert_eq!(cfg.image_src, DEFAULT_IMAGE_SRC);
}

#[test]
fn invalid_values_are_rejected() {
    assert_eq!(
        config(&[("data-relaxation", "1.5")]),
        Err(ParamsError::Relaxation(1.5))
    );
    assert_eq!(config(&[("data-grid", "0")]), Err(ParamsError::EmptyGrid));
    assert_eq!(
        config(&[("data-grid", "4294967295")]),
        Err(ParamsError::GridTooLarge {
            grid: u32::MAX,
            max: MAX_GRID
        })
    );
    assert!(matches!(
        config(&[("data-mouse", "-1")]),
        Err(ParamsError::NotFinite { name: "mouse", .. })
    ));
}

#[test]
fn projection_skips_zero_area() {
    assert!(Projection::for_size(0.0, 300.0).is_none());
    assert!(Projection::for_size(300.0, 0.0).is_none());
}

#[test]
fn projection_frames_a_unit_tall_frustum() {
    let p = Projection::for_size(1600.0, 800.0).unwrap();
    assert_eq!(p.aspect, 2.0);
    assert_eq!((p.left, p.right), (-1.0, 1.0));
    assert_eq!((p.bottom, p.top), (-0.5, 0.5));
}

#[test]
fn plane_fills_the_viewport() {
    for (w, h) in [(1600.0, 800.0), (390.0, 844.0), (500.0, 500.0)] {
        let m = Projection::for_size(w, h).unwrap().clip_from_plane();
        let top_right = m.transform_point3(Vec3::new(0.5, 0.5, 0.0));
        let bottom_left = m.transform_point3(Vec3::new(-0.5, -0.5, 0.0));
        assert!((top_right.x - 1.0).abs() < 1e-5 && (top_right.y - 1.0).abs() < 1e-5);
        assert!((bottom_left.x + 1.0).abs() < 1e-5 && (bottom_left.y + 1.0).abs() < 1e-5);
        assert!((0.0..=1.0).contains(&top_right.z));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DEFAULT_RELAXATION > 0.0 && DEFAULT_RELAXATION < 1.0);
    assert!(FIELD_POWER_CAP > 1.0);
    assert!(FIELD_FLOATS_PER_CELL >= 2);
    assert!(DEFAULT_GRID <= MAX_GRID && MAX_GRID <= 8192);
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_SPAN > 0.0);
    assert!(PARTICLE_HUE_START + PARTICLE_HUE_SPAN <= 360.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(PARTICLE_COUNT > 0);
}
