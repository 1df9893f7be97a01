// Hero configuration read once at mount time.

use crate::constants::DEFAULT_IMAGE_SRC;
use crate::core::field::{DistortionParams, ParamsError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroVariant {
    #[default]
    Distortion,
    Particles,
}

impl HeroVariant {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distortion" | "grid" => Some(HeroVariant::Distortion),
            "particles" | "mitosis" => Some(HeroVariant::Particles),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroConfig {
    pub variant: HeroVariant,
    pub image_src: String,
    pub params: DistortionParams,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            variant: HeroVariant::default(),
            image_src: DEFAULT_IMAGE_SRC.to_string(),
            params: DistortionParams::default(),
        }
    }
}

impl HeroConfig {
    /// Build from `data-*` attribute lookups. Missing or unparsable values
    /// keep their defaults; the result is validated before it is returned.
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Result<Self, ParamsError> {
        let mut cfg = Self::default();
        if let Some(v) = attr("data-hero").as_deref().and_then(HeroVariant::parse) {
            cfg.variant = v;
        }
        if let Some(src) = attr("data-image").filter(|s| !s.trim().is_empty()) {
            cfg.image_src = src;
        }
        if let Some(grid) = attr("data-grid").and_then(|s| s.trim().parse().ok()) {
            cfg.params.grid = grid;
        }
        let parse_f32 = |name: &str| attr(name).and_then(|s| s.trim().parse::<f32>().ok());
        if let Some(mouse) = parse_f32("data-mouse") {
            cfg.params.mouse = mouse;
        }
        if let Some(strength) = parse_f32("data-strength") {
            cfg.params.strength = strength;
        }
        if let Some(relaxation) = parse_f32("data-relaxation") {
            cfg.params.relaxation = relaxation;
        }
        cfg.params.validate()?;
        Ok(cfg)
    }
}
