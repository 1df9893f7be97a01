/// Hero tuning constants and DOM anchors.
///
/// These constants express intended behavior (decay, caps, ranges) and keep
/// magic numbers out of the renderers.

// Distortion hero defaults
pub const DEFAULT_IMAGE_SRC: &str = "/RobotArm2.jpg";
pub const DEFAULT_GRID: u32 = 10;
pub const MAX_GRID: u32 = 256; // well under the WebGPU 2D texture limit of 8192
pub const DEFAULT_MOUSE_RADIUS: f32 = 0.1; // fraction of the grid size
pub const DEFAULT_STRENGTH: f32 = 0.15;
pub const DEFAULT_RELAXATION: f32 = 0.9;

// Displacement field physics
pub const FIELD_SEED_SPAN: f32 = 255.0; // initial offsets are rand * span - bias
pub const FIELD_SEED_BIAS: f32 = 125.0;
pub const FIELD_INJECT_SCALE: f32 = 100.0; // strength * scale * velocity * power
pub const FIELD_POWER_CAP: f32 = 10.0; // avoids blow-up at the cursor cell
pub const FIELD_FLOATS_PER_CELL: usize = 4; // rgba texel: dx, dy, unused, unused

// Shader UV offset applied per unit of displacement
pub const UV_OFFSET_SCALE: f32 = 0.02;

// Cap on the backing store pixel ratio for the GPU canvas
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Particle field
pub const PARTICLE_COUNT: usize = 10;
pub const PARTICLE_RADIUS_MIN: f64 = 100.0;
pub const PARTICLE_RADIUS_SPAN: f64 = 100.0;
pub const PARTICLE_POINTER_PULL: f64 = 0.0005;
pub const PARTICLE_HUE_START: f64 = 10.0; // red-ish at the left edge
pub const PARTICLE_HUE_SPAN: f64 = 130.0; // green-ish at the right edge

// DOM anchors
pub const NAV_ID: &str = "app-nav";
pub const MAIN_ID: &str = "app-main";
pub const FOOTER_ID: &str = "app-footer";
pub const HERO_ID: &str = "hero";
pub const HERO_CONFIG_ID: &str = "hero-config";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "lightbox-image";
pub const FORM_ID: &str = "application-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const FORM_EMAIL_ERROR_ID: &str = "form-email-error";
