use glam::{Mat4, Vec3};

/// Orthographic framing of the hero plane for a given container size.
///
/// The frustum is one unit tall and `aspect` units wide, and the unit plane is
/// stretched by the same aspect so it always fills the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub aspect: f32,
}

pub const NEAR: f32 = -1000.0;
pub const FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 2.0;

impl Projection {
    /// Returns `None` for a zero-area container so callers skip the update.
    pub fn for_size(width: f32, height: f32) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let aspect = width / height;
        let frustum_h = 1.0;
        let frustum_w = frustum_h * aspect;
        Some(Self {
            left: -frustum_w / 2.0,
            right: frustum_w / 2.0,
            top: frustum_h / 2.0,
            bottom: -frustum_h / 2.0,
            aspect,
        })
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(self.left, self.right, self.bottom, self.top, NEAR, FAR)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y)
    }

    /// Projection * view * plane scale, ready for the vertex shader.
    pub fn clip_from_plane(&self) -> Mat4 {
        self.projection_matrix()
            * self.view_matrix()
            * Mat4::from_scale(Vec3::new(self.aspect, 1.0, 1.0))
    }
}
