// Displacement field physics for the distortion hero.
//
// The field is an N×N grid of (dx, dy) offsets stored as RGBA float texels so
// it can be uploaded to the GPU as-is. Each frame the offsets relax toward
// zero and the cells around the cursor are pushed along the cursor velocity.
// Nothing in here touches the DOM or the GPU, so it runs on the host in tests.

use crate::constants::{
    DEFAULT_MOUSE_RADIUS, DEFAULT_RELAXATION, DEFAULT_STRENGTH, FIELD_FLOATS_PER_CELL,
    FIELD_INJECT_SCALE, FIELD_POWER_CAP, FIELD_SEED_BIAS, FIELD_SEED_SPAN, MAX_GRID,
};
use rand::Rng;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FieldError {
    #[error("displacement buffer holds {actual} floats, expected {expected}")]
    Layout { expected: usize, actual: usize },
    #[error("a {0}x{0} field does not fit in memory")]
    TooLarge(usize),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParamsError {
    #[error("grid size must be positive")]
    EmptyGrid,
    #[error("grid size {grid} exceeds the maximum of {max}")]
    GridTooLarge { grid: u32, max: u32 },
    #[error("relaxation must lie in (0, 1), got {0}")]
    Relaxation(f32),
    #[error("{name} must be a finite non-negative number, got {value}")]
    NotFinite { name: &'static str, value: f32 },
}

/// Construction-time parameters of the distortion hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistortionParams {
    /// Cells per side of the square field.
    pub grid: u32,
    /// Interaction radius as a fraction of `grid`.
    pub mouse: f32,
    pub strength: f32,
    /// Per-frame multiplicative decay.
    pub relaxation: f32,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            grid: crate::constants::DEFAULT_GRID,
            mouse: DEFAULT_MOUSE_RADIUS,
            strength: DEFAULT_STRENGTH,
            relaxation: DEFAULT_RELAXATION,
        }
    }
}

impl DistortionParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.grid == 0 {
            return Err(ParamsError::EmptyGrid);
        }
        if self.grid > MAX_GRID {
            return Err(ParamsError::GridTooLarge {
                grid: self.grid,
                max: MAX_GRID,
            });
        }
        if !(self.relaxation > 0.0 && self.relaxation < 1.0) {
            return Err(ParamsError::Relaxation(self.relaxation));
        }
        for (name, value) in [("mouse", self.mouse), ("strength", self.strength)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::NotFinite { name, value });
            }
        }
        Ok(())
    }

    /// Radius of influence in grid cells.
    #[inline]
    pub fn max_dist(&self) -> f32 {
        self.grid as f32 * self.mouse
    }
}

/// One pointer observation, produced per DOM event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
    /// Normalized position inside the hero, y pointing up.
    Moved { x: f32, y: f32 },
    Left,
}

impl PointerSample {
    /// Map client coordinates into the element box, flipping y so it points
    /// up. `None` for a degenerate box.
    pub fn from_client(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let x = (client_x - left) / width;
        let y = 1.0 - (client_y - top) / height;
        Some(PointerSample::Moved {
            x: x as f32,
            y: y as f32,
        })
    }
}

/// Cursor position and the motion accumulated since the last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
    pub prev_x: f32,
    pub prev_y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl CursorState {
    /// Fold one sample into the state. All listeners go through here.
    #[must_use]
    pub fn apply(self, sample: PointerSample) -> Self {
        match sample {
            PointerSample::Moved { x, y } => Self {
                x,
                y,
                prev_x: x,
                prev_y: y,
                vx: self.vx + (x - self.prev_x),
                vy: self.vy + (y - self.prev_y),
            },
            PointerSample::Left => Self::default(),
        }
    }

    /// Hand the accumulated velocity to a frame and keep the position.
    #[must_use]
    pub fn consume_velocity(self) -> Self {
        Self {
            vx: 0.0,
            vy: 0.0,
            ..self
        }
    }

    #[inline]
    pub fn is_still(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0
    }
}

pub struct DisplacementField {
    size: usize,
    data: Vec<f32>,
}

/// Floats needed for an N×N field, or `TooLarge` if that overflows.
pub fn buffer_len(size: usize) -> Result<usize, FieldError> {
    size.checked_mul(size)
        .and_then(|cells| cells.checked_mul(FIELD_FLOATS_PER_CELL))
        .ok_or(FieldError::TooLarge(size))
}

impl DisplacementField {
    /// Allocate an N×N field seeded with random offsets.
    pub fn seeded<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, FieldError> {
        let mut data = vec![0.0_f32; buffer_len(size)?];
        for cell in data.chunks_exact_mut(FIELD_FLOATS_PER_CELL) {
            cell[0] = rng.gen::<f32>() * FIELD_SEED_SPAN - FIELD_SEED_BIAS;
            cell[1] = rng.gen::<f32>() * FIELD_SEED_SPAN - FIELD_SEED_BIAS;
        }
        Ok(Self { size, data })
    }

    #[cfg(test)]
    pub fn zeroed(size: usize) -> Result<Self, FieldError> {
        Ok(Self {
            size,
            data: vec![0.0; buffer_len(size)?],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw texel data, row-major with row 0 at the bottom of the hero.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Drop the backing storage. A frame that still fires afterwards fails
    /// the layout check in `step` instead of indexing freed cells.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }

    #[cfg(test)]
    #[inline]
    pub fn is_released(&self) -> bool {
        self.data.is_empty()
    }

    #[cfg(test)]
    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> (f32, f32) {
        let idx = FIELD_FLOATS_PER_CELL * (i + self.size * j);
        (self.data[idx], self.data[idx + 1])
    }

    /// Largest absolute offset component in the field.
    #[cfg(test)]
    pub fn max_abs(&self) -> f32 {
        self.data
            .chunks_exact(FIELD_FLOATS_PER_CELL)
            .flat_map(|c| [c[0].abs(), c[1].abs()])
            .fold(0.0, f32::max)
    }

    fn check_layout(&self) -> Result<(), FieldError> {
        let expected = buffer_len(self.size)?;
        if self.data.len() != expected {
            return Err(FieldError::Layout {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Multiply every stored offset by `relaxation`.
    pub fn relax(&mut self, relaxation: f32) {
        for cell in self.data.chunks_exact_mut(FIELD_FLOATS_PER_CELL) {
            cell[0] *= relaxation;
            cell[1] *= relaxation;
        }
    }

    /// Push cells within the interaction radius along the cursor velocity.
    /// Closer cells get more, capped at `FIELD_POWER_CAP`.
    pub fn inject(&mut self, cursor: &CursorState, params: &DistortionParams) {
        if cursor.is_still() {
            return;
        }
        let size = self.size;
        let gx = size as f32 * cursor.x;
        let gy = size as f32 * cursor.y;
        let max_dist = params.max_dist();
        let max_dist_sq = max_dist * max_dist;
        let gain = params.strength * FIELD_INJECT_SCALE;
        for j in 0..size {
            for i in 0..size {
                let dx = gx - i as f32;
                let dy = gy - j as f32;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq >= max_dist_sq {
                    continue;
                }
                let power = (max_dist / dist_sq.sqrt()).min(FIELD_POWER_CAP);
                let idx = FIELD_FLOATS_PER_CELL * (i + size * j);
                self.data[idx] += gain * cursor.vx * power;
                self.data[idx + 1] -= gain * cursor.vy * power;
            }
        }
    }

    /// One animation frame: decay, then inject the cursor motion.
    pub fn step(&mut self, cursor: &CursorState, params: &DistortionParams) -> Result<(), FieldError> {
        self.check_layout()?;
        self.relax(params.relaxation);
        self.inject(cursor, params);
        Ok(())
    }
}
