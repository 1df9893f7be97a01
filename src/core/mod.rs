pub mod config;
pub mod content;
pub mod field;
pub mod form;
pub mod page;
pub mod particles;
pub mod projection;
pub mod views;

pub use config::*;
pub use field::*;
pub use form::*;
pub use page::*;
pub use particles::*;
pub use projection::*;

// Shaders bundled as string constants
pub static DISTORT_WGSL: &str = include_str!("../../shaders/distort.wgsl");
