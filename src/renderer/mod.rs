//! Rendering module
//!
//! `Surface` is the drawing seam handed to animations. The WebGPU backend
//! renders every shape in the fragment shader using signed distance fields.

pub mod recorder;
pub mod sdf_pipeline;

pub use recorder::RecordingSurface;
pub use sdf_pipeline::SdfRenderState;

use crate::sim::Ellipse;

/// Something an animation can draw onto
pub trait Surface {
    fn draw_ellipse(&mut self, ellipse: &Ellipse);
}
