//! Orbit Demo - an ellipse orbiting the window centre
//!
//! Core modules:
//! - `sim`: Deterministic simulation (angle state, ellipse shape, tick)
//! - `animation`: The initialize/tick/render capability set and the orbit animator
//! - `host`: Fixed-rate frame loop driving an animation
//! - `renderer`: Drawing surfaces (WebGPU SDF pipeline, recorder)
//! - `settings`: Configuration with JSON persistence

pub mod animation;
pub mod host;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use animation::{Animation, OrbitAnimator};
pub use host::FrameLoop;
pub use settings::{AngleWrap, Settings};

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 512.0;
    pub const WINDOW_HEIGHT: f32 = 512.0;

    /// Distance of the ellipse from the window centre
    pub const ORBIT_RADIUS: f32 = 100.0;
    /// Angle added per tick (radians)
    pub const ANGLE_STEP: f64 = 0.1;

    /// Ellipse size
    pub const ELLIPSE_WIDTH: f32 = 20.0;
    pub const ELLIPSE_HEIGHT: f32 = 20.0;

    /// Ticks per second
    pub const FPS: f32 = 60.0;
    /// Slowest tick rate settings may ask for
    pub const MIN_FPS: f32 = 1.0;

    /// Longest real frame the host will catch up on (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(std::f64::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f64::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32, center: Vec2) -> Vec2 {
    Vec2::new(r * theta.cos() + center.x, r * theta.sin() + center.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;
    use std::f64::consts::TAU;

    #[test]
    fn test_polar_to_cartesian_axes() {
        let center = Vec2::new(256.0, 256.0);
        let east = polar_to_cartesian(100.0, 0.0, center);
        assert!((east - Vec2::new(356.0, 256.0)).length() < 1e-4);

        let north = polar_to_cartesian(100.0, PI / 2.0, center);
        assert!((north - Vec2::new(256.0, 356.0)).length() < 1e-3);

        let west = polar_to_cartesian(100.0, PI, center);
        assert!((west - Vec2::new(156.0, 256.0)).length() < 1e-3);
    }

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-5);
        assert!(wrap_angle(-1e-18) < TAU);
    }

    proptest! {
        #[test]
        fn prop_polar_to_cartesian_matches_formula(
            r in 0.0f32..1000.0,
            theta in -100.0f32..100.0,
            cx in -1000.0f32..1000.0,
            cy in -1000.0f32..1000.0,
        ) {
            let p = polar_to_cartesian(r, theta, Vec2::new(cx, cy));
            prop_assert!((p.x - (r * theta.cos() + cx)).abs() < 1e-3);
            prop_assert!((p.y - (r * theta.sin() + cy)).abs() < 1e-3);
        }

        #[test]
        fn prop_polar_to_cartesian_keeps_distance(
            r in 0.0f32..1000.0,
            theta in -100.0f32..100.0,
        ) {
            let center = Vec2::new(256.0, 256.0);
            let p = polar_to_cartesian(r, theta, center);
            prop_assert!((p.distance(center) - r).abs() < 1e-2);
        }

        #[test]
        fn prop_wrap_angle_in_range(angle in -1.0e7f64..1.0e7) {
            let wrapped = wrap_angle(angle);
            prop_assert!((0.0..TAU).contains(&wrapped));
        }
    }
}
