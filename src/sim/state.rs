//! Orbit state and shape types
//!
//! Coordinates are window units with the origin at the bottom left and y up.

use std::f64::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;
use crate::settings::{AngleWrap, Settings};

/// Linear RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
}

/// A filled ellipse, positioned by its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
}

impl Ellipse {
    pub fn new(pos: Vec2, width: f32, height: f32, fill: Color) -> Self {
        Self {
            pos,
            width,
            height,
            fill,
        }
    }

    /// Half extents (semi-axes)
    pub fn radii(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Everything the orbit owns: the angle, the orbit geometry and the shape
#[derive(Debug, Clone)]
pub struct OrbitState {
    /// Current orbit angle (radians), unbounded under `AngleWrap::Literal`
    pub angle: f64,
    /// Radians added per tick
    pub step: f64,
    pub wrap: AngleWrap,
    /// Distance from `center`
    pub radius: f32,
    /// Window centre
    pub center: Vec2,
    pub ellipse: Ellipse,
    /// Ticks applied since creation
    pub time_ticks: u64,
}

impl OrbitState {
    /// Start at angle 0 with the ellipse on the positive x axis
    pub fn new(settings: &Settings) -> Self {
        let center = Vec2::new(settings.window_width / 2.0, settings.window_height / 2.0);
        let angle = 0.0;
        let pos = polar_to_cartesian(settings.orbit_radius, 0.0, center);

        Self {
            angle,
            step: settings.angle_step,
            wrap: settings.angle_wrap,
            radius: settings.orbit_radius,
            center,
            ellipse: Ellipse::new(
                pos,
                settings.ellipse_width,
                settings.ellipse_height,
                settings.fill,
            ),
            time_ticks: 0,
        }
    }

    /// Position the current angle maps to
    pub fn orbit_position(&self) -> Vec2 {
        // Reduce before narrowing so f32 trig sees a small angle
        let theta = self.angle.rem_euclid(TAU) as f32;
        polar_to_cartesian(self.radius, theta, self.center)
    }
}
