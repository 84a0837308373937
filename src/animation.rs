//! Animations driven by a host loop
//!
//! A host calls `initialize` once, then alternates `tick` and `render` until it
//! shuts down.

use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::{self, Ellipse, OrbitState};

/// The three hooks a host loop drives
pub trait Animation {
    /// Build the initial state from the host's settings
    fn initialize(settings: &Settings) -> Self
    where
        Self: Sized;

    /// Advance one simulation step; `dt` is the host's tick length in seconds
    fn tick(&mut self, dt: f32);

    /// Draw the current state. Must not change it.
    fn render(&self, surface: &mut dyn Surface);
}

/// An ellipse orbiting the window centre
#[derive(Debug, Clone)]
pub struct OrbitAnimator {
    state: OrbitState,
}

impl OrbitAnimator {
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    pub fn ellipse(&self) -> &Ellipse {
        &self.state.ellipse
    }
}

impl Animation for OrbitAnimator {
    fn initialize(settings: &Settings) -> Self {
        let state = OrbitState::new(settings);
        log::debug!(
            "Orbit initialized at ({:.1}, {:.1}), radius {}, step {} ({})",
            state.ellipse.pos.x,
            state.ellipse.pos.y,
            state.radius,
            state.step,
            state.wrap.as_str()
        );
        Self { state }
    }

    fn tick(&mut self, dt: f32) {
        sim::tick(&mut self.state, dt);
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.draw_ellipse(&self.state.ellipse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polar_to_cartesian;
    use crate::renderer::RecordingSurface;
    use crate::settings::AngleWrap;
    use glam::Vec2;
    use std::f64::consts::TAU;

    #[test]
    fn test_initialize() {
        let anim = OrbitAnimator::initialize(&Settings::default());
        assert_eq!(anim.angle(), 0.0);
        assert_eq!(
            anim.ellipse().pos,
            polar_to_cartesian(100.0, 0.0, Vec2::new(256.0, 256.0))
        );
        assert_eq!(anim.ellipse().pos, Vec2::new(356.0, 256.0));
    }

    #[test]
    fn test_tick_then_render_draws_new_position() {
        let mut anim = OrbitAnimator::initialize(&Settings::default());
        anim.tick(1.0 / 60.0);

        let mut surface = RecordingSurface::new();
        anim.render(&mut surface);

        let drawn = surface.last().expect("ellipse drawn");
        assert!((anim.angle() - 0.1).abs() < 1e-6);
        assert_eq!(drawn.pos, anim.ellipse().pos);
        assert_eq!(drawn.width, 20.0);
        assert_eq!(drawn.height, 20.0);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut anim = OrbitAnimator::initialize(&Settings::default());
        anim.tick(0.0);
        let angle = anim.angle();
        let pos = anim.ellipse().pos;

        let mut surface = RecordingSurface::new();
        for _ in 0..5 {
            anim.render(&mut surface);
        }

        assert_eq!(anim.angle(), angle);
        assert_eq!(anim.ellipse().pos, pos);
        assert_eq!(surface.draws().len(), 5);
        assert!(surface.draws().iter().all(|e| e.pos == pos));
    }

    #[test]
    fn test_tick_speed_depends_on_tick_count_not_dt() {
        // Same number of ticks at different frame rates lands on the same angle
        let mut slow = OrbitAnimator::initialize(&Settings::default());
        let mut fast = OrbitAnimator::initialize(&Settings::default());
        for _ in 0..30 {
            slow.tick(1.0 / 30.0);
            fast.tick(1.0 / 120.0);
        }
        assert_eq!(slow.angle(), fast.angle());
    }

    #[test]
    fn test_sixty_three_ticks_per_wrap_policy() {
        let mut literal = OrbitAnimator::initialize(&Settings::default());
        let mut wrapped = OrbitAnimator::initialize(&Settings {
            angle_wrap: AngleWrap::Wrapped,
            ..Default::default()
        });
        for _ in 0..63 {
            literal.tick(1.0 / 60.0);
            wrapped.tick(1.0 / 60.0);
        }
        assert!(literal.angle() > TAU);
        assert!(wrapped.angle() < TAU);
    }

    #[test]
    fn test_render_through_trait_object() {
        let anim = OrbitAnimator::initialize(&Settings::default());
        let mut surface = RecordingSurface::new();
        let surface_dyn: &mut dyn Surface = &mut surface;
        anim.render(surface_dyn);
        assert_eq!(surface.draws().len(), 1);
        assert_eq!(surface.draws()[0].fill, crate::sim::Color::RED);
    }
}
