//! Per-tick orbit update
//!
//! The step is fixed per tick. `dt` does not scale it, so the orbit speed
//! follows the tick rate.

use std::f64::consts::TAU;

use super::state::OrbitState;
use crate::settings::AngleWrap;
use crate::wrap_angle;

/// Fold one step into `angle` according to the wrap policy
#[inline]
pub fn advance_angle(angle: f64, step: f64, wrap: AngleWrap) -> f64 {
    match wrap {
        // Floored modulo on the step alone; the sum is never reduced
        AngleWrap::Literal => angle + step.rem_euclid(TAU),
        AngleWrap::Wrapped => wrap_angle(angle + step),
    }
}

/// Advance the orbit by one tick and move the ellipse
pub fn tick(state: &mut OrbitState, _dt: f32) {
    state.angle = advance_angle(state.angle, state.step, state.wrap);
    state.ellipse.pos = state.orbit_position();
    state.time_ticks += 1;

    log::trace!(
        "tick {}: angle {:.4}, pos ({:.2}, {:.2})",
        state.time_ticks,
        state.angle,
        state.ellipse.pos.x,
        state.ellipse.pos.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polar_to_cartesian;
    use crate::settings::Settings;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_single_tick_ignores_dt() {
        for dt in [0.0, 1.0 / 60.0, 0.5, 10.0] {
            let mut state = OrbitState::new(&Settings::default());
            tick(&mut state, dt);
            assert!((state.angle - 0.1).abs() < 1e-6, "dt {} gave angle {}", dt, state.angle);
            let expected = polar_to_cartesian(100.0, 0.1, Vec2::new(256.0, 256.0));
            assert!((state.ellipse.pos - expected).length() < 1e-4);
        }
    }

    #[test]
    fn test_literal_angle_grows_past_tau() {
        let mut state = OrbitState::new(&Settings::default());
        for _ in 0..63 {
            tick(&mut state, 1.0 / 60.0);
        }
        assert!((state.angle - 6.3).abs() < 1e-3);
        assert!(state.angle > TAU);
        assert_eq!(state.time_ticks, 63);

        // Keeps growing; position still follows the angle
        for _ in 0..63 {
            tick(&mut state, 1.0 / 60.0);
        }
        assert!((state.angle - 12.6).abs() < 1e-3);
        assert!((state.ellipse.pos - state.orbit_position()).length() < 1e-4);
    }

    #[test]
    fn test_wrapped_angle_stays_below_tau() {
        let settings = Settings {
            angle_wrap: AngleWrap::Wrapped,
            ..Default::default()
        };
        let mut state = OrbitState::new(&settings);
        for _ in 0..63 {
            tick(&mut state, 1.0 / 60.0);
        }
        assert!(state.angle < TAU);
        assert!((state.angle - (6.3 - TAU)).abs() < 1e-3);
    }

    #[test]
    fn test_literal_and_wrapped_agree_on_position() {
        let mut literal = OrbitState::new(&Settings::default());
        let mut wrapped = OrbitState::new(&Settings {
            angle_wrap: AngleWrap::Wrapped,
            ..Default::default()
        });
        for _ in 0..200 {
            tick(&mut literal, 0.0);
            tick(&mut wrapped, 0.0);
        }
        assert!((literal.ellipse.pos - wrapped.ellipse.pos).length() < 0.1);
    }

    #[test]
    fn test_literal_negative_step_uses_floored_modulo() {
        // step mod 2π is taken with a positive divisor, so -0.1 becomes 2π - 0.1
        let angle = advance_angle(0.0, -0.1, AngleWrap::Literal);
        assert!((angle - (TAU - 0.1)).abs() < 1e-9);
        // Which lands on the same point as stepping backwards
        let center = Vec2::ZERO;
        let a = polar_to_cartesian(1.0, angle as f32, center);
        let b = polar_to_cartesian(1.0, -0.1, center);
        assert!((a - b).length() < 1e-5);
    }

    #[test]
    fn test_literal_large_step_reduced() {
        let angle = advance_angle(1.0, TAU + 0.25, AngleWrap::Literal);
        assert!((angle - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_literal_angle_keeps_advancing_when_large() {
        let mut state = OrbitState::new(&Settings::default());
        state.angle = 2_097_152.0;
        state.ellipse.pos = state.orbit_position();
        let before = state.ellipse.pos;

        tick(&mut state, 1.0 / 60.0);
        assert!(state.angle > 2_097_152.0);
        assert!((state.angle - 2_097_152.1).abs() < 1e-6);
        // A 0.1 rad step at radius 100 moves the ellipse about 10 units
        let moved = state.ellipse.pos.distance(before);
        assert!((moved - 10.0).abs() < 0.1, "moved {}", moved);
    }

    #[test]
    fn test_zero_radius_stays_at_center() {
        let settings = Settings {
            orbit_radius: 0.0,
            ..Default::default()
        };
        let mut state = OrbitState::new(&settings);
        tick(&mut state, 0.0);
        assert_eq!(state.ellipse.pos, state.center);
    }

    proptest! {
        #[test]
        fn prop_ticks_advance_by_fixed_step(dts in proptest::collection::vec(0.0f32..1.0, 1..50)) {
            let mut state = OrbitState::new(&Settings::default());
            for dt in &dts {
                tick(&mut state, *dt);
            }
            let expected = dts.len() as f64 * 0.1;
            prop_assert!((state.angle - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_wrapped_stays_in_range(
            start in 0.0f64..TAU,
            step in -10.0f64..10.0,
        ) {
            let angle = advance_angle(start, step, AngleWrap::Wrapped);
            prop_assert!((0.0..TAU).contains(&angle));
        }
    }
}
