//! Deterministic simulation module
//!
//! The orbit logic lives here. This module must stay pure:
//! - Fixed step per tick
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Color, Ellipse, OrbitState};
pub use tick::{advance_angle, tick};
