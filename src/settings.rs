//! Animation settings
//!
//! Defaults come from `consts`. Persisted as JSON in LocalStorage on wasm and
//! read from a JSON file on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Color;

/// How the tick folds the angle step into the accumulated angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AngleWrap {
    /// `angle + (step mod 2π)`: only the step is reduced, the angle grows without bound
    #[default]
    Literal,
    /// `(angle + step) mod 2π`: the angle stays in [0, 2π)
    Wrapped,
}

impl AngleWrap {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleWrap::Literal => "Literal",
            AngleWrap::Wrapped => "Wrapped",
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    /// Ticks per second
    pub fps: f32,

    // === Orbit ===
    /// Distance from the window centre
    pub orbit_radius: f32,
    /// Radians added per tick
    pub angle_step: f64,
    pub angle_wrap: AngleWrap,

    // === Ellipse ===
    pub ellipse_width: f32,
    pub ellipse_height: f32,
    pub fill: Color,

    /// Clear colour behind the ellipse
    pub background: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,

            orbit_radius: ORBIT_RADIUS,
            angle_step: ANGLE_STEP,
            angle_wrap: AngleWrap::Literal,

            ellipse_width: ELLIPSE_WIDTH,
            ellipse_height: ELLIPSE_HEIGHT,
            fill: Color::RED,

            background: Color::BLACK,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values the host cannot run with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn fix(name: &str, value: &mut f32, fallback: f32) {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("Invalid {}: {}, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        fix("window_width", &mut self.window_width, defaults.window_width);
        fix("window_height", &mut self.window_height, defaults.window_height);
        fix("fps", &mut self.fps, defaults.fps);
        if self.fps < MIN_FPS {
            log::warn!("fps {} is below {}, using {}", self.fps, MIN_FPS, defaults.fps);
            self.fps = defaults.fps;
        }
        fix("ellipse_width", &mut self.ellipse_width, defaults.ellipse_width);
        fix("ellipse_height", &mut self.ellipse_height, defaults.ellipse_height);

        if !self.orbit_radius.is_finite() {
            log::warn!("Invalid orbit_radius: {}, using {}", self.orbit_radius, defaults.orbit_radius);
            self.orbit_radius = defaults.orbit_radius;
        }
        if !self.angle_step.is_finite() {
            log::warn!("Invalid angle_step: {}, using {}", self.angle_step, defaults.angle_step);
            self.angle_step = defaults.angle_step;
        }

        self
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.fps
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "orbit_demo_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.sanitized();
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Environment variable naming a JSON settings file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub const PATH_ENV: &'static str = "ORBIT_SETTINGS";

    /// Load settings from the file named by `ORBIT_SETTINGS`, else defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load_from(std::path::Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load and sanitize a JSON settings file. Unreadable or malformed files
    /// give the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
