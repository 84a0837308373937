//! Surface that records draw calls instead of rasterizing them

use super::Surface;
use crate::sim::Ellipse;

/// Keeps every ellipse drawn, in draw order
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    draws: Vec<Ellipse>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { draws: Vec::new() }
    }

    pub fn draws(&self) -> &[Ellipse] {
        &self.draws
    }

    /// Most recent draw
    pub fn last(&self) -> Option<&Ellipse> {
        self.draws.last()
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_ellipse(&mut self, ellipse: &Ellipse) {
        self.draws.push(*ellipse);
    }
}
