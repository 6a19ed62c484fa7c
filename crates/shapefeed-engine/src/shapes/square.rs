use crate::kind::ShapeKind;
use crate::surface::RenderTarget;

use super::{draw_closed_polygon, Shape};

/// Square: four `x, y` corners.
///
/// Corners are passed through as given; nothing checks they form a square.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Square;

impl Square {
    pub const KIND: ShapeKind = ShapeKind::SQUARE;
    pub const PARAM_COUNT: usize = 8;
}

impl Shape for Square {
    #[inline]
    fn kind(&self) -> ShapeKind {
        Self::KIND
    }

    #[inline]
    fn param_count(&self) -> usize {
        Self::PARAM_COUNT
    }

    fn draw(&self, surface: &mut dyn RenderTarget, params: &[f64]) {
        draw_closed_polygon(surface, params, Self::PARAM_COUNT);
    }
}
