use crate::kind::ShapeKind;
use crate::surface::RenderTarget;

use super::{draw_closed_polygon, Shape};

/// Triangle: three `x, y` vertices.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Triangle;

impl Triangle {
    pub const KIND: ShapeKind = ShapeKind::TRIANGLE;
    pub const PARAM_COUNT: usize = 6;
}

impl Shape for Triangle {
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
