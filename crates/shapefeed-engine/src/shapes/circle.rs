use crate::kind::ShapeKind;
use crate::surface::RenderTarget;

use super::Shape;

/// Circle: `center_x, center_y, radius`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Circle;

impl Circle {
    pub const KIND: ShapeKind = ShapeKind::CIRCLE;
    pub const PARAM_COUNT: usize = 3;
}

impl Shape for Circle {
    #[inline]
    fn kind(&self) -> ShapeKind {
        Self::KIND
    }

    #[inline]
    fn param_count(&self) -> usize {
        Self::PARAM_COUNT
    }

    fn draw(&self, surface: &mut dyn RenderTarget, params: &[f64]) {
        if let [center_x, center_y, radius, ..] = *params {
            surface.draw_circle(center_x, center_y, radius);
        }
    }
}
