use super::RenderTarget;

/// Production renderer with no backing surface. Every call is dropped.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullTarget;

impl RenderTarget for NullTarget {
    #[inline]
    fn draw_circle(&mut self, _center_x: f64, _center_y: f64, _radius: f64) {}

    #[inline]
    fn draw_polygon(&mut self, _points: &[f64]) {}
}
