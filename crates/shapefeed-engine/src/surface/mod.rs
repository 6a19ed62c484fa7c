//! Render targets.
//!
//! A target exposes exactly two primitives. Circles get a dedicated call;
//! every closed polygon goes through [`RenderTarget::draw_polygon`] with its
//! flattened `x0, y0, x1, y1, ...` coordinate list, so adding a polygon kind
//! never changes this trait.

mod console;
mod null;

pub use console::ConsoleTarget;
pub use null::NullTarget;

/// Abstract drawing surface.
pub trait RenderTarget {
    fn draw_circle(&mut self, center_x: f64, center_y: f64, radius: f64);

    /// `points` holds interleaved vertex coordinates.
    fn draw_polygon(&mut self, points: &[f64]);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    #[inline]
    fn draw_circle(&mut self, center_x: f64, center_y: f64, radius: f64) {
        (**self).draw_circle(center_x, center_y, radius)
    }

    #[inline]
    fn draw_polygon(&mut self, points: &[f64]) {
        (**self).draw_polygon(points)
    }
}
