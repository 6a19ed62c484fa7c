//! Shape variants.
//!
//! Each variant fixes its [`ShapeKind`] and parameter count when it is
//! defined and renders through a [`RenderTarget`]. Variants hold no
//! per-record data, so one instance per kind can be reused for every record
//! of that kind.
//!
//! Adding a polygon kind:
//! - pick an unused tag
//! - register `Polygon::new(tag, vertices)` (or a dedicated type like [`Triangle`])
//!
//! No change to `RenderTarget` is needed.

mod circle;
mod polygon;
mod square;
mod triangle;

pub use circle::Circle;
pub use polygon::Polygon;
pub use square::Square;
pub use triangle::Triangle;

use core::fmt;

use crate::kind::ShapeKind;
use crate::surface::RenderTarget;

/// A drawable shape variant.
pub trait Shape: fmt::Debug + 'static {
    fn kind(&self) -> ShapeKind;

    /// Exact number of `f64` parameters a record of this kind carries.
    fn param_count(&self) -> usize;

    /// Renders the shape described by `params` onto `surface`.
    ///
    /// Must be a no-op when `params` holds fewer than [`param_count`]
    /// values. Drawing happens later than decoding and cannot rely on the
    /// decoder having checked the length.
    ///
    /// [`param_count`]: Shape::param_count
    fn draw(&self, surface: &mut dyn RenderTarget, params: &[f64]);
}

/// Shared polygon path: forwards the first `count` coordinates, or nothing.
#[inline]
pub(crate) fn draw_closed_polygon(surface: &mut dyn RenderTarget, params: &[f64], count: usize) {
    if let Some(points) = params.get(..count) {
        surface.draw_polygon(points);
    }
}
