use crate::kind::ShapeKind;
use crate::surface::RenderTarget;

use super::{draw_closed_polygon, Shape};

/// Closed polygon with a vertex count chosen at registration time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Polygon {
    kind: ShapeKind,
    vertices: usize,
}

impl Polygon {
    #[inline]
    pub const fn new(kind: ShapeKind, vertices: usize) -> Self {
        Self { kind, vertices }
    }

    #[inline]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }
}

impl Shape for Polygon {
    #[inline]
    fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Saturates rather than wrapping; a saturated count can never be read.
    #[inline]
    fn param_count(&self) -> usize {
        self.vertices.saturating_mul(2)
    }

    fn draw(&self, surface: &mut dyn RenderTarget, params: &[f64]) {
        draw_closed_polygon(surface, params, self.param_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawList;

    #[test]
    fn param_count_is_two_per_vertex() {
        assert_eq!(Polygon::new(ShapeKind::new(9), 5).param_count(), 10);
    }

    #[test]
    fn huge_vertex_count_saturates() {
        let shape = Polygon::new(ShapeKind::new(9), usize::MAX);
        assert_eq!(shape.param_count(), usize::MAX);

        let mut list = DrawList::new();
        shape.draw(&mut list, &[0.0; 4]);
        assert!(list.is_empty());
    }
}
