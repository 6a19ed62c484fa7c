use crate::scene::{DrawCmd, DrawList};

/// Closed polygon payload: interleaved `x, y` coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<f64>,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: impl Into<Vec<f64>>) -> Self {
        Self { points: points.into() }
    }

    /// Number of vertices. A trailing unpaired coordinate is not counted.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len() / 2
    }
}

impl DrawList {
    /// Records a polygon draw command.
    #[inline]
    pub fn push_polygon(&mut self, points: &[f64]) {
        self.push(DrawCmd::Polygon(PolygonCmd::new(points)));
    }
}
