use crate::surface::RenderTarget;

use super::DrawCmd;

/// Recorded draw stream.
///
/// Commands are kept in call order. Rendering the same record twice into two
/// lists yields two equal lists.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Returns commands in call order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }
}

impl RenderTarget for DrawList {
    #[inline]
    fn draw_circle(&mut self, center_x: f64, center_y: f64, radius: f64) {
        self.push_circle(center_x, center_y, radius);
    }

    #[inline]
    fn draw_polygon(&mut self, points: &[f64]) {
        self.push_polygon(points);
    }
}
