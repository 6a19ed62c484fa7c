use crate::scene::{DrawCmd, DrawList};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl CircleCmd {
    #[inline]
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self { center_x, center_y, radius }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, center_x: f64, center_y: f64, radius: f64) {
        self.push(DrawCmd::Circle(CircleCmd::new(center_x, center_y, radius)));
    }
}
