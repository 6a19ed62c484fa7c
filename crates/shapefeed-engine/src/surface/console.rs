use std::io::{self, Write};

use super::RenderTarget;

/// Test double that prints every draw call with its arguments.
///
/// Writes go to stdout by default; tests pass a `Vec<u8>` instead.
#[derive(Debug)]
pub struct ConsoleTarget<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleTarget<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleTarget<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleTarget<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        // The trait has no error channel; a broken console is only worth a log line.
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("ConsoleTarget: write failed: {e}");
        }
    }
}

impl<W: Write> RenderTarget for ConsoleTarget<W> {
    fn draw_circle(&mut self, center_x: f64, center_y: f64, radius: f64) {
        self.emit(format_args!(
            "ConsoleTarget::draw_circle(): center_x = {center_x} center_y = {center_y} radius = {radius}"
        ));
    }

    fn draw_polygon(&mut self, points: &[f64]) {
        let joined = points.iter().map(f64::to_string).collect::<Vec<_>>().join(" ");
        self.emit(format_args!("ConsoleTarget::draw_polygon(): points: {{ {joined} }}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(target: ConsoleTarget<Vec<u8>>) -> String {
        String::from_utf8(target.into_inner()).unwrap()
    }

    #[test]
    fn prints_circle_arguments() {
        let mut target = ConsoleTarget::new(Vec::new());
        target.draw_circle(1.0, 2.5, 3.0);
        assert_eq!(
            output(target),
            "ConsoleTarget::draw_circle(): center_x = 1 center_y = 2.5 radius = 3\n"
        );
    }

    #[test]
    fn prints_polygon_points_in_order() {
        let mut target = ConsoleTarget::new(Vec::new());
        target.draw_polygon(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(output(target), "ConsoleTarget::draw_polygon(): points: { 0 0 1 0 0 1 }\n");
    }
}
