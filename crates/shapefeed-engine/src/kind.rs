use core::fmt;

/// Shape kind tag as stored on the wire.
///
/// Known kinds are exposed as associated constants. Any other value is still
/// representable so that unregistered tags can be reported back to the caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ShapeKind(pub i32);

impl ShapeKind {
    pub const CIRCLE: ShapeKind = ShapeKind(0);
    pub const TRIANGLE: ShapeKind = ShapeKind(1);
    pub const SQUARE: ShapeKind = ShapeKind(2);

    #[inline]
    pub const fn new(tag: i32) -> Self {
        Self(tag)
    }

    #[inline]
    pub const fn tag(self) -> i32 {
        self.0
    }

    /// Human-readable name for built-in kinds.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("circle"),
            1 => Some("triangle"),
            2 => Some("square"),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "kind#{}", self.0),
        }
    }
}

impl From<i32> for ShapeKind {
    #[inline]
    fn from(tag: i32) -> Self {
        Self(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tags_are_stable() {
        assert_eq!(ShapeKind::CIRCLE.tag(), 0);
        assert_eq!(ShapeKind::TRIANGLE.tag(), 1);
        assert_eq!(ShapeKind::SQUARE.tag(), 2);
    }

    #[test]
    fn display_names_known_and_unknown() {
        assert_eq!(ShapeKind::TRIANGLE.to_string(), "triangle");
        assert_eq!(ShapeKind::new(99).to_string(), "kind#99");
    }
}
