use std::collections::HashMap;

use crate::error::RegistryError;
use crate::kind::ShapeKind;
use crate::shapes::{Circle, Shape, Square, Triangle};

/// Builds a fresh shape variant.
pub type ShapeCtor = Box<dyn Fn() -> Box<dyn Shape>>;

/// Maps kind tags to shape constructors.
///
/// Insertion-only: a kind, once registered, keeps its first constructor.
#[derive(Default)]
pub struct ShapeRegistry {
    ctors: HashMap<ShapeKind, ShapeCtor>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self { ctors: HashMap::new() }
    }

    /// A registry holding [`builtin_shapes`].
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        // Fresh registry, so the built-in list cannot collide.
        let report = registry.register_all(builtin_shapes());
        debug_assert!(report.is_complete(), "duplicate kind in builtin_shapes()");
        registry
    }

    /// Registers `ctor` under `kind`.
    ///
    /// Fails with [`RegistryError::DuplicateRegistration`] if `kind` is
    /// already present; the existing entry is left untouched.
    pub fn register<F>(&mut self, kind: ShapeKind, ctor: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Shape> + 'static,
    {
        self.insert(kind, Box::new(ctor))
    }

    /// Registers an ordered batch.
    ///
    /// Every entry is attempted. A duplicate does not stop later entries from
    /// being added, so the registry may be partially updated; the returned
    /// report says exactly which kinds went in and which were rejected.
    pub fn register_all<I>(&mut self, entries: I) -> RegisterReport
    where
        I: IntoIterator<Item = (ShapeKind, ShapeCtor)>,
    {
        let mut report = RegisterReport::default();
        for (kind, ctor) in entries {
            match self.insert(kind, ctor) {
                Ok(()) => report.added.push(kind),
                Err(_) => report.rejected.push(kind),
            }
        }
        report
    }

    /// Constructs a new variant for `kind`, or `None` if it is unregistered.
    pub fn create(&self, kind: ShapeKind) -> Option<Box<dyn Shape>> {
        self.ctors.get(&kind).map(|ctor| ctor())
    }

    #[inline]
    pub fn contains(&self, kind: ShapeKind) -> bool {
        self.ctors.contains_key(&kind)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }

    /// Registered kinds in ascending tag order.
    pub fn kinds(&self) -> Vec<ShapeKind> {
        let mut kinds: Vec<_> = self.ctors.keys().copied().collect();
        kinds.sort();
        kinds
    }

    fn insert(&mut self, kind: ShapeKind, ctor: ShapeCtor) -> Result<(), RegistryError> {
        if self.ctors.contains_key(&kind) {
            log::warn!("rejected duplicate registration of shape kind {kind}");
            return Err(RegistryError::DuplicateRegistration(kind));
        }
        self.ctors.insert(kind, ctor);
        log::debug!("registered shape kind {kind}");
        Ok(())
    }
}

impl std::fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeRegistry").field("kinds", &self.kinds()).finish()
    }
}

/// Outcome of [`ShapeRegistry::register_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterReport {
    /// Kinds that were added, in batch order.
    pub added: Vec<ShapeKind>,
    /// Kinds that were already present and left unchanged, in batch order.
    pub rejected: Vec<ShapeKind>,
}

impl RegisterReport {
    /// True when every entry in the batch was added.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Fails on the first rejected kind.
    pub fn into_result(self) -> Result<(), RegistryError> {
        match self.rejected.first() {
            Some(&kind) => Err(RegistryError::DuplicateRegistration(kind)),
            None => Ok(()),
        }
    }
}

/// Constructor for a variant that needs no configuration.
pub fn ctor_of<S: Shape + Default>() -> ShapeCtor {
    Box::new(|| -> Box<dyn Shape> { Box::new(S::default()) })
}

/// Startup registration list: circle, triangle, square.
pub fn builtin_shapes() -> Vec<(ShapeKind, ShapeCtor)> {
    vec![
        (Circle::KIND, ctor_of::<Circle>()),
        (Triangle::KIND, ctor_of::<Triangle>()),
        (Square::KIND, ctor_of::<Square>()),
    ]
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::error::ErrorCode;
    use crate::scene::{CircleCmd, DrawCmd, DrawList, PolygonCmd};
    use crate::shapes::Polygon;

    #[test]
    fn builtin_registry_holds_three_kinds() {
        let registry = ShapeRegistry::with_builtin();
        assert_eq!(
            registry.kinds(),
            vec![ShapeKind::CIRCLE, ShapeKind::TRIANGLE, ShapeKind::SQUARE]
        );
    }

    #[test]
    fn create_unknown_kind_is_none() {
        let registry = ShapeRegistry::with_builtin();
        assert!(registry.create(ShapeKind::new(99)).is_none());
        assert!(ShapeRegistry::new().create(ShapeKind::CIRCLE).is_none());
    }

    #[test]
    fn created_shapes_draw_through_the_right_primitive() {
        let registry = ShapeRegistry::with_builtin();
        for kind in registry.kinds() {
            let shape = registry.create(kind).unwrap();
            assert_eq!(shape.kind(), kind);

            let params: Vec<f64> = (1..=shape.param_count()).map(|i| i as f64 * 1.5).collect();
            let mut list = DrawList::new();
            shape.draw(&mut list, &params);

            let expected = if kind == ShapeKind::CIRCLE {
                DrawCmd::Circle(CircleCmd::new(params[0], params[1], params[2]))
            } else {
                DrawCmd::Polygon(PolygonCmd::new(params.clone()))
            };
            assert_eq!(list.cmds(), &[expected]);
        }
    }

    #[test]
    fn create_builds_a_fresh_instance_each_time() {
        let built = Rc::new(Cell::new(0));
        let counter = built.clone();
        let mut registry = ShapeRegistry::new();
        registry
            .register(ShapeKind::CIRCLE, move || {
                counter.set(counter.get() + 1);
                Box::new(Circle)
            })
            .unwrap();

        registry.create(ShapeKind::CIRCLE).unwrap();
        registry.create(ShapeKind::CIRCLE).unwrap();
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn duplicate_register_fails_and_keeps_first() {
        let mut registry = ShapeRegistry::new();
        registry.register(ShapeKind::new(7), || Box::new(Polygon::new(ShapeKind::new(7), 3))).unwrap();

        let err = registry
            .register(ShapeKind::new(7), || Box::new(Polygon::new(ShapeKind::new(7), 5)))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateRegistration(ShapeKind::new(7)));
        assert_eq!(err.code(), ErrorCode::DuplicateRegistration);

        assert_eq!(registry.len(), 1);
        let shape = registry.create(ShapeKind::new(7)).unwrap();
        assert_eq!(shape.param_count(), 6);
    }

    #[test]
    fn register_all_succeeds_on_fresh_registry() {
        let mut registry = ShapeRegistry::new();
        let report = registry.register_all(builtin_shapes());
        assert!(report.is_complete());
        assert_eq!(
            report.added,
            vec![ShapeKind::CIRCLE, ShapeKind::TRIANGLE, ShapeKind::SQUARE]
        );
        assert_eq!(report.into_result(), Ok(()));
    }

    #[test]
    fn register_all_reports_duplicates_and_applies_the_rest() {
        let mut registry = ShapeRegistry::new();
        registry.register(ShapeKind::TRIANGLE, || Box::new(Polygon::new(ShapeKind::TRIANGLE, 4))).unwrap();

        let report = registry.register_all(builtin_shapes());
        assert!(!report.is_complete());
        assert_eq!(report.added, vec![ShapeKind::CIRCLE, ShapeKind::SQUARE]);
        assert_eq!(report.rejected, vec![ShapeKind::TRIANGLE]);
        assert_eq!(
            report.into_result(),
            Err(RegistryError::DuplicateRegistration(ShapeKind::TRIANGLE))
        );

        // Pre-existing triangle constructor survives.
        assert_eq!(registry.create(ShapeKind::TRIANGLE).unwrap().param_count(), 8);
        assert_eq!(registry.len(), 3);
    }
}
