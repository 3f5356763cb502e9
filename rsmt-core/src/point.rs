//! Typed points held in the active-point arena and the Hanan candidate list.

/// The closed set of point tags the solver and finalizer can produce.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum PointType {
    /// User-supplied terminal, present before `build`.
    Pin,
    /// Candidate Steiner site, present only during solving.
    Hanan,
    /// Committed Steiner point, added during the Steiner iterations.
    Pseudo,
    /// Via duplicate of a pin onto the M2 layer, added during finalization.
    PinsM2,
    /// Via between horizontal and vertical metal, added during finalization.
    M2M3,
    /// A committed point that degenerated to a single-axis run.
    Invalid,
}

/// A point in the active-point arena: a pin or a committed Steiner point.
///
/// Active points own exactly one marker, addressed by the point's own index
/// in the arena (`spec` invariant: marker id equals insertion index).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ActivePoint {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) point_type: PointType,
}

impl ActivePoint {
    pub(crate) const fn new(x: usize, y: usize, point_type: PointType) -> Self {
        Self { x, y, point_type }
    }
}

/// A snapshot point as returned from [`crate::Smt::points`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    x: usize,
    y: usize,
    point_type: PointType,
}

impl Point {
    pub(crate) const fn new(x: usize, y: usize, point_type: PointType) -> Self {
        Self { x, y, point_type }
    }

    /// The horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> usize {
        self.x
    }

    /// The vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> usize {
        self.y
    }

    /// The point's tag.
    #[must_use]
    pub const fn point_type(&self) -> PointType {
        self.point_type
    }
}
