use std::{cmp::Ordering, ops::Deref};

use geo_types::Coord;

use crate::kernel::SweepScalar;

/// A lexicographically ordered point: compared by `x`, then by `y`.
///
/// This is the `Point` type of the shipped straight-line oracle
/// ([`crate::segment_traits::StraightSegmentTraits`]), and doubles as the
/// event-queue key for any oracle that chooses to reuse it. `GeometricTraits`
/// only requires its own `Point` associated type to implement `Ord`; this
/// wrapper is one conforming implementation, not a privileged one.
///
/// `T` is only required to be `PartialOrd`; constructing this with
/// coordinates that cannot be ordered (e.g. containing `NaN`) is a logical
/// error, not something this type attempts to guard against.
#[derive(PartialEq, Clone, Copy)]
pub struct SweepPoint<T: SweepScalar>(Coord<T>);

impl<T: SweepScalar> std::fmt::Debug for SweepPoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Pt").field(&self.0.x).field(&self.0.y).finish()
    }
}

impl<T: SweepScalar> PartialOrd for SweepPoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.x.partial_cmp(&other.0.x) {
            Some(Ordering::Equal) => self.0.y.partial_cmp(&other.0.y),
            o => o,
        }
    }
}

/// Derive `Ord` from `PartialOrd`, asserting it never fails.
impl<T: SweepScalar> Ord for SweepPoint<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other)
            .expect("SweepPoint coordinates must be totally orderable")
    }
}

/// Derived manually so `T: Eq` is not required.
impl<T: SweepScalar> Eq for SweepPoint<T> {}

impl<T: SweepScalar, X: Into<Coord<T>>> From<X> for SweepPoint<T> {
    fn from(pt: X) -> Self {
        SweepPoint(pt.into())
    }
}

impl<T: SweepScalar> Deref for SweepPoint<T> {
    type Target = Coord<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: SweepScalar> SweepPoint<T> {
    pub fn x_y(&self) -> (T, T) {
        (self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_ordering() {
        let p1 = SweepPoint::from(Coord { x: 0., y: 0. });
        let p2 = SweepPoint::from(Coord { x: 1., y: 0. });
        let p3 = SweepPoint::from(Coord { x: 1., y: 1. });
        let p4 = SweepPoint::from(Coord { x: 1., y: 1. });

        assert!(p1 < p2);
        assert!(p1 < p3);
        assert!(p2 < p3);
        assert!(p3 <= p4);
        assert_eq!(p3, p4);
    }
}
