use std::cmp::Ordering;

use float_next_after::NextAfter;
use geo_types::{Coord, Line};
use log::debug;
use num_traits::Float;

use crate::kernel::{HasKernel, Kernel, Orientation};
use crate::point::SweepPoint;

/// Either a straight line segment or a single point, normalized so a
/// "segment" with coincident endpoints collapses to `Point`.
///
/// This is the curve representation used internally by the shipped
/// straight-line oracle ([`crate::segment_traits::StraightSegmentTraits`]).
/// Its `PartialOrd` implements the status-line comparison
/// (`curves_compare_y_at_x`) for straight segments: treat a point as an
/// infinitesimally thin vertical segment centered at its coordinates, and
/// order two segments by the turn their left-to-right orientation makes
/// relative to the other's endpoints.
#[derive(Clone, Copy)]
pub enum LineOrPoint<T: HasKernel> {
    Point(SweepPoint<T>),
    Line {
        left: SweepPoint<T>,
        right: SweepPoint<T>,
    },
}

impl<T: HasKernel> std::fmt::Debug for LineOrPoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineOrPoint::Point(p) => f.debug_tuple("Pt").field(&p.x_y()).finish(),
            LineOrPoint::Line { left, right } => {
                f.debug_tuple("Seg").field(&left.x_y()).field(&right.x_y()).finish()
            }
        }
    }
}

impl<T: HasKernel> From<SweepPoint<T>> for LineOrPoint<T> {
    fn from(pt: SweepPoint<T>) -> Self {
        Self::Point(pt)
    }
}

impl<T: HasKernel> From<(SweepPoint<T>, SweepPoint<T>)> for LineOrPoint<T> {
    fn from((a, b): (SweepPoint<T>, SweepPoint<T>)) -> Self {
        match a.cmp(&b) {
            Ordering::Less => Self::Line { left: a, right: b },
            Ordering::Equal => Self::Point(a),
            Ordering::Greater => Self::Line { left: b, right: a },
        }
    }
}

impl<T: HasKernel> From<Line<T>> for LineOrPoint<T> {
    fn from(l: Line<T>) -> Self {
        let a: SweepPoint<T> = l.start.into();
        let b: SweepPoint<T> = l.end.into();
        (a, b).into()
    }
}

impl<T: HasKernel> From<Coord<T>> for LineOrPoint<T> {
    fn from(c: Coord<T>) -> Self {
        Self::Point(c.into())
    }
}

impl<T: HasKernel> LineOrPoint<T> {
    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        !self.is_line()
    }

    #[inline]
    pub fn line(&self) -> Line<T> {
        match self {
            LineOrPoint::Point(p) => Line::new(**p, **p),
            LineOrPoint::Line { left, right } => Line::new(**left, **right),
        }
    }

    #[inline]
    pub fn left(&self) -> SweepPoint<T> {
        match self {
            LineOrPoint::Point(p) => *p,
            LineOrPoint::Line { left, .. } => *left,
        }
    }

    #[inline]
    pub fn right(&self) -> SweepPoint<T> {
        match self {
            LineOrPoint::Point(p) => *p,
            LineOrPoint::Line { right, .. } => *right,
        }
    }

    #[inline]
    pub fn end_points(&self) -> (SweepPoint<T>, SweepPoint<T>) {
        match self {
            LineOrPoint::Point(p) => (*p, *p),
            LineOrPoint::Line { left, right } => (*left, *right),
        }
    }

    pub fn new(left: SweepPoint<T>, right: SweepPoint<T>) -> Self {
        if left == right {
            Self::Point(left)
        } else {
            Self::Line { left, right }
        }
    }

    #[cfg(test)]
    pub fn coords_equal(&self, other: &Self) -> bool {
        self.is_line() == other.is_line() && self.end_points() == other.end_points()
    }

    pub fn orient2d(&self, other: Coord<T>) -> Orientation {
        let (left, right) = self.end_points();
        T::Ker::orient2d(*left, *right, other)
    }
}

/// Ordering requires both segments to be overlapping in `x`-range and is
/// undefined (returns `None`) otherwise; see the module docs.
impl<T: HasKernel> PartialEq for LineOrPoint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<T: HasKernel> PartialOrd for LineOrPoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (LineOrPoint::Point(p), LineOrPoint::Point(o)) => {
                if p == o {
                    Some(Ordering::Equal)
                } else {
                    None
                }
            }
            (LineOrPoint::Point(_), LineOrPoint::Line { .. }) => {
                other.partial_cmp(self).map(Ordering::reverse)
            }
            (LineOrPoint::Line { left, right }, LineOrPoint::Point(p)) => {
                if p > right || left > p {
                    return None;
                }
                Some(T::Ker::orient2d(**left, **right, **p).as_ordering().then(Ordering::Greater))
            }
            (
                LineOrPoint::Line { left: la, right: ra },
                LineOrPoint::Line { left: lb, right: rb },
            ) => {
                if la > lb {
                    return other.partial_cmp(self).map(Ordering::reverse);
                }
                if la >= rb || lb >= ra {
                    return None;
                }
                Some(
                    T::Ker::orient2d(**la, **ra, **lb)
                        .as_ordering()
                        .then_with(|| T::Ker::orient2d(**la, **ra, **rb).as_ordering()),
                )
            }
        }
    }
}

/// Result of intersecting two straight segments.
pub enum Crossing<T: HasKernel> {
    SinglePoint { intersection: Coord<T>, is_proper: bool },
    Collinear { overlap: Line<T> },
}

fn segment_intersection<T>(a: Line<T>, b: Line<T>) -> Option<Crossing<T>>
where
    T: HasKernel + Float,
{
    let (p1, p2) = (a.start, a.end);
    let (p3, p4) = (b.start, b.end);

    let o1 = T::Ker::orient2d(p1, p2, p3);
    let o2 = T::Ker::orient2d(p1, p2, p4);
    let o3 = T::Ker::orient2d(p3, p4, p1);
    let o4 = T::Ker::orient2d(p3, p4, p2);

    if o1 == Orientation::Collinear
        && o2 == Orientation::Collinear
        && o3 == Orientation::Collinear
        && o4 == Orientation::Collinear
    {
        // Collinear: overlap is the intersection of the two 1-d ranges,
        // projected onto whichever axis has larger extent.
        let (lo_a, hi_a) = if p1.x != p2.x || p1.y != p2.y {
            order_collinear(p1, p2)
        } else {
            (p1, p2)
        };
        let (lo_b, hi_b) = order_collinear(p3, p4);
        let lo = if cmp_along(lo_a, lo_b) == Ordering::Greater { lo_a } else { lo_b };
        let hi = if cmp_along(hi_a, hi_b) == Ordering::Less { hi_a } else { hi_b };
        if cmp_along(lo, hi) == Ordering::Greater {
            return None;
        }
        return Some(Crossing::Collinear { overlap: Line::new(lo, hi) });
    }

    if o1 == o2 || o3 == o4 {
        return None;
    }

    // Proper crossing: solve the 2x2 linear system for the intersection.
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom == T::zero() {
        return None;
    }
    let t = ((p3.x - p1.x) * d2.y - (p3.y - p1.y) * d2.x) / denom;
    let pt = Coord { x: p1.x + t * d1.x, y: p1.y + t * d1.y };
    let is_proper = o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear;
    Some(Crossing::SinglePoint { intersection: pt, is_proper })
}

fn order_collinear<T: HasKernel>(a: Coord<T>, b: Coord<T>) -> (Coord<T>, Coord<T>) {
    if cmp_along(a, b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    }
}

fn cmp_along<T: HasKernel>(a: Coord<T>, b: Coord<T>) -> Ordering {
    a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal).then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

impl<T> LineOrPoint<T>
where
    T: HasKernel + Float,
{
    /// Intersect `self` with a line-variant `other`. `other` must be a line
    /// (debug builds assert this).
    pub fn intersect_line(&self, other: &Self) -> Option<Self> {
        debug_assert!(other.is_line(), "tried to intersect with a point variant");

        let line = other.line();
        match self {
            LineOrPoint::Point(p) => {
                if point_on_segment(**p, line) {
                    Some(*self)
                } else {
                    None
                }
            }
            LineOrPoint::Line { left, right } => {
                segment_intersection(Line::new(**left, **right), line).map(|c| match c {
                    Crossing::SinglePoint { mut intersection, is_proper } => {
                        if is_proper && intersection == **left {
                            if left.x_y().0 == right.x_y().0 {
                                intersection.y = intersection.y.next_after(T::infinity());
                            } else {
                                intersection.x = intersection.x.next_after(T::infinity());
                            }
                        }
                        intersection.into()
                    }
                    Crossing::Collinear { overlap } => overlap.into(),
                })
            }
        }
    }

    /// As [`Self::intersect_line`], but nudges degenerate point
    /// intersections so they stay strictly ordered after the calling
    /// segments' left endpoints, even under finite precision.
    pub fn intersect_line_ordered(&self, other: &Self) -> Option<Self> {
        let ord = self.partial_cmp(other);
        match self.intersect_line(other) {
            Some(Self::Point(p)) => {
                let (mut x, y) = p.x_y();
                let c = self.left();
                if x == c.x_y().0 && y < c.x_y().1 {
                    x = x.next_after(T::infinity());
                }
                let p: SweepPoint<T> = Coord { x, y }.into();

                if let Some(ord) = ord {
                    let l1 = LineOrPoint::from((self.left(), p));
                    let l2 = LineOrPoint::from((other.left(), p));
                    if let Some(cmp) = l1.partial_cmp(&l2) {
                        if l1.is_line() && l2.is_line() && cmp.then(ord) != ord {
                            debug!("intersection at {p:?} changed segment ordering, falling back to topology-preserving point");
                            return Some(if self.left() > other.left() {
                                self.left().into()
                            } else {
                                other.left().into()
                            });
                        }
                    }
                }
                Some(Self::Point(p))
            }
            e => e,
        }
    }
}

fn point_on_segment<T: HasKernel + Float>(p: Coord<T>, l: Line<T>) -> bool {
    if T::Ker::orient2d(l.start, l.end, p) != Orientation::Collinear {
        return false;
    }
    let within = |a: T, b: T, c: T| (a.min(b)..=a.max(b)).contains(&c);
    within(l.start.x, l.end.x, p.x) && within(l.start.y, l.end.y, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(a: (f64, f64), b: (f64, f64)) -> LineOrPoint<f64> {
        (SweepPoint::from(a), SweepPoint::from(b)).into()
    }

    #[test]
    fn crossing_segments_order_by_orientation() {
        let a = seg((0., 0.), (10., 10.));
        let b = seg((0., 10.), (10., 0.));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
    }

    #[test]
    fn disjoint_x_range_is_incomparable() {
        let a = seg((0., 0.), (1., 0.));
        let b = seg((2., 0.), (3., 0.));
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn intersection_of_crossing_segments() {
        let a = seg((0., 0.), (10., 10.));
        let b = seg((0., 10.), (10., 0.));
        let isect = a.intersect_line_ordered(&b).unwrap();
        match isect {
            LineOrPoint::Point(p) => assert_eq!(p.x_y(), (5., 5.)),
            _ => panic!("expected point intersection"),
        }
    }

    #[test]
    fn collinear_overlap() {
        let a = seg((0., 0.), (10., 0.));
        let b = seg((5., 0.), (15., 0.));
        let isect = a.intersect_line_ordered(&b).unwrap();
        assert!(isect.is_line());
    }
}
