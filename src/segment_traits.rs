//! The default oracle: straight line segments over `geo_types` primitives.
//!
//! This plays the role the teacher's `Cross`/`LineOrPoint`/`line_intersection`
//! trio plays in `geo::algorithm::sweep` — a concrete, fully tested
//! [`GeometricTraits`] instance proving the generic engine is usable out of
//! the box, without making straight segments the only curve family the
//! engine can sweep.

use std::cmp::Ordering;

use geo_types::{Coord, Line};
use num_traits::Float;

use crate::kernel::{HasKernel, Kernel, Orientation};
use crate::line_or_point::LineOrPoint;
use crate::point::SweepPoint;
use crate::traits::{GeometricTraits, Intersection};

/// Oracle over `geo_types::Line<T>`, for any scalar `T` with a registered
/// [`crate::kernel::Kernel`] (shipped: `f64`).
#[derive(Debug, Default, Clone, Copy)]
pub struct StraightSegmentTraits<T> {
    _marker: std::marker::PhantomData<T>,
}

impl<T> StraightSegmentTraits<T> {
    pub fn new() -> Self {
        Self { _marker: std::marker::PhantomData }
    }
}

impl<T> GeometricTraits for StraightSegmentTraits<T>
where
    T: HasKernel + Float + 'static,
{
    type Curve = Line<T>;
    type Point = SweepPoint<T>;

    fn source(&self, curve: &Self::Curve) -> Self::Point {
        curve.start.into()
    }

    fn target(&self, curve: &Self::Curve) -> Self::Point {
        curve.end.into()
    }

    fn is_left_to_right(&self, curve: &Self::Curve) -> bool {
        SweepPoint::from(curve.start) < SweepPoint::from(curve.end)
    }

    fn is_vertical(&self, curve: &Self::Curve) -> bool {
        curve.start.x == curve.end.x
    }

    fn point_equal(&self, a: &Self::Point, b: &Self::Point) -> bool {
        a == b
    }

    fn curve_equal(&self, a: &Self::Curve, b: &Self::Curve) -> bool {
        (a.start == b.start && a.end == b.end) || (a.start == b.end && a.end == b.start)
    }

    fn is_point_in_x_range(&self, curve: &Self::Curve, p: &Self::Point) -> bool {
        let (lo, hi) = min_max(curve.start.x, curve.end.x);
        p.x_y().0 >= lo && p.x_y().0 <= hi
    }

    fn curve_compare_y_at_x(&self, p: &Self::Point, curve: &Self::Curve) -> Ordering {
        // `LineOrPoint::partial_cmp`'s (Line, Point) branch exists to give the
        // status line a strict total order and deliberately never reports a
        // point as lying on a segment; this predicate needs the opposite — a
        // genuine above/on/below test — so it goes straight to `orient2d`
        // instead of reusing that ordering.
        if !self.is_point_in_x_range(curve, p) {
            log::warn!("curve_compare_y_at_x: point outside curve's x-range");
            return Ordering::Equal;
        }
        let lp: LineOrPoint<T> = (*curve).into();
        let (left, right) = lp.end_points();
        match T::Ker::orient2d(*left, *right, **p) {
            Orientation::Collinear => Ordering::Equal,
            Orientation::CounterClockwise => Ordering::Greater,
            Orientation::Clockwise => Ordering::Less,
        }
    }

    fn curves_compare_y_at_x(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        x_ref: &Self::Point,
    ) -> Ordering {
        let la: LineOrPoint<T> = (*a).into();
        let lb: LineOrPoint<T> = (*b).into();
        la.partial_cmp(&lb).unwrap_or_else(|| {
            log::warn!(
                "curves_compare_y_at_x: curves not simultaneously ordered at {x_ref:?}: {a:?} vs {b:?}"
            );
            Ordering::Equal
        })
    }

    fn curves_compare_y_at_x_right(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        x_ref: &Self::Point,
    ) -> Ordering {
        // Straight lines have no curvature: the order just to the right of a
        // shared point is already what `curves_compare_y_at_x`'s
        // orientation-based formula computes (it compares full segments, not
        // merely their value at one x), so there is nothing extra to do.
        self.curves_compare_y_at_x(a, b, x_ref)
    }

    fn nearest_intersection_to_right(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        from: &Self::Point,
    ) -> Intersection<Self::Point> {
        let la: LineOrPoint<T> = (*a).into();
        let lb: LineOrPoint<T> = (*b).into();
        match la.intersect_line_ordered(&lb) {
            None => Intersection::None,
            Some(LineOrPoint::Point(p)) => {
                if p > *from {
                    Intersection::Point(p)
                } else {
                    Intersection::None
                }
            }
            Some(LineOrPoint::Line { left, right }) => {
                let left = if left > *from { left } else { *from };
                if left < right {
                    Intersection::Overlap(left, right)
                } else {
                    Intersection::None
                }
            }
        }
    }

    fn curve_split(&self, curve: &Self::Curve, at: &Self::Point) -> (Self::Curve, Self::Curve) {
        (Line::new(curve.start, **at), Line::new(**at, curve.end))
    }

    fn curves_overlap(&self, a: &Self::Curve, b: &Self::Curve) -> bool {
        let la: LineOrPoint<T> = (*a).into();
        let lb: LineOrPoint<T> = (*b).into();
        matches!(la.intersect_line_ordered(&lb), Some(LineOrPoint::Line { .. }))
    }

    fn to_x_monotone(&self, curve: Self::Curve) -> Vec<Self::Curve> {
        vec![curve]
    }
}

fn min_max<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Builds a `StraightSegmentTraits<f64>` curve from two coordinate pairs;
/// convenience used throughout tests and small examples.
pub fn line(a: (f64, f64), b: (f64, f64)) -> Line<f64> {
    Line::new(Coord { x: a.0, y: a.1 }, Coord { x: b.0, y: b.1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_lines_intersect_at_midpoint() {
        let tr = StraightSegmentTraits::<f64>::new();
        let a = line((0., 0.), (10., 10.));
        let b = line((0., 10.), (10., 0.));
        let from: SweepPoint<f64> = Coord { x: 0., y: 0. }.into();
        match tr.nearest_intersection_to_right(&a, &b, &from) {
            Intersection::Point(p) => assert_eq!(p.x_y(), (5., 5.)),
            other => panic!("expected point intersection, got {other:?}"),
        }
    }

    #[test]
    fn collinear_segments_overlap() {
        let tr = StraightSegmentTraits::<f64>::new();
        let a = line((0., 0.), (10., 0.));
        let b = line((3., 0.), (7., 0.));
        assert!(tr.curves_overlap(&a, &b));
    }

    #[test]
    fn disjoint_segments_do_not_overlap() {
        let tr = StraightSegmentTraits::<f64>::new();
        let a = line((0., 0.), (1., 0.));
        let b = line((0., 1.), (1., 1.));
        assert!(!tr.curves_overlap(&a, &b));
    }

    #[test]
    fn vertical_detection() {
        let tr = StraightSegmentTraits::<f64>::new();
        assert!(tr.is_vertical(&line((5., 0.), (5., 10.))));
        assert!(!tr.is_vertical(&line((5., 0.), (6., 10.))));
    }
}
