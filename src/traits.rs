//! The external geometric oracle the sweep is generic over.
//!
//! Nothing in [`crate::sweeper`] ever compares coordinates, calls a kernel,
//! or inspects a curve's internal representation directly: every geometric
//! question is routed through an implementation of [`GeometricTraits`]. This
//! is the "explicit interface (capability set)" the sweep is generic over,
//! in place of templating the whole engine over one concrete curve type.
//!
//! [`crate::segment_traits::StraightSegmentTraits`] is the default instance,
//! proving the contract is implementable and giving the crate something to
//! test against; callers with circular arcs, Bézier pieces, or any other
//! x-monotone curve family implement their own.

use std::cmp::Ordering;

/// The outcome of probing two curves for their nearest intersection to the
/// right of a reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection<P> {
    /// The curves do not meet again to the right of the reference point.
    None,
    /// A single transversal or tangential crossing.
    Point(P),
    /// A positive-length overlap; both endpoints of the overlapping portion
    /// are given, nearest first.
    Overlap(P, P),
}

impl<P> Intersection<P> {
    pub fn is_none(&self) -> bool {
        matches!(self, Intersection::None)
    }
}

/// The deterministic geometric predicate provider the sweep is generic over.
///
/// Implementations must be internally consistent: equality predicates form
/// an equivalence relation, and `curve_compare_y_at_x`/
/// `curves_compare_y_at_x`/`curves_compare_y_at_x_right` are antisymmetric
/// and transitive among any set of curves that are simultaneously present on
/// the status line. Violating this cannot be caught by the engine in
/// general; where it can be caught cheaply it is reported via
/// `debug_assert!`/`panic!`, never silently tolerated (see
/// [`crate::error::SweepError`]'s documentation for the line between the
/// two).
pub trait GeometricTraits: Sized {
    /// An x-monotone curve, opaque to the sweep beyond this trait's methods.
    type Curve: Clone;
    /// A point in the plane. Required to implement `Ord` so it can key the
    /// event queue's ordered map (see `crate::event_queue`).
    type Point: Ord + Clone + std::fmt::Debug;

    /// The curve's left-to-right source endpoint (not necessarily its
    /// smaller endpoint in sweep order; use [`Self::is_left_to_right`] for
    /// that).
    fn source(&self, curve: &Self::Curve) -> Self::Point;
    /// The curve's target endpoint.
    fn target(&self, curve: &Self::Curve) -> Self::Point;
    /// Whether `source` precedes `target` in sweep order (x, then y).
    fn is_left_to_right(&self, curve: &Self::Curve) -> bool;

    /// Whether the curve is a zero-x-width vertical segment. Oracles whose
    /// `curves_compare_y_at_x` is undefined at a single x-coordinate (most
    /// of them) rely on this to route verticals through the sweep's
    /// dedicated vertical-handling phases instead.
    fn is_vertical(&self, curve: &Self::Curve) -> bool;

    fn point_equal(&self, a: &Self::Point, b: &Self::Point) -> bool;
    fn curve_equal(&self, a: &Self::Curve, b: &Self::Curve) -> bool;

    /// Whether `p` lies within the curve's x-range (inclusive of endpoints).
    fn is_point_in_x_range(&self, curve: &Self::Curve, p: &Self::Point) -> bool;

    /// Compares `p`'s position to where `curve` passes at `p`'s x-coordinate.
    /// `p` must lie within the curve's x-range.
    fn curve_compare_y_at_x(&self, p: &Self::Point, curve: &Self::Curve) -> Ordering;

    /// Orders two curves by their y-position at `x_ref`, which must lie in
    /// both curves' x-ranges. Equal curves (including genuinely overlapping
    /// ones) compare `Equal`.
    fn curves_compare_y_at_x(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        x_ref: &Self::Point,
    ) -> Ordering;

    /// As [`Self::curves_compare_y_at_x`], but breaks ties using the
    /// curves' derivative immediately to the right of `x_ref` rather than
    /// their value at `x_ref`. Used when two curves meet exactly at the
    /// reference point and the status line needs to know their relative
    /// order just past it.
    fn curves_compare_y_at_x_right(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        x_ref: &Self::Point,
    ) -> Ordering;

    /// The nearest place (if any) `a` and `b` meet strictly to the right of
    /// `from`.
    fn nearest_intersection_to_right(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        from: &Self::Point,
    ) -> Intersection<Self::Point>;

    /// Splits `curve` at `at`, which must lie in its interior. Returns
    /// `(left_piece, right_piece)` in sweep order.
    fn curve_split(&self, curve: &Self::Curve, at: &Self::Point) -> (Self::Curve, Self::Curve);

    /// Whether two curves coincide as point sets over a positive-length
    /// range (not merely touch at a point).
    fn curves_overlap(&self, a: &Self::Curve, b: &Self::Curve) -> bool;

    /// Splits a (possibly non-x-monotone) input curve into x-monotone
    /// pieces, in left-to-right order. Most curve families (straight
    /// segments, circular arcs below a quarter-turn, ...) return `vec![curve]`
    /// unchanged; this hook exists for families (full circles, general
    /// splines) that are not inherently x-monotone.
    fn to_x_monotone(&self, curve: Self::Curve) -> Vec<Self::Curve>;
}

/// Lets a caller share one oracle between several `Sweeper`s by using a
/// shared reference as the `Sweeper`'s own traits type parameter — `Sweeper<
/// &'t StraightSegmentTraits<f64>>` borrows, `Sweeper<StraightSegmentTraits<f64>>`
/// owns, with no separate "owned vs. borrowed" constructor split needed.
impl<'t, Tr: GeometricTraits> GeometricTraits for &'t Tr {
    type Curve = Tr::Curve;
    type Point = Tr::Point;

    fn source(&self, curve: &Self::Curve) -> Self::Point {
        (**self).source(curve)
    }
    fn target(&self, curve: &Self::Curve) -> Self::Point {
        (**self).target(curve)
    }
    fn is_left_to_right(&self, curve: &Self::Curve) -> bool {
        (**self).is_left_to_right(curve)
    }
    fn is_vertical(&self, curve: &Self::Curve) -> bool {
        (**self).is_vertical(curve)
    }
    fn point_equal(&self, a: &Self::Point, b: &Self::Point) -> bool {
        (**self).point_equal(a, b)
    }
    fn curve_equal(&self, a: &Self::Curve, b: &Self::Curve) -> bool {
        (**self).curve_equal(a, b)
    }
    fn is_point_in_x_range(&self, curve: &Self::Curve, p: &Self::Point) -> bool {
        (**self).is_point_in_x_range(curve, p)
    }
    fn curve_compare_y_at_x(&self, p: &Self::Point, curve: &Self::Curve) -> Ordering {
        (**self).curve_compare_y_at_x(p, curve)
    }
    fn curves_compare_y_at_x(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        x_ref: &Self::Point,
    ) -> Ordering {
        (**self).curves_compare_y_at_x(a, b, x_ref)
    }
    fn curves_compare_y_at_x_right(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        x_ref: &Self::Point,
    ) -> Ordering {
        (**self).curves_compare_y_at_x_right(a, b, x_ref)
    }
    fn nearest_intersection_to_right(
        &self,
        a: &Self::Curve,
        b: &Self::Curve,
        from: &Self::Point,
    ) -> Intersection<Self::Point> {
        (**self).nearest_intersection_to_right(a, b, from)
    }
    fn curve_split(&self, curve: &Self::Curve, at: &Self::Point) -> (Self::Curve, Self::Curve) {
        (**self).curve_split(curve, at)
    }
    fn curves_overlap(&self, a: &Self::Curve, b: &Self::Curve) -> bool {
        (**self).curves_overlap(a, b)
    }
    fn to_x_monotone(&self, curve: Self::Curve) -> Vec<Self::Curve> {
        (**self).to_x_monotone(curve)
    }
}
