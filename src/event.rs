//! The per-point state the sweep visits, grounded in spirit in the teacher's
//! `Event`/`EventType` (`geo/src/algorithm/old_sweep/events.rs`), generalized
//! to carry the richer incident-curve lists this engine's five-phase loop
//! needs (the teacher sweeps one segment per heap-pop; this engine, like the
//! CGAL-style surface sweep spec.md is drawn from, groups every curve
//! touching a point into one `Event`).

use crate::subcurve::{SubCurveArena, SubCurveId};
use crate::traits::GeometricTraits;

/// One point the sweep must stop at, and everything incident to it.
pub struct Event<Tr: GeometricTraits> {
    pub point: Tr::Point,
    /// Subcurves whose right endpoint, or an interior intersection, lies
    /// here — ascending by y just to the left of `point`.
    left: Vec<SubCurveId>,
    /// Subcurves that extend rightward from here — ascending by y just to
    /// the right of `point`.
    right: Vec<SubCurveId>,
    /// Subcurves, vertical at this event's x, that pass through this point
    /// (bottom end, top end, or interior).
    vertical_curves: Vec<SubCurveId>,
    /// Points recorded by `HandleVerticalCurveBottom`/`HandleVerticalOverlapCurves`
    /// at which a horizontal curve crosses a vertical anchored here; sliced
    /// off the vertical once this, its top-end event, is processed.
    vertical_crossings: Vec<Tr::Point>,
    is_interior_intersection: bool,
}

impl<Tr: GeometricTraits> Event<Tr> {
    pub fn new(point: Tr::Point) -> Self {
        Event {
            point,
            left: Vec::new(),
            right: Vec::new(),
            vertical_curves: Vec::new(),
            vertical_crossings: Vec::new(),
            is_interior_intersection: false,
        }
    }

    /// Inserts `sc` into the left-list, keeping it ordered ascending by y
    /// just to the left of `ref_point` (a sweep position at or before this
    /// event's point, used to break ties when several curves coincide
    /// here).
    pub fn add_curve_to_left(
        &mut self,
        traits: &Tr,
        arena: &SubCurveArena<Tr>,
        sc: SubCurveId,
        ref_point: &Tr::Point,
    ) {
        if self.left.contains(&sc) {
            return;
        }
        let pos = self
            .left
            .partition_point(|&other| Self::curve_at(arena, other).borrow().is_ordered_before(traits, &Self::curve_at(arena, sc).borrow(), ref_point));
        self.left.insert(pos, sc);
    }

    /// Inserts `sc` into the right-list, keeping it ordered ascending by y
    /// just to the right of this event's point.
    pub fn add_curve_to_right(&mut self, traits: &Tr, arena: &SubCurveArena<Tr>, sc: SubCurveId) {
        if self.right.contains(&sc) {
            return;
        }
        let point = self.point.clone();
        let pos = self.right.partition_point(|&other| {
            let oc = Self::curve_at(arena, other).borrow();
            let nc = Self::curve_at(arena, sc).borrow();
            traits
                .curves_compare_y_at_x_right(&oc.remaining, &nc.remaining, &point)
                .is_lt()
        });
        self.right.insert(pos, sc);
    }

    fn curve_at(arena: &SubCurveArena<Tr>, id: SubCurveId) -> std::rc::Rc<std::cell::RefCell<crate::subcurve::SubCurve<Tr>>> {
        arena.get(id).clone()
    }

    pub fn add_vertical_curve_x_point(&mut self, p: Tr::Point) {
        self.vertical_crossings.push(p);
    }

    pub fn add_vertical_curve(&mut self, sc: SubCurveId) {
        if !self.vertical_curves.contains(&sc) {
            self.vertical_curves.push(sc);
        }
    }

    pub fn mark_internal_intersection_point(&mut self) {
        self.is_interior_intersection = true;
    }

    pub fn is_internal_intersection_point(&self) -> bool {
        self.is_interior_intersection
    }

    pub fn does_contain_vertical_curve(&self) -> bool {
        !self.vertical_curves.is_empty()
    }

    pub fn vertical_curves(&self) -> &[SubCurveId] {
        &self.vertical_curves
    }

    pub fn vertical_crossings(&self) -> &[Tr::Point] {
        &self.vertical_crossings
    }

    pub fn has_left_curves(&self) -> bool {
        !self.left.is_empty()
    }

    pub fn left_curves(&self) -> &[SubCurveId] {
        &self.left
    }

    pub fn right_curves(&self) -> &[SubCurveId] {
        &self.right
    }

    pub fn num_left_curves(&self) -> usize {
        self.left.len()
    }

    pub fn num_right_curves(&self) -> usize {
        self.right.len()
    }
}

impl<Tr: GeometricTraits> crate::subcurve::SubCurve<Tr> {
    /// Whether `self` sits below `other` just to the left of `ref_point`,
    /// used only to keep an `Event`'s left-list sorted.
    fn is_ordered_before(&self, traits: &Tr, other: &Self, ref_point: &Tr::Point) -> bool {
        traits
            .curves_compare_y_at_x(&self.remaining, &other.remaining, ref_point)
            .is_lt()
    }
}
