//! The ordered sequence of subcurves currently crossing the sweep line.
//!
//! Grounded in the teacher's `geo::algorithm::sweep::vec_set::VecSet` — a
//! `Vec`-backed alternative to its `BTreeSet`-backed `ActiveSet`
//! implementation. Both of the teacher's containers still rely on ambient
//! `Ord` (`Active<T>: Ord`, asserted total via `partial_cmp().unwrap()`),
//! which works there because the teacher's curve family is bound to one
//! scalar type's stateless `Kernel`. This crate's `GeometricTraits` is a
//! genuine runtime value a caller constructs, so ordering the status line
//! instead goes through `slice::binary_search_by`'s explicit per-call
//! closure, with the oracle and the current sweep reference point passed in
//! on every operation — the concrete resolution of the "hidden global
//! ordering reference" redesign (see `DESIGN.md`).

use crate::subcurve::{SubCurveArena, SubCurveId};
use crate::traits::GeometricTraits;

pub struct StatusLine<Tr: GeometricTraits> {
    segments: Vec<SubCurveId>,
    _marker: std::marker::PhantomData<Tr>,
}

impl<Tr: GeometricTraits> Default for StatusLine<Tr> {
    fn default() -> Self {
        Self { segments: Vec::new(), _marker: std::marker::PhantomData }
    }
}

impl<Tr: GeometricTraits> StatusLine<Tr> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    fn cmp_at(
        traits: &Tr,
        arena: &SubCurveArena<Tr>,
        a: SubCurveId,
        b: SubCurveId,
        x_ref: &Tr::Point,
    ) -> std::cmp::Ordering {
        if a == b {
            return std::cmp::Ordering::Equal;
        }
        let ca = arena.get(a).borrow();
        let cb = arena.get(b).borrow();
        let ord = traits.curves_compare_y_at_x(&ca.remaining, &cb.remaining, x_ref);
        if ord.is_eq() {
            traits.curves_compare_y_at_x_right(&ca.remaining, &cb.remaining, x_ref)
        } else {
            ord
        }
    }

    /// The index `sc` would occupy if it were in the status line, and the
    /// index of an existing element comparing equal to it, if any.
    fn locate(
        &self,
        traits: &Tr,
        arena: &SubCurveArena<Tr>,
        sc: SubCurveId,
        x_ref: &Tr::Point,
    ) -> Result<usize, usize> {
        self.segments
            .binary_search_by(|&probe| Self::cmp_at(traits, arena, probe, sc, x_ref))
    }

    /// Inserts `sc` at its sorted position relative to `x_ref`. Several
    /// subcurves may legitimately compare equal (a genuine overlap run); in
    /// that case `sc` is inserted immediately after its first equal match so
    /// overlap runs stay contiguous.
    pub fn insert(&mut self, traits: &Tr, arena: &SubCurveArena<Tr>, sc: SubCurveId, x_ref: &Tr::Point) -> usize {
        let idx = match self.locate(traits, arena, sc, x_ref) {
            Ok(i) => i + 1,
            Err(i) => i,
        };
        log::debug!("status line insert: {sc} at {idx}");
        self.segments.insert(idx, sc);
        idx
    }

    pub fn remove(&mut self, traits: &Tr, arena: &SubCurveArena<Tr>, sc: SubCurveId, x_ref: &Tr::Point) {
        if let Some(idx) = self.segments.iter().position(|&s| s == sc) {
            log::debug!("status line remove: {sc} at {idx}");
            self.segments.remove(idx);
            return;
        }
        // Fall back to a located search in case the cached position drifted
        // (e.g. a neighbour's split moved indices around since last touch).
        match self.locate(traits, arena, sc, x_ref) {
            Ok(i) => {
                self.segments.remove(i);
            }
            Err(_) => {
                log::warn!("status line remove: subcurve {sc} not found");
                debug_assert!(false, "removing a subcurve absent from the status line");
            }
        }
    }

    pub fn position_of(&self, sc: SubCurveId) -> Option<usize> {
        self.segments.iter().position(|&s| s == sc)
    }

    pub fn previous(&self, idx: usize) -> Option<SubCurveId> {
        idx.checked_sub(1).map(|i| self.segments[i])
    }

    pub fn next(&self, idx: usize) -> Option<SubCurveId> {
        self.segments.get(idx + 1).copied()
    }

    pub fn at(&self, idx: usize) -> SubCurveId {
        self.segments[idx]
    }

    /// All indices of a contiguous overlap run starting at `idx`, expanding
    /// upward while curves compare equal to `idx`'s curve at `x_ref`.
    pub fn overlap_run_from(
        &self,
        traits: &Tr,
        arena: &SubCurveArena<Tr>,
        idx: usize,
        x_ref: &Tr::Point,
    ) -> Vec<SubCurveId> {
        let mut run = vec![self.segments[idx]];
        let mut i = idx;
        while i + 1 < self.segments.len()
            && Self::cmp_at(traits, arena, self.segments[i], self.segments[i + 1], x_ref).is_eq()
        {
            i += 1;
            run.push(self.segments[i]);
        }
        run
    }

    /// All indices of a contiguous overlap run ending at `idx`, expanding
    /// downward while curves compare equal to `idx`'s curve at `x_ref`.
    pub fn overlap_run_down_from(
        &self,
        traits: &Tr,
        arena: &SubCurveArena<Tr>,
        idx: usize,
        x_ref: &Tr::Point,
    ) -> Vec<SubCurveId> {
        let mut run = vec![self.segments[idx]];
        let mut i = idx;
        while i > 0 && Self::cmp_at(traits, arena, self.segments[i - 1], self.segments[i], x_ref).is_eq() {
            i -= 1;
            run.push(self.segments[i]);
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment_traits::StraightSegmentTraits;
    use crate::subcurve::SubCurveArena;

    #[test]
    fn inserts_in_sorted_order_by_y() {
        let traits = StraightSegmentTraits::<f64>::new();
        let mut arena: SubCurveArena<StraightSegmentTraits<f64>> = SubCurveArena::new();
        let a = arena.push(crate::segment_traits::line((0., 5.), (10., 5.)), &traits);
        let b = arena.push(crate::segment_traits::line((0., 1.), (10., 1.)), &traits);
        let c = arena.push(crate::segment_traits::line((0., 9.), (10., 9.)), &traits);

        let x_ref: crate::point::SweepPoint<f64> = geo_types::Coord { x: 0., y: 0. }.into();
        let mut sl: StatusLine<StraightSegmentTraits<f64>> = StatusLine::new();
        sl.insert(&traits, &arena, a, &x_ref);
        sl.insert(&traits, &arena, b, &x_ref);
        sl.insert(&traits, &arena, c, &x_ref);

        assert_eq!((0..3).map(|i| sl.at(i)).collect::<Vec<_>>(), vec![b, a, c]);
    }
}
