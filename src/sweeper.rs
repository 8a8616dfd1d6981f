//! The sweep loop itself: event queue draining, the five per-event phases,
//! intersection probing, and the three public operations.
//!
//! Grounded in control-flow and logging idiom on the teacher's
//! `geo::algorithm::sweep::proc::Sweep::handle_event` (the
//! pop-event/split-neighbours/re-probe dance, `trace!`/`debug!` placement,
//! `debug_assert!` messages); generalized from the teacher's line-only
//! two-neighbour probing into this engine's fuller vertical-aware five-phase
//! loop, which has no direct teacher analogue (straight-line `LineOrPoint`
//! ordering folds verticals into ordinary orientation comparisons, so the
//! teacher never needs a dedicated vertical phase).

use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::{SweepError, SweepResult};
use crate::event::Event;
use crate::event_queue::EventQueue;
use crate::status_line::StatusLine;
use crate::subcurve::{SubCurveArena, SubCurveId};
use crate::traits::{GeometricTraits, Intersection};

/// Tunable limits on the resources a single sweep may consume.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Upper bound on the number of distinct events the queue may hold at
    /// once, guarding against pathological or hostile input forcing
    /// unbounded work. `None` means unbounded.
    pub max_events: Option<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { max_events: None }
    }
}

/// The plane-sweep engine: generic over the curve family via
/// [`GeometricTraits`].
///
/// Construct with an owned oracle (`Sweeper::new(traits)`) or, to share one
/// oracle between several sweeps, instantiate `Tr` as `&'t SomeTraits`
/// (`Sweeper::new(&traits)`) — see [`GeometricTraits`]'s blanket impl for
/// shared references.
pub struct Sweeper<Tr: GeometricTraits> {
    traits: Tr,
    config: SweepConfig,
}

impl<Tr: GeometricTraits + Default> Default for Sweeper<Tr> {
    fn default() -> Self {
        Self::new(Tr::default())
    }
}

impl<Tr: GeometricTraits> Sweeper<Tr> {
    pub fn new(traits: Tr) -> Self {
        Self { traits, config: SweepConfig::default() }
    }

    pub fn with_config(traits: Tr, config: SweepConfig) -> Self {
        Self { traits, config }
    }

    pub fn traits(&self) -> &Tr {
        &self.traits
    }

    /// Emits one x-monotone sub-curve per maximal piece of the arrangement
    /// induced by `curves`. When `overlapping` is true, every curve
    /// participating in an overlap run emits its own copy of the shared
    /// piece; otherwise the run emits once.
    pub fn get_subcurves(
        &self,
        curves: impl IntoIterator<Item = Tr::Curve>,
        overlapping: bool,
        mut sink: impl FnMut(Tr::Curve),
    ) -> SweepResult<()> {
        let mut run = Run::new(&self.traits, &self.config);
        run.init(curves)?;
        run.drain(Mode::SubCurves { overlapping, sink: &mut sink }, false)
    }

    /// Emits every intersection point among `curves`. When
    /// `include_endpoints` is false, only points interior to at least one
    /// participating curve are emitted.
    pub fn get_intersection_points(
        &self,
        curves: impl IntoIterator<Item = Tr::Curve>,
        include_endpoints: bool,
        mut sink: impl FnMut(Tr::Point),
    ) -> SweepResult<()> {
        let mut run = Run::new(&self.traits, &self.config);
        run.init(curves)?;
        run.drain(Mode::Points { include_endpoints, sink: &mut sink }, false)
    }

    /// Whether any two curves in `curves` intersect (including sharing an
    /// endpoint). Stops at the first detected intersection without
    /// processing the remainder of the queue.
    pub fn do_curves_intersect(&self, curves: impl IntoIterator<Item = Tr::Curve>) -> SweepResult<bool> {
        let mut found = false;
        {
            let mut run = Run::new(&self.traits, &self.config);
            run.init(curves)?;
            let mut sink = |_: Tr::Point| found = true;
            run.drain(Mode::Points { include_endpoints: true, sink: &mut sink }, true)?;
        }
        Ok(found)
    }
}

enum Mode<'a, Tr: GeometricTraits> {
    SubCurves { overlapping: bool, sink: &'a mut dyn FnMut(Tr::Curve) },
    Points { include_endpoints: bool, sink: &'a mut dyn FnMut(Tr::Point) },
}

/// Per-invocation mutable state: a fresh `Run` is built for each public
/// operation so dedup/working-set state never leaks between independent
/// calls on the same `Sweeper` (the "static variables" redesign in
/// `DESIGN.md`).
struct Run<'t, Tr: GeometricTraits> {
    traits: &'t Tr,
    config: &'t SweepConfig,
    arena: SubCurveArena<Tr>,
    queue: EventQueue<Tr>,
    status: StatusLine<Tr>,
    /// Verticals anchored at or before the current x that have not yet
    /// reached their top end.
    verticals: Vec<SubCurveId>,
    last_emitted_point: Option<Tr::Point>,
    last_emitted_curve: Option<Tr::Curve>,
}

impl<'t, Tr: GeometricTraits> Run<'t, Tr> {
    fn new(traits: &'t Tr, config: &'t SweepConfig) -> Self {
        Self {
            traits,
            config,
            arena: SubCurveArena::new(),
            queue: EventQueue::new(),
            status: StatusLine::new(),
            verticals: Vec::new(),
            last_emitted_point: None,
            last_emitted_curve: None,
        }
    }

    fn init(&mut self, curves: impl IntoIterator<Item = Tr::Curve>) -> SweepResult<()> {
        let traits = self.traits;
        for curve in curves {
            for piece in traits.to_x_monotone(curve) {
                let left = if traits.is_left_to_right(&piece) {
                    traits.source(&piece)
                } else {
                    traits.target(&piece)
                };
                let right = if traits.is_left_to_right(&piece) {
                    traits.target(&piece)
                } else {
                    traits.source(&piece)
                };
                let id = self.arena.push(piece, traits);
                self.check_limit()?;
                self.queue.find_or_insert(right).add_curve_to_left(traits, &self.arena, id, &left);
                self.queue.find_or_insert(left).add_curve_to_right(traits, &self.arena, id);
            }
        }
        Ok(())
    }

    fn check_limit(&self) -> SweepResult<()> {
        if let Some(limit) = self.config.max_events {
            if self.queue.len() > limit {
                return Err(SweepError::TooManyEvents { limit });
            }
        }
        Ok(())
    }

    fn drain<'a>(&mut self, mut mode: Mode<'a, Tr>, stop_after_first: bool) -> SweepResult<()> {
        while let Some(mut event) = self.queue.pop_first() {
            self.check_limit()?;
            let p = event.point.clone();
            trace!(
                "popped event at {p:?}: {} left, {} right",
                event.num_left_curves(),
                event.num_right_curves()
            );

            self.retire_finished_verticals(&p);
            self.handle_vertical_bottom(&mut event, &p);
            self.handle_vertical_overlap(&mut event, &p);
            self.handle_left_curves(&event, &p, &mut mode);
            self.handle_vertical_top(&event, &p, &mut mode);
            self.handle_right_curves(&event, &p, &mut mode);

            if stop_after_first && self.last_emitted_point.is_some() {
                return Ok(());
            }
        }
        Ok(())
    }

    fn retire_finished_verticals(&mut self, p: &Tr::Point) {
        let traits = self.traits;
        let arena = &self.arena;
        self.verticals.retain(|&v| {
            let sc = arena.get(v).borrow();
            traits.curve_compare_y_at_x(p, &sc.remaining) == Ordering::Equal
        });
    }

    fn handle_vertical_bottom(&mut self, event: &mut Event<Tr>, p: &Tr::Point) {
        let traits = self.traits;
        let verticals_here: Vec<SubCurveId> = event
            .right_curves()
            .iter()
            .copied()
            .filter(|&id| {
                let sc = self.arena.get(id).borrow();
                traits.is_vertical(&sc.remaining) && traits.point_equal(&sc.left_end(traits), p)
            })
            .collect();
        if verticals_here.is_empty() {
            return;
        }
        let active_ids: Vec<SubCurveId> = (0..self.status.len()).map(|i| self.status.at(i)).collect();
        for &vid in &verticals_here {
            let (bottom, top, vertical_curve) = {
                let sc = self.arena.get(vid).borrow();
                (sc.left_end(traits), sc.right_end(traits), sc.remaining.clone())
            };
            debug_assert!(traits.point_equal(&bottom, p));
            for &other in &active_ids {
                let curve = self.arena.get(other).borrow().remaining.clone();
                if traits.is_vertical(&curve) || !traits.is_point_in_x_range(&curve, p) {
                    continue;
                }
                if traits.curve_compare_y_at_x(p, &curve) == Ordering::Equal {
                    // `other` passes exactly through the vertical's own
                    // bottom endpoint: a T-junction at `p`. `p` has already
                    // been popped off the queue as the event we're
                    // processing, so `other`'s split is registered on a
                    // freshly queued event rather than on `event` itself —
                    // `event`'s own left-curve phase has already run this
                    // round and would never see it.
                    debug!("vertical {vid} starts on curve {other} at {p:?}");
                    let ev = self.queue.find_or_insert(p.clone());
                    ev.add_curve_to_left(traits, &self.arena, other, p);
                    ev.add_curve_to_right(traits, &self.arena, other);
                    ev.mark_internal_intersection_point();
                    continue;
                }
                // Otherwise `other` may still cross the vertical's interior
                // somewhere between bottom and top; ask the oracle directly
                // rather than only checking the single point `p`.
                if let Intersection::Point(q) =
                    traits.nearest_intersection_to_right(&vertical_curve, &curve, &bottom)
                {
                    if bottom.cmp(&q).is_lt() && q.cmp(&top).is_lt() {
                        trace!("vertical {vid} crosses curve {other} at {q:?}");
                        let ev = self.queue.find_or_insert(q.clone());
                        ev.add_curve_to_left(traits, &self.arena, other, &bottom);
                        ev.add_curve_to_right(traits, &self.arena, other);
                        ev.mark_internal_intersection_point();
                        self.queue.find_or_insert(top.clone()).add_vertical_curve_x_point(q);
                    }
                }
            }
            event.add_vertical_curve(vid);
            self.queue.find_or_insert(top).add_vertical_curve(vid);
            self.verticals.push(vid);
        }
    }

    fn handle_vertical_overlap(&mut self, event: &mut Event<Tr>, p: &Tr::Point) {
        let traits = self.traits;
        let actives = self.verticals.clone();
        for vid in actives {
            if event.vertical_curves().contains(&vid) {
                continue;
            }
            let (bottom, top) = {
                let sc = self.arena.get(vid).borrow();
                (sc.left_end(traits), sc.right_end(traits))
            };
            let strictly_interior =
                bottom.cmp(p) == Ordering::Less && p.cmp(&top) == Ordering::Less;
            if strictly_interior {
                event.mark_internal_intersection_point();
                event.add_vertical_curve(vid);
                self.queue.find_or_insert(top).add_vertical_curve_x_point(p.clone());
            }
        }
    }

    fn handle_left_curves(&mut self, event: &Event<Tr>, p: &Tr::Point, mode: &mut Mode<Tr>) {
        let traits = self.traits;
        let interior = event.is_internal_intersection_point();
        for &id in event.left_curves() {
            if traits.is_vertical(&self.arena.get(id).borrow().original) {
                // Verticals are split and emitted solely by
                // `handle_vertical_top`, which owns every interior crossing
                // along the vertical's span; advancing them here as well
                // would emit the whole untouched curve as one piece.
                continue;
            }
            let piece = {
                let mut sc = self.arena.get(id).borrow_mut();
                sc.advance_to(traits, p)
            };
            if let Some(piece) = piece {
                self.emit(mode, id, piece, p, interior);
            }
            self.status.remove(traits, &self.arena, id, p);
        }
    }

    fn handle_vertical_top(&mut self, event: &Event<Tr>, p: &Tr::Point, mode: &mut Mode<Tr>) {
        let traits = self.traits;
        for &vid in event.vertical_curves() {
            let is_top = traits.point_equal(&self.arena.get(vid).borrow().right_end(traits), p);
            if !is_top {
                continue;
            }
            self.verticals.retain(|&v| v != vid);
            let mut ys: Vec<Tr::Point> = event.vertical_crossings().to_vec();
            ys.sort();
            ys.dedup_by(|a, b| traits.point_equal(a, b));
            for y in ys {
                let piece = self.arena.get(vid).borrow_mut().advance_to(traits, &y);
                if let Some(piece) = piece {
                    // Recorded crossings are always interior by construction.
                    self.emit(mode, vid, piece, &y, true);
                }
            }
            let piece = self.arena.get(vid).borrow_mut().advance_to(traits, p);
            if let Some(piece) = piece {
                self.emit(mode, vid, piece, p, event.is_internal_intersection_point());
            }
        }
    }

    fn handle_right_curves(&mut self, event: &Event<Tr>, p: &Tr::Point, mode: &mut Mode<Tr>) {
        let traits = self.traits;
        let interior = event.is_internal_intersection_point();
        for &id in event.right_curves() {
            // Every curve's own source endpoint is only ever "in a
            // right-list" here, never advanced-to by `handle_left_curves` —
            // so it has to be emitted explicitly for points mode to ever
            // report an original endpoint.
            self.note_point(mode, id, p, interior);
        }
        if event.right_curves().is_empty() {
            return;
        }
        let mut inserted = Vec::with_capacity(event.right_curves().len());
        for &id in event.right_curves() {
            if traits.is_vertical(&self.arena.get(id).borrow().remaining) {
                // Verticals never ride the status line; they are resolved
                // entirely through the vertical-bottom/-top phases.
                continue;
            }
            self.status.insert(traits, &self.arena, id, p);
            inserted.push(id);
        }
        if inserted.is_empty() {
            return;
        }

        // T-junction check: does a freshly inserted curve's left endpoint
        // (this event's point) lie in the interior of an already-present
        // neighbour? Positions are looked up fresh by id rather than reused
        // from the insert loop above, since each subsequent insertion can
        // shift the position of curves already placed.
        for &id in &inserted {
            let idx = self.status.position_of(id).expect("just inserted");
            if let Some(prev) = self.status.previous(idx) {
                self.check_curve_starts_at_curve(id, prev, p);
            }
            if let Some(next) = self.status.next(idx) {
                self.check_curve_starts_at_curve(id, next, p);
            }
        }

        // Consecutive siblings re-probe each other directly.
        for w in inserted.windows(2) {
            self.intersect(w[0], w[1], p);
        }

        // `inserted` is already in ascending-y order (it mirrors the event's
        // right-list, which `add_curve_to_right` keeps sorted) so the first
        // and last entries are the lowest/highest of the run.
        let lowest = *inserted.first().unwrap();
        let highest = *inserted.last().unwrap();
        let lowest_idx = self.status.position_of(lowest).expect("just inserted");
        let highest_idx = self.status.position_of(highest).expect("just inserted");
        if let Some(below_idx) = lowest_idx.checked_sub(1) {
            for cand in self.status.overlap_run_down_from(traits, &self.arena, below_idx, p) {
                self.intersect(lowest, cand, p);
            }
        }
        let above_idx = highest_idx + 1;
        if above_idx < self.status.len() {
            for cand in self.status.overlap_run_from(traits, &self.arena, above_idx, p) {
                self.intersect(highest, cand, p);
            }
        }
    }

    fn check_curve_starts_at_curve(&mut self, new_id: SubCurveId, host_id: SubCurveId, p: &Tr::Point) {
        let traits = self.traits;
        if new_id == host_id {
            return;
        }
        let host_curve = self.arena.get(host_id).borrow().remaining.clone();
        if !traits.is_point_in_x_range(&host_curve, p) {
            return;
        }
        if traits.curve_compare_y_at_x(p, &host_curve) != Ordering::Equal {
            return;
        }
        let host_left = self.arena.get(host_id).borrow().left_end(traits);
        if traits.point_equal(&host_left, p) {
            return;
        }
        debug!("T-junction: curve {new_id} starts on curve {host_id} at {p:?}");
        self.intersect(new_id, host_id, p);
    }

    /// Asks the oracle for the nearest intersection of `a`/`b` to the right
    /// of `from` and, if one exists, registers it as a future event.
    fn intersect(&mut self, a: SubCurveId, b: SubCurveId, from: &Tr::Point) {
        let traits = self.traits;
        if a == b {
            return;
        }
        let (ca, cb) = {
            let sa = self.arena.get(a).borrow();
            let sb = self.arena.get(b).borrow();
            (sa.remaining.clone(), sb.remaining.clone())
        };
        match traits.nearest_intersection_to_right(&ca, &cb, from) {
            Intersection::None => {}
            Intersection::Point(q) => {
                trace!("intersection of {a} and {b} at {q:?}");
                self.register_pair_at(a, b, from, &q);
            }
            Intersection::Overlap(_near, far) => {
                debug!("overlap run detected between {a} and {b}, ending at {far:?}");
                {
                    let mut sb = self.arena.get(b).borrow_mut();
                    if !sb.overlap_chain.contains(&a) {
                        sb.overlap_chain.push(a);
                    }
                }
                {
                    let mut sa = self.arena.get(a).borrow_mut();
                    if !sa.overlap_chain.contains(&b) {
                        sa.overlap_chain.push(b);
                    }
                }
                self.register_pair_at(a, b, from, &far);
            }
        }
    }

    fn register_pair_at(&mut self, a: SubCurveId, b: SubCurveId, from: &Tr::Point, q: &Tr::Point) {
        let traits = self.traits;
        let event = self.queue.find_or_insert(q.clone());
        event.add_curve_to_left(traits, &self.arena, a, from);
        event.add_curve_to_left(traits, &self.arena, b, from);
        event.add_curve_to_right(traits, &self.arena, a);
        event.add_curve_to_right(traits, &self.arena, b);
    }

    /// Reports `at` in points mode as the left endpoint of `id`'s original
    /// curve, subject to the same endpoint-filtering and dedup rules as
    /// `emit`. No-op in sub-curves mode.
    fn note_point(&mut self, mode: &mut Mode<Tr>, id: SubCurveId, at: &Tr::Point, interior: bool) {
        let traits = self.traits;
        if let Mode::Points { include_endpoints, sink } = mode {
            let is_endpoint = self.arena.get(id).borrow().is_left_end(traits, at);
            if !interior && !*include_endpoints && is_endpoint {
                return;
            }
            let suppress = self
                .last_emitted_point
                .as_ref()
                .map(|last| traits.point_equal(last, at))
                .unwrap_or(false);
            if suppress {
                return;
            }
            self.last_emitted_point = Some(at.clone());
            sink(at.clone());
        }
    }

    fn emit(
        &mut self,
        mode: &mut Mode<Tr>,
        id: SubCurveId,
        piece: Tr::Curve,
        at: &Tr::Point,
        interior: bool,
    ) {
        let traits = self.traits;
        match mode {
            Mode::SubCurves { overlapping, sink } => {
                let is_overlap_member = !self.arena.get(id).borrow().overlap_chain.is_empty();
                if is_overlap_member && !*overlapping {
                    let suppress = self
                        .last_emitted_curve
                        .as_ref()
                        .map(|last| traits.curve_equal(last, &piece))
                        .unwrap_or(false);
                    if suppress {
                        return;
                    }
                }
                self.last_emitted_curve = Some(piece.clone());
                sink(piece);
            }
            Mode::Points { include_endpoints, sink } => {
                let is_endpoint = {
                    let sc = self.arena.get(id).borrow();
                    sc.is_right_end(traits, at) || sc.is_left_end(traits, at)
                };
                if !interior && !*include_endpoints && is_endpoint {
                    return;
                }
                let suppress = self
                    .last_emitted_point
                    .as_ref()
                    .map(|last| traits.point_equal(last, at))
                    .unwrap_or(false);
                if suppress {
                    return;
                }
                self.last_emitted_point = Some(at.clone());
                sink(at.clone());
            }
        }
    }
}
