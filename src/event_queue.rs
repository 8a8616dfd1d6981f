//! Ordered-map front of the sweep, keyed by event point.
//!
//! `BTreeMap` is appropriate here — unlike `StatusLine` (see that module's
//! docs) — because `Tr::Point: Ord` is a stateless, per-point property: two
//! points compare the same way regardless of which curves happen to pass
//! through them, so there is no runtime oracle value for `BTreeMap`'s
//! ambient `Ord` to fail to carry.

use std::collections::BTreeMap;

use crate::event::Event;
use crate::traits::GeometricTraits;

/// A mapping from point to `Event`, ordered by the sweep comparator
/// (`Tr::Point::cmp`). Insertion at an existing point amends that point's
/// `Event` rather than replacing it — the event queue never holds two
/// events for the same point.
pub struct EventQueue<Tr: GeometricTraits> {
    map: BTreeMap<Tr::Point, Event<Tr>>,
}

impl<Tr: GeometricTraits> Default for EventQueue<Tr> {
    fn default() -> Self {
        Self { map: BTreeMap::new() }
    }
}

impl<Tr: GeometricTraits> EventQueue<Tr> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the `Event` at `p`, creating an empty one first if absent.
    pub fn find_or_insert(&mut self, p: Tr::Point) -> &mut Event<Tr> {
        self.map.entry(p.clone()).or_insert_with(|| Event::new(p))
    }

    /// Removes and returns the leftmost (smallest-point) event, if any.
    pub fn pop_first(&mut self) -> Option<Event<Tr>> {
        let key = self.map.keys().next()?.clone();
        self.map.remove(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment_traits::StraightSegmentTraits;

    #[test]
    fn pops_in_sweep_order() {
        let mut q: EventQueue<StraightSegmentTraits<f64>> = EventQueue::new();
        for (x, y) in [(2., 0.), (0., 1.), (0., 0.), (1., 5.)] {
            q.find_or_insert(geo_types::Coord { x, y }.into());
        }
        let mut popped = Vec::new();
        while let Some(e) = q.pop_first() {
            popped.push(e.point.x_y());
        }
        assert_eq!(popped, vec![(0., 0.), (0., 1.), (1., 5.), (2., 0.)]);
    }

    #[test]
    fn inserting_same_point_twice_amends_not_duplicates() {
        let mut q: EventQueue<StraightSegmentTraits<f64>> = EventQueue::new();
        let p: crate::point::SweepPoint<f64> = geo_types::Coord { x: 1., y: 1. }.into();
        q.find_or_insert(p);
        q.find_or_insert(p);
        assert_eq!(q.len(), 1);
    }
}
