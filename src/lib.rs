//! A degeneracy-robust Bentley-Ottmann plane-sweep engine for arrangements of
//! x-monotone curves.
//!
//! Given a finite set of planar x-monotone curves (segments, or any curve
//! family implementing [`GeometricTraits`]), this crate computes either:
//!
//! - the maximal non-self-intersecting sub-curves induced by the arrangement
//!   ([`Sweeper::get_subcurves`]),
//! - the set of pairwise intersection points
//!   ([`Sweeper::get_intersection_points`]), or
//! - a boolean "do any two curves intersect" answer
//!   ([`Sweeper::do_curves_intersect`]).
//!
//! All geometry is delegated to a caller-supplied [`GeometricTraits`] oracle;
//! a straight-segment implementation over [`geo_types::Line`] ships as
//! [`segment_traits::StraightSegmentTraits`] so the engine is usable without
//! writing one. Curve families other than straight segments (circular arcs,
//! Bézier pieces, ...) implement the trait themselves and get the same sweep
//! loop for free.
//!
//! See `SPEC_FULL.md` and `DESIGN.md` in the repository root for the full
//! design rationale.
//!
//! ```
//! use geo_sweep::segment_traits::{line, StraightSegmentTraits};
//! use geo_sweep::Sweeper;
//!
//! let sweeper = Sweeper::new(StraightSegmentTraits::<f64>::new());
//! let curves = vec![line((0., 0.), (10., 10.)), line((0., 10.), (10., 0.))];
//! let mut points = Vec::new();
//! sweeper
//!     .get_intersection_points(curves, false, |p| points.push(p.x_y()))
//!     .unwrap();
//! assert_eq!(points, vec![(5., 5.)]);
//! ```

mod error;
mod event;
mod event_queue;
mod kernel;
mod line_or_point;
mod point;
pub mod segment_traits;
mod status_line;
mod subcurve;
mod sweeper;
pub mod traits;

pub use error::{SweepError, SweepResult};
pub use kernel::{HasKernel, Kernel, Orientation, RobustKernel, SimpleKernel, SweepScalar};
pub use point::SweepPoint;
pub use sweeper::{SweepConfig, Sweeper};
pub use traits::{GeometricTraits, Intersection};
