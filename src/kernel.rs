//! Exact-enough orientation predicates for the shipped straight-line oracle.
//!
//! Curve families other than straight segments supply their own notion of
//! "compare y at x" through [`crate::traits::GeometricTraits`] and never
//! touch this module; it exists purely to back [`crate::segment_traits`].

use geo_types::{Coord, CoordNum};
use std::fmt::Debug;

/// The result of comparing the turn `p -> q -> r` makes.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    pub fn as_ordering(&self) -> std::cmp::Ordering {
        use std::cmp::Ordering::*;
        match self {
            Orientation::CounterClockwise => Less,
            Orientation::Clockwise => Greater,
            Orientation::Collinear => Equal,
        }
    }
}

/// Scalar bound satisfied by any type the shipped oracle can sweep over.
pub trait SweepScalar: CoordNum + PartialOrd + Debug {}
impl<T: CoordNum + PartialOrd + Debug> SweepScalar for T {}

/// Provides the orientation predicate for a scalar type.
///
/// Mirrors the split between exact-integer kernels and adaptive-precision
/// floating point kernels: swap in a different `Kernel` for a scalar type
/// without touching the rest of the straight-line oracle.
pub trait Kernel {
    type Scalar: SweepScalar;

    fn orient2d(
        p: Coord<Self::Scalar>,
        q: Coord<Self::Scalar>,
        r: Coord<Self::Scalar>,
    ) -> Orientation;
}

/// Marker trait binding a scalar type to its default [`Kernel`].
pub trait HasKernel: SweepScalar {
    type Ker: Kernel<Scalar = Self>;
}

macro_rules! has_kernel {
    ($t:ident, $k:ident) => {
        impl HasKernel for $t {
            type Ker = $k;
        }
    };
}

/// Adaptive-precision orientation predicate for floating point coordinates,
/// backed by the `robust` crate's `orient2d`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RobustKernel;

impl Kernel for RobustKernel {
    type Scalar = f64;

    fn orient2d(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> Orientation {
        let det = robust::orient2d(
            robust::Coord { x: p.x, y: p.y },
            robust::Coord { x: q.x, y: q.y },
            robust::Coord { x: r.x, y: r.y },
        );
        if det > 0. {
            Orientation::CounterClockwise
        } else if det < 0. {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

has_kernel!(f64, RobustKernel);

/// Plain product-of-differences predicate, exact for integer or fixed-point
/// scalar types that never lose precision in the subtraction/product chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleKernel<T>(std::marker::PhantomData<T>);

macro_rules! simple_kernel_impl {
    ($t:ident) => {
        impl Kernel for SimpleKernel<$t> {
            type Scalar = $t;

            fn orient2d(p: Coord<$t>, q: Coord<$t>, r: Coord<$t>) -> Orientation {
                let res = (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x);
                use num_traits::Zero;
                if res > Zero::zero() {
                    Orientation::CounterClockwise
                } else if res < Zero::zero() {
                    Orientation::Clockwise
                } else {
                    Orientation::Collinear
                }
            }
        }

        impl HasKernel for $t {
            type Ker = SimpleKernel<$t>;
        }
    };
}

simple_kernel_impl!(i64);
simple_kernel_impl!(i32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robust_orientation_matches_sign() {
        let p = Coord { x: 0., y: 0. };
        let q = Coord { x: 1., y: 0. };
        let r = Coord { x: 1., y: 1. };
        assert_eq!(RobustKernel::orient2d(p, q, r), Orientation::CounterClockwise);
        assert_eq!(RobustKernel::orient2d(p, r, q), Orientation::Clockwise);
        assert_eq!(
            RobustKernel::orient2d(p, q, Coord { x: 2., y: 0. }),
            Orientation::Collinear
        );
    }
}
