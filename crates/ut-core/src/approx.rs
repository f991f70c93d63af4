//! Floating-point comparison with a delta, for scalars and slices.

use std::fmt::Debug;

use crate::criteria::{Criteria, Mismatch};
use crate::tolerance::Tolerance;

/// Values comparable within a [`Tolerance`].
pub trait Approx: Debug {
    /// Type the caller expresses the delta in.
    type Delta: Copy + Into<f64>;

    /// Reports the first difference larger than `tolerance`.
    fn approx(&self, other: &Self, tolerance: Tolerance) -> Result<(), Mismatch>;
}

macro_rules! approx_float {
    ($($float:ty),+) => {
        $(
            impl Approx for $float {
                type Delta = $float;

                fn approx(&self, other: &Self, tolerance: Tolerance) -> Result<(), Mismatch> {
                    if tolerance.admits(f64::from(*self), f64::from(*other)) {
                        Ok(())
                    } else {
                        Err(Mismatch::Values {
                            expected: format!("{self:?}"),
                            actual: format!("{other:?}"),
                        })
                    }
                }
            }

            impl<'a> Approx for &'a [$float] {
                type Delta = $float;

                fn approx(&self, other: &Self, tolerance: Tolerance) -> Result<(), Mismatch> {
                    Criteria::inexact(tolerance).equals(*self, *other)
                }
            }

            impl<'a> Approx for &'a Vec<$float> {
                type Delta = $float;

                fn approx(&self, other: &Self, tolerance: Tolerance) -> Result<(), Mismatch> {
                    Criteria::inexact(tolerance).equals(self.as_slice(), other.as_slice())
                }
            }

            impl<'a, const N: usize> Approx for &'a [$float; N] {
                type Delta = $float;

                fn approx(&self, other: &Self, tolerance: Tolerance) -> Result<(), Mismatch> {
                    Criteria::inexact(tolerance).equals(&self[..], &other[..])
                }
            }
        )+
    };
}

approx_float!(f32, f64);
