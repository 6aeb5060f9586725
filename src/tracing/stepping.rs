//! Stepping along streamlines of a vector field.

pub mod rk4;

use super::ftr;
use crate::{
    field::VectorField3, geometry::Point3, interpolation::Interpolator3, num::TrFloat,
};

/// A stepper result which is either OK (with an arbitrary value) or stopped (with a cause).
#[derive(Clone, Copy, Debug)]
pub enum StepperResult<T> {
    Ok(T),
    Stopped(StoppingCause),
}

/// Reason for terminating stepping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StoppingCause {
    /// A position sampled during the step left the grid bounds.
    OutOfBounds(Point3<ftr>),
}

/// Defines the properties of a stepping scheme.
pub trait Stepper3: Clone {
    /// Places the stepper at the given position without stepping.
    fn place(&mut self, position: &Point3<ftr>);

    /// Advances the stepper position by one step through the given field.
    ///
    /// # Parameters
    ///
    /// - `field`: Vector field to step in.
    /// - `interpolator`: Interpolator to use.
    ///
    /// # Returns
    ///
    /// A `StepperResult<Point3<ftr>>` which is either:
    ///
    /// - `Ok`: Contains the new stepper position.
    /// - `Stopped`: Contains a `StoppingCause` indicating why the step failed.
    /// The stepper position is left unchanged.
    ///
    /// # Type parameters
    ///
    /// - `F`: Floating point type of the field data.
    /// - `I`: Type of interpolator.
    fn step<F, I>(&mut self, field: &VectorField3<F>, interpolator: &I) -> StepperResult<Point3<ftr>>
    where
        F: TrFloat,
        I: Interpolator3<F>;
}
