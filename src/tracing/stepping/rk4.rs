//! Stepping using the classic fourth-order Runge-Kutta scheme with a
//! fixed step length.

use super::{Stepper3, StepperResult, StoppingCause};
use crate::{
    field::VectorField3,
    geometry::{Point3, Vec3},
    grid::GridPointQuery3,
    interpolation::Interpolator3,
    num::TrFloat,
    tracing::ftr,
};

/// A stepper advancing the position with the classic fourth-order
/// Runge-Kutta method, combining four field samples per step.
///
/// The step length is signed; a negative step length traces against
/// the field direction with the same scheme.
#[derive(Clone, Debug)]
pub struct RK4Stepper3 {
    position: Point3<ftr>,
    step_length: ftr,
}

impl RK4Stepper3 {
    /// Creates a new RK4 stepper with the given signed step length.
    pub fn new(step_length: ftr) -> Self {
        Self {
            position: Point3::origin(),
            step_length,
        }
    }

    fn sample_step_vector<F, I>(
        field: &VectorField3<F>,
        interpolator: &I,
        position: &Point3<ftr>,
        step_length: ftr,
    ) -> StepperResult<Vec3<ftr>>
    where
        F: TrFloat,
        I: Interpolator3<F>,
    {
        match interpolator.interp_vector_field(field, &position.cast()) {
            GridPointQuery3::Inside(vector) => {
                StepperResult::Ok(vector.cast::<ftr>() * step_length)
            }
            GridPointQuery3::Outside => {
                StepperResult::Stopped(StoppingCause::OutOfBounds(*position))
            }
        }
    }
}

impl Stepper3 for RK4Stepper3 {
    fn place(&mut self, position: &Point3<ftr>) {
        self.position = *position;
    }

    fn step<F, I>(&mut self, field: &VectorField3<F>, interpolator: &I) -> StepperResult<Point3<ftr>>
    where
        F: TrFloat,
        I: Interpolator3<F>,
    {
        let h = self.step_length;

        let k1 = match Self::sample_step_vector(field, interpolator, &self.position, h) {
            StepperResult::Ok(vector) => vector,
            StepperResult::Stopped(cause) => return StepperResult::Stopped(cause),
        };
        let k2 = match Self::sample_step_vector(
            field,
            interpolator,
            &(&self.position + &k1 * 0.5),
            h,
        ) {
            StepperResult::Ok(vector) => vector,
            StepperResult::Stopped(cause) => return StepperResult::Stopped(cause),
        };
        let k3 = match Self::sample_step_vector(
            field,
            interpolator,
            &(&self.position + &k2 * 0.5),
            h,
        ) {
            StepperResult::Ok(vector) => vector,
            StepperResult::Stopped(cause) => return StepperResult::Stopped(cause),
        };
        let k4 = match Self::sample_step_vector(field, interpolator, &(&self.position + &k3), h) {
            StepperResult::Ok(vector) => vector,
            StepperResult::Stopped(cause) => return StepperResult::Stopped(cause),
        };

        let displacement = (k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0;
        self.position = &self.position + &displacement;
        StepperResult::Ok(self.position)
    }
}
