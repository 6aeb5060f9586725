//! Tracing streamlines of a vector field.

pub mod field_line;
pub mod stepping;

use self::{
    field_line::FieldLine3,
    stepping::{rk4::RK4Stepper3, Stepper3, StepperResult, StoppingCause},
};
use crate::{field::VectorField3, geometry::Point3, interpolation::Interpolator3, num::TrFloat};
use std::fmt;

/// Floating-point precision to use for tracing.
#[allow(non_camel_case_types)]
pub type ftr = f64;

/// Why a trace ended, together with the information needed to report it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TracerTermination {
    /// A position sampled during the given step left the grid bounds.
    /// The positions accumulated before that step form the result.
    OutOfBounds { step: usize, position: Point3<ftr> },
    /// The configured maximum number of steps was reached.
    MaxStepsReached,
}

impl fmt::Display for TracerTermination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { step, position } => write!(
                f,
                "left the grid bounds at step {} (sampled position {})",
                step, position
            ),
            Self::MaxStepsReached => write!(f, "reached the maximum number of steps"),
        }
    }
}

/// Traces a streamline branch through a 3D vector field.
///
/// The trace starts at the given position and appends one position per
/// successful step until the stepper leaves the grid bounds or the
/// maximum number of steps is reached. Leaving the grid bounds is the
/// expected way for a trace to end and still yields a valid field line.
///
/// # Parameters
///
/// - `field`: Vector field to trace.
/// - `interpolator`: Interpolator to use.
/// - `stepper`: Stepper to use (will be consumed).
/// - `start_position`: Position where the tracing should start.
/// - `max_steps`: Maximum number of steps to take.
///
/// # Returns
///
/// The traced field line together with the `TracerTermination`
/// describing why the trace ended.
///
/// # Type parameters
///
/// - `F`: Floating point type of the field data.
/// - `I`: Type of interpolator.
/// - `St`: Type of stepper.
pub fn trace_3d_field_line<F, I, St>(
    field: &VectorField3<F>,
    interpolator: &I,
    mut stepper: St,
    start_position: &Point3<ftr>,
    max_steps: usize,
) -> (FieldLine3, TracerTermination)
where
    F: TrFloat,
    I: Interpolator3<F>,
    St: Stepper3,
{
    let mut field_line = FieldLine3::new(*start_position);
    stepper.place(start_position);

    for step in 0..max_steps {
        match stepper.step(field, interpolator) {
            StepperResult::Ok(position) => field_line.push_position(position),
            StepperResult::Stopped(StoppingCause::OutOfBounds(position)) => {
                return (
                    field_line,
                    TracerTermination::OutOfBounds { step, position },
                );
            }
        }
    }
    (field_line, TracerTermination::MaxStepsReached)
}

/// Traces a full streamline through a 3D vector field by tracing one
/// branch along the field direction and one against it, both starting
/// from the given seed position, and joining the two branches.
///
/// The two branches are independent and are traced in parallel. The
/// backward branch is appended after the forward branch without
/// reversal, so the seed position occurs twice in the joined line.
///
/// # Parameters
///
/// - `field`: Vector field to trace.
/// - `interpolator`: Interpolator to use.
/// - `seed_position`: Position where both branches start.
/// - `step_length`: Unsigned step length (negated for the backward branch).
/// - `max_steps`: Maximum number of steps per branch.
///
/// # Returns
///
/// The joined field line together with the terminations of the forward
/// and backward branch.
pub fn trace_streamline<F, I>(
    field: &VectorField3<F>,
    interpolator: &I,
    seed_position: &Point3<ftr>,
    step_length: ftr,
    max_steps: usize,
) -> (FieldLine3, TracerTermination, TracerTermination)
where
    F: TrFloat,
    I: Interpolator3<F>,
{
    let ((forward_line, forward_termination), (backward_line, backward_termination)) = rayon::join(
        || {
            trace_3d_field_line(
                field,
                interpolator,
                RK4Stepper3::new(step_length),
                seed_position,
                max_steps,
            )
        },
        || {
            trace_3d_field_line(
                field,
                interpolator,
                RK4Stepper3::new(-step_length),
                seed_position,
                max_steps,
            )
        },
    );
    (
        forward_line.joined_with(&backward_line),
        forward_termination,
        backward_termination,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{
            Dim3::{self, X, Y, Z},
            In3D, Vec3,
        },
        grid::RegularGrid3,
        interpolation::trilinear::TrilinearInterpolator3,
    };
    use approx::assert_abs_diff_eq;
    use ndarray::prelude::*;
    use std::sync::Arc;

    fn uniform_field(vector: Vec3<f64>, size: usize) -> VectorField3<f64> {
        let grid = Arc::new(
            RegularGrid3::from_origin_and_spacing(
                Point3::origin(),
                Vec3::equal_components(1.0),
                In3D::same(size),
            )
            .unwrap(),
        );
        let shape = (size, size, size);
        let values = In3D::with_each_component(|dim| Array3::from_elem(shape, vector[dim]));
        VectorField3::new("uniform".to_string(), grid, values)
    }

    fn field_from_fn<V>(size: usize, vector_at: V) -> VectorField3<f64>
    where
        V: Fn(&Point3<f64>) -> Vec3<f64>,
    {
        let grid = Arc::new(
            RegularGrid3::from_origin_and_spacing(
                Point3::origin(),
                Vec3::equal_components(1.0),
                In3D::same(size),
            )
            .unwrap(),
        );
        let vector_at = &vector_at;
        let values = In3D::with_each_component(|dim| {
            let grid = Arc::clone(&grid);
            Array3::from_shape_fn((size, size, size), move |(i, j, k)| {
                let point = grid.node_position(&crate::geometry::Idx3::new(i, j, k));
                vector_at(&point)[dim]
            })
        });
        VectorField3::new("analytic".to_string(), grid, values)
    }

    #[test]
    fn tracing_a_uniform_field_follows_a_straight_line() {
        let vector = Vec3::new(1.0, 2.0, -0.5);
        let field = uniform_field(vector, 11);
        let seed = Point3::new(5.0, 5.0, 5.0);
        let step_length = 0.1;
        let n_steps = 7;

        let (line, termination) = trace_3d_field_line(
            &field,
            &TrilinearInterpolator3,
            RK4Stepper3::new(step_length),
            &seed,
            n_steps,
        );

        assert_eq!(termination, TracerTermination::MaxStepsReached);
        assert_eq!(line.number_of_points(), n_steps + 1);
        for (idx, position) in line.positions().iter().enumerate() {
            let expected = &seed + &vector * (step_length * idx as f64);
            for &dim in &Dim3::slice() {
                assert_abs_diff_eq!(position[dim], expected[dim], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn opposite_step_signs_trace_mirror_symmetric_branches() {
        // Field components depending only on squared offsets from the seed,
        // so the field takes the same value at mirrored point pairs.
        let seed = Point3::new(5.0, 5.0, 5.0);
        let field = field_from_fn(11, |point| {
            let dy = point[Y] - 5.0;
            let dx = point[X] - 5.0;
            Vec3::new(1.0 + 0.1 * dy * dy, 0.2 * dx * dx, 0.5)
        });
        let n_steps = 10;

        let (forward, _) = trace_3d_field_line(
            &field,
            &TrilinearInterpolator3,
            RK4Stepper3::new(0.05),
            &seed,
            n_steps,
        );
        let (backward, _) = trace_3d_field_line(
            &field,
            &TrilinearInterpolator3,
            RK4Stepper3::new(-0.05),
            &seed,
            n_steps,
        );

        assert_eq!(forward.number_of_points(), backward.number_of_points());
        for (forward_position, backward_position) in
            forward.positions().iter().zip(backward.positions())
        {
            for &dim in &Dim3::slice() {
                let forward_offset = forward_position[dim] - seed[dim];
                let backward_offset = backward_position[dim] - seed[dim];
                assert_abs_diff_eq!(forward_offset, -backward_offset, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn seeding_outside_the_grid_yields_a_single_point_line() {
        let field = uniform_field(Vec3::new(1.0, 0.0, 0.0), 3);
        let seed = Point3::new(-1.0, 0.5, 0.5);

        let (line, termination) = trace_3d_field_line(
            &field,
            &TrilinearInterpolator3,
            RK4Stepper3::new(0.1),
            &seed,
            100,
        );

        assert_eq!(line.number_of_points(), 1);
        assert_eq!(line.number_of_segments(), 0);
        assert_eq!(
            termination,
            TracerTermination::OutOfBounds {
                step: 0,
                position: seed
            }
        );
    }

    #[test]
    fn tracing_stops_before_leaving_the_grid() {
        let field = uniform_field(Vec3::new(1.0, 0.0, 0.0), 3);
        let seed = Point3::new(0.5, 1.0, 1.0);

        let (line, termination) = trace_3d_field_line(
            &field,
            &TrilinearInterpolator3,
            RK4Stepper3::new(0.5),
            &seed,
            100,
        );

        assert!(matches!(
            termination,
            TracerTermination::OutOfBounds { .. }
        ));
        assert!(line.number_of_points() < 101);
        for position in line.positions() {
            assert!(field.grid().contains(&position.cast()));
        }
    }

    #[test]
    fn single_step_in_unit_cube_matches_expected_positions() {
        let field = uniform_field(Vec3::new(1.0, 0.0, 0.0), 2);
        let seed = Point3::new(0.5, 0.5, 0.5);

        let (line, _) = trace_3d_field_line(
            &field,
            &TrilinearInterpolator3,
            RK4Stepper3::new(0.1),
            &seed,
            1,
        );

        assert_eq!(line.number_of_points(), 2);
        assert_eq!(line.segments(), &[(0, 1)]);
        assert_eq!(line.positions()[0], seed);
        let end = line.positions()[1];
        assert_abs_diff_eq!(end[X], 0.6, epsilon = 1e-15);
        assert_abs_diff_eq!(end[Y], 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(end[Z], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn tracing_is_deterministic() {
        let field = field_from_fn(9, |point| {
            Vec3::new(1.0 - 0.1 * point[Y], 0.3 + 0.05 * point[Z], 0.2 * point[X])
        });
        let seed = Point3::new(4.0, 4.0, 4.0);

        let first = trace_3d_field_line(
            &field,
            &TrilinearInterpolator3,
            RK4Stepper3::new(0.05),
            &seed,
            50,
        );
        let second = trace_3d_field_line(
            &field,
            &TrilinearInterpolator3,
            RK4Stepper3::new(0.05),
            &seed,
            50,
        );

        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn streamline_joins_forward_and_backward_branches() {
        let field = uniform_field(Vec3::new(1.0, 0.0, 0.0), 11);
        let seed = Point3::new(5.0, 5.0, 5.0);

        let (streamline, forward_termination, backward_termination) =
            trace_streamline(&field, &TrilinearInterpolator3, &seed, 0.1, 20);

        assert_eq!(forward_termination, TracerTermination::MaxStepsReached);
        assert_eq!(backward_termination, TracerTermination::MaxStepsReached);
        assert_eq!(streamline.number_of_points(), 42);
        assert_eq!(streamline.number_of_segments(), 40);
        // The seed occurs twice, once per branch.
        assert_eq!(streamline.positions()[0], seed);
        assert_eq!(streamline.positions()[21], seed);
        // Backward segments are offset past the forward positions.
        assert_eq!(streamline.segments()[20], (21, 22));
    }
}
