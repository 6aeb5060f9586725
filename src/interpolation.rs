//! Interpolation of vector fields.

pub mod trilinear;

use crate::{
    field::VectorField3,
    geometry::{Point3, Vec3},
    grid::GridPointQuery3,
    num::TrFloat,
};

/// Defines the properties of a 3D interpolator.
pub trait Interpolator3<F: TrFloat>: Clone + Sync + Send {
    /// Computes the interpolated vector of a vector field at the given coordinate.
    ///
    /// # Parameters
    ///
    /// - `field`: Vector field to interpolate.
    /// - `interp_point`: Coordinate where the interpolated vector should be computed.
    ///
    /// # Returns
    ///
    /// A `GridPointQuery3<Vec3<F>>` which is either:
    ///
    /// - `Inside`: Contains the interpolated field vector.
    /// - `Outside`: The interpolation point was outside the grid bounds.
    fn interp_vector_field(
        &self,
        field: &VectorField3<F>,
        interp_point: &Point3<F>,
    ) -> GridPointQuery3<Vec3<F>>;
}
