//! Interpolation by trilinear weighting of cell corner values.

use super::Interpolator3;
use crate::{
    field::VectorField3,
    geometry::{
        Dim3::{X, Y, Z},
        Idx3, In3D, Point3, Vec3,
    },
    grid::GridPointQuery3,
    num::TrFloat,
};

/// A 3D interpolator estimating the value at an interior point as the
/// product-of-linear-weights combination of the eight corner node values
/// of the enclosing grid cell.
///
/// Points exactly on a boundary face are handled by the same formula,
/// with a weight of zero or one along the relevant dimension, so node
/// values are reproduced exactly.
#[derive(Clone, Copy, Debug)]
pub struct TrilinearInterpolator3;

impl TrilinearInterpolator3 {
    fn interp<F: TrFloat>(
        field: &VectorField3<F>,
        interp_point: &Point3<F>,
        cell_idx: &Idx3<usize>,
    ) -> Vec3<F> {
        let grid = field.grid();
        let lower_corner = grid.node_position(cell_idx);
        let cell_extents = grid.cell_extents();

        // Fractional offset of the point within the cell, in [0, 1] along each dimension.
        let offsets = In3D::with_each_component(|dim| {
            (interp_point[dim] - lower_corner[dim]) / cell_extents[dim]
        });

        let one = F::one();
        let weights_x = [one - offsets[X], offsets[X]];
        let weights_y = [one - offsets[Y], offsets[Y]];
        let weights_z = [one - offsets[Z], offsets[Z]];

        let mut interp_vector = Vec3::zero();
        for (k, &weight_z) in weights_z.iter().enumerate() {
            for (j, &weight_y) in weights_y.iter().enumerate() {
                for (i, &weight_x) in weights_x.iter().enumerate() {
                    let corner_idx =
                        Idx3::new(cell_idx[X] + i, cell_idx[Y] + j, cell_idx[Z] + k);
                    let weight = weight_x * weight_y * weight_z;
                    interp_vector = interp_vector + field.vector(&corner_idx) * weight;
                }
            }
        }
        interp_vector
    }
}

impl<F: TrFloat> Interpolator3<F> for TrilinearInterpolator3 {
    fn interp_vector_field(
        &self,
        field: &VectorField3<F>,
        interp_point: &Point3<F>,
    ) -> GridPointQuery3<Vec3<F>> {
        match field.grid().find_grid_cell(interp_point) {
            GridPointQuery3::Inside(cell_idx) => {
                GridPointQuery3::Inside(Self::interp(field, interp_point, &cell_idx))
            }
            GridPointQuery3::Outside => GridPointQuery3::Outside,
        }
    }
}
