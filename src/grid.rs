//! Structured grids for sampled vector fields.

use crate::{
    geometry::{
        Dim3::{self, X, Y, Z},
        Idx3, In3D, Point3, Vec3,
    },
    num::TrFloat,
};
use std::io;

/// A query for a value at a grid point which is either inside
/// the grid bounds or outside them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridPointQuery3<T> {
    Inside(T),
    Outside,
}

impl<T> GridPointQuery3<T> {
    /// Whether the queried point was outside the grid bounds.
    pub fn is_outside(&self) -> bool {
        matches!(self, Self::Outside)
    }
}

/// A regular 3D grid with values defined at the grid nodes.
///
/// The grid is immutable once constructed and may be shared freely
/// between concurrent tracing runs.
#[derive(Clone, Debug)]
pub struct RegularGrid3<F> {
    shape: In3D<usize>,
    lower_bounds: Vec3<F>,
    upper_bounds: Vec3<F>,
    cell_extents: Vec3<F>,
}

impl<F: TrFloat> RegularGrid3<F> {
    /// Creates a new regular grid given the origin (the position of the
    /// first grid node), the uniform node spacing along each dimension
    /// and the number of nodes along each dimension.
    ///
    /// # Returns
    ///
    /// A `Result` which is either:
    ///
    /// - `Ok`: Contains the new grid.
    /// - `Err`: The grid has fewer than two nodes or a non-positive spacing
    /// along some dimension.
    pub fn from_origin_and_spacing(
        origin: Point3<F>,
        cell_extents: Vec3<F>,
        shape: In3D<usize>,
    ) -> io::Result<Self> {
        for &dim in &Dim3::slice() {
            if shape[dim] < 2 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "Grid must have at least two nodes in the {}-dimension (has {})",
                        dim, shape[dim]
                    ),
                ));
            }
            if !(cell_extents[dim] > F::zero()) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "Grid spacing in the {}-dimension must be positive (is {})",
                        dim, cell_extents[dim]
                    ),
                ));
            }
        }

        let lower_bounds = origin.to_vec3();
        let extents = Vec3::with_each_component(|dim| {
            cell_extents[dim] * F::from_usize(shape[dim] - 1).unwrap()
        });
        let upper_bounds = &lower_bounds + &extents;

        Ok(Self {
            shape,
            lower_bounds,
            upper_bounds,
            cell_extents,
        })
    }

    /// Returns the 3D shape of the grid.
    pub fn shape(&self) -> &In3D<usize> {
        &self.shape
    }

    /// Returns a reference to the lower bounds of the grid.
    pub fn lower_bounds(&self) -> &Vec3<F> {
        &self.lower_bounds
    }

    /// Returns a reference to the upper bounds of the grid.
    pub fn upper_bounds(&self) -> &Vec3<F> {
        &self.upper_bounds
    }

    /// Returns a reference to the extent of a grid cell in each dimension.
    pub fn cell_extents(&self) -> &Vec3<F> {
        &self.cell_extents
    }

    /// Returns the position of the grid node with the given indices.
    pub fn node_position(&self, indices: &Idx3<usize>) -> Point3<F> {
        Point3::with_each_component(|dim| {
            self.lower_bounds[dim] + self.cell_extents[dim] * F::from_usize(indices[dim]).unwrap()
        })
    }

    /// Whether the given point lies within the bounds of the grid.
    ///
    /// Points exactly on the boundary faces count as inside.
    pub fn contains(&self, point: &Point3<F>) -> bool {
        Dim3::slice().iter().all(|&dim| {
            point[dim] >= self.lower_bounds[dim] && point[dim] <= self.upper_bounds[dim]
        })
    }

    /// Finds the 3D index of the grid cell containing the given point.
    ///
    /// For points on the upper boundary face of a dimension, the last
    /// interior cell of that dimension is returned, so that the found
    /// cell always has a full set of eight corner nodes.
    ///
    /// # Returns
    ///
    /// A `GridPointQuery3<Idx3<usize>>` which is either:
    ///
    /// - `Inside`: Contains the indices of the lower corner node of the cell.
    /// - `Outside`: The point was outside the grid bounds.
    pub fn find_grid_cell(&self, point: &Point3<F>) -> GridPointQuery3<Idx3<usize>> {
        if !self.contains(point) {
            return GridPointQuery3::Outside;
        }
        let indices = Idx3::new(
            self.cell_idx(X, point),
            self.cell_idx(Y, point),
            self.cell_idx(Z, point),
        );
        GridPointQuery3::Inside(indices)
    }

    fn cell_idx(&self, dim: Dim3, point: &Point3<F>) -> usize {
        let frac = (point[dim] - self.lower_bounds[dim]) / self.cell_extents[dim];
        let idx = F::to_usize(&frac.floor()).unwrap();
        idx.min(self.shape[dim] - 2)
    }
}
