//! Vector fields sampled on structured grids.

use crate::{
    geometry::{
        Dim3::{self, X, Y, Z},
        Idx3, In3D, Vec3,
    },
    grid::RegularGrid3,
    num::TrFloat,
};
use ndarray::prelude::*;
use std::sync::Arc;

/// A 3D vector field with one value vector stored at every grid node.
///
/// The grid is shared through an atomic reference counted pointer, so
/// multiple fields and tracing runs can refer to the same grid without
/// copying it.
#[derive(Clone, Debug)]
pub struct VectorField3<F> {
    name: String,
    grid: Arc<RegularGrid3<F>>,
    values: In3D<Array3<F>>,
}

impl<F: TrFloat> VectorField3<F> {
    /// Creates a new vector field given a name, a grid, and the array of
    /// node values for each vector component.
    ///
    /// # Panics
    ///
    /// If the shape of a value array does not match the shape of the grid.
    pub fn new(name: String, grid: Arc<RegularGrid3<F>>, values: In3D<Array3<F>>) -> Self {
        let shape = grid.shape();
        for &dim in &Dim3::slice() {
            assert_eq!(
                values[dim].shape(),
                [shape[X], shape[Y], shape[Z]],
                "Values for the {}-component do not have the same shape as the grid",
                dim
            );
        }
        Self { name, grid, values }
    }

    /// Returns a reference to the name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the grid.
    pub fn grid(&self) -> &RegularGrid3<F> {
        self.grid.as_ref()
    }

    /// Returns the field vector at the node with the given 3D index.
    pub fn vector(&self, indices: &Idx3<usize>) -> Vec3<F> {
        Vec3::with_each_component(|dim| {
            self.values[dim][[indices[X], indices[Y], indices[Z]]]
        })
    }

    /// Returns the 3D shape of the grid.
    pub fn shape(&self) -> &In3D<usize> {
        self.grid.shape()
    }
}
