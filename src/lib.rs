//! The `streamtrace` crate provides tools for tracing streamlines
//! through vector fields sampled on structured grids.
pub mod cli;
pub mod field;
pub mod geometry;
pub mod grid;
pub mod interpolation;
pub mod io;
pub mod num;
pub mod tracing;
