//! Polyline representations of traced streamlines.

use super::ftr;
use crate::geometry::Point3;

/// A streamline polyline, holding the traced positions in insertion
/// order together with the index pairs of the line segments connecting
/// consecutive positions.
///
/// The polyline is built by appending only, so a trace terminated early
/// still yields a well-formed value.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldLine3 {
    positions: Vec<Point3<ftr>>,
    segments: Vec<(usize, usize)>,
}

impl FieldLine3 {
    /// Creates a new field line consisting of the given start position only.
    pub fn new(start_position: Point3<ftr>) -> Self {
        Self {
            positions: vec![start_position],
            segments: Vec::new(),
        }
    }

    /// Returns a reference to the positions making up the field line.
    pub fn positions(&self) -> &[Point3<ftr>] {
        &self.positions
    }

    /// Returns a reference to the index pairs of the field line segments.
    pub fn segments(&self) -> &[(usize, usize)] {
        &self.segments
    }

    /// Returns the number of positions making up the field line.
    pub fn number_of_points(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of segments connecting the field line positions.
    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    /// Appends the given position and the segment connecting it to the
    /// previously last position.
    pub fn push_position(&mut self, position: Point3<ftr>) {
        let last_idx = self.positions.len() - 1;
        self.positions.push(position);
        self.segments.push((last_idx, last_idx + 1));
    }

    /// Creates a new field line holding the positions of this field line
    /// followed by the positions of the given field line, with the segments
    /// of the given field line offset accordingly.
    ///
    /// The positions of the second field line are appended in their original
    /// order, without reversal or deduplication. When joining a forward and a
    /// backward branch traced from the same seed, the seed position therefore
    /// occurs twice in the result: once as the first position and once at the
    /// start of the appended branch.
    pub fn joined_with(&self, other: &FieldLine3) -> FieldLine3 {
        let offset = self.positions.len();
        let mut positions = Vec::with_capacity(offset + other.positions.len());
        positions.extend_from_slice(&self.positions);
        positions.extend_from_slice(&other.positions);

        let mut segments = Vec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend_from_slice(&self.segments);
        segments.extend(
            other
                .segments
                .iter()
                .map(|&(start, end)| (start + offset, end + offset)),
        );

        FieldLine3 {
            positions,
            segments,
        }
    }
}
