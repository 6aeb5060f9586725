//! Writing of traced streamlines as polyline geometry files.

use crate::{
    geometry::Dim3::{X, Y, Z},
    tracing::field_line::FieldLine3,
};
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Writes the given field line to the file at the given path as legacy
/// ASCII VTK polydata, with one two-point line cell per segment.
pub fn write_field_line_vtk(file_path: &Path, field_line: &FieldLine3) -> io::Result<()> {
    let file = fs::File::create(file_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(&mut writer, "# vtk DataFile Version 3.0")?;
    writeln!(&mut writer, "streamtrace streamline")?;
    writeln!(&mut writer, "ASCII")?;
    writeln!(&mut writer, "DATASET POLYDATA")?;

    writeln!(
        &mut writer,
        "POINTS {} float",
        field_line.number_of_points()
    )?;
    for position in field_line.positions() {
        writeln!(
            &mut writer,
            "{} {} {}",
            position[X], position[Y], position[Z]
        )?;
    }

    let n_segments = field_line.number_of_segments();
    writeln!(&mut writer, "LINES {} {}", n_segments, 3 * n_segments)?;
    for &(start, end) in field_line.segments() {
        writeln!(&mut writer, "2 {} {}", start, end)?;
    }
    writer.flush()
}
