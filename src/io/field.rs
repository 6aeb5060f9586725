//! Reading and writing of sampled vector fields.
//!
//! A field file consists of a short ASCII header followed by the raw
//! binary node values:
//!
//! ```text
//! streamtrace field 1
//! shape <nx> <ny> <nz>
//! origin <x> <y> <z>
//! spacing <dx> <dy> <dz>
//! endianness <little|big>
//! data
//! <f32 component triplets, one per node, x varying fastest>
//! ```

use super::Endianness;
use crate::{
    field::VectorField3,
    geometry::{
        Dim3::{X, Y, Z},
        In3D, Point3, Vec3,
    },
    grid::RegularGrid3,
};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use ndarray::prelude::*;
use std::{
    fs,
    io::{self, BufRead, BufWriter, Write},
    path::Path,
    sync::Arc,
};

const FORMAT_TAG: &str = "streamtrace field 1";

/// Reads a vector field from the file at the given path.
///
/// # Returns
///
/// A `Result` which is either:
///
/// - `Ok`: Contains a `VectorField3<f32>` holding the grid and node values.
/// - `Err`: An error was encountered while opening the file or parsing
/// its header, or the described grid is degenerate.
pub fn read_vector_field(file_path: &Path) -> io::Result<VectorField3<f32>> {
    let file = fs::File::open(file_path)?;
    let mut reader = io::BufReader::new(file);

    let tag = read_header_line(&mut reader, "format tag")?;
    if tag != FORMAT_TAG {
        return Err(invalid_data(format!(
            "Field file does not start with `{}`",
            FORMAT_TAG
        )));
    }

    let shape_line = read_header_line(&mut reader, "shape")?;
    let (size_x, size_y, size_z) = parse_triple::<usize>(&shape_line, "shape")?;
    let origin_line = read_header_line(&mut reader, "origin")?;
    let (origin_x, origin_y, origin_z) = parse_triple::<f32>(&origin_line, "origin")?;
    let spacing_line = read_header_line(&mut reader, "spacing")?;
    let (spacing_x, spacing_y, spacing_z) = parse_triple::<f32>(&spacing_line, "spacing")?;
    let endianness = parse_endianness(&read_header_line(&mut reader, "endianness")?)?;

    let data_line = read_header_line(&mut reader, "data")?;
    if data_line != "data" {
        return Err(invalid_data(format!(
            "Expected `data` line in field file header, found `{}`",
            data_line
        )));
    }

    let grid = Arc::new(RegularGrid3::from_origin_and_spacing(
        Point3::new(origin_x, origin_y, origin_z),
        Vec3::new(spacing_x, spacing_y, spacing_z),
        In3D::new(size_x, size_y, size_z),
    )?);

    let n_values = 3 * size_x * size_y * size_z;
    let mut buffer = vec![0.0_f32; n_values];
    match endianness {
        Endianness::Little => reader.read_f32_into::<LittleEndian>(&mut buffer)?,
        Endianness::Big => reader.read_f32_into::<BigEndian>(&mut buffer)?,
    }

    let mut values =
        In3D::with_each_component(|_| Array3::<f32>::zeros((size_x, size_y, size_z)));
    let mut value_idx = 0;
    for k in 0..size_z {
        for j in 0..size_y {
            for i in 0..size_x {
                values[X][[i, j, k]] = buffer[value_idx];
                values[Y][[i, j, k]] = buffer[value_idx + 1];
                values[Z][[i, j, k]] = buffer[value_idx + 2];
                value_idx += 3;
            }
        }
    }

    let name = file_path
        .file_stem()
        .map_or_else(|| "field".to_string(), |stem| stem.to_string_lossy().into_owned());

    Ok(VectorField3::new(name, grid, values))
}

/// Writes the given vector field to the file at the given path, using
/// the given byte order for the binary node values.
pub fn write_vector_field(
    file_path: &Path,
    field: &VectorField3<f32>,
    endianness: Endianness,
) -> io::Result<()> {
    let file = fs::File::create(file_path)?;
    let mut writer = BufWriter::new(file);

    let grid = field.grid();
    let shape = grid.shape();
    let origin = grid.lower_bounds();
    let spacing = grid.cell_extents();

    writeln!(&mut writer, "{}", FORMAT_TAG)?;
    writeln!(&mut writer, "shape {} {} {}", shape[X], shape[Y], shape[Z])?;
    writeln!(
        &mut writer,
        "origin {} {} {}",
        origin[X], origin[Y], origin[Z]
    )?;
    writeln!(
        &mut writer,
        "spacing {} {} {}",
        spacing[X], spacing[Y], spacing[Z]
    )?;
    writeln!(
        &mut writer,
        "endianness {}",
        match endianness {
            Endianness::Little => "little",
            Endianness::Big => "big",
        }
    )?;
    writeln!(&mut writer, "data")?;

    for k in 0..shape[Z] {
        for j in 0..shape[Y] {
            for i in 0..shape[X] {
                let vector = field.vector(&crate::geometry::Idx3::new(i, j, k));
                for value in [vector[X], vector[Y], vector[Z]] {
                    match endianness {
                        Endianness::Little => writer.write_f32::<LittleEndian>(value)?,
                        Endianness::Big => writer.write_f32::<BigEndian>(value)?,
                    }
                }
            }
        }
    }
    writer.flush()
}

fn read_header_line(reader: &mut impl BufRead, description: &str) -> io::Result<String> {
    let mut line = String::new();
    let n_read = reader.read_line(&mut line)?;
    if n_read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("Field file ended before the {} line", description),
        ));
    }
    Ok(line.trim().to_string())
}

fn parse_triple<T: std::str::FromStr>(line: &str, key: &str) -> io::Result<(T, T, T)> {
    let mut words = line.split_whitespace();
    if words.next() != Some(key) {
        return Err(invalid_data(format!(
            "Expected `{}` line in field file header, found `{}`",
            key, line
        )));
    }
    let mut parse_next = || {
        words
            .next()
            .and_then(|word| word.parse().ok())
            .ok_or_else(|| invalid_data(format!("Could not parse values of `{}` line: `{}`", key, line)))
    };
    let first = parse_next()?;
    let second = parse_next()?;
    let third = parse_next()?;
    Ok((first, second, third))
}

fn parse_endianness(line: &str) -> io::Result<Endianness> {
    match line.strip_prefix("endianness ").map(str::trim) {
        Some("little") => Ok(Endianness::Little),
        Some("big") => Ok(Endianness::Big),
        _ => Err(invalid_data(format!(
            "Could not parse endianness line: `{}`",
            line
        ))),
    }
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Idx3;
    use std::io::Write as _;

    fn example_field() -> VectorField3<f32> {
        let grid = Arc::new(
            RegularGrid3::from_origin_and_spacing(
                Point3::new(-1.0, 0.0, 0.5),
                Vec3::new(0.5, 1.0, 0.25),
                In3D::new(3, 2, 4),
            )
            .unwrap(),
        );
        let values = In3D::new(
            Array3::from_shape_fn((3, 2, 4), |(i, j, k)| (i + 10 * j + 100 * k) as f32),
            Array3::from_shape_fn((3, 2, 4), |(i, _, _)| -(i as f32)),
            Array3::from_shape_fn((3, 2, 4), |(_, _, k)| 0.5 * k as f32),
        );
        VectorField3::new("example".to_string(), grid, values)
    }

    #[test]
    fn field_files_round_trip() {
        for endianness in [Endianness::Little, Endianness::Big] {
            let field = example_field();
            let dir = tempfile::tempdir().unwrap();
            let file_path = dir.path().join("example.field");

            write_vector_field(&file_path, &field, endianness).unwrap();
            let read_field = read_vector_field(&file_path).unwrap();

            assert_eq!(read_field.shape(), field.shape());
            assert_eq!(read_field.grid().lower_bounds(), field.grid().lower_bounds());
            assert_eq!(read_field.grid().cell_extents(), field.grid().cell_extents());
            for k in 0..4 {
                for j in 0..2 {
                    for i in 0..3 {
                        let indices = Idx3::new(i, j, k);
                        assert_eq!(read_field.vector(&indices), field.vector(&indices));
                    }
                }
            }
        }
    }

    #[test]
    fn files_with_wrong_format_tag_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("wrong.field");
        let mut file = fs::File::create(&file_path).unwrap();
        writeln!(&mut file, "not a field file").unwrap();

        assert!(read_vector_field(&file_path).is_err());
    }

    #[test]
    fn files_describing_degenerate_grids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("degenerate.field");
        let mut file = fs::File::create(&file_path).unwrap();
        write!(
            &mut file,
            "streamtrace field 1\nshape 1 2 2\norigin 0 0 0\nspacing 1 1 1\nendianness little\ndata\n"
        )
        .unwrap();

        let result = read_vector_field(&file_path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn truncated_headers_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("truncated.field");
        let mut file = fs::File::create(&file_path).unwrap();
        write!(&mut file, "streamtrace field 1\nshape 2 2 2\n").unwrap();

        let result = read_vector_field(&file_path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
