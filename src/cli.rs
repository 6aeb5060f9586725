//! Command line interface.

use crate::{
    geometry::Point3,
    interpolation::trilinear::TrilinearInterpolator3,
    io::{field, polyline},
    tracing::{self, ftr},
};
use clap::{Arg, ArgMatches, Command};
use std::{
    io::{self, Write},
    path::Path,
    process,
};

/// Step length used for both the forward and backward branch.
pub const STEP_LENGTH: ftr = 0.05;

/// Maximum number of steps per branch.
pub const MAX_STEPS: usize = 1000;

/// Builds the command line argument parser.
pub fn build_cli() -> Command<'static> {
    Command::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            Arg::new("input-file")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .default_value("tornado3d_vector.field")
                .help("Path to the vector field file to trace"),
        )
        .arg(
            Arg::new("output-file")
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .default_value("streamline.vtk")
                .help("Path where the traced streamline will be written"),
        )
}

/// Runs the command line program, exiting the process on failure.
pub fn run() {
    let arguments = build_cli().get_matches();
    if let Err(err) = run_tracing(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_tracing(arguments: &ArgMatches) -> io::Result<()> {
    let input_path = Path::new(
        arguments
            .value_of("input-file")
            .expect("No value for argument with default"),
    );
    let output_path = Path::new(
        arguments
            .value_of("output-file")
            .expect("No value for argument with default"),
    );

    let field = field::read_vector_field(input_path)?;
    println!(
        "Read vector field {} with shape {}",
        field.name(),
        field.shape()
    );

    let seed_position = read_seed_position()?;

    let (streamline, forward_termination, backward_termination) = tracing::trace_streamline(
        &field,
        &TrilinearInterpolator3,
        &seed_position,
        STEP_LENGTH,
        MAX_STEPS,
    );
    println!("Forward branch {}", forward_termination);
    println!("Backward branch {}", backward_termination);

    polyline::write_field_line_vtk(output_path, &streamline)?;
    println!(
        "Wrote streamline with {} points to {}",
        streamline.number_of_points(),
        output_path.display()
    );
    Ok(())
}

fn read_seed_position() -> io::Result<Point3<ftr>> {
    print!("Enter seed location: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    parse_seed_position(&line)
}

fn parse_seed_position(text: &str) -> io::Result<Point3<ftr>> {
    let coordinates = text
        .split_whitespace()
        .map(|word| {
            word.parse::<ftr>().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Could not parse seed coordinate `{}` as a number", word),
                )
            })
        })
        .collect::<io::Result<Vec<ftr>>>()?;

    match coordinates[..] {
        [x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Seed location must consist of three numbers (got {})",
                coordinates.len()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_positions_are_parsed_from_whitespace_separated_numbers() {
        assert_eq!(
            parse_seed_position("0.5 1.5  -2.0\n").unwrap(),
            Point3::new(0.5, 1.5, -2.0)
        );
    }

    #[test]
    fn malformed_seed_input_is_rejected() {
        assert_eq!(
            parse_seed_position("0.5 1.5").unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
        assert_eq!(
            parse_seed_position("0.5 1.5 2.0 3.0").unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
        assert_eq!(
            parse_seed_position("0.5 one 2.0").unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
    }

    #[test]
    fn cli_arguments_are_valid() {
        build_cli().debug_assert();
    }
}
