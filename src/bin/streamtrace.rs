//! Command line runner for the `streamtrace` library.

fn main() {
    streamtrace::cli::run();
}
