//! File-driving harness: whole-file I/O primitives and the batch driver that
//! feeds file contents through a codec.

pub mod batch;
pub mod file_io;

pub use batch::{output_name, process_file, run, Direction};
