//! Small filesystem helpers used by the I/O layer.

pub mod file_list;

pub use file_list::create_file_list;
