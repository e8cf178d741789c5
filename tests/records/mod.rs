//! # Problem records
//!
//! Small linear programs and transportation problems, one record per file.
use std::path::{Path, PathBuf};

use lpkit::io::import;
use lpkit::io::record::Record;

/// # Solving the records
mod test;

/// Relative path of the folder where the record files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the record file, based on the input number.
///
/// # Arguments
///
/// * `number`: Input number, as in `input{number}.txt`.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(number: u32) -> PathBuf {
    problem_file_directory().join(format!("input{}", number)).with_extension("txt")
}

fn read(number: u32) -> Record {
    import(&get_test_file_path(number)).unwrap()
}
