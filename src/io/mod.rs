//! # Reading of problem instances
//!
//! A problem file is a record of lines with whitespace-separated numbers. The same record can be
//! interpreted as a linear program or as a transportation problem, see `record`.
use std::fs;
use std::path::Path;

use crate::io::error::ImportError;
use crate::io::record::Record;

pub mod error;
pub mod record;

/// Import a problem record from a file.
///
/// # Errors
///
/// When a file cannot be found or read, or contains something that isn't a number, an error type
/// is returned.
pub fn import(file_path: &Path) -> Result<Record, ImportError> {
    let contents = fs::read_to_string(file_path)?;
    let record = Record::parse(&contents)?;
    log::debug!("Read {} lines from {:?}", record.nr_lines(), file_path);

    Ok(record)
}
