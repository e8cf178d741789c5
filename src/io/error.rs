//! # Error reporting for reading of problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::io;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into numbers.
    ///
    /// # Note
    ///
    /// If the problem is inconsistent, that will not be represented with this error. This variant
    /// should only be created for syntactically incorrect files.
    Parse(ParseError),
    /// There is a logical inconsistency in the problem described by a file.
    ///
    /// For example, the right-hand side might have fewer values than there are constraints.
    LinearProgram(InconsistencyError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::LinearProgram(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::LinearProgram(error) => Some(error),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        ImportError::IO(error)
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<InconsistencyError> for ImportError {
    fn from(error: InconsistencyError) -> Self {
        ImportError::LinearProgram(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may point at the line at which the error was caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    file_location: Option<(usize, String)>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), file_location: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A line number (starting at 1) and the contents of that line.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            file_location: Some((line_number, line.to_string())),
        }
    }

    /// The line number at which the error was caused, if known.
    pub fn line_number(&self) -> Option<usize> {
        self.file_location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        if let Some((line_number, line)) = &self.file_location {
            write!(f, "\n\tCaused at line\t{}:\t{}", line_number, line)?;
        }

        Ok(())
    }
}

impl Error for ParseError {}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (usize, &'a str);

/// An `InconsistencyError` is created when a problem is inconsistently represented, for example
/// when dimensions don't match.
///
/// This error is not returned when a problem can't be solved by a method. It is meant only for
/// descriptions of problems, and should not be used after the importing process.
#[derive(Debug, Eq, PartialEq)]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> InconsistencyError {
        InconsistencyError { description: description.into() }
    }
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "ProgramError: {}", self.description)
    }
}

impl Error for InconsistencyError {}

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::io::error::{ImportError, InconsistencyError, ParseError};

    #[test]
    fn messages() {
        let error = ParseError::with_file_location("Could not parse number", (3, "1 2 x"));
        assert_eq!(error.line_number(), Some(3));
        assert_eq!(
            error.to_string(),
            "ParseError: Could not parse number\n\tCaused at line\t3:\t1 2 x",
        );

        let error = ImportError::from(InconsistencyError::new("2 values for 3 rows"));
        assert_eq!(error.to_string(), "ProgramError: 2 values for 3 rows");
        assert!(error.source().is_some());
    }
}
