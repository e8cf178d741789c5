//! # Problem records
//!
//! A record consists of non-blank lines of whitespace-separated numbers. As a linear program it
//! reads as:
//!
//! * objective coefficients `c`
//! * one line per row of the constraint matrix `A`
//! * the interior-point starting point `x0`
//! * the right-hand side `b`
//! * the tolerance `eps`, of which the number of decimal places is also the output precision
//!
//! As a transportation problem, the first line is the supply, the next line for each source the
//! cost matrix, and the line after that the demand. Any further lines are ignored.
use std::str::FromStr;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::linear_program::transportation::{Amount, TransportationProblem};
use crate::io::error::{ImportError, InconsistencyError, ParseError};

/// Minimum number of lines in a linear program record: `c`, one row, `x0`, `b` and `eps`.
const MIN_LINEAR_PROGRAM_LINES: usize = 5;

/// Non-blank lines of a problem file, not yet interpreted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// (line number starting at 1, whitespace-separated values)
    lines: Vec<(usize, Vec<String>)>,
}

/// A linear program together with the parameters that were stored with it.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgramRecord {
    /// The problem itself.
    pub program: LinearProgram,
    /// Strictly positive starting point for the interior-point method.
    pub initial_point: Vec<f64>,
    /// Convergence tolerance.
    pub epsilon: f64,
    /// Number of decimal places with which the tolerance was written.
    pub precision: usize,
}

impl Record {
    /// Split a file into lines of values.
    ///
    /// # Errors
    ///
    /// If the file contains no values at all.
    pub fn parse(contents: &str) -> Result<Self, ParseError> {
        let lines = contents.lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.split_whitespace().map(str::to_string).collect::<Vec<_>>()))
            .filter(|(_, values)| !values.is_empty())
            .collect::<Vec<_>>();

        if lines.is_empty() {
            return Err(ParseError::new("The file contains no values"));
        }

        Ok(Self { lines })
    }

    /// Number of non-blank lines.
    pub fn nr_lines(&self) -> usize {
        self.lines.len()
    }

    /// Read this record as a linear program.
    ///
    /// # Errors
    ///
    /// A `ParseError` if values are not numbers, lines are missing or the matrix rows have
    /// different lengths. An `InconsistencyError` if dimensions of the different parts don't agree.
    pub fn linear_program(&self) -> Result<LinearProgramRecord, ImportError> {
        let nr_lines = self.lines.len();
        if nr_lines < MIN_LINEAR_PROGRAM_LINES {
            return Err(ParseError::new(format!(
                "A linear program needs at least {} lines, found {}",
                MIN_LINEAR_PROGRAM_LINES, nr_lines,
            )).into());
        }

        let cost = self.numbers::<f64>(0)?;
        let rows = (1..nr_lines - 3)
            .map(|index| self.numbers::<f64>(index))
            .collect::<Result<Vec<_>, _>>()?;
        self.check_row_lengths(1, &rows)?;
        let initial_point = self.numbers::<f64>(nr_lines - 3)?;
        let b = self.numbers::<f64>(nr_lines - 2)?;
        let (epsilon, precision) = self.tolerance(nr_lines - 1)?;

        let program = LinearProgram::new(cost, DenseMatrix::from_data(rows), b)?;
        if initial_point.len() != program.nr_columns() {
            return Err(InconsistencyError::new(format!(
                "Starting point has {} values for {} columns",
                initial_point.len(), program.nr_columns(),
            )).into());
        }

        Ok(LinearProgramRecord { program, initial_point, epsilon, precision })
    }

    /// Read this record as a transportation problem.
    ///
    /// # Errors
    ///
    /// A `ParseError` if values are not numbers of type `T`, or lines are missing. An
    /// `InconsistencyError` if the cost matrix doesn't match the supply and demand.
    pub fn transportation_problem<T: Amount + FromStr>(
        &self,
    ) -> Result<TransportationProblem<T>, ImportError> {
        let supply = self.numbers::<T>(0)?;
        let nr_sources = supply.len();
        if self.lines.len() < nr_sources + 2 {
            return Err(ParseError::new(format!(
                "{} sources need {} cost lines and a demand line, found {} lines in total",
                nr_sources, nr_sources, self.lines.len(),
            )).into());
        }

        let cost = (1..=nr_sources)
            .map(|index| self.numbers::<T>(index))
            .collect::<Result<Vec<_>, _>>()?;
        self.check_row_lengths(1, &cost)?;
        let demand = self.numbers::<T>(nr_sources + 1)?;

        Ok(TransportationProblem::new(supply, demand, DenseMatrix::from_data(cost))?)
    }

    /// Parse all values on a line.
    fn numbers<T: FromStr>(&self, index: usize) -> Result<Vec<T>, ParseError> {
        let (line_number, values) = &self.lines[index];
        values.iter()
            .map(|value| value.parse::<T>().map_err(|_| ParseError::with_file_location(
                format!("Could not parse \"{}\" as a number", value),
                (*line_number, &values.join(" ")),
            )))
            .collect()
    }

    /// Parse the single value on a line as a tolerance.
    ///
    /// # Return value
    ///
    /// The tolerance and the number of decimal places with which it was written.
    fn tolerance(&self, index: usize) -> Result<(f64, usize), ParseError> {
        let (line_number, values) = &self.lines[index];
        match values.as_slice() {
            [value] => {
                let epsilon = value.parse::<f64>().map_err(|_| ParseError::with_file_location(
                    format!("Could not parse tolerance \"{}\"", value),
                    (*line_number, value),
                ))?;
                Ok((epsilon, decimal_places(value)))
            },
            _ => Err(ParseError::with_file_location(
                "Expected a single tolerance value",
                (*line_number, &values.join(" ")),
            )),
        }
    }

    /// All rows of a matrix starting at line `first_index` should be equally long.
    fn check_row_lengths<T>(&self, first_index: usize, rows: &[Vec<T>]) -> Result<(), ParseError> {
        let expected = rows.first().map_or(0, Vec::len);
        match rows.iter().position(|row| row.len() != expected) {
            Some(offset) => {
                let (line_number, values) = &self.lines[first_index + offset];
                Err(ParseError::with_file_location(
                    format!("Expected {} values in matrix row, found {}", expected, values.len()),
                    (*line_number, &values.join(" ")),
                ))
            },
            None => Ok(()),
        }
    }
}

/// Number of decimal places needed to write a number, e.g. `3` for `0.001` and `4` for `1e-4`.
pub fn decimal_places(literal: &str) -> usize {
    let literal = literal.trim().to_ascii_lowercase();
    let (mantissa, exponent) = match literal.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().unwrap_or(0)),
        None => (literal.as_str(), 0),
    };
    let fraction_digits = mantissa.split_once('.')
        .map_or(0, |(_, fraction)| fraction.len()) as i64;

    fraction_digits.saturating_sub(exponent).max(0) as usize
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::io::error::ImportError;
    use crate::io::record::{decimal_places, Record};

    const LINEAR_PROGRAM: &str = "\
2 3 0 0
1 1 1 0
1 3 0 1

1 1 2 2
4 6
0.001
";

    const TRANSPORTATION_PROBLEM: &str = "\
20 30 25
19 30 50 10
70 30 40 60
40 8 70 20
15 35 5 20
";

    #[test]
    fn precision() {
        assert_eq!(decimal_places("0.001"), 3);
        assert_eq!(decimal_places("0.5"), 1);
        assert_eq!(decimal_places("1e-4"), 4);
        assert_eq!(decimal_places("2.5E-2"), 3);
        assert_eq!(decimal_places("1"), 0);
        assert_eq!(decimal_places("1e3"), 0);

        assert_eq!(decimal_places("1e9223372036854775807"), 0);
        assert_eq!(decimal_places("0.5e-9223372036854775808"), i64::MAX as usize);
    }

    #[test]
    fn linear_program() {
        let record = Record::parse(LINEAR_PROGRAM).unwrap();
        assert_eq!(record.nr_lines(), 6);

        let lp = record.linear_program().unwrap();
        assert_eq!(lp.program.cost(), &[2f64, 3f64, 0f64, 0f64]);
        assert_eq!(lp.program.constraints(), &DenseMatrix::from_data(vec![
            vec![1f64, 1f64, 1f64, 0f64],
            vec![1f64, 3f64, 0f64, 1f64],
        ]));
        assert_eq!(lp.program.b(), &[4f64, 6f64]);
        assert_eq!(lp.initial_point, vec![1f64, 1f64, 2f64, 2f64]);
        assert_abs_diff_eq!(lp.epsilon, 0.001);
        assert_eq!(lp.precision, 3);
    }

    #[test]
    fn transportation_problem() {
        let record = Record::parse(TRANSPORTATION_PROBLEM).unwrap();
        let problem = record.transportation_problem::<i64>().unwrap();
        assert_eq!(problem.supply(), &[20, 30, 25]);
        assert_eq!(problem.demand(), &[15, 35, 5, 20]);
        assert_eq!(problem.cost().row(2), &[40, 8, 70, 20]);

        // The same record is also valid with floats
        assert!(record.transportation_problem::<f64>().is_ok());
    }

    #[test]
    fn malformed() {
        assert!(Record::parse("\n  \n").is_err());

        let record = Record::parse("1 2\n1 x\n1 1\n2\n0.1\n").unwrap();
        match record.linear_program() {
            Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(2)),
            _ => panic!("expected a parse error"),
        }

        let record = Record::parse("1 2\n1 1\n1 1 1\n1 1\n2\n0.1\n").unwrap();
        match record.linear_program() {
            Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(3)),
            _ => panic!("expected a parse error"),
        }

        let record = Record::parse("1 2\n1 1\n1 1\n2\n0.1 0.2\n").unwrap();
        assert!(matches!(record.linear_program(), Err(ImportError::Parse(_))));

        // Right-hand side too long
        let record = Record::parse("1 2\n1 1\n1 1\n2 3\n0.1\n").unwrap();
        assert!(matches!(record.linear_program(), Err(ImportError::LinearProgram(_))));

        let record = Record::parse("20 30\n1 2\n3 4\n").unwrap();
        assert!(matches!(record.transportation_problem::<i64>(), Err(ImportError::Parse(_))));

        let record = Record::parse("20 30\n1 2\n3 4 5\n25 25\n").unwrap();
        assert!(matches!(record.transportation_problem::<i64>(), Err(ImportError::Parse(_))));
    }
}
