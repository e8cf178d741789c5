//! # Representation of solutions
//!
//! Once a linear program is solved, the values of the decision variables and of the objective
//! function are reported. Slack variables are not part of a solution.
use std::fmt::{Display, Formatter};
use std::fmt;

/// Decision variable values together with the objective function value they attain.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Values of the decision variables, in column order.
    x: Vec<f64>,
    /// Value of the objective function.
    objective_value: f64,
}

impl Solution {
    /// Create a new `Solution` instance.
    pub fn new(x: Vec<f64>, objective_value: f64) -> Self {
        Self { x, objective_value }
    }

    /// Values of the decision variables.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Round all values to a number of decimal places.
    ///
    /// # Arguments
    ///
    /// * `precision`: Number of decimal places to keep.
    ///
    /// # Return value
    ///
    /// A new solution, without negative zeros.
    #[must_use]
    pub fn rounded(&self, precision: usize) -> Self {
        Self {
            x: self.x.iter().map(|&value| round(value, precision)).collect(),
            objective_value: round(self.objective_value, precision),
        }
    }
}

/// Round half away from zero to `precision` decimal places.
pub fn round(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(i32::MAX as usize) as i32);
    let rounded = (value * factor).round() / factor;

    // Avoid printing "-0"
    if rounded == 0f64 { 0f64 } else { rounded }
}

/// Writes `x = [..]` and the objective value on two lines, using the precision of the format
/// string if there is one.
impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let format_value = |value: f64| match f.precision() {
            Some(precision) => format!("{:.*}", precision, value),
            None => value.to_string(),
        };

        let values = self.x.iter().map(|&value| format_value(value)).collect::<Vec<_>>();
        let objective_value = format_value(self.objective_value);
        writeln!(f, "x = [{}]", values.join(", "))?;
        write!(f, "Objective value = {}", objective_value)
    }
}
