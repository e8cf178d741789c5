//! # Transportation problems
//!
//! Sources with a supply, destinations with a demand and a cost for shipping a unit from each
//! source to each destination. Amounts are generic, such that integer instances are handled without
//! rounding errors.
use std::fmt::{Debug, Display, Formatter};
use std::fmt;

use num_traits::Signed;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::io::error::InconsistencyError;

/// Number type for supplies, demands and costs.
///
/// Signed, because reduced costs are negative.
pub trait Amount: Copy + PartialOrd + Signed + Debug + Display {}
impl<T: Copy + PartialOrd + Signed + Debug + Display> Amount for T {}

/// Sum a slice of amounts.
pub(crate) fn total<T: Amount>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |sum, &value| sum + value)
}

/// A transportation problem of which the dimensions are known to be consistent.
///
/// Whether the values are nonnegative and whether the problem is balanced is not checked at
/// creation; the heuristics report those as failures.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportationProblem<T> {
    supply: Vec<T>,
    demand: Vec<T>,
    /// One row per source, one column per destination.
    cost: DenseMatrix<T>,
}

impl<T: Amount> TransportationProblem<T> {
    /// Create a new transportation problem.
    ///
    /// # Arguments
    ///
    /// * `supply`: Supply of each source.
    /// * `demand`: Demand of each destination.
    /// * `cost`: Unit shipping costs with a row for each source and a column for each destination.
    ///
    /// # Errors
    ///
    /// An `InconsistencyError` if the shape of the cost matrix doesn't match the supply and demand.
    pub fn new(
        supply: Vec<T>,
        demand: Vec<T>,
        cost: DenseMatrix<T>,
    ) -> Result<Self, InconsistencyError> {
        if cost.nr_rows() != supply.len() || cost.nr_columns() != demand.len() {
            return Err(InconsistencyError::new(format!(
                "Cost matrix of size {}x{} doesn't match {} sources and {} destinations",
                cost.nr_rows(), cost.nr_columns(), supply.len(), demand.len(),
            )));
        }

        Ok(Self { supply, demand, cost })
    }

    /// Supply of each source.
    pub fn supply(&self) -> &[T] {
        &self.supply
    }
    /// Demand of each destination.
    pub fn demand(&self) -> &[T] {
        &self.demand
    }
    /// Unit shipping costs.
    pub fn cost(&self) -> &DenseMatrix<T> {
        &self.cost
    }
    /// Number of sources, the rows of the problem.
    pub fn nr_sources(&self) -> usize {
        self.supply.len()
    }
    /// Number of destinations, the columns of the problem.
    pub fn nr_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Whether any supply, demand or cost is negative.
    pub fn has_negative_values(&self) -> bool {
        self.supply.iter()
            .chain(self.demand.iter())
            .chain(self.cost.rows().flatten())
            .any(|value| *value < T::zero())
    }

    /// Whether the total supply equals the total demand exactly.
    pub fn is_balanced(&self) -> bool {
        total(&self.supply) == total(&self.demand)
    }
}

/// Amounts shipped from each source to each destination.
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation<T> {
    shipped: DenseMatrix<T>,
}

impl<T: Amount> Allocation<T> {
    /// An allocation where nothing is shipped yet.
    pub fn empty(nr_sources: usize, nr_destinations: usize) -> Self {
        Self { shipped: DenseMatrix::zeros(nr_sources, nr_destinations) }
    }

    /// Create an allocation from known amounts, mostly useful for comparisons.
    pub fn from_data(data: Vec<Vec<T>>) -> Self {
        Self { shipped: DenseMatrix::from_data(data) }
    }

    /// Ship `amount` from `source` to `destination`, on top of what is shipped there already.
    pub fn ship(&mut self, source: usize, destination: usize, amount: T) {
        let current = self.shipped.get_value(source, destination);
        self.shipped.set_value(source, destination, current + amount);
    }

    /// Amount shipped from `source` to `destination`.
    pub fn get(&self, source: usize, destination: usize) -> T {
        self.shipped.get_value(source, destination)
    }

    /// The shipped amounts, one row per source.
    pub fn shipped(&self) -> &DenseMatrix<T> {
        &self.shipped
    }

    /// Total amount leaving each source.
    pub fn row_sums(&self) -> Vec<T> {
        self.shipped.rows().map(total).collect()
    }

    /// Total amount arriving at each destination.
    pub fn column_sums(&self) -> Vec<T> {
        (0..self.shipped.nr_columns())
            .map(|j| total(&self.shipped.column(j)))
            .collect()
    }

    /// Total amount shipped.
    pub fn total(&self) -> T {
        total(&self.row_sums())
    }

    /// Total cost of this allocation under the unit costs of `problem`.
    pub fn total_cost(&self, problem: &TransportationProblem<T>) -> T {
        debug_assert_eq!(self.shipped.nr_rows(), problem.nr_sources());
        debug_assert_eq!(self.shipped.nr_columns(), problem.nr_destinations());

        self.shipped.rows()
            .zip(problem.cost().rows())
            .flat_map(|(amounts, costs)| amounts.iter().zip(costs))
            .fold(T::zero(), |sum, (&amount, &cost)| sum + amount * cost)
    }
}

/// Renders a table with a `Supply i` label per row and a `Demand j` label per column.
///
/// A precision given in the format string is applied to every amount.
impl<T: Amount> Display for Allocation<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let format_value = |value: &T| match f.precision() {
            Some(precision) => format!("{:.*}", precision, value),
            None => value.to_string(),
        };

        let row_labels = (1..=self.shipped.nr_rows())
            .map(|i| format!("Supply {}", i))
            .collect::<Vec<_>>();
        let column_labels = (1..=self.shipped.nr_columns())
            .map(|j| format!("Demand {}", j))
            .collect::<Vec<_>>();
        let cells = self.shipped.rows()
            .map(|row| row.iter().map(&format_value).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let label_width = row_labels.iter().map(String::len).max().unwrap_or(0);
        let widths = column_labels.iter().enumerate()
            .map(|(j, label)| {
                cells.iter().map(|row| row[j].len()).fold(label.len(), usize::max)
            })
            .collect::<Vec<_>>();

        write!(f, "{:width$}", "", width = label_width)?;
        for (label, width) in column_labels.iter().zip(&widths) {
            write!(f, "  {:>width$}", label, width = *width)?;
        }
        writeln!(f)?;
        for (label, row) in row_labels.iter().zip(&cells) {
            write!(f, "{:<width$}", label, width = label_width)?;
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "  {:>width$}", value, width = *width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::transportation::{Allocation, TransportationProblem};

    fn problem(supply: Vec<i64>, demand: Vec<i64>) -> TransportationProblem<i64> {
        let cost = DenseMatrix::from_data(vec![vec![4, 6], vec![5, 3]]);
        TransportationProblem::new(supply, demand, cost).unwrap()
    }

    #[test]
    fn checks() {
        let balanced = problem(vec![10, 5], vec![7, 8]);
        assert!(balanced.is_balanced());
        assert!(!balanced.has_negative_values());

        assert!(!problem(vec![10, 6], vec![7, 8]).is_balanced());
        assert!(problem(vec![-1, 16], vec![7, 8]).has_negative_values());

        let negative_cost = DenseMatrix::from_data(vec![vec![4, -6], vec![5, 3]]);
        let problem = TransportationProblem::new(vec![10, 5], vec![7, 8], negative_cost).unwrap();
        assert!(problem.has_negative_values());
    }

    #[test]
    fn negative_zero() {
        let cost = DenseMatrix::from_data(vec![vec![-0f64, 2f64]]);
        let problem = TransportationProblem::new(vec![3f64], vec![3f64, -0f64], cost).unwrap();
        assert!(!problem.has_negative_values());
        assert!(problem.is_balanced());

        let cost = DenseMatrix::from_data(vec![vec![-0.5f64, 2f64]]);
        let problem = TransportationProblem::new(vec![3f64], vec![3f64, 0f64], cost).unwrap();
        assert!(problem.has_negative_values());
    }

    #[test]
    fn shape() {
        let cost = DenseMatrix::from_data(vec![vec![4, 6, 1], vec![5, 3, 1]]);
        assert!(TransportationProblem::new(vec![10, 5], vec![7, 8], cost).is_err());
    }

    #[test]
    fn sums_and_cost() {
        let problem = problem(vec![10, 5], vec![7, 8]);
        let mut allocation = Allocation::empty(2, 2);
        allocation.ship(0, 0, 7);
        allocation.ship(0, 1, 3);
        allocation.ship(1, 1, 5);

        assert_eq!(allocation.row_sums(), vec![10, 5]);
        assert_eq!(allocation.column_sums(), vec![7, 8]);
        assert_eq!(allocation.total(), 15);
        assert_eq!(allocation.total_cost(&problem), 7 * 4 + 3 * 6 + 5 * 3);
        assert_eq!(allocation, Allocation::from_data(vec![vec![7, 3], vec![0, 5]]));
    }

    #[test]
    fn table() {
        let allocation = Allocation::from_data(vec![vec![7f64, 3f64], vec![0f64, 15f64]]);
        let expected = "          Demand 1  Demand 2\n\
                        Supply 1       7.0       3.0\n\
                        Supply 2       0.0      15.0\n";
        assert_eq!(format!("{:.1}", allocation), expected);
    }
}
