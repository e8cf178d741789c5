//! # Initial solutions for transportation problems
//!
//! Greedy heuristics that repeatedly select a cell of the cost matrix and ship as much as possible
//! through it, until all supply has been shipped. Each heuristic is a `InitialSolutionRule`; the
//! loop around it is shared.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::fmt;

use enum_map::{Enum, enum_map, EnumMap};

use crate::algorithm::error::SolveError;
use crate::algorithm::transportation::dual_cost::DualCostRule;
use crate::algorithm::transportation::penalty::PenaltyRule;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::transportation::{Allocation, Amount, total, TransportationProblem};

pub mod dual_cost;
pub mod penalty;

/// Deciding where to ship next.
pub trait InitialSolutionRule<T> {
    /// Create a new instance.
    fn new() -> Self;

    /// Select the next cell to ship through.
    ///
    /// # Arguments
    ///
    /// * `state`: Remaining supply and demand.
    /// * `cost`: Unit shipping costs of the problem.
    ///
    /// # Return value
    ///
    /// A (source, destination) pair of which both lines are active, or `None` if there is no such
    /// pair.
    fn select_cell(&mut self, state: &State<T>, cost: &DenseMatrix<T>) -> Option<(usize, usize)>;
}

/// The heuristics that are available.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Method {
    /// Vogel's approximation method, see `PenaltyRule`.
    Penalty,
    /// Russell's approximation method, see `DualCostRule`.
    DualCost,
}

impl Method {
    /// Compute an initial solution with this method.
    pub fn solve<T: Amount>(
        self,
        problem: &TransportationProblem<T>,
    ) -> Result<Allocation<T>, SolveError> {
        match self {
            Method::Penalty => solve::<T, PenaltyRule>(problem),
            Method::DualCost => solve::<T, DualCostRule>(problem),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Method::Penalty => "Vogel's approximation method",
            Method::DualCost => "Russell's approximation method",
        })
    }
}

/// Remaining supply and demand during a single run of a heuristic.
///
/// A line (source or destination) is active while it has a positive remaining amount.
#[derive(Clone, Debug, PartialEq)]
pub struct State<T> {
    supply: Vec<T>,
    demand: Vec<T>,
    active_sources: Vec<bool>,
    active_destinations: Vec<bool>,
}

impl<T: Amount> State<T> {
    fn new(problem: &TransportationProblem<T>) -> Self {
        let is_positive = |value: &T| *value > T::zero();

        Self {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
            active_sources: problem.supply().iter().map(is_positive).collect(),
            active_destinations: problem.demand().iter().map(is_positive).collect(),
        }
    }

    /// Supply that still needs to be shipped from a source.
    pub fn remaining_supply(&self, source: usize) -> T {
        self.supply[source]
    }

    /// Demand that still needs to be satisfied at a destination.
    pub fn remaining_demand(&self, destination: usize) -> T {
        self.demand[destination]
    }

    /// Indices of the sources with remaining supply, in increasing order.
    pub fn active_sources(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.supply.len()).filter(|&i| self.active_sources[i])
    }

    /// Indices of the destinations with remaining demand, in increasing order.
    pub fn active_destinations(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.demand.len()).filter(|&j| self.active_destinations[j])
    }

    /// Whether nothing remains to be shipped.
    fn is_finished(&self) -> bool {
        !(total(&self.supply) > T::zero() && total(&self.demand) > T::zero())
    }

    /// Ship as much as possible through a cell and deactivate the lines that are exhausted.
    ///
    /// # Return value
    ///
    /// The amount shipped.
    fn allocate(&mut self, source: usize, destination: usize, allocation: &mut Allocation<T>) -> T {
        debug_assert!(self.active_sources[source]);
        debug_assert!(self.active_destinations[destination]);

        let supply = self.supply[source];
        let demand = self.demand[destination];
        let amount = if supply <= demand { supply } else { demand };

        allocation.ship(source, destination, amount);
        self.supply[source] = supply - amount;
        self.demand[destination] = demand - amount;

        if !(self.supply[source] > T::zero()) {
            self.active_sources[source] = false;
        }
        if !(self.demand[destination] > T::zero()) {
            self.active_destinations[destination] = false;
        }

        amount
    }
}

/// Compute an initial solution for a transportation problem.
///
/// # Return value
///
/// An allocation of which the row sums equal the supply and the column sums equal the demand.
///
/// # Errors
///
/// `NegativeInput` if any supply, demand or cost is negative, `Unbalanced` if total supply and
/// total demand differ. Nothing is allocated in those cases.
pub fn solve<T: Amount, R: InitialSolutionRule<T>>(
    problem: &TransportationProblem<T>,
) -> Result<Allocation<T>, SolveError> {
    if problem.has_negative_values() {
        return Err(SolveError::NegativeInput);
    }
    if !problem.is_balanced() {
        return Err(SolveError::Unbalanced);
    }

    log::info!(
        "Initial solution for {} sources and {} destinations",
        problem.nr_sources(), problem.nr_destinations(),
    );
    let mut state = State::new(problem);
    let mut allocation = Allocation::empty(problem.nr_sources(), problem.nr_destinations());
    let mut rule = R::new();
    while !state.is_finished() {
        let Some((source, destination)) = rule.select_cell(&state, problem.cost()) else {
            break;
        };
        let amount = state.allocate(source, destination, &mut allocation);
        log::trace!("Shipping {} from source {} to destination {}", amount, source, destination);
    }
    log::info!("Total cost {}", allocation.total_cost(problem));

    Ok(allocation)
}

/// Run every heuristic on the same problem.
pub fn solve_all<T: Amount>(
    problem: &TransportationProblem<T>,
) -> EnumMap<Method, Result<Allocation<T>, SolveError>> {
    enum_map! {
        Method::Penalty  => Method::Penalty.solve(problem),
        Method::DualCost => Method::DualCost.solve(problem),
    }
}

/// Compare amounts that are known to be comparable.
pub(crate) fn compare<T: Amount>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}
