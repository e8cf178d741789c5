use approx::assert_abs_diff_eq;

use lpkit::algorithm::error::SolveError;
use lpkit::algorithm::interior_point::{self, Parameters};
use lpkit::algorithm::simplex;
use lpkit::algorithm::transportation::{Method, solve_all};
use lpkit::data::linear_program::solution::Solution;
use lpkit::data::linear_program::transportation::Allocation;
use lpkit::io::error::ImportError;
use lpkit::io::import;

use super::{get_test_file_path, read};

#[test]
fn input1() {
    let record = read(1).linear_program().unwrap();
    let expected = Solution::new(vec![0f64, 8f64, 20f64], 400f64);

    let solution = simplex::solve(&record.program, record.epsilon).unwrap();
    assert_eq!(solution.rounded(record.precision), expected);
    assert_eq!(solution.rounded(record.precision).to_string(), "x = [0, 8, 20]\nObjective value = 400");

    for alpha in [0.5, 0.9] {
        let parameters = Parameters::new(alpha, record.epsilon);
        let solution = interior_point::solve(&record.program, &record.initial_point, &parameters).unwrap();
        assert_eq!(solution.rounded(record.precision), expected);
    }
}

#[test]
fn input2() {
    let record = read(2).linear_program().unwrap();
    assert_eq!(record.precision, 6);

    let exact = simplex::solve(&record.program, record.epsilon).unwrap();
    assert_abs_diff_eq!(exact.objective_value(), 9f64, epsilon = 1e-12);

    for alpha in [0.5, 0.9] {
        let parameters = Parameters::new(alpha, record.epsilon);
        let solution = interior_point::solve(&record.program, &record.initial_point, &parameters).unwrap();
        assert_eq!(solution.x().len(), 2);
        for (approximate, exact) in solution.x().iter().zip(exact.x()) {
            assert_abs_diff_eq!(*approximate, *exact, epsilon = 1e-4);
        }
        assert_abs_diff_eq!(solution.objective_value(), exact.objective_value(), epsilon = 1e-4);
    }
}

#[test]
fn input3() {
    let record = read(3).linear_program().unwrap();

    assert_eq!(simplex::solve(&record.program, record.epsilon), Err(SolveError::Unbounded));
}

#[test]
fn input4() {
    let problem = read(4).transportation_problem::<i64>().unwrap();
    let results = solve_all(&problem);

    assert_eq!(results[Method::Penalty], Ok(Allocation::from_data(vec![
        vec![15, 0, 0, 5],
        vec![0, 10, 5, 15],
        vec![0, 25, 0, 0],
    ])));
    assert_eq!(results[Method::DualCost], Ok(Allocation::from_data(vec![
        vec![15, 5, 0, 0],
        vec![0, 25, 5, 0],
        vec![0, 5, 0, 20],
    ])));
    for (_, result) in &results {
        let allocation = result.as_ref().unwrap();
        assert_eq!(allocation.row_sums(), problem.supply());
        assert_eq!(allocation.column_sums(), problem.demand());
    }
}

#[test]
fn input4_floating() {
    let problem = read(4).transportation_problem::<f64>().unwrap();
    let results = solve_all(&problem);

    let penalty = results[Method::Penalty].as_ref().unwrap();
    assert_eq!(penalty, &Allocation::from_data(vec![
        vec![15f64, 0f64, 0f64, 5f64],
        vec![0f64, 10f64, 5f64, 15f64],
        vec![0f64, 25f64, 0f64, 0f64],
    ]));
    assert_abs_diff_eq!(penalty.total_cost(&problem), 1935f64);

    let dual_cost = results[Method::DualCost].as_ref().unwrap();
    assert_eq!(dual_cost, &Allocation::from_data(vec![
        vec![15f64, 5f64, 0f64, 0f64],
        vec![0f64, 25f64, 5f64, 0f64],
        vec![0f64, 5f64, 0f64, 20f64],
    ]));
    assert_abs_diff_eq!(dual_cost.total_cost(&problem), 1825f64);

    for allocation in [penalty, dual_cost] {
        assert_eq!(allocation.row_sums(), problem.supply());
        assert_eq!(allocation.column_sums(), problem.demand());
    }
}

#[test]
fn input5() {
    let problem = read(5).transportation_problem::<f64>().unwrap();

    for (_, result) in solve_all(&problem) {
        assert_eq!(result, Err(SolveError::Unbalanced));
    }
}

#[test]
fn missing() {
    assert!(matches!(import(&get_test_file_path(0)), Err(ImportError::IO(_))));
}
