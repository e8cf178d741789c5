use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

use lpkit::algorithm::error::SolveError;
use lpkit::algorithm::interior_point::{self, Parameters};
use lpkit::algorithm::simplex;
use lpkit::algorithm::transportation::solve_all;
use lpkit::data::linear_program::solution::Solution;
use lpkit::io::import;
use lpkit::io::record::Record;

/// Solve linear programs and find initial solutions for transportation problems.
#[derive(Parser)]
#[command(version, author)]
struct Opts {
    /// Files containing the problem records
    #[arg(required = true)]
    problem_files: Vec<PathBuf>,
    /// How to interpret the records
    #[arg(long, value_enum, default_value_t = Mode::Lp)]
    mode: Mode,
    /// Step fraction of the interior-point method, may be repeated
    #[arg(long = "alpha", default_values_t = [0.5, 0.9])]
    alphas: Vec<f64>,
    /// Iteration limit of the interior-point method
    #[arg(long, default_value_t = Parameters::default().max_iterations)]
    max_iterations: usize,
    /// Decimal places in the output, instead of those of the tolerance in the record
    #[arg(long)]
    precision: Option<usize>,
    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum)]
enum Mode {
    /// Objective, constraint rows, starting point, right-hand side and tolerance
    Lp,
    /// Supply, cost rows and demand
    Transportation,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new().filter_level(level).parse_default_env().init();

    for (index, path) in opts.problem_files.iter().enumerate() {
        let record = import(path)
            .with_context(|| format!("failed to read problem file {}", path.display()))?;

        println!("Input №{}", index + 1);
        println!();
        let result = match opts.mode {
            Mode::Lp => solve_linear_program(&record, &opts),
            Mode::Transportation => solve_transportation_problem(&record, &opts),
        };
        result.with_context(|| format!("failed to interpret problem file {}", path.display()))?;
        println!();
    }

    Ok(())
}

fn solve_linear_program(record: &Record, opts: &Opts) -> Result<()> {
    let imported = record.linear_program()?;
    let precision = opts.precision.unwrap_or(imported.precision);

    println!("Interior-point algorithm:");
    for &alpha in &opts.alphas {
        println!("alpha = {}:", alpha);
        let parameters = Parameters {
            alpha,
            epsilon: imported.epsilon,
            max_iterations: opts.max_iterations,
        };
        print_solution(
            interior_point::solve(&imported.program, &imported.initial_point, &parameters),
            precision,
        );
    }

    println!("Simplex method:");
    print_solution(simplex::solve(&imported.program, imported.epsilon), precision);

    Ok(())
}

fn print_solution(result: Result<Solution, SolveError>, precision: usize) {
    match result {
        Ok(solution) => {
            let text = format!("{:.*}", precision, solution.rounded(precision));
            for line in text.lines() {
                println!("\t{}", line);
            }
        },
        Err(error) => {
            log::info!("Not applicable: {}", error);
            println!("The method is not applicable!");
        },
    }
}

fn solve_transportation_problem(record: &Record, opts: &Opts) -> Result<()> {
    let problem = record.transportation_problem::<f64>()?;

    for (method, result) in solve_all(&problem) {
        println!("{}:", method);
        match result {
            Ok(allocation) => {
                let total_cost = allocation.total_cost(&problem);
                match opts.precision {
                    Some(precision) => {
                        print!("{:.*}", precision, allocation);
                        println!("Total cost = {:.*}", precision, total_cost);
                    },
                    None => {
                        print!("{}", allocation);
                        println!("Total cost = {}", total_cost);
                    },
                }
            },
            Err(error) => {
                log::info!("Not applicable: {}", error);
                println!("The method is not applicable!");
            },
        }
        println!();
    }

    Ok(())
}
