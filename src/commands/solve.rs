//! `wayfarer solve` command - run a search over a scenario

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::scenario;
use wayfarer_core::error::Result;
use wayfarer_core::graph::{Algorithm, NodeId};
use wayfarer_core::problem::SearchProblem;
use wayfarer_core::space::{DistanceMetric, Scalar};

/// Execute the solve command
pub fn execute(
    cli: &Cli,
    path: &Path,
    algorithm: Option<Algorithm>,
    metric: Option<DistanceMetric>,
    dims: Option<usize>,
    start: Instant,
) -> Result<()> {
    let mut problem = scenario::load(path)?;
    if let Some(algorithm) = algorithm {
        problem.algorithm = algorithm;
    }
    if let Some(metric) = metric {
        problem.metric = metric;
    }

    if cli.verbose {
        eprintln!("load_scenario: {:?}", start.elapsed());
    }

    match scenario::resolve_dims(&problem, dims)? {
        1 => run::<f64, 1>(cli, &problem, start),
        2 => run::<f64, 2>(cli, &problem, start),
        _ => run::<f64, 3>(cli, &problem, start),
    }
}

fn run<T: Scalar, const D: usize>(
    cli: &Cli,
    problem: &SearchProblem<T>,
    start: Instant,
) -> Result<()> {
    let env = problem.build_environment::<D>()?;
    let path = env.search(
        NodeId::new(problem.start),
        NodeId::new(problem.goal),
        problem.algorithm,
    )?;

    if cli.verbose {
        eprintln!("search: {:?}", start.elapsed());
    }

    match cli.format {
        OutputFormat::Json => {
            let steps: Vec<serde_json::Value> = path
                .steps
                .iter()
                .map(|step| {
                    serde_json::json!({
                        "index": step.node.index(),
                        "name": env.nodes()[step.node.index()].name(),
                        "cost": step.cost,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "algorithm": problem.algorithm.to_string(),
                "metric": problem.metric.to_string(),
                "found": path.found(),
                "total_cost": path.total_cost(),
                "steps": steps,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if path.found() {
                if !cli.quiet {
                    println!(
                        "path found ({}, {} nodes, total cost {})",
                        problem.algorithm,
                        path.len(),
                        path.total_cost().unwrap_or(0.0)
                    );
                }
                for step in &path.steps {
                    println!(
                        "  {}  cost {}",
                        env.nodes()[step.node.index()].name(),
                        step.cost
                    );
                }
            } else if !cli.quiet {
                println!(
                    "no path from {} to {} ({})",
                    env.node(problem.start)?.name(),
                    env.node(problem.goal)?.name(),
                    problem.algorithm
                );
            }
        }
    }

    Ok(())
}
