//! `wayfarer inspect` command - print the nodes and adjacency of a scenario

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::scenario;
use wayfarer_core::error::Result;
use wayfarer_core::problem::SearchProblem;
use wayfarer_core::space::Scalar;

/// Execute the inspect command
pub fn execute(cli: &Cli, path: &Path, dims: Option<usize>) -> Result<()> {
    let problem = scenario::load(path)?;
    match scenario::resolve_dims(&problem, dims)? {
        1 => run::<f64, 1>(cli, &problem),
        2 => run::<f64, 2>(cli, &problem),
        _ => run::<f64, 3>(cli, &problem),
    }
}

fn run<T: Scalar, const D: usize>(cli: &Cli, problem: &SearchProblem<T>) -> Result<()> {
    let env = problem.build_environment::<D>()?;

    match cli.format {
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = env
                .nodes()
                .iter()
                .map(|node| {
                    serde_json::json!({
                        "index": node.id().index(),
                        "name": node.name(),
                        "value": node.value().components().iter().map(|c| c.to_f64()).collect::<Vec<f64>>(),
                        "neighbors": node.neighbors().iter().map(|id| id.index()).collect::<Vec<usize>>(),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "num_nodes": env.num_nodes(),
                "num_edges": env.edges().len(),
                "metric": problem.metric.to_string(),
                "bidirectional": problem.bidirectional,
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{} nodes, {} edges, metric {}",
                    env.num_nodes(),
                    env.edges().len(),
                    problem.metric
                );
            }
            for node in env.nodes() {
                let neighbors: Vec<String> = node
                    .neighbors()
                    .iter()
                    .map(|id| env.nodes()[id.index()].name().to_string())
                    .collect();
                println!(
                    "  {} {} -> {}",
                    node.name(),
                    node.value(),
                    if neighbors.is_empty() {
                        "(none)".to_string()
                    } else {
                        neighbors.join(", ")
                    }
                );
            }
        }
    }

    Ok(())
}
