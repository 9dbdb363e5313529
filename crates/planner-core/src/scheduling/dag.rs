//! Dependency-graph ordering, built on `petgraph::graph::DiGraph` plus
//! `petgraph::algo::toposort` for cycle detection.

use crate::error::{EngineError, EngineResult};
use crate::model::Config;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A topological order over `config.submissions`, following `depends_on`
/// edges (parent -> child). Returns `EngineError::CyclicDependency` naming
/// one submission on the cycle when the dependency graph is not a DAG.
pub fn topological_order(config: &Config) -> EngineResult<Vec<String>> {
    let mut graph = DiGraph::<String, ()>::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

    for submission in &config.submissions {
        let idx = graph.add_node(submission.id.clone());
        nodes.insert(submission.id.as_str(), idx);
    }

    for submission in &config.submissions {
        let Some(&child_idx) = nodes.get(submission.id.as_str()) else { continue };
        for dep_id in &submission.depends_on {
            if let Some(&parent_idx) = nodes.get(dep_id.as_str()) {
                graph.add_edge(parent_idx, child_idx, ());
            }
            // Unknown dependency ids are a validation concern
            // (`Violation::UnknownDependency`), not a DAG-ordering concern.
        }
    }

    match toposort(&graph, None) {
        Ok(order) => Ok(order.into_iter().map(|idx| graph[idx].clone()).collect()),
        Err(cycle) => Err(EngineError::CyclicDependency(graph[cycle.node_id()].clone())),
    }
}
