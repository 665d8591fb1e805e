// src/resolver/order.rs

//! Topological linearization of one candidate order.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

use super::enumerate::RecipeOrder;

/// Linearize a candidate into a build order: every recipe's chosen
/// dependencies appear strictly before the recipe itself.
///
/// Kahn's algorithm, processed a generation at a time. Names that become
/// free in the same generation come out alphabetically (the map is sorted),
/// so output is reproducible across runs rather than dependent on traversal
/// order. A stuck non-empty map means a cycle; the residual map is returned
/// in the error for diagnostics.
pub fn find_order(order: &RecipeOrder) -> Result<Vec<String>> {
    let mut graph: BTreeMap<String, BTreeSet<String>> = order.entries().clone();
    let mut result = Vec::with_capacity(graph.len());

    while !graph.is_empty() {
        let leftmost: Vec<String> = graph
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(name, _)| name.clone())
            .collect();

        if leftmost.is_empty() {
            return Err(Error::DependencyCycle { remaining: graph });
        }

        for name in &leftmost {
            graph.remove(name);
            result.push(name.clone());
        }
        for deps in graph.values_mut() {
            for name in &leftmost {
                deps.remove(name);
            }
        }
    }

    Ok(result)
}
