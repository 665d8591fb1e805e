// src/resolver/enumerate.rs

//! Candidate order enumeration across alternative dependencies.
//!
//! Every combination of alternative choices is expanded into its own
//! candidate [`RecipeOrder`]; candidates that accumulate a conflict are
//! pruned as soon as it becomes visible. The fan-out is exponential in the
//! number of real alternative groups, which practical recipe sets keep
//! small; it is deliberately not capped.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::RecipeCatalog;

use super::normalize::{self, DependencySpec};

/// One candidate assignment of chosen direct dependencies per recipe.
///
/// Cloned whenever enumeration branches, so candidates never share mutable
/// state across branches. Backed by a `BTreeMap` to keep iteration, and
/// therefore the final output, deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeOrder {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl RecipeOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this candidate already carries an entry for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Recipes accepted into this candidate, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The chosen direct dependencies of `name`, if present.
    pub fn dependencies(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(name)
    }

    pub(crate) fn insert(&mut self, name: String, chosen: BTreeSet<String>) {
        self.entries.insert(name, chosen);
    }

    pub(crate) fn entries(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.entries
    }

    /// Whether any two recipes already accepted into this candidate declare
    /// a conflict with each other. Recomputed from declared conflict lists;
    /// unknown names have none.
    pub fn has_conflict(&self, catalog: &RecipeCatalog) -> bool {
        for name in self.entries.keys() {
            let Some(recipe) = catalog.lookup(name) else {
                continue;
            };
            for conflict in recipe.conflict_set() {
                if self.entries.contains_key(&conflict) {
                    return true;
                }
            }
        }
        false
    }
}

/// Expand `name` into every candidate order consistent with conflicts.
///
/// Each order in `orders` either keeps its existing entry for `name`
/// (a name reached via two paths must resolve identically within one
/// candidate), dies because it already contains a conflict, or branches
/// once per combination of `name`'s alternative dependency groups; every
/// chosen dependency is then expanded the same way within its branch.
///
/// Returns the surviving candidates, possibly none.
pub fn collect_orders(
    name: &str,
    requested: &BTreeSet<String>,
    orders: Vec<RecipeOrder>,
    blacklist: &BTreeSet<String>,
    catalog: &RecipeCatalog,
) -> Vec<RecipeOrder> {
    let name = name.to_lowercase();

    // Unknown names are pip packages: nothing to expand, nothing to clash.
    let (dependencies, conflicts) = match catalog.lookup(&name) {
        Some(recipe) => (
            normalize::dependency_groups(recipe, requested, blacklist),
            recipe.conflict_set(),
        ),
        None => (DependencySpec::new(), BTreeSet::new()),
    };

    let mut new_orders = Vec::new();
    for order in orders {
        if order.contains(&name) {
            new_orders.push(order);
            continue;
        }
        if order.has_conflict(catalog) {
            continue;
        }
        if conflicts.iter().any(|conflict| order.contains(conflict)) {
            continue;
        }

        for combination in combinations(&dependencies) {
            let chosen: BTreeSet<String> = combination.into_iter().collect();
            let mut branched = order.clone();
            branched.insert(name.clone(), chosen.clone());

            let mut branch_orders = vec![branched];
            for dependency in &chosen {
                branch_orders =
                    collect_orders(dependency, requested, branch_orders, blacklist, catalog);
            }
            new_orders.extend(branch_orders);
        }
    }
    new_orders
}

/// Cross-product of alternative groups: one member chosen from each group.
/// No groups yields the single empty combination.
pub(crate) fn combinations(spec: &DependencySpec) -> Vec<Vec<String>> {
    let mut combos: Vec<Vec<String>> = vec![Vec::new()];
    for group in spec {
        let mut next = Vec::with_capacity(combos.len() * group.len());
        for combo in &combos {
            for member in group {
                let mut extended = combo.clone();
                extended.push(member.clone());
                next.push(extended);
            }
        }
        combos = next;
    }
    combos
}
