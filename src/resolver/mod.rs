// src/resolver/mod.rs

//! Recipe dependency resolution: which recipes to build, and in what order.
//!
//! Data flow: requested names → normalization → conflict preflight (fail
//! fast on provable clashes) → enumeration of candidate orders across all
//! alternative choices → topological sort of each candidate → ranking and
//! selection → split into native recipes vs pip modules.

pub mod enumerate;
pub mod normalize;
pub mod order;
pub mod preflight;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{Dependency, RecipeCatalog};
use crate::error::{Error, Result};

use enumerate::RecipeOrder;
use normalize::AlternativeGroup;

/// Outcome of a resolution: the native recipes to build, in order, and the
/// residual pure-Python packages to hand to pip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Native recipes in build order: dependencies strictly before
    /// dependents, alphabetical within a generation.
    pub recipe_build_order: Vec<String>,
    /// Requested or dragged-in names with no native recipe, sorted and
    /// deduplicated. Disjoint from `recipe_build_order`.
    pub pip_modules: Vec<String>,
}

/// Resolve `requested` against `catalog` into a conflict-free build order.
///
/// `requested` entries may be bare names or alternative groups (a
/// bootstrap's own requirements typically contribute a group like
/// `["sdl2", "genericndkbuild"]`). `blacklist` names are excluded from
/// consideration entirely, in the request and in every dependency list.
/// Input order does not matter; repeated calls with the same inputs produce
/// identical output.
///
/// # Errors
///
/// - [`Error::Conflict`] when two recipes provably can never coexist.
/// - [`Error::NoValidOrder`] when every candidate was pruned or cyclic.
/// - [`Error::Internal`] if the recipe/pip split stops being disjoint,
///   which indicates a catalog bug rather than bad input.
pub fn resolve(
    catalog: &RecipeCatalog,
    requested: &[Dependency],
    blacklist: &[String],
) -> Result<Resolution> {
    let blacklist: BTreeSet<String> = blacklist.iter().map(|b| b.to_lowercase()).collect();

    // Top-level names go through the same canonicalization as any
    // dependency list, so a blacklisted name can never reach the output.
    let groups: Vec<AlternativeGroup> =
        normalize::strip_blacklisted(normalize::normalize(requested), &blacklist);

    preflight::check_obvious_conflicts(catalog, &groups, &blacklist)?;

    // One enumeration pass per combination of top-level alternatives; the
    // chosen combination also decides which opt_depends apply.
    let mut possible_orders: Vec<RecipeOrder> = Vec::new();
    for name_set in enumerate::combinations(&groups) {
        let requested_set: BTreeSet<String> = name_set.iter().cloned().collect();
        let mut orders = vec![RecipeOrder::new()];
        for name in &name_set {
            orders = enumerate::collect_orders(name, &requested_set, orders, &blacklist, catalog);
        }
        possible_orders.extend(orders);
    }
    debug!("enumerated {} candidate orders", possible_orders.len());

    // Linearize each candidate. A cyclic candidate is dropped, not fatal:
    // other candidates may still produce a valid order.
    let mut graphs: Vec<Vec<String>> = Vec::new();
    for possible_order in &possible_orders {
        match order::find_order(possible_order) {
            Ok(sorted) => graphs.push(sorted),
            Err(Error::DependencyCycle { remaining }) => {
                warn!(
                    "circular dependency found in candidate order, skipping it: {:?}",
                    remaining
                );
            }
            Err(other) => return Err(other),
        }
    }

    if graphs.is_empty() {
        return Err(Error::NoValidOrder);
    }

    // Prefer orders containing python3, then additionally sdl2. The sort is
    // stable, so enumeration order breaks any remaining ties.
    graphs.sort_by_key(|sorted| {
        let mut key = 0i32;
        if sorted.iter().any(|name| name == "python3") {
            key -= 1;
        }
        if sorted.iter().any(|name| name == "sdl2") {
            key -= 1;
        }
        key
    });

    if graphs.len() > 1 {
        info!("found {} valid dependency orders:", graphs.len());
        for graph in &graphs {
            debug!("    {:?}", graph);
        }
        info!("using the first of these: {:?}", graphs[0]);
    } else {
        debug!("found a single valid recipe set: {:?}", graphs[0]);
    }
    let chosen_order = graphs.remove(0);

    // Split into native recipes and residual pip modules.
    let mut recipe_build_order = Vec::new();
    let mut pip_modules: BTreeSet<String> = BTreeSet::new();
    for name in chosen_order {
        match catalog.lookup(&name) {
            Some(recipe) => {
                pip_modules.extend(recipe.python_depends.iter().map(|p| p.to_lowercase()));
                recipe_build_order.push(name);
            }
            None => {
                pip_modules.insert(name);
            }
        }
    }

    for name in &recipe_build_order {
        if pip_modules.contains(name) {
            return Err(Error::Internal(format!(
                "'{}' ended up in both the recipe build order and the pip module list",
                name
            )));
        }
    }

    info!("recipe build order is {:?}", recipe_build_order);
    Ok(Resolution {
        recipe_build_order,
        pip_modules: pip_modules.into_iter().collect(),
    })
}
