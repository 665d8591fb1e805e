// src/resolver/preflight.rs

//! Cheap, order-independent conflict preflight.
//!
//! Scans the requested recipes and everything they pull in for conflicts
//! that hold regardless of which alternative dependencies get chosen, so
//! obviously broken requirement sets fail fast with a readable message
//! instead of after exhaustive enumeration. Deliberately incomplete: the
//! real correctness guarantee is the pruning during enumeration.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::RecipeCatalog;
use crate::error::{Error, Result};

use super::normalize::{self, AlternativeGroup, DependencySpec};

/// Fail with [`Error::Conflict`] if two recipes reachable from `requested`
/// provably can never coexist.
///
/// Works through an explicit queue, a full generation at a time, so blame
/// lands on the recipe that originally pulled a dependency in. Groups with
/// more than one member carry no commitment to a single name; they are
/// recorded opaquely for later comparison but never expanded here.
pub fn check_obvious_conflicts(
    catalog: &RecipeCatalog,
    requested: &[AlternativeGroup],
    blacklist: &BTreeSet<String>,
) -> Result<()> {
    // Everything accepted so far: committed singletons and opaque groups.
    let mut deps: BTreeSet<AlternativeGroup> = BTreeSet::new();
    // Which recipe originally requested each accepted entry.
    let mut deps_were_added_by: BTreeMap<AlternativeGroup, String> = BTreeMap::new();

    let mut to_be_added: Vec<(AlternativeGroup, Option<String>)> =
        requested.iter().cloned().map(|group| (group, None)).collect();

    while !to_be_added.is_empty() {
        let current_generation = std::mem::take(&mut to_be_added);

        for (group, adding_recipe) in current_generation {
            if group.len() > 1 {
                deps.insert(group);
                continue;
            }
            let Some(name) = group.first().cloned() else {
                continue;
            };

            // Unknown names are pip packages: no conflicts, no further deps.
            let mut recipe_conflicts = BTreeSet::new();
            let mut recipe_dependencies = DependencySpec::new();
            if let Some(recipe) = catalog.lookup(&name) {
                recipe_conflicts = recipe.conflict_set();
                recipe_dependencies =
                    normalize::strip_blacklisted(normalize::normalize(&recipe.depends), blacklist);
            }

            // Check both directions against everything accepted so far.
            let mut triggered: Option<AlternativeGroup> = None;
            for accepted in &deps {
                // This recipe's conflicts cover the whole accepted group:
                // no choice of alternative can avoid the clash.
                if accepted
                    .iter()
                    .all(|member| recipe_conflicts.contains(member))
                {
                    triggered = Some(accepted.clone());
                    break;
                }
                // The accepted side only counts once committed to one name.
                if accepted.len() != 1 {
                    continue;
                }
                if let Some(accepted_recipe) = catalog.lookup(&accepted[0]) {
                    if accepted_recipe.conflict_set().contains(&name) {
                        triggered = Some(accepted.clone());
                        break;
                    }
                }
            }

            if let Some(conflicting) = triggered {
                let mut first = format!("'{}'", name);
                if let Some(by) = &adding_recipe {
                    first.push_str(&format!(" (added by '{}')", by));
                }
                let mut second = format!("'{}'", conflicting.join("' or '"));
                if let Some(by) = deps_were_added_by.get(&conflicting) {
                    if conflicting.len() != 1 || *by != conflicting[0] {
                        second.push_str(&format!(" (added by '{}')", by));
                    }
                }
                return Err(Error::Conflict { first, second });
            }

            // Accept the name and schedule its dependencies for the next
            // generation, attributed to the original requester.
            let adder = adding_recipe.unwrap_or_else(|| name.clone());
            let committed = vec![name];
            deps_were_added_by.insert(committed.clone(), adder.clone());
            deps.insert(committed);
            for dependency in recipe_dependencies {
                if !deps.contains(&dependency) {
                    to_be_added.push((dependency, Some(adder.clone())));
                }
            }
        }
    }

    Ok(())
}
