// src/resolver/normalize.rs

//! Dependency list canonicalization.
//!
//! Recipes declare dependencies as a mix of bare names and alternative
//! groups. Everything downstream wants a single shape: a list of groups,
//! every name lowercase, blacklisted names stripped out.

use std::collections::BTreeSet;
use tracing::warn;

use crate::catalog::{Dependency, Recipe};

/// Ordered alternatives for one dependency slot; a bare name is a singleton
/// group.
pub type AlternativeGroup = Vec<String>;

/// All dependency slots of a recipe: every group must be satisfied by
/// exactly one of its members.
pub type DependencySpec = Vec<AlternativeGroup>;

/// Canonicalize a raw dependency list into lowercase alternative groups.
pub fn normalize(raw: &[Dependency]) -> DependencySpec {
    raw.iter()
        .map(|dep| match dep {
            Dependency::One(name) => vec![name.to_lowercase()],
            Dependency::AnyOf(group) => group.iter().map(|n| n.to_lowercase()).collect(),
        })
        .collect()
}

/// Strip blacklisted names out of every group.
///
/// A group emptied by the blacklist is dropped entirely: the slot counts as
/// satisfied rather than unsatisfiable. That silently voids a dependency
/// slot, so it is logged.
pub fn strip_blacklisted(spec: DependencySpec, blacklist: &BTreeSet<String>) -> DependencySpec {
    let mut filtered = DependencySpec::new();
    for group in spec {
        let kept: AlternativeGroup = group
            .iter()
            .filter(|name| !blacklist.contains(*name))
            .cloned()
            .collect();
        if kept.is_empty() {
            if !group.is_empty() {
                warn!(
                    "every alternative in {:?} is blacklisted, dropping the dependency slot",
                    group
                );
            }
            continue;
        }
        filtered.push(kept);
    }
    filtered
}

/// The dependency slots the resolver must satisfy for `recipe`: declared
/// `depends`, normalized and blacklist-filtered, plus every `opt_depend`
/// that the caller independently requested (optional dependencies only
/// constrain build order, they never pull anything in by themselves).
pub fn dependency_groups(
    recipe: &Recipe,
    requested: &BTreeSet<String>,
    blacklist: &BTreeSet<String>,
) -> DependencySpec {
    let mut groups = strip_blacklisted(normalize(&recipe.depends), blacklist);
    for opt in &recipe.opt_depends {
        let opt = opt.to_lowercase();
        if requested.contains(&opt) {
            groups.push(vec![opt]);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dependency;

    fn blacklist(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_normalize_wraps_and_lowercases() {
        let raw = vec![
            Dependency::One("OpenSSL".to_string()),
            Dependency::any_of(["SDL2", "GenericNdkBuild"]),
        ];

        let spec = normalize(&raw);
        assert_eq!(
            spec,
            vec![
                vec!["openssl".to_string()],
                vec!["sdl2".to_string(), "genericndkbuild".to_string()],
            ]
        );
    }

    #[test]
    fn test_strip_blacklisted_removes_names() {
        let spec = vec![
            vec!["sdl2".to_string(), "genericndkbuild".to_string()],
            vec!["libffi".to_string()],
        ];

        let filtered = strip_blacklisted(spec, &blacklist(&["genericndkbuild"]));
        assert_eq!(
            filtered,
            vec![vec!["sdl2".to_string()], vec!["libffi".to_string()]]
        );
    }

    #[test]
    fn test_strip_blacklisted_drops_emptied_group() {
        let spec = vec![
            vec!["python2".to_string()],
            vec!["libffi".to_string()],
        ];

        let filtered = strip_blacklisted(spec, &blacklist(&["python2"]));
        assert_eq!(filtered, vec![vec!["libffi".to_string()]]);
    }

    #[test]
    fn test_dependency_groups_includes_requested_opt_depends() {
        let recipe = Recipe::new("pillow")
            .with_depends(["setuptools"])
            .with_opt_depends(["freetype", "jpeg"]);

        let requested: BTreeSet<String> =
            ["pillow".to_string(), "freetype".to_string()].into();
        let groups = dependency_groups(&recipe, &requested, &BTreeSet::new());

        assert_eq!(
            groups,
            vec![
                vec!["setuptools".to_string()],
                vec!["freetype".to_string()],
            ]
        );
    }

    #[test]
    fn test_dependency_groups_ignores_unrequested_opt_depends() {
        let recipe = Recipe::new("pillow").with_opt_depends(["freetype"]);

        let requested: BTreeSet<String> = ["pillow".to_string()].into();
        let groups = dependency_groups(&recipe, &requested, &BTreeSet::new());

        assert!(groups.is_empty());
    }
}
