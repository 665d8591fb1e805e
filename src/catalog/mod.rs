// src/catalog/mod.rs

//! Recipe descriptors and the catalog they are looked up in.
//!
//! A [`Recipe`] describes one buildable unit: its required dependencies
//! (possibly as groups of alternatives), optional dependencies, mutual
//! conflicts, and the pure-Python packages it drags along. The
//! [`RecipeCatalog`] is an explicit value passed into the resolver, never a
//! process-wide singleton, so resolution stays referentially transparent.
//!
//! Looking up a name with no recipe is not an error: it is the signal that
//! the name is a plain pip-installable Python package with no native build.

pub mod parser;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// One dependency slot of a recipe: either a single required recipe or a
/// group of alternatives of which exactly one must be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    /// A single required name, e.g. `"libffi"`.
    One(String),
    /// Mutually exclusive alternatives, e.g. `["sdl2", "genericndkbuild"]`.
    AnyOf(Vec<String>),
}

impl From<&str> for Dependency {
    fn from(name: &str) -> Self {
        Dependency::One(name.to_string())
    }
}

impl From<String> for Dependency {
    fn from(name: String) -> Self {
        Dependency::One(name)
    }
}

impl Dependency {
    /// Build an alternative group from a list of names.
    pub fn any_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dependency::AnyOf(names.into_iter().map(Into::into).collect())
    }
}

/// A recipe descriptor: the dependency-relevant metadata of one buildable
/// unit. Loaded from a TOML file or constructed programmatically; never
/// mutated during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name; matched case-insensitively.
    pub name: String,

    /// Upstream version, informational only.
    #[serde(default)]
    pub version: Option<String>,

    /// Required dependency slots.
    #[serde(default)]
    pub depends: Vec<Dependency>,

    /// Dependencies that only constrain build order when they were
    /// independently requested by the caller.
    #[serde(default)]
    pub opt_depends: Vec<String>,

    /// Recipes this recipe can never be built alongside.
    #[serde(default)]
    pub conflicts: Vec<String>,

    /// Pure-Python packages to pip-install whenever this recipe is built.
    #[serde(default)]
    pub python_depends: Vec<String>,
}

impl Recipe {
    /// Create a recipe with no dependencies or conflicts.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_depends<I, D>(mut self, depends: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Dependency>,
    {
        self.depends = depends.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_opt_depends<I, S>(mut self, opt_depends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opt_depends = opt_depends.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_conflicts<I, S>(mut self, conflicts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicts = conflicts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_python_depends<I, S>(mut self, python_depends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.python_depends = python_depends.into_iter().map(Into::into).collect();
        self
    }

    /// Declared conflicts, lowercased.
    pub fn conflict_set(&self) -> BTreeSet<String> {
        self.conflicts.iter().map(|c| c.to_lowercase()).collect()
    }
}

/// Lookup table of recipe descriptors, keyed by lowercase name.
#[derive(Debug, Default)]
pub struct RecipeCatalog {
    recipes: HashMap<String, Recipe>,
}

impl RecipeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipe, replacing any previous descriptor with the same name.
    pub fn insert(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.name.to_lowercase(), recipe);
    }

    /// Look up a recipe by name, case-insensitively.
    ///
    /// `None` is not an error condition: the resolver treats unknown names
    /// as plain pip-installable Python packages.
    pub fn lookup(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(&name.to_lowercase())
    }

    /// Whether a recipe with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(&name.to_lowercase())
    }

    /// Number of recipes in the catalog.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All recipe names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recipes.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Load every `*.toml` recipe descriptor in a directory.
    ///
    /// Parse and validation failures are real errors; validation warnings
    /// are logged and the recipe is kept.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let mut catalog = Self::new();

        let entries = std::fs::read_dir(path).map_err(|e| {
            Error::IoError(format!(
                "Failed to read recipe directory {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut files: Vec<_> = entries
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::IoError(format!("Failed to read recipe directory entry: {}", e)))?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("toml"))
            .collect();
        files.sort();

        for file in files {
            let recipe = parser::parse_recipe_file(&file)?;
            for warning in parser::validate_recipe(&recipe)? {
                warn!("recipe {}: {}", file.display(), warning);
            }
            debug!("loaded recipe '{}' from {}", recipe.name, file.display());
            catalog.insert(recipe);
        }

        Ok(catalog)
    }
}
