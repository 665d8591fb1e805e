// src/lib.rs

//! Crosskiln recipe resolver
//!
//! Cross-compiling a Python app for Android means building a set of named
//! "recipes" (native libraries and Python extensions) with external
//! toolchains, in the right order. This crate implements the piece that
//! decides *which* recipes to build and *in what order*:
//!
//! - Recipes declare required dependencies (possibly as groups of
//!   alternatives, e.g. either `sdl2` or `genericndkbuild`), optional
//!   dependencies that only constrain ordering, and mutual conflicts.
//! - [`resolve`] expands every combination of alternatives into candidate
//!   dependency graphs, prunes the conflicting ones, linearizes the rest,
//!   and deterministically picks the best surviving build order.
//! - Requested names with no matching recipe are not errors: they are plain
//!   pip-installable Python packages and come back in
//!   [`Resolution::pip_modules`].
//!
//! # Example
//!
//! ```
//! use crosskiln::{Recipe, RecipeCatalog, resolve};
//!
//! let mut catalog = RecipeCatalog::new();
//! catalog.insert(Recipe::new("python3").with_depends(["libffi", "openssl"]));
//! catalog.insert(Recipe::new("libffi"));
//! catalog.insert(Recipe::new("openssl"));
//!
//! let resolution = resolve(&catalog, &["python3".into(), "flask".into()], &[]).unwrap();
//! assert_eq!(resolution.recipe_build_order, vec!["libffi", "openssl", "python3"]);
//! assert_eq!(resolution.pip_modules, vec!["flask"]);
//! ```

pub mod catalog;
mod error;
pub mod resolver;

pub use catalog::{Dependency, Recipe, RecipeCatalog};
pub use error::{Error, Result};
pub use resolver::{resolve, Resolution};
