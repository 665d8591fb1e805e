// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use crosskiln::{Dependency, Recipe, RecipeCatalog};

/// Install a tracing subscriber so resolver logging shows up in test output
/// when `RUST_LOG` is set. Safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Build a catalog from a list of recipes.
pub fn catalog_of(recipes: impl IntoIterator<Item = Recipe>) -> RecipeCatalog {
    let mut catalog = RecipeCatalog::new();
    for recipe in recipes {
        catalog.insert(recipe);
    }
    catalog
}

/// A catalog resembling a small slice of a real recipe tree: python3 with
/// its native dependencies, kivy on top of sdl2, the webview alternative
/// (genericndkbuild), and the legacy python2 conflicting with python3.
pub fn sample_catalog() -> RecipeCatalog {
    catalog_of([
        Recipe::new("hostpython3"),
        Recipe::new("libffi"),
        Recipe::new("openssl"),
        Recipe::new("sqlite3"),
        Recipe::new("python3")
            .with_depends(["hostpython3", "sqlite3", "openssl", "libffi"])
            .with_conflicts(["python2"]),
        Recipe::new("python2").with_conflicts(["python3"]),
        Recipe::new("sdl2")
            .with_depends(["python3"])
            .with_conflicts(["genericndkbuild"]),
        Recipe::new("genericndkbuild")
            .with_depends(["python3"])
            .with_conflicts(["sdl2"]),
        Recipe::new("pyjnius").with_depends(["python3"]),
        Recipe::new("setuptools").with_depends(["python3"]),
        Recipe::new("kivy").with_depends(vec![
            Dependency::any_of(["sdl2", "genericndkbuild"]),
            Dependency::One("pyjnius".to_string()),
            Dependency::One("setuptools".to_string()),
        ]),
        Recipe::new("pillow")
            .with_depends(["setuptools"])
            .with_opt_depends(["freetype"]),
        Recipe::new("freetype"),
        Recipe::new("requests_recipe")
            .with_depends(["python3"])
            .with_python_depends(["urllib3", "certifi"]),
    ])
}

/// Requested names as bare (singleton) dependencies.
pub fn names(requested: &[&str]) -> Vec<Dependency> {
    requested.iter().map(|n| Dependency::from(*n)).collect()
}
