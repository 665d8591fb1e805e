// src/catalog/parser.rs

//! Recipe file parsing

use crate::catalog::{Dependency, Recipe};
use crate::error::{Error, Result};
use std::path::Path;

/// Parse a recipe from a TOML string
pub fn parse_recipe(content: &str) -> Result<Recipe> {
    toml::from_str(content).map_err(|e| Error::ParseError(format!("Invalid recipe: {}", e)))
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<Recipe> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read recipe file: {}", e)))?;

    parse_recipe(&content)
}

/// Validate a recipe for consistency, returning non-fatal warnings.
pub fn validate_recipe(recipe: &Recipe) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if recipe.name.is_empty() {
        return Err(Error::ParseError("Recipe name cannot be empty".to_string()));
    }

    let name = recipe.name.to_lowercase();

    for dep in &recipe.depends {
        let lists_self = match dep {
            Dependency::One(n) => n.to_lowercase() == name,
            Dependency::AnyOf(group) => group.iter().any(|n| n.to_lowercase() == name),
        };
        if lists_self {
            warnings.push(format!("Recipe {} lists itself in depends", recipe.name));
        }
        if let Dependency::AnyOf(group) = dep {
            if group.is_empty() {
                warnings.push(format!(
                    "Recipe {} has an empty alternative group in depends",
                    recipe.name
                ));
            }
        }
    }

    if recipe.conflicts.iter().any(|c| c.to_lowercase() == name) {
        warnings.push(format!("Recipe {} conflicts with itself", recipe.name));
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_recipe() {
        let content = r#"
name = "python3"
version = "3.11.5"
depends = ["hostpython3", "sqlite3", "openssl", "libffi"]
conflicts = ["python2"]
"#;

        let recipe = parse_recipe(content).unwrap();
        assert_eq!(recipe.name, "python3");
        assert_eq!(recipe.version.as_deref(), Some("3.11.5"));
        assert_eq!(recipe.depends.len(), 4);
        assert_eq!(recipe.conflicts, vec!["python2"]);
    }

    #[test]
    fn test_parse_alternative_group() {
        let content = r#"
name = "kivy"
depends = [["sdl2", "genericndkbuild"], "pyjnius", "setuptools"]
"#;

        let recipe = parse_recipe(content).unwrap();
        assert_eq!(
            recipe.depends[0],
            Dependency::any_of(["sdl2", "genericndkbuild"])
        );
        assert_eq!(recipe.depends[1], Dependency::One("pyjnius".to_string()));
    }

    #[test]
    fn test_parse_invalid_recipe() {
        let content = "this is not valid toml at all {}";
        assert!(parse_recipe(content).is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        let recipe = Recipe::new("");
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_validate_self_dependency_warns() {
        let recipe = Recipe::new("zlib").with_depends(["zlib"]);
        let warnings = validate_recipe(&recipe).unwrap();
        assert!(warnings.iter().any(|w| w.contains("itself in depends")));
    }

    #[test]
    fn test_validate_self_conflict_warns() {
        let recipe = Recipe::new("zlib").with_conflicts(["Zlib"]);
        let warnings = validate_recipe(&recipe).unwrap();
        assert!(warnings.iter().any(|w| w.contains("conflicts with itself")));
    }
}
