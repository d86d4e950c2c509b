//! Configuration file handling for tarman
//!
//! This module contains data structures for:
//! - `package.tarman` - Package information embedded in an archive
//! - `<pkg>.tarman` - Recipe offered by a repository
//! - `recipe.tarman` - Recipe artifact persisted in each installed package
//!
//! All three share the `KEY=VALUE` line format handled by [`parser`].

pub mod package;
pub mod parser;
pub mod recipe;

// Re-export commonly used types
pub use package::{PACKAGE_FILE, PackageInfo};
pub use parser::ParseError;
pub use recipe::{RECIPE_EXTENSION, RECIPE_FILE, Recipe, RuntimeRecipe};
