//! Parser for the Cooklang recipe markup dialect.
//!
//! Recipe text annotates ingredients (`@salt`, `@flour{125%g}`), cookware
//! (`#pan`, `#cast iron skillet{}`), timers (`~{10%minutes}`) and metadata
//! (`>> servings: 4`) inline in plain instructions. [`Recipe::parse`] turns
//! one such text blob into an immutable structured document for renderers
//! and shopping-list generators.
//!
//! ```
//! use cooklang_parser::Recipe;
//!
//! let recipe = Recipe::parse(
//!     ">> servings: 2\n\
//!      Crack @eggs{2} into a #bowl and whisk.\n\
//!      Fry in the #pan for ~{3%minutes}.",
//! )?;
//!
//! assert_eq!(recipe.metadata[0].value, "2");
//! assert_eq!(recipe.ingredients[0].name, "eggs");
//! assert_eq!(recipe.cookware.len(), 2);
//! assert_eq!(recipe.total_time(), 180.0);
//! # Ok::<(), cooklang_parser::ParseError>(())
//! ```

pub mod comment;
pub mod duration;
pub mod error;
pub mod recipe;
pub mod step;
pub mod token;

pub use error::ParseError;
pub use recipe::Recipe;
pub use step::{Item, Step};
pub use token::{Cookware, Ingredient, Metadata, Timer};

/// Parses a recipe text blob into a [`Recipe`].
pub fn parse_recipe(input: &str) -> Result<Recipe, ParseError> {
    Recipe::parse(input)
}
