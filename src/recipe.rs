//! Whole-document parsing: folds decomposed lines into a recipe.

use log::debug;
use serde::Serialize;
use std::str::FromStr;

use crate::comment::strip_comments;
use crate::error::ParseError;
use crate::step::{Item, Step};
use crate::token::{Cookware, Ingredient, Metadata, Timer};

/// A fully parsed recipe.
///
/// `steps` holds the non-blank, non-metadata lines in source order, each an
/// ordered mix of text and tokens. The four flat lists hold every token in
/// first-occurrence order across the whole text; an ingredient mentioned
/// twice appears twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub metadata: Vec<Metadata>,
    pub ingredients: Vec<Ingredient>,
    pub cookware: Vec<Cookware>,
    pub timers: Vec<Timer>,
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Parses a whole recipe text into its structured form.
    ///
    /// Comments are stripped over the full text before line splitting so
    /// block comments can span lines. Blank lines are skipped; a pure
    /// metadata line goes into `metadata` and not into `steps`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let stripped = strip_comments(input);
        let mut recipe = Recipe::default();

        for line in stripped.split('\n') {
            let step = Step::parse(line)?;
            if step.is_empty() {
                continue;
            }
            if let Some(metadata) = step.as_metadata() {
                recipe.metadata.push(metadata.clone());
                continue;
            }
            for item in &step.items {
                match item {
                    Item::Ingredient(ingredient) => recipe.ingredients.push(ingredient.clone()),
                    Item::Cookware(cookware) => recipe.cookware.push(cookware.clone()),
                    Item::Timer(timer) => recipe.timers.push(timer.clone()),
                    // metadata never mixes with other items, and plain text
                    // lives only inside the step
                    Item::Metadata(_) | Item::Text(_) => {}
                }
            }
            recipe.steps.push(step);
        }

        debug!(
            "parsed recipe: {} metadata, {} ingredients, {} cookware, {} timers, {} steps",
            recipe.metadata.len(),
            recipe.ingredients.len(),
            recipe.cookware.len(),
            recipe.timers.len(),
            recipe.steps.len()
        );
        Ok(recipe)
    }

    /// Sum of all timer durations across the recipe, in seconds.
    pub fn total_time(&self) -> f64 {
        self.timers.iter().map(|timer| timer.seconds).sum()
    }
}

impl FromStr for Recipe {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Recipe::parse(s)
    }
}
