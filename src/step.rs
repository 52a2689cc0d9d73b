//! Line classification and recursive decomposition into text and tokens.

use log::trace;
use serde::Serialize;

use crate::error::ParseError;
use crate::token::{Cookware, Ingredient, Metadata, Timer};
use crate::token::{COOKWARE_RE, INGREDIENT_RE, METADATA_RE, TIMER_RE};

/// One element of a decomposed line: a literal text run or a typed token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Item {
    Text(String),
    Metadata(Metadata),
    Ingredient(Ingredient),
    Cookware(Cookware),
    Timer(Timer),
}

impl Item {
    /// The exact source text this element was parsed from.
    pub fn raw(&self) -> &str {
        match self {
            Item::Text(text) => text,
            Item::Metadata(metadata) => &metadata.raw,
            Item::Ingredient(ingredient) => &ingredient.raw,
            Item::Cookware(cookware) => &cookware.raw,
            Item::Timer(timer) => &timer.raw,
        }
    }
}

/// A single source line decomposed into an ordered mix of text runs and
/// annotation tokens.
///
/// A blank line decomposes to no items at all; a line holding only a
/// `>> key: value` form decomposes to exactly one [`Item::Metadata`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub raw: String,
    pub items: Vec<Item>,
}

impl Step {
    /// Decomposes one comment-stripped line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        Ok(Step {
            raw: line.to_string(),
            items: decompose(line)?,
        })
    }

    /// Whether the line contributed nothing (blank or whitespace only).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line's metadata entry, if it is a pure metadata line.
    pub fn as_metadata(&self) -> Option<&Metadata> {
        match self.items.as_slice() {
            [Item::Metadata(metadata)] => Some(metadata),
            _ => None,
        }
    }
}

/// Recursively splits a line into text fragments and annotation tokens.
///
/// Metadata is checked first and short-circuits annotation scanning, so a
/// metadata token never mixes with other items. Annotations are then tried
/// in fixed priority order: ingredient, cookware, timer. Priority, not
/// position in the line, decides which pattern is scanned first.
fn decompose(line: &str) -> Result<Vec<Item>, ParseError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }
    if let Some(caps) = METADATA_RE.captures(line) {
        return Ok(vec![Item::Metadata(Metadata::from_captures(&caps)?)]);
    }

    let matched = if let Some(caps) = INGREDIENT_RE.captures(line) {
        Some(Item::Ingredient(Ingredient::from_captures(&caps)?))
    } else if let Some(caps) = COOKWARE_RE.captures(line) {
        Some(Item::Cookware(Cookware::from_captures(&caps)?))
    } else if let Some(caps) = TIMER_RE.captures(line) {
        Some(Item::Timer(Timer::from_captures(&caps)?))
    } else {
        None
    };

    let Some(item) = matched else {
        // No sigil pattern anywhere: the whole line is plain text.
        return Ok(vec![Item::Text(line.to_string())]);
    };
    trace!("matched {:?} in line {:?}", item.raw(), line);

    // Split on the first occurrence of the matched raw span and decompose
    // both remainders. Each remainder is strictly shorter than the line, so
    // the recursion terminates; blank remainders contribute no items.
    let mut items = Vec::new();
    match line.split_once(item.raw()) {
        Some((left, right)) => {
            if !left.is_empty() {
                items.extend(decompose(left)?);
            }
            items.push(item);
            if !right.is_empty() {
                items.extend(decompose(right)?);
            }
        }
        // A token's raw span is always a literal substring of its line.
        None => items.push(item),
    }
    Ok(items)
}
