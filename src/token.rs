//! The four annotation token types and their recognition patterns.

use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::LazyLock;

use crate::duration;
use crate::error::ParseError;

pub(crate) static INGREDIENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(?:([^@#~]+?)(?:\{(.*?)\}|\{\}))|@(.+?\b)").unwrap());

pub(crate) static COOKWARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?:([^@#~]+?)(?:\{\}))|#(.+?\b)").unwrap());

pub(crate) static TIMER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~\{([0-9]+(?:/[0-9]+)?)%(.+?)\}").unwrap());

pub(crate) static METADATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>>\s*(.*?):\s*(.*)$").unwrap());

/// An ingredient annotation: `@name`, `@name{}`, `@name{amount}` or
/// `@name{amount%unit}`.
///
/// The bare form only admits a single-word name; a multi-word name needs an
/// attribute block, even an empty one. `amount` and `unit` are `None` when
/// the block omits them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub raw: String,
    pub name: String,
    pub amount: Option<String>,
    pub unit: Option<String>,
}

impl Ingredient {
    /// Parses an ingredient from a candidate substring.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let caps = INGREDIENT_RE
            .captures(s)
            .ok_or_else(|| ParseError::MalformedIngredient(s.to_string()))?;
        Self::from_captures(&caps)
    }

    pub(crate) fn from_captures(caps: &Captures<'_>) -> Result<Self, ParseError> {
        let raw = whole_match(caps);
        let name = caps
            .get(1)
            .or_else(|| caps.get(3))
            .ok_or_else(|| ParseError::MalformedIngredient(raw.clone()))?
            .as_str()
            .trim()
            .to_string();
        // An empty attribute block carries no amount at all.
        let (amount, unit) = match caps.get(2).map(|m| m.as_str()).filter(|a| !a.is_empty()) {
            Some(attrs) => match attrs.split_once('%') {
                Some((amount, unit)) => (
                    Some(amount.trim().to_string()),
                    Some(unit.trim().to_string()),
                ),
                None => (Some(attrs.trim().to_string()), None),
            },
            None => (None, None),
        };
        Ok(Ingredient {
            raw,
            name,
            amount,
            unit,
        })
    }
}

/// A cookware annotation: `#name` or `#name{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cookware {
    pub raw: String,
    pub name: String,
}

impl Cookware {
    /// Parses a cookware item from a candidate substring.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let caps = COOKWARE_RE
            .captures(s)
            .ok_or_else(|| ParseError::MalformedCookware(s.to_string()))?;
        Self::from_captures(&caps)
    }

    pub(crate) fn from_captures(caps: &Captures<'_>) -> Result<Self, ParseError> {
        let raw = whole_match(caps);
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .ok_or_else(|| ParseError::MalformedCookware(raw.clone()))?
            .as_str()
            .trim()
            .to_string();
        Ok(Cookware { raw, name })
    }
}

/// A timer annotation: `~{amount%unit}`.
///
/// `seconds` is derived from `amount` and `unit` at construction time and
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timer {
    pub raw: String,
    pub amount: String,
    pub unit: String,
    pub seconds: f64,
}

impl Timer {
    /// Parses a timer from a candidate substring.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let caps = TIMER_RE
            .captures(s)
            .ok_or_else(|| ParseError::MalformedTimer(s.to_string()))?;
        Self::from_captures(&caps)
    }

    pub(crate) fn from_captures(caps: &Captures<'_>) -> Result<Self, ParseError> {
        let raw = whole_match(caps);
        let (amount, unit) = match (caps.get(1), caps.get(2)) {
            (Some(amount), Some(unit)) => (
                amount.as_str().trim().to_string(),
                unit.as_str().trim().to_string(),
            ),
            _ => return Err(ParseError::MalformedTimer(raw)),
        };
        let seconds = duration::normalize(&amount, &unit);
        Ok(Timer {
            raw,
            amount,
            unit,
            seconds,
        })
    }
}

/// A metadata annotation: a whole line of the form `>> key: value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub raw: String,
    pub key: String,
    pub value: String,
}

impl Metadata {
    /// Parses a metadata entry from a candidate line.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let caps = METADATA_RE
            .captures(s)
            .ok_or_else(|| ParseError::MalformedMetadata(s.to_string()))?;
        Self::from_captures(&caps)
    }

    pub(crate) fn from_captures(caps: &Captures<'_>) -> Result<Self, ParseError> {
        let raw = whole_match(caps);
        let (key, value) = match (caps.get(1), caps.get(2)) {
            (Some(key), Some(value)) => (
                key.as_str().trim().to_string(),
                value.as_str().trim().to_string(),
            ),
            _ => return Err(ParseError::MalformedMetadata(raw)),
        };
        Ok(Metadata { raw, key, value })
    }
}

fn whole_match(caps: &Captures<'_>) -> String {
    caps[0].to_string()
}
