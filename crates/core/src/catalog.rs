//! Canonical catalog enumerations.
//!
//! These are the single source of truth for the `difficulty` and
//! `unit` value sets, on the wire (serde) and in the database (CHECK
//! constraints in the initial migration use the same strings).
//! Legacy spellings from older data sets (`Fácil`, `gr`, `unidades`)
//! are a migration concern and are rejected at deserialization.

use serde::{Deserialize, Serialize};

/// How hard a recipe is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The canonical string stored in `recipes.difficulty`.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Measurement unit for an ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    /// Countable pieces (eggs, lemons).
    Unit,
}

impl Unit {
    /// The canonical string stored in `ingredients.unit`.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Milliliter => "milliliter",
            Unit::Liter => "liter",
            Unit::Unit => "unit",
        }
    }
}
