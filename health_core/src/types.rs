//! Core domain types for the healthcalc system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Gender, as accepted by the Lorentz ideal body weight formula
//! - BMI classification categories and their display labels

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Gender marker used by the Lorentz ideal body weight formula.
///
/// On input the two admissible symbols are `'H'` (men) and `'M'` (women).
/// Matching is strict: lowercase or any other character is rejected.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender from its single-character input symbol.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'H' => Ok(Gender::Male),
            'M' => Ok(Gender::Female),
            _ => Err(Error::InvalidInput(
                "Gender must be 'H' (Men) or 'M' (Women).".to_string(),
            )),
        }
    }

    /// The input symbol this gender was parsed from
    pub fn symbol(&self) -> char {
        match self {
            Gender::Male => 'H',
            Gender::Female => 'M',
        }
    }
}

/// BMI classification bucket
///
/// Buckets are half-open with the lower bound inclusive, so boundary
/// values belong to the upper bucket (25.0 is Overweight, 30.0 is Obesity).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Human-readable classification label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_valid_symbols() {
        assert_eq!(Gender::from_symbol('H').unwrap(), Gender::Male);
        assert_eq!(Gender::from_symbol('M').unwrap(), Gender::Female);
    }

    #[test]
    fn test_gender_rejects_other_symbols() {
        for symbol in ['X', 'A', 'h', 'm', ' '] {
            let err = Gender::from_symbol(symbol).unwrap_err();
            match err {
                Error::InvalidInput(msg) => {
                    assert_eq!(msg, "Gender must be 'H' (Men) or 'M' (Women).")
                }
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_gender_symbol_roundtrip() {
        for symbol in ['H', 'M'] {
            assert_eq!(Gender::from_symbol(symbol).unwrap().symbol(), symbol);
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BmiCategory::Underweight.label(), "Underweight");
        assert_eq!(BmiCategory::NormalWeight.label(), "Normal weight");
        assert_eq!(BmiCategory::Overweight.label(), "Overweight");
        assert_eq!(BmiCategory::Obesity.label(), "Obesity");
    }

    #[test]
    fn test_category_display_matches_label() {
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
    }
}
