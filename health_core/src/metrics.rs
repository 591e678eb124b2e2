//! Anthropometric metric computations.
//!
//! Implements BMI, BMI classification, and the Lorentz ideal body weight
//! formula. Each operation validates its inputs against hard biological
//! limits before computing, failing fast with a message naming the
//! violated constraint. All operations are pure: no state, no I/O, and
//! repeated calls with the same inputs yield the same outputs.

use crate::{BmiCategory, Error, Gender, Result};

// Hard biological limits for input validation
const MIN_WEIGHT_KG: f64 = 1.0;
const MAX_WEIGHT_KG: f64 = 700.0;
const MIN_HEIGHT_M: f64 = 0.30;
const MAX_HEIGHT_M: f64 = 3.00;
const MIN_HEIGHT_CM: f64 = 30.0;
const MAX_HEIGHT_CM: f64 = 300.0;
const MAX_BMI: f64 = 150.0;

/// Compute Body Mass Index from weight in kilograms and height in meters.
///
/// Validation runs in order; the first violated constraint wins. The
/// result is `weight / height²` with no rounding applied.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<f64> {
    if weight_kg <= 0.0 {
        return Err(Error::InvalidInput("Weight must be positive.".to_string()));
    }
    if height_m <= 0.0 {
        return Err(Error::InvalidInput("Height must be positive.".to_string()));
    }
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(Error::InvalidInput(
            "Weight must be within a possible biological range [1-700] kg.".to_string(),
        ));
    }
    if !(MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&height_m) {
        return Err(Error::InvalidInput(
            "Height must be within a possible biological range [0.30-3.00] m.".to_string(),
        ));
    }

    let value = weight_kg / height_m.powi(2);
    tracing::debug!(weight_kg, height_m, bmi = value, "Computed BMI");
    Ok(value)
}

/// Classify a BMI value into its category.
///
/// Admissible input range is [0, 150].
pub fn bmi_classification(bmi: f64) -> Result<BmiCategory> {
    if bmi < 0.0 {
        return Err(Error::InvalidInput("BMI cannot be negative.".to_string()));
    }
    if bmi > MAX_BMI {
        return Err(Error::InvalidInput(
            "BMI must be within a possible biological range [0-150].".to_string(),
        ));
    }

    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    };

    tracing::debug!(bmi, category = category.label(), "Classified BMI");
    Ok(category)
}

/// Compute ideal body weight via the Lorentz formula.
///
/// Height is taken in centimeters. The gender term divides by 4 for men
/// and by 2 for women; at 150 cm it vanishes and both genders yield 50 kg.
pub fn ideal_body_weight(height_cm: f64, gender: Gender) -> Result<f64> {
    if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(Error::InvalidInput(
            "Height must be within a possible biological range [30-300] cm.".to_string(),
        ));
    }

    let divisor = match gender {
        Gender::Male => 4.0,
        Gender::Female => 2.0,
    };
    let value = (height_cm - 100.0) - (height_cm - 150.0) / divisor;

    tracing::debug!(height_cm, ?gender, ibw = value, "Computed ideal body weight");
    Ok(value)
}
