#![forbid(unsafe_code)]

//! Core validation and formula logic for the healthcalc system.
//!
//! This crate provides:
//! - Domain types (gender, BMI classification categories)
//! - Metric computations (BMI, BMI classification, ideal body weight)
//! - Range validation with message-carrying errors

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod metrics;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use metrics::{bmi, bmi_classification, ideal_body_weight};
