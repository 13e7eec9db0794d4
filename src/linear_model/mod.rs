//! Linear models for BMI regression.
//!
//! This module provides:
//! - `CorrelationRegression`: a two-feature model (height, weight) whose
//!   coefficients are correlation coefficients with BMI scaled by fixed
//!   constants, with an intercept that centers the fit on the sample means
//!
//! # Examples
//!
//! ```rust
//! use bmi_ml::{CorrelationRegression, SampleSet};
//!
//! let mut samples = SampleSet::new();
//! samples.push(1.70, 60.0).unwrap();
//! samples.push(1.80, 80.0).unwrap();
//! samples.push(1.60, 50.0).unwrap();
//!
//! let model = CorrelationRegression::fit(&samples).unwrap();
//! let bmi = model.predict_one(1.75, 70.0);
//! assert!(bmi.is_finite());
//! println!("{}", model.equation(samples.len()));
//! ```

mod correlation;

pub use correlation::{
    CorrelationRegression, EquationSummary, HEIGHT_SCALE, MIN_SAMPLES, WEIGHT_SCALE,
};
