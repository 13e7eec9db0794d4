//! Record height/weight samples, fit a two-feature BMI model, and compare its
//! predictions with the closed-form BMI formula.
//!
//! ```rust
//! use bmi_ml::{BmiCalculator, Category};
//!
//! let mut calculator = BmiCalculator::new();
//! calculator.add_sample(1.70, 60.0).unwrap();
//! calculator.add_sample(1.80, 80.0).unwrap();
//! calculator.add_sample(1.60, 50.0).unwrap();
//!
//! let summary = calculator.fit().unwrap();
//! println!("{summary}");
//!
//! let prediction = calculator.predict(1.75, 70.0).unwrap();
//! assert_eq!(prediction.class_formula, Category::Normal);
//! ```

pub use ndarray::Array1;

pub mod calculator;
pub mod classification;
pub mod config;
pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod plot;
pub mod session;

pub use calculator::{BmiCalculator, Prediction};
pub use classification::{Category, classify};
pub use dataset::{Sample, SampleSet};
pub use error::{BmiError, MetricsError};
pub use linear_model::{CorrelationRegression, EquationSummary};
pub use metrics::Metrics;

pub type Vector = Array1<f64>;
