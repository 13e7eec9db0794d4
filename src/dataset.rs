use std::fmt;

use log::debug;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Normal, NormalError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::Vector;
use crate::error::BmiError;

pub const MAX_HEIGHT: f64 = 3.0;
pub const MAX_WEIGHT: f64 = 500.0;

/// Closed-form BMI: weight (kg) over height (m) squared.
pub fn real_bmi(height: f64, weight: f64) -> f64 {
    weight / (height * height)
}

/// Checks `0 < height <= 3.0` and `0 < weight <= 500`. NaN fails.
pub fn validate_range(height: f64, weight: f64) -> Result<(), BmiError> {
    let height_ok = height > 0.0 && height <= MAX_HEIGHT;
    let weight_ok = weight > 0.0 && weight <= MAX_WEIGHT;
    if height_ok && weight_ok {
        Ok(())
    } else {
        Err(BmiError::OutOfRange { height, weight })
    }
}

/// One recorded observation and its derived BMI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub height: f64,
    pub weight: f64,
    pub real_bmi: f64,
}

impl Sample {
    pub fn new(height: f64, weight: f64) -> Result<Self, BmiError> {
        validate_range(height, weight)?;

        // Heights close enough to zero overflow the division.
        let bmi = real_bmi(height, weight);
        if !bmi.is_finite() {
            return Err(BmiError::OutOfRange { height, weight });
        }

        Ok(Self {
            height,
            weight,
            real_bmi: bmi,
        })
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BMI: {:.2}", self.real_bmi)
    }
}

/// Append-only, insertion-ordered collection of samples.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a sample. Nothing is stored on error.
    pub fn push(&mut self, height: f64, weight: f64) -> Result<Sample, BmiError> {
        let sample = Sample::new(height, weight)?;
        self.samples.push(sample);
        debug!(
            "sample #{} added: height={height} weight={weight} bmi={:.4}",
            self.samples.len(),
            sample.real_bmi
        );
        Ok(sample)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn heights(&self) -> Vector {
        self.samples.iter().map(|s| s.height).collect()
    }

    pub fn weights(&self) -> Vector {
        self.samples.iter().map(|s| s.weight).collect()
    }

    pub fn real_bmis(&self) -> Vector {
        self.samples.iter().map(|s| s.real_bmi).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntheticError {
    #[error("invalid sampling distribution: {0}")]
    Distribution(#[from] NormalError),
}

/// Draws `n` plausible `(height, weight)` pairs from a seeded RNG.
///
/// Heights are rounded to centimeters and weights to 100 g, so the pairs look
/// like hand-entered values and always pass [`validate_range`].
pub fn synthetic(n: usize, seed: u64) -> Result<Vec<(f64, f64)>, SyntheticError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let heights = Vector::random_using(n, Normal::new(1.70, 0.10)?, &mut rng)
        .mapv(|h| ((h * 100.0).round() / 100.0).clamp(1.40, 2.10));
    let bmis = Vector::random_using(n, Normal::new(24.0, 4.0)?, &mut rng)
        .mapv(|b| b.clamp(16.0, 40.0));

    Ok(heights
        .iter()
        .zip(bmis.iter())
        .map(|(&h, &bmi)| (h, (bmi * h * h * 10.0).round() / 10.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_creation() {
        let sample = Sample::new(1.75, 70.0).unwrap();
        assert_relative_eq!(sample.real_bmi, 22.857142857142858, epsilon = 1e-12);
        assert_eq!(sample.to_string(), "BMI: 22.86");
    }

    #[test]
    fn test_range_bounds() {
        assert!(validate_range(3.0, 500.0).is_ok());
        assert!(validate_range(0.0, 70.0).is_err());
        assert!(validate_range(3.01, 70.0).is_err());
        assert!(validate_range(1.75, 0.0).is_err());
        assert!(validate_range(1.75, 501.0).is_err());
        assert!(validate_range(f64::NAN, 70.0).is_err());
        assert!(validate_range(1.75, f64::NAN).is_err());
    }

    #[test]
    fn test_push_rejects_without_mutation() {
        let mut set = SampleSet::new();
        set.push(1.70, 60.0).unwrap();

        let err = set.push(1.75, 501.0).unwrap_err();
        assert_eq!(
            err,
            BmiError::OutOfRange {
                height: 1.75,
                weight: 501.0
            }
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_push_rejects_overflowing_bmi() {
        let mut set = SampleSet::new();
        set.push(1.70, 60.0).unwrap();

        assert_eq!(
            set.push(1e-200, 70.0),
            Err(BmiError::OutOfRange {
                height: 1e-200,
                weight: 70.0
            })
        );
        assert_eq!(set.len(), 1);
        assert!(set.iter().all(|s| s.real_bmi.is_finite()));
    }

    #[test]
    fn test_insertion_order_and_vectors() {
        let mut set = SampleSet::new();
        set.push(1.70, 60.0).unwrap();
        set.push(1.80, 80.0).unwrap();
        set.push(1.60, 50.0).unwrap();

        assert_eq!(set.heights().to_vec(), vec![1.70, 1.80, 1.60]);
        assert_eq!(set.weights().to_vec(), vec![60.0, 80.0, 50.0]);
        assert_relative_eq!(set.real_bmis()[2], 50.0 / (1.60 * 1.60));
    }

    #[test]
    fn test_synthetic_is_deterministic_and_valid() {
        let a = synthetic(50, 7).unwrap();
        let b = synthetic(50, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);

        for &(h, w) in &a {
            assert!(validate_range(h, w).is_ok(), "invalid pair ({h}, {w})");
        }
    }
}
