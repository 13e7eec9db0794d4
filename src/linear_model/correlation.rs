use std::fmt;

use crate::Vector;
use crate::dataset::SampleSet;
use crate::error::BmiError;

pub const MIN_SAMPLES: usize = 3;
pub const HEIGHT_SCALE: f64 = 10.0;
pub const WEIGHT_SCALE: f64 = 0.5;

/// Two-feature BMI model whose slopes are Pearson correlations with BMI
/// multiplied by fixed constants. This is not a least-squares solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorrelationRegression {
    pub coef_height: f64,
    pub coef_weight: f64,
    pub intercept: f64,
}

/// Running sums of one feature against BMI.
#[derive(Default)]
struct PairSums {
    sum_x: f64,
    sum_x2: f64,
    sum_xy: f64,
}

impl PairSums {
    fn add(&mut self, x: f64, y: f64) {
        self.sum_x += x;
        self.sum_x2 += x * x;
        self.sum_xy += x * y;
    }

    fn correlation(&self, n: f64, sum_y: f64, sum_y2: f64, feature: &str) -> Result<f64, BmiError> {
        let numerator = n * self.sum_xy - self.sum_x * sum_y;
        let radicand = (n * self.sum_x2 - self.sum_x * self.sum_x) * (n * sum_y2 - sum_y * sum_y);

        if radicand.is_nan() || radicand <= 0.0 {
            return Err(BmiError::DegenerateInput {
                context: format!(
                    "{feature}/BMI correlation denominator is not positive ({radicand:e})"
                ),
            });
        }

        Ok(numerator / radicand.sqrt())
    }
}

impl CorrelationRegression {
    pub fn fit(samples: &SampleSet) -> Result<Self, BmiError> {
        if samples.len() < MIN_SAMPLES {
            return Err(BmiError::InsufficientData {
                required: MIN_SAMPLES,
                available: samples.len(),
            });
        }

        let n = samples.len() as f64;
        let mut height = PairSums::default();
        let mut weight = PairSums::default();
        let mut sum_bmi = 0.0;
        let mut sum_bmi2 = 0.0;

        for sample in samples.iter() {
            height.add(sample.height, sample.real_bmi);
            weight.add(sample.weight, sample.real_bmi);
            sum_bmi += sample.real_bmi;
            sum_bmi2 += sample.real_bmi * sample.real_bmi;
        }

        let corr_height = height.correlation(n, sum_bmi, sum_bmi2, "height")?;
        let corr_weight = weight.correlation(n, sum_bmi, sum_bmi2, "weight")?;

        let coef_height = corr_height * HEIGHT_SCALE;
        let coef_weight = corr_weight * WEIGHT_SCALE;
        let intercept = (sum_bmi - coef_height * height.sum_x - coef_weight * weight.sum_x) / n;

        if !(coef_height.is_finite() && coef_weight.is_finite() && intercept.is_finite()) {
            return Err(BmiError::DegenerateInput {
                context: "fitted coefficients are not finite".to_string(),
            });
        }

        Ok(Self {
            coef_height,
            coef_weight,
            intercept,
        })
    }

    pub fn predict_one(&self, height: f64, weight: f64) -> f64 {
        self.coef_height * height + self.coef_weight * weight + self.intercept
    }

    pub fn predict(&self, samples: &SampleSet) -> Vector {
        samples
            .iter()
            .map(|s| self.predict_one(s.height, s.weight))
            .collect()
    }

    pub fn equation(&self, samples_used: usize) -> EquationSummary {
        EquationSummary {
            coef_height: self.coef_height,
            coef_weight: self.coef_weight,
            intercept: self.intercept,
            samples_used,
        }
    }
}

/// Result of a successful fit, printable as the model equation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquationSummary {
    pub coef_height: f64,
    pub coef_weight: f64,
    pub intercept: f64,
    pub samples_used: usize,
}

impl EquationSummary {
    pub fn equation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EquationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BMI = {:.4} * height + {:.4} * weight + {:.4}",
            self.coef_height, self.coef_weight, self.intercept
        )
    }
}
