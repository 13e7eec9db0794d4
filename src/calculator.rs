use log::{info, warn};

use crate::classification::{Category, PredictionQuality, classify};
use crate::dataset::{Sample, SampleSet};
use crate::error::BmiError;
use crate::linear_model::{CorrelationRegression, EquationSummary};
use crate::metrics::Metrics;

/// Model prediction next to the closed-form BMI for the same input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub height: f64,
    pub weight: f64,
    pub bmi_model: f64,
    pub bmi_formula: f64,
    pub difference: f64,
    pub class_model: Category,
    pub class_formula: Category,
}

impl Prediction {
    pub fn quality(&self) -> PredictionQuality {
        PredictionQuality::from_difference(self.difference)
    }
}

/// Sample store plus the most recent fitted model and its metrics.
///
/// Metrics are only recomputed by [`BmiCalculator::fit`]. Samples added after a
/// fit are not reflected until the next call.
#[derive(Clone, Debug, Default)]
pub struct BmiCalculator {
    samples: SampleSet,
    model: Option<CorrelationRegression>,
    metrics: Option<Metrics>,
}

impl BmiCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, height: f64, weight: f64) -> Result<Sample, BmiError> {
        self.samples.push(height, weight).inspect_err(|e| {
            warn!("sample rejected: {e}");
        })
    }

    /// Refits the model on every stored sample. On error the previous model
    /// and metrics are kept.
    pub fn fit(&mut self) -> Result<EquationSummary, BmiError> {
        let model = CorrelationRegression::fit(&self.samples)?;

        let predictions = model.predict(&self.samples);
        let metrics = Metrics::evaluate(&self.samples.real_bmis(), &predictions).map_err(|e| {
            BmiError::DegenerateInput {
                context: format!("metrics: {e}"),
            }
        })?;

        let summary = model.equation(self.samples.len());
        info!(
            "model fitted on {} samples: {summary} (mae={:.4}, mse={:.4}, r2={:.4})",
            self.samples.len(),
            metrics.mae,
            metrics.mse,
            metrics.r2
        );

        self.model = Some(model);
        self.metrics = Some(metrics);
        Ok(summary)
    }

    pub fn predict(&self, height: f64, weight: f64) -> Result<Prediction, BmiError> {
        let model = self.model.as_ref().ok_or(BmiError::NotTrained)?;
        let bmi_formula = Sample::new(height, weight)?.real_bmi;
        let bmi_model = model.predict_one(height, weight);

        Ok(Prediction {
            height,
            weight,
            bmi_model,
            bmi_formula,
            difference: (bmi_model - bmi_formula).abs(),
            class_model: classify(bmi_model),
            class_formula: classify(bmi_formula),
        })
    }

    pub fn classify(&self, bmi: f64) -> Category {
        classify(bmi)
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn model(&self) -> Option<&CorrelationRegression> {
        self.model.as_ref()
    }

    /// Metrics from the last successful fit, possibly stale.
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    pub fn status(&self) -> String {
        let state = if self.is_trained() { "trained" } else { "not trained" };
        format!("Samples available: {}\nModel: {state}", self.samples.len())
    }
}
