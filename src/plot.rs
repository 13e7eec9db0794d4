//! Data behind the predicted-vs-real scatter and the absolute error histogram.
//!
//! Nothing here fits or scores a model. The current coefficients are
//! evaluated on every current sample, including samples added after the
//! last fit.

use std::fmt::Write;

use crate::Vector;
use crate::calculator::BmiCalculator;
use crate::error::BmiError;

const BAR_WIDTH: usize = 40;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotData {
    pub real: Vector,
    pub predicted: Vector,
    pub abs_errors: Vector,
}

/// Equal-width bins; `edges` has one more entry than `counts`.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl PlotData {
    pub fn from_calculator(calculator: &BmiCalculator) -> Result<Self, BmiError> {
        let model = calculator.model().ok_or(BmiError::NotTrained)?;
        let samples = calculator.samples();
        if samples.is_empty() {
            return Err(BmiError::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        let real = samples.real_bmis();
        let predicted = model.predict(samples);
        let abs_errors = (&real - &predicted).mapv(f64::abs);

        Ok(Self {
            real,
            predicted,
            abs_errors,
        })
    }

    /// End points of the perfect-prediction line, `(min, max)` of real BMI.
    pub fn identity_line(&self) -> (f64, f64) {
        min_max(&self.real)
    }

    /// Histogram of absolute errors with `min(max_bins, n)` bins.
    pub fn error_histogram(&self, max_bins: usize) -> Histogram {
        let bins = max_bins.min(self.abs_errors.len()).max(1);
        let (mut lo, mut hi) = min_max(&self.abs_errors);
        if hi <= lo {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;

        let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0; bins];
        for &e in self.abs_errors.iter() {
            // The last bin is closed on the right.
            let idx = (((e - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Histogram { edges, counts }
    }

    pub fn render(&self, max_bins: usize) -> String {
        let mut out = String::new();
        let (lo, hi) = self.identity_line();

        let _ = writeln!(out, "Predicted vs real BMI (perfect prediction from {lo:.2} to {hi:.2})");
        let _ = writeln!(out, "{:>4}  {:>8}  {:>9}  {:>7}", "#", "real", "predicted", "error");
        for (i, ((r, p), e)) in self
            .real
            .iter()
            .zip(self.predicted.iter())
            .zip(self.abs_errors.iter())
            .enumerate()
        {
            let _ = writeln!(out, "{:>4}  {r:>8.2}  {p:>9.2}  {e:>7.2}", i + 1);
        }

        let histogram = self.error_histogram(max_bins);
        let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
        let _ = writeln!(out, "\nAbsolute error distribution");
        let last = histogram.counts.len() - 1;
        for (i, &count) in histogram.counts.iter().enumerate() {
            let bar = "#".repeat(count * BAR_WIDTH / peak);
            let close = if i == last { ']' } else { ')' };
            let _ = writeln!(
                out,
                "[{:>7.3}, {:>7.3}{close} {count:>4} {bar}",
                histogram.edges[i],
                histogram.edges[i + 1]
            );
        }
        out
    }
}

fn min_max(values: &Vector) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
