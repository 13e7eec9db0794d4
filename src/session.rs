//! Line-oriented text front end over a [`BmiCalculator`].
//!
//! A `Session` owns the calculator it is given and turns commands such as
//! `add 1.75 70` into calls on it. Parsing failures are reported as
//! [`SessionError::InputFormat`], separate from the model's range errors.

use std::fmt::Write;

use log::{debug, warn};
use thiserror::Error;

use crate::calculator::{BmiCalculator, Prediction};
use crate::classification::{Accuracy, ExplainedVariance};
use crate::config::AppConfig;
use crate::dataset::{self, SyntheticError};
use crate::error::BmiError;
use crate::plot::PlotData;

/// Upper bound for one `synthetic` command.
pub const MAX_SYNTHETIC: usize = 100_000;

const HELP: &str = "\
Commands:
  add H W       record a sample (height in m, weight in kg)
  fit           fit the model on all samples
  predict H W   compare the model against the BMI formula
  data          list recorded samples
  metrics       show metrics from the last fit
  plot          predicted vs real BMI and error histogram
  status        sample count and model state
  synthetic N   add N generated samples
  help          this text
  quit          leave the session";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("enter a valid number for {field} (got '{value}')")]
    InputFormat { field: &'static str, value: String },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("cannot generate {requested} samples at once (max {max})")]
    TooManySamples { requested: usize, max: usize },

    #[error("unknown command '{0}', type 'help' for the list")]
    UnknownCommand(String),

    #[error(transparent)]
    Model(#[from] BmiError),

    #[error(transparent)]
    Synthetic(#[from] SyntheticError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct Session {
    calculator: BmiCalculator,
    config: AppConfig,
    synthetic_runs: u64,
}

impl Session {
    pub fn new(calculator: BmiCalculator, config: AppConfig) -> Self {
        Self {
            calculator,
            config,
            synthetic_runs: 0,
        }
    }

    pub fn calculator(&self) -> &BmiCalculator {
        &self.calculator
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn handle(&mut self, line: &str) -> Result<Reply, SessionError> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(Reply::Text(String::new()));
        };
        debug!("command: {line}");

        let text = match command.to_ascii_lowercase().as_str() {
            "add" => {
                let (height, weight) = parse_pair(&mut parts)?;
                let sample = self.calculator.add_sample(height, weight)?;
                format!("Sample added. {sample}")
            }
            "fit" => {
                let summary = self.calculator.fit()?;
                format!("Model trained successfully!\n{summary}")
            }
            "predict" => {
                let (height, weight) = parse_pair(&mut parts)?;
                render_prediction(&self.calculator.predict(height, weight)?)
            }
            "data" => self.render_samples(),
            "metrics" => self.render_metrics(),
            "plot" => {
                PlotData::from_calculator(&self.calculator)?.render(self.config.histogram_bins)
            }
            "status" => self.calculator.status(),
            "synthetic" => {
                let raw = parts.next().ok_or(SessionError::MissingArgument("count"))?;
                let count: usize = raw.parse().map_err(|_| SessionError::InputFormat {
                    field: "count",
                    value: raw.to_string(),
                })?;
                if count > MAX_SYNTHETIC {
                    return Err(SessionError::TooManySamples {
                        requested: count,
                        max: MAX_SYNTHETIC,
                    });
                }
                self.add_synthetic(count)?
            }
            "help" => HELP.to_string(),
            "quit" | "exit" => return Ok(Reply::Quit),
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };

        Ok(Reply::Text(text))
    }

    fn add_synthetic(&mut self, count: usize) -> Result<String, SessionError> {
        let seed = self.config.synthetic_seed.wrapping_add(self.synthetic_runs);
        self.synthetic_runs += 1;

        for (height, weight) in dataset::synthetic(count, seed)? {
            self.calculator.add_sample(height, weight)?;
        }
        Ok(format!(
            "{count} synthetic samples added ({} total)",
            self.calculator.samples().len()
        ))
    }

    fn render_samples(&self) -> String {
        let samples = self.calculator.samples();
        if samples.is_empty() {
            return "No samples recorded".to_string();
        }

        let mut out = format!(
            "{:>4}  {:>10}  {:>11}  {:>6}  {}",
            "ID", "Height (m)", "Weight (kg)", "BMI", "Category"
        );
        for (i, s) in samples.iter().enumerate() {
            let _ = write!(
                out,
                "\n{:>4}  {:>10.2}  {:>11.1}  {:>6.2}  {}",
                i + 1,
                s.height,
                s.weight,
                s.real_bmi,
                self.calculator.classify(s.real_bmi)
            );
        }
        out
    }

    fn render_metrics(&self) -> String {
        let Some(m) = self.calculator.metrics() else {
            return "Fit the model first to see metrics".to_string();
        };

        let mut out = String::from("Evaluation metrics:\n");
        let _ = writeln!(out, "  Mean absolute error (MAE): {:.4}", m.mae);
        let _ = writeln!(out, "  Mean squared error (MSE): {:.4}", m.mse);
        let _ = writeln!(out, "  Coefficient of determination (R²): {:.4}", m.r2);
        let _ = writeln!(out, "  Samples evaluated: {}", m.n_samples);
        let _ = writeln!(out, "{}", Accuracy::from_mae(m.mae));
        let _ = write!(out, "{}", ExplainedVariance::from_r2(m.r2));

        let current = self.calculator.samples().len();
        if current != m.n_samples {
            warn!("metrics cover {} of {current} samples", m.n_samples);
            let _ = write!(
                out,
                "\n{} samples added since the last fit; run 'fit' to refresh",
                current - m.n_samples
            );
        }
        out
    }
}

fn parse_number(raw: Option<&str>, field: &'static str) -> Result<f64, SessionError> {
    let raw = raw.ok_or(SessionError::MissingArgument(field))?;
    raw.parse().map_err(|_| SessionError::InputFormat {
        field,
        value: raw.to_string(),
    })
}

fn parse_pair<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<(f64, f64), SessionError> {
    let height = parse_number(parts.next(), "height")?;
    let weight = parse_number(parts.next(), "weight")?;
    Ok((height, weight))
}

fn render_prediction(p: &Prediction) -> String {
    format!(
        "Input: height {:.2} m, weight {:.1} kg\n\
         Model BMI: {:.2}\n\
         Formula BMI: {:.2}\n\
         Difference: {:.2}\n\
         Model category: {}\n\
         Formula category: {}\n\
         {}",
        p.height,
        p.weight,
        p.bmi_model,
        p.bmi_formula,
        p.difference,
        p.class_model,
        p.class_formula,
        p.quality()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(BmiCalculator::new(), AppConfig::default())
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    fn trained_session() -> Session {
        let mut s = session();
        for line in ["add 1.70 60", "add 1.80 80", "add 1.60 50", "fit"] {
            s.handle(line).unwrap();
        }
        s
    }

    #[test]
    fn test_add_reports_bmi() {
        let mut s = session();
        let reply = text(s.handle("add 1.75 70").unwrap());
        assert_eq!(reply, "Sample added. BMI: 22.86");
        assert_eq!(s.calculator().samples().len(), 1);
    }

    #[test]
    fn test_non_numeric_input() {
        let mut s = session();
        let err = s.handle("add abc 70").unwrap_err();
        assert!(matches!(err, SessionError::InputFormat { field: "height", .. }));

        let err = s.handle("predict 1.75 heavy").unwrap_err();
        assert!(matches!(err, SessionError::InputFormat { field: "weight", .. }));
        assert!(s.calculator().samples().is_empty());
    }

    #[test]
    fn test_missing_argument() {
        let mut s = session();
        assert!(matches!(
            s.handle("add 1.75"),
            Err(SessionError::MissingArgument("weight"))
        ));
    }

    #[test]
    fn test_model_errors_pass_through() {
        let mut s = session();
        assert!(matches!(
            s.handle("add 0 70"),
            Err(SessionError::Model(BmiError::OutOfRange { .. }))
        ));
        assert!(matches!(
            s.handle("predict 1.75 70"),
            Err(SessionError::Model(BmiError::NotTrained))
        ));
        assert!(matches!(
            s.handle("fit"),
            Err(SessionError::Model(BmiError::InsufficientData { .. }))
        ));
    }

    #[test]
    fn test_fit_and_predict() {
        let mut s = trained_session();
        let reply = text(s.handle("predict 1.75 70").unwrap());
        assert!(reply.contains("Formula BMI: 22.86"));
        assert!(reply.contains("Formula category: Normal"));
    }

    #[test]
    fn test_fit_reply_contains_equation() {
        let mut s = session();
        for line in ["add 1.70 60", "add 1.80 80", "add 1.60 50"] {
            s.handle(line).unwrap();
        }
        let reply = text(s.handle("fit").unwrap());
        assert!(reply.starts_with("Model trained successfully!\nBMI = "));
    }

    #[test]
    fn test_metrics_flag_stale_samples() {
        let mut s = trained_session();
        let fresh = text(s.handle("metrics").unwrap());
        assert!(fresh.contains("Samples evaluated: 3"));
        assert!(!fresh.contains("since the last fit"));

        s.handle("add 1.90 110").unwrap();
        let stale = text(s.handle("metrics").unwrap());
        assert!(stale.contains("Samples evaluated: 3"));
        assert!(stale.contains("1 samples added since the last fit"));
    }

    #[test]
    fn test_data_table() {
        let mut s = trained_session();
        let table = text(s.handle("data").unwrap());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim_start().starts_with('1'));
        assert!(lines[2].ends_with("Normal"));
    }

    #[test]
    fn test_synthetic_and_plot() {
        let mut s = session();
        let reply = text(s.handle("synthetic 20").unwrap());
        assert_eq!(reply, "20 synthetic samples added (20 total)");

        s.handle("fit").unwrap();
        let plot = text(s.handle("plot").unwrap());
        assert!(plot.contains("Absolute error distribution"));
    }

    #[test]
    fn test_synthetic_count_is_bounded() {
        let mut s = session();
        assert!(matches!(
            s.handle("synthetic 10000000000"),
            Err(SessionError::TooManySamples {
                requested: 10_000_000_000,
                max: MAX_SYNTHETIC
            })
        ));
        assert!(matches!(
            s.handle("synthetic -3"),
            Err(SessionError::InputFormat { field: "count", .. })
        ));
        assert!(s.calculator().samples().is_empty());
    }

    #[test]
    fn test_blank_unknown_and_quit() {
        let mut s = session();
        assert_eq!(s.handle("   ").unwrap(), Reply::Text(String::new()));
        assert!(matches!(s.handle("train"), Err(SessionError::UnknownCommand(_))));
        assert_eq!(s.handle("QUIT").unwrap(), Reply::Quit);
    }
}
