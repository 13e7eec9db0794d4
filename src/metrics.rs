use crate::Vector;
use crate::error::MetricsError;

/// Evaluation metrics of a fitted model over the samples it was fitted on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub mae: f64,
    pub mse: f64,
    pub r2: f64,
    /// Number of samples the metrics were computed over.
    pub n_samples: usize,
}

impl Metrics {
    pub fn evaluate(y_true: &Vector, y_pred: &Vector) -> Result<Self, MetricsError> {
        Ok(Self {
            mae: mean_absolute_error(y_true, y_pred)?,
            mse: mean_squared_error(y_true, y_pred)?,
            r2: r2_score(y_true, y_pred)?,
            n_samples: y_true.len(),
        })
    }
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<(), MetricsError> {
    if y_true.len() != y_pred.len() {
        return Err(MetricsError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(MetricsError::Empty);
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, MetricsError> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    diff.mapv(|x| x * x).mean().ok_or(MetricsError::Empty)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, MetricsError> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    diff.mapv(f64::abs).mean().ok_or(MetricsError::Empty)
}

/// Coefficient of determination. Defined as `1.0` when `y_true` has no spread.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, MetricsError> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.mean().ok_or(MetricsError::Empty)?;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot > 0.0 {
        Ok(1.0 - ss_res / ss_tot)
    } else {
        Ok(1.0)
    }
}
