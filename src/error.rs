use thiserror::Error;

/// Errors returned by the BMI regression model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    /// Height or weight outside `(0, 3.0]` meters / `(0, 500]` kg.
    #[error("values out of valid range: height={height} m, weight={weight} kg")]
    OutOfRange { height: f64, weight: f64 },

    /// Fewer samples than the fit needs.
    #[error("at least {required} samples are needed to fit the model, got {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("the model must be fitted first")]
    NotTrained,

    /// A correlation denominator was zero or negative, usually because the
    /// samples are constant.
    #[error("degenerate input: {context}")]
    DegenerateInput { context: String },
}

/// Errors returned by the metric helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("y_true and y_pred must have the same length ({expected} != {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("metrics need at least one value")]
    Empty,
}
