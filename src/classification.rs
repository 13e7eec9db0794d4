//! BMI categories and interpretation bands for model accuracy.
//!
//! All thresholds are half-open and evaluated in order, so every real value
//! lands in exactly one band.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a BMI value. Values at or above 30 (and NaN) are `Obese`.
pub fn classify(bmi: f64) -> Category {
    if bmi < 18.5 {
        Category::Underweight
    } else if bmi < 25.0 {
        Category::Normal
    } else if bmi < 30.0 {
        Category::Overweight
    } else {
        Category::Obese
    }
}

/// How close a single prediction came to the closed-form BMI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictionQuality {
    Excellent,
    Good,
    Fair,
    NeedsMoreData,
}

impl PredictionQuality {
    pub fn from_difference(difference: f64) -> Self {
        if difference < 0.5 {
            PredictionQuality::Excellent
        } else if difference < 1.0 {
            PredictionQuality::Good
        } else if difference < 2.0 {
            PredictionQuality::Fair
        } else {
            PredictionQuality::NeedsMoreData
        }
    }
}

impl fmt::Display for PredictionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PredictionQuality::Excellent => {
                "Excellent: the model predicts with very high precision"
            }
            PredictionQuality::Good => "Good: the model has good precision",
            PredictionQuality::Fair => "Fair: the model has acceptable precision",
            PredictionQuality::NeedsMoreData => "The model needs more training data",
        };
        f.write_str(text)
    }
}

/// Accuracy band derived from the mean absolute error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accuracy {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Accuracy {
    pub fn from_mae(mae: f64) -> Self {
        if mae < 1.0 {
            Accuracy::Excellent
        } else if mae < 2.0 {
            Accuracy::Good
        } else if mae < 3.0 {
            Accuracy::Fair
        } else {
            Accuracy::Poor
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Accuracy::Excellent => "Excellent: the model predicts BMI with very high precision",
            Accuracy::Good => "Good: the model has good precision",
            Accuracy::Fair => "Fair: the model has acceptable precision",
            Accuracy::Poor => "Poor: the model needs more data",
        };
        f.write_str(text)
    }
}

/// Share of BMI variability the model explains, from R².
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplainedVariance {
    AboveNinety,
    AboveSeventy,
    BelowSeventy,
}

impl ExplainedVariance {
    pub fn from_r2(r2: f64) -> Self {
        if r2 > 0.9 {
            ExplainedVariance::AboveNinety
        } else if r2 > 0.7 {
            ExplainedVariance::AboveSeventy
        } else {
            ExplainedVariance::BelowSeventy
        }
    }
}

impl fmt::Display for ExplainedVariance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ExplainedVariance::AboveNinety => "The model explains more than 90% of the variability",
            ExplainedVariance::AboveSeventy => {
                "The model explains more than 70% of the variability"
            }
            ExplainedVariance::BelowSeventy => {
                "The model explains less than 70% of the variability"
            }
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(18.499), Category::Underweight);
        assert_eq!(classify(18.5), Category::Normal);
        assert_eq!(classify(24.999), Category::Normal);
        assert_eq!(classify(25.0), Category::Overweight);
        assert_eq!(classify(29.999), Category::Overweight);
        assert_eq!(classify(30.0), Category::Obese);
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify(-5.0), Category::Underweight);
        assert_eq!(classify(1e9), Category::Obese);
        assert_eq!(classify(f64::NAN), Category::Obese);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Normal.to_string(), "Normal");
        assert_eq!(classify(31.0).label(), "Obese");
    }

    #[test]
    fn test_prediction_quality_bands() {
        assert_eq!(PredictionQuality::from_difference(0.0), PredictionQuality::Excellent);
        assert_eq!(PredictionQuality::from_difference(0.5), PredictionQuality::Good);
        assert_eq!(PredictionQuality::from_difference(1.0), PredictionQuality::Fair);
        assert_eq!(PredictionQuality::from_difference(2.0), PredictionQuality::NeedsMoreData);
    }

    #[test]
    fn test_accuracy_and_variance_bands() {
        assert_eq!(Accuracy::from_mae(0.99), Accuracy::Excellent);
        assert_eq!(Accuracy::from_mae(2.5), Accuracy::Fair);
        assert_eq!(Accuracy::from_mae(3.0), Accuracy::Poor);

        assert_eq!(ExplainedVariance::from_r2(0.95), ExplainedVariance::AboveNinety);
        assert_eq!(ExplainedVariance::from_r2(0.9), ExplainedVariance::AboveSeventy);
        assert_eq!(ExplainedVariance::from_r2(0.7), ExplainedVariance::BelowSeventy);
    }
}
