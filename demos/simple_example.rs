use bmi_ml::{BmiCalculator, BmiError};

fn main() -> Result<(), BmiError> {
    println!("=== BMI Model Example ===\n");

    let training = [(1.70, 60.0), (1.80, 80.0), (1.60, 50.0), (1.75, 72.5), (1.65, 68.0)];

    let mut calculator = BmiCalculator::new();
    for (height, weight) in training {
        let sample = calculator.add_sample(height, weight)?;
        println!("height={height:.2} weight={weight:.1} -> {sample}");
    }

    let summary = calculator.fit()?;
    println!("\n{summary}");

    if let Some(metrics) = calculator.metrics() {
        println!("MAE: {:.4}", metrics.mae);
        println!("MSE: {:.4}", metrics.mse);
        println!("R² score: {:.4}", metrics.r2);
    }

    println!("\nPredictions vs formula:");
    for (height, weight) in [(1.72, 64.0), (1.90, 95.0)] {
        let p = calculator.predict(height, weight)?;
        println!("height={height:.2} weight={weight:.1}:");
        println!(
            "  model={:.2} ({}), formula={:.2} ({}), diff={:.2}",
            p.bmi_model, p.class_model, p.bmi_formula, p.class_formula, p.difference
        );
    }

    Ok(())
}
