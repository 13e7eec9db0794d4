use bmi_ml::BmiCalculator;
use bmi_ml::dataset::synthetic;
use bmi_ml::plot::PlotData;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut calculator = BmiCalculator::new();
    for (height, weight) in synthetic(30, 2024)? {
        calculator.add_sample(height, weight)?;
    }
    println!("{}", calculator.fit()?);

    // Metrics are only refreshed by fit().
    calculator.add_sample(1.60, 120.0)?;
    let stale = *calculator.metrics().ok_or("model not fitted")?;
    println!(
        "after add: {} samples, metrics still cover {} (mae={:.4})",
        calculator.samples().len(),
        stale.n_samples,
        stale.mae
    );

    calculator.fit()?;
    let fresh = calculator.metrics().ok_or("model not fitted")?;
    println!("after refit: metrics cover {} (mae={:.4})\n", fresh.n_samples, fresh.mae);

    print!("{}", PlotData::from_calculator(&calculator)?.render(10));
    Ok(())
}
