//! Decompose, fit, and forecast a synthetic monthly series.
//!
//! Run with `cargo run -p seasonal --example pipeline --features synthetic`.

use seasonal::prelude::*;
use seasonal::synthetic::{SeasonalShape, SyntheticSeries, TrendShape};

fn main() -> Result<(), SeasonalError> {
    let series = SyntheticSeries::new()
        .length(200)
        .noise(1.0)
        .trend(TrendShape::Linear)
        .seasonality(SeasonalShape::Additive)
        .period(12)
        .seed(42)
        .generate()?;

    let pipeline = Seasonal::new()
        .period(12)
        .mode(Additive)
        .horizon(24)
        .confidence_level(0.95)
        .build()?;

    let output = pipeline.run(&series)?;
    println!("{}", output);

    // Multiplicative seasonality on an exponential trend.
    let growth = SyntheticSeries::new()
        .trend(TrendShape::Exponential)
        .seasonality(SeasonalShape::Multiplicative)
        .noise(0.01)
        .generate()?;

    let multiplicative = Seasonal::new()
        .period(12)
        .mode(Multiplicative)
        .horizon(12)
        .best_effort(true)
        .build()?;

    let fit = multiplicative.fit(&growth)?;
    println!("{}", fit);
    println!("{}", multiplicative.forecast(&fit)?);

    Ok(())
}
