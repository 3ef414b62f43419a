//! demos/seasonal_chart.rs
//!
//! Plots a city's temperatures with their rolling mean, and the seasonal
//! averages, in the browser using `plotlars`.
//!
//! To run this example:
//! cargo run --example seasonal_chart --features demos -- data/temperature_data.csv Berlin

use std::env;
use std::error::Error;

use plotlars::{BarPlot, Legend, Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;
use seasonal_temps::{CityAnalysis, Dashboard};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "data/temperature_data.csv".to_string());
    let dashboard = Dashboard::from_csv_path(&path)?;
    let city = match args.next() {
        Some(city) => city,
        None => match dashboard.cities().first() {
            Some(city) => city.to_string(),
            None => return Err("the dataset is empty".into()),
        },
    };

    let analysis = dashboard.analyze(&city)?;
    println!("Generating charts for {}...", city);
    plot_series(&analysis);
    plot_seasons(&analysis)?;
    println!("Plots shown in browser.");

    Ok(())
}

/// Temperature line with its rolling mean overlaid.
fn plot_series(analysis: &CityAnalysis) {
    let title = format!("Temperature in {}", analysis.city);
    TimeSeriesPlot::builder()
        .data(&analysis.series)
        .x("timestamp")
        .y("temperature")
        .additional_series(vec!["rolling_mean"])
        .colors(vec![Rgb(69, 157, 230), Rgb(235, 117, 0)])
        .lines(vec![Line::Solid, Line::Dash])
        .plot_title(Text::from(title.as_str()).size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("date")
        .y_title("°C")
        .build()
        .plot();
}

/// Mean temperature per season.
fn plot_seasons(analysis: &CityAnalysis) -> PolarsResult<()> {
    let seasons: Vec<&str> = analysis.seasonal.iter().map(|s| s.season.label()).collect();
    let means: Vec<f64> = analysis.seasonal.iter().map(|s| s.mean).collect();
    let data = df!("season" => seasons, "mean" => means)?;
    let title = format!("Seasonal averages in {}", analysis.city);

    BarPlot::builder()
        .data(&data)
        .labels("season")
        .values("mean")
        .colors(vec![Rgb(69, 157, 230)])
        .plot_title(Text::from(title.as_str()).size(18))
        .x_title("season")
        .y_title("°C")
        .build()
        .plot();
    Ok(())
}
