//! demos/dashboard.rs
//!
//! Loads a historical CSV, prints the analysis for one city and, when an
//! OpenWeatherMap key is available, checks the live temperature against the
//! current season.
//!
//! To run this example:
//! cargo run --example dashboard -- data/temperature_data.csv Berlin [API_KEY]
//!
//! The key can also be given through the `OPENWEATHER_API_KEY` environment variable.

use std::env;
use std::error::Error;

use seasonal_temps::{Dashboard, DashboardError, Season};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "data/temperature_data.csv".to_string());
    let dashboard = Dashboard::from_csv_path(&path)?;

    let cities = dashboard.cities();
    println!("Loaded {} records for {} cities from {}", dashboard.dataset().len(), cities.len(), path);
    let Some(city) = args.next().or_else(|| cities.first().map(|c| c.to_string())) else {
        println!("The dataset is empty.");
        return Ok(());
    };

    // 1. Historical analysis
    let analysis = dashboard.analyze(&city)?;
    println!("\n== {} ==", city);
    println!("{}", serde_json::to_string_pretty(&analysis.summary)?);
    for stats in &analysis.seasonal {
        println!(
            "{:>7}: mean {:6.2}°C, std {} over {} readings",
            stats.season,
            stats.mean,
            stats.std_dev.map_or("n/a".to_string(), |s| format!("{:.2}", s)),
            stats.count
        );
    }
    println!("{} anomalous readings", analysis.anomalies().count());
    for point in analysis.anomalies().take(10) {
        println!("  {} {:6.2}°C", point.timestamp, point.temperature);
    }

    // 2. Manual comparison against every season
    let probe = analysis.summary.mean.unwrap_or(0.0);
    for season in Season::ALL {
        let verdict = dashboard.compare(&city, probe, season)?;
        println!("{:.1}°C in {}: {}", probe, season, verdict.message);
    }

    // 3. Live reading
    let api_key = args.next().or_else(|| env::var("OPENWEATHER_API_KEY").ok());
    let Some(api_key) = api_key else {
        println!("\nNo API key given, skipping the live check.");
        return Ok(());
    };
    match dashboard.current_conditions(&city).api_key(&api_key).call() {
        Ok(conditions) => {
            println!("\n{}", serde_json::to_string_pretty(&conditions)?);
        }
        Err(e) if e.needs_api_key() => {
            eprintln!("\n{}. Please check your OpenWeatherMap key.", e);
        }
        Err(DashboardError::Fetch(e)) => {
            eprintln!("\nCould not fetch the current temperature: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
