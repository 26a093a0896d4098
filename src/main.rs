//! Hourcast - current conditions and hourly forecasts for any place name
//!
//! Thin binary over the library pipeline: parse arguments, run the lookup
//! with the local wall clock, print the report as text or JSON.

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hourcast::app::App;
use hourcast::cli::Cli;
use hourcast::data::Freshness;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App::new().with_timezone(cli.timezone.clone());

    let report = app
        .lookup(&cli.place_name(), Local::now().naive_local())
        .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.location.display_name());
    println!(
        "  {:.1} °C  {}  humidity {}%  wind {:.1} km/h",
        report.current.temperature,
        report.current.condition,
        report.current.humidity,
        report.current.windspeed
    );
    if report.current.freshness == Freshness::Stale {
        println!("  note: forecast does not cover the current hour; showing its first entry");
    }

    if cli.hours > 0 {
        println!();
        for record in report.hourly.iter().take(cli.hours) {
            println!(
                "  {}  {:>5.1} °C  {:>3.0} %  {:>5.1} km/h",
                record.time.format("%Y-%m-%d %H:%M"),
                record.temperature,
                record.humidity,
                record.windspeed
            );
        }
    }

    Ok(())
}
