//! Compare the same contribution plan across every package tier
//!
//! Sweeps a range of monthly contributions, runs each against all four
//! packages in parallel, and writes the terminal values for side-by-side
//! comparison.

use std::fs::File;
use std::io::Write;
use std::time::Instant;
use wealthpilot::{ProjectionRequest, ScenarioRunner};

const STARTING_BALANCE: f64 = 10_000.0;
const YEARS: u32 = 20;
const INFLATION_PCT: f64 = 2.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let runner = ScenarioRunner::new();
    let package_count = runner.engine().catalog().len();

    // Contribution sweep: $100 to $1000 per month
    let contributions: Vec<f64> = (1..=10).map(|i| i as f64 * 100.0).collect();

    let rows: Vec<(f64, Vec<f64>)> = contributions
        .iter()
        .map(|&monthly| {
            let base = ProjectionRequest::new(STARTING_BALANCE, monthly, YEARS, INFLATION_PCT, 0);
            let results = runner.run_across_packages(&base);
            (monthly, results.iter().map(|r| r.future_value).collect())
        })
        .collect();

    println!(
        "Ran {} projections in {:?}",
        rows.len() * package_count,
        start.elapsed()
    );

    // Print comparison table
    print!("{:>10}", "Monthly");
    for package in runner.engine().catalog().iter() {
        print!(" {:>14}", package.name);
    }
    println!();
    println!("{}", "-".repeat(10 + 15 * package_count));

    for (monthly, finals) in &rows {
        print!("{:>10.0}", monthly);
        for value in finals {
            print!(" {:>14.2}", value);
        }
        println!();
    }

    // Write CSV for spreadsheet comparison
    let output_path = "package_comparison.csv";
    let mut file = File::create(output_path)?;

    write!(file, "MonthlyContribution")?;
    for package in runner.engine().catalog().iter() {
        write!(file, ",{}", package.name)?;
    }
    writeln!(file)?;

    for (monthly, finals) in &rows {
        write!(file, "{:.2}", monthly)?;
        for value in finals {
            write!(file, ",{:.8}", value)?;
        }
        writeln!(file)?;
    }

    println!("\nOutput written to {}", output_path);
    Ok(())
}
