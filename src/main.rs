//! WealthPilot CLI
//!
//! Command-line interface for running projections and budget plans

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use wealthpilot::{BudgetPlanner, PackageCatalog, ProjectionEngine, ProjectionRequest};

#[derive(Parser)]
#[command(name = "wealthpilot", version, about = "Deterministic personal-finance projections")]
struct Cli {
    /// Load package definitions from a CSV file instead of the built-in catalog
    #[arg(long, global = true)]
    packages: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a multi-year projection and print the yearly trajectory
    Project {
        /// Balance already invested at year 0
        #[arg(long, default_value_t = 10_000.0)]
        starting_balance: f64,

        /// Contribution added every month
        #[arg(long, default_value_t = 500.0)]
        monthly_contribution: f64,

        /// Projection horizon in years
        #[arg(long, default_value_t = 20)]
        years: u32,

        /// Annual inflation in percentage points
        #[arg(long, default_value_t = 2.0)]
        inflation: f64,

        /// Package tier index (0 = Conservative .. 3 = Aggressive)
        #[arg(long, default_value_t = 1)]
        package: i32,

        /// Write the yearly trajectory to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the full result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Recommend an invest amount and package from a monthly budget
    Plan {
        /// Monthly income
        #[arg(long, default_value_t = 5_000.0)]
        income: f64,

        /// Monthly savings
        #[arg(long, default_value_t = 1_000.0)]
        savings: f64,

        /// Monthly spending
        #[arg(long, default_value_t = 3_500.0)]
        spending: f64,
    },

    /// List all investment packages with rates and risk labels
    Packages,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let catalog = match &cli.packages {
        Some(path) => PackageCatalog::from_csv_path(path)
            .with_context(|| format!("failed to load packages from {}", path.display()))?,
        None => PackageCatalog::default_packages(),
    };
    let engine = ProjectionEngine::new(catalog);

    match cli.command {
        Command::Project {
            starting_balance,
            monthly_contribution,
            years,
            inflation,
            package,
            csv,
            json,
        } => {
            let request = ProjectionRequest::new(
                starting_balance,
                monthly_contribution,
                years,
                inflation,
                package,
            );
            let result = engine.run_projection(&request);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let package = engine.catalog().resolve(request.package_index);
                println!(
                    "Projection: {} ({:.1}% expected, {} risk)",
                    package.name,
                    package.expected_return * 100.0,
                    package.risk
                );
                println!("{:>5} {:>16}", "Year", "Balance");
                println!("{}", "-".repeat(22));
                for (label, balance) in result.points() {
                    println!("{:>5} {:>16.2}", label, balance);
                }

                println!("\nSummary:");
                println!("  Total contributed: ${:.2}", result.total_contributions);
                println!("  Investment growth: ${:.2}", result.investment_growth());
                println!("  Future value:      ${:.2}", result.future_value);
                println!(
                    "  Real value:        ${:.2} (at {:.1}% inflation)",
                    result.real_value, request.inflation_percent
                );
            }

            if let Some(path) = csv {
                let mut file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                writeln!(file, "Year,Balance")?;
                for (label, balance) in result.points() {
                    writeln!(file, "{},{:.8}", label, balance)?;
                }
                println!("\nTrajectory written to: {}", path.display());
            }
        }

        Command::Plan {
            income,
            savings,
            spending,
        } => {
            let planner = BudgetPlanner::new(engine);
            let plan = planner.plan(income, savings, spending);

            println!("Income & Budget Plan");
            println!("  Monthly income:    ${:.2}", income);
            println!("  Monthly savings:   ${:.2}", savings);
            println!("  Monthly spending:  ${:.2}", spending);
            println!("  Disposable income: ${:.2}", plan.disposable_income);
            println!();
            println!("  Recommended invest: ${:.2}/month", plan.recommended_invest);
            println!(
                "  Suggested package:  {} ({:.1}% expected, {} risk)",
                plan.package.name,
                plan.package.expected_return * 100.0,
                plan.package.risk
            );
            println!(
                "  Estimated net worth (20 years): ${:.2}",
                plan.estimated_net_worth
            );
        }

        Command::Packages => {
            println!(
                "{:>4} {:>14} {:>10} {:>10}  {}",
                "Tier", "Name", "Expected", "Risk", "Description"
            );
            println!("{}", "-".repeat(100));
            for (index, package) in engine.catalog().iter().enumerate() {
                println!(
                    "{:>4} {:>14} {:>9.1}% {:>10}  {}",
                    index,
                    package.name,
                    package.expected_return * 100.0,
                    package.risk,
                    package.description
                );
            }
        }
    }

    Ok(())
}
