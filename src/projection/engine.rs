//! Core projection engine for monthly compound-growth simulations

use super::request::{ProjectionRequest, ProjectionResult};
use crate::catalog::PackageCatalog;

/// Default horizon for terminal net-worth estimates
pub const DEFAULT_ESTIMATE_YEARS: u32 = 20;

/// Main projection engine
///
/// Stateless apart from the read-only package catalog: every operation is a
/// pure function of its inputs and never fails on numeric input.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    catalog: PackageCatalog,
}

/// Advance a balance month by month: growth at 1 + rate/12 first, then the
/// contribution. The ordering is a fixed contract; contribute-then-grow
/// produces different numbers.
fn accumulate_months(initial_balance: f64, monthly_amount: f64, annual_rate: f64, months: u32) -> f64 {
    let monthly_factor = 1.0 + annual_rate / 12.0;
    let mut balance = initial_balance;
    for _ in 0..months {
        balance = balance * monthly_factor + monthly_amount;
    }
    balance
}

impl ProjectionEngine {
    /// Create an engine with the given package catalog
    pub fn new(catalog: PackageCatalog) -> Self {
        Self { catalog }
    }

    /// Create an engine with the built-in package catalog
    pub fn with_default_packages() -> Self {
        Self::new(PackageCatalog::default_packages())
    }

    /// Get the package catalog for presentation lookups
    pub fn catalog(&self) -> &PackageCatalog {
        &self.catalog
    }

    /// Run a full multi-year projection
    ///
    /// Records the balance at every year boundary plus year 0. A zero-year
    /// request degenerates to the single year-0 point.
    pub fn run_projection(&self, request: &ProjectionRequest) -> ProjectionResult {
        let package = self.catalog.resolve(request.package_index);
        let rate = package.expected_return;

        let capacity = request.years as usize + 1;
        let mut labels = Vec::with_capacity(capacity);
        let mut values = Vec::with_capacity(capacity);

        let mut balance = request.starting_balance;
        labels.push("0".to_string());
        values.push(balance);

        for year in 1..=request.years {
            balance = accumulate_months(balance, request.monthly_contribution, rate, 12);
            labels.push(year.to_string());
            values.push(balance);
        }

        let total_contributions =
            request.starting_balance + request.monthly_contribution * request.years as f64 * 12.0;
        let future_value = balance;
        let real_value =
            future_value / (1.0 + request.inflation_percent / 100.0).powi(request.years as i32);

        ProjectionResult {
            labels,
            values,
            total_contributions,
            future_value,
            real_value,
        }
    }

    /// Estimate net worth after `years` of investing a fixed monthly amount
    ///
    /// Starts from a zero balance and returns only the terminal value, with
    /// no inflation adjustment. Shares the monthly recurrence with
    /// `run_projection`, so the two can never numerically diverge.
    pub fn estimate_net_worth(&self, monthly_investment: f64, package_index: i32, years: u32) -> f64 {
        let package = self.catalog.resolve(package_index);
        accumulate_months(0.0, monthly_investment, package.expected_return, years * 12)
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::with_default_packages()
    }
}
