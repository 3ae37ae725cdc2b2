//! Projection input and output structures

use serde::{Deserialize, Serialize};

fn default_years() -> u32 {
    20
}

/// Input parameters for a projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Balance already invested at year 0
    pub starting_balance: f64,

    /// Amount added at the end of every simulated month
    pub monthly_contribution: f64,

    /// Projection horizon in whole years (default: 20)
    #[serde(default = "default_years")]
    pub years: u32,

    /// Annual inflation in percentage points (2 = 2%), used only to deflate
    /// the terminal value
    #[serde(default)]
    pub inflation_percent: f64,

    /// Index into the package catalog; out-of-range falls back to the first
    /// (lowest-risk) package
    #[serde(default)]
    pub package_index: i32,
}

impl ProjectionRequest {
    pub fn new(
        starting_balance: f64,
        monthly_contribution: f64,
        years: u32,
        inflation_percent: f64,
        package_index: i32,
    ) -> Self {
        Self {
            starting_balance,
            monthly_contribution,
            years,
            inflation_percent,
            package_index,
        }
    }
}

/// Computed projection output
///
/// `labels` and `values` are parallel arrays of length `years + 1`: one point
/// per year boundary, starting with the year-0 starting balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Year numbers as strings, "0" through "years"
    pub labels: Vec<String>,

    /// Balance at each year boundary
    pub values: Vec<f64>,

    /// Nominal cash paid in: starting balance plus every monthly contribution
    /// (a linear sum, deliberately not compounded)
    pub total_contributions: f64,

    /// Terminal balance, equal to the last element of `values`
    pub future_value: f64,

    /// Terminal balance deflated by cumulative inflation
    pub real_value: f64,
}

impl ProjectionResult {
    /// Growth generated on top of the cash paid in
    pub fn investment_growth(&self) -> f64 {
        self.future_value - self.total_contributions
    }

    /// Iterate (year label, balance) pairs in order
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_from_json() {
        let request: ProjectionRequest =
            serde_json::from_str(r#"{"starting_balance": 1000.0, "monthly_contribution": 50.0}"#)
                .unwrap();

        assert_eq!(request.years, 20);
        assert_eq!(request.inflation_percent, 0.0);
        assert_eq!(request.package_index, 0);
    }

    #[test]
    fn test_points_pairs_labels_with_values() {
        let result = ProjectionResult {
            labels: vec!["0".to_string(), "1".to_string()],
            values: vec![100.0, 200.0],
            total_contributions: 150.0,
            future_value: 200.0,
            real_value: 200.0,
        };

        let points: Vec<_> = result.points().collect();
        assert_eq!(points, vec![("0", 100.0), ("1", 200.0)]);
        assert_eq!(result.investment_growth(), 50.0);
    }
}
