//! Budget planner: invest-amount recommendation and package tier selection
//!
//! The rule behind the income & budget panel: 40% of disposable income,
//! capped at stated monthly savings, then a fixed ratio ladder mapping the
//! invest-to-income ratio to a package tier.

use crate::catalog::InvestmentPackage;
use crate::projection::{ProjectionEngine, DEFAULT_ESTIMATE_YEARS};
use serde::{Deserialize, Serialize};

/// Fraction of disposable income suggested for investing
pub const INVEST_FRACTION: f64 = 0.4;

/// Result of the recommendation rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Suggested monthly invest amount
    pub invest_amount: f64,

    /// Tier index into the package catalog
    pub tier_index: usize,
}

/// Recommend a monthly invest amount and package tier
///
/// `invest = min(max(0, disposable * 0.4), savings)`, then the tier ladder on
/// `invest / income` (first match wins): below 10% Conservative, below 20%
/// Balanced, below 30% Growth, otherwise Aggressive. Zero or negative income
/// yields ratio 0 rather than a division fault.
pub fn recommend_package_tier(
    monthly_income: f64,
    disposable_income: f64,
    monthly_savings: f64,
) -> Recommendation {
    let invest_amount = (disposable_income * INVEST_FRACTION).max(0.0).min(monthly_savings);

    let ratio = if monthly_income > 0.0 {
        invest_amount / monthly_income
    } else {
        0.0
    };

    let tier_index = if ratio < 0.10 {
        0
    } else if ratio < 0.20 {
        1
    } else if ratio < 0.30 {
        2
    } else {
        3
    };

    Recommendation {
        invest_amount,
        tier_index,
    }
}

/// Full recommendation panel for a set of budget inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPlan {
    /// Disposable income (income minus spending)
    pub disposable_income: f64,

    /// Suggested monthly invest amount
    pub recommended_invest: f64,

    /// Tier index into the package catalog
    pub tier_index: usize,

    /// The recommended package
    pub package: InvestmentPackage,

    /// Estimated net worth after the default 20-year horizon, investing the
    /// recommended amount into the recommended package
    pub estimated_net_worth: f64,
}

/// Budget planner combining the recommendation rule with the engine
#[derive(Debug, Clone, Default)]
pub struct BudgetPlanner {
    engine: ProjectionEngine,
}

impl BudgetPlanner {
    /// Create a planner backed by the given engine
    pub fn new(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    /// Build the full recommendation panel from monthly income, savings and
    /// spending
    pub fn plan(&self, monthly_income: f64, monthly_savings: f64, monthly_spending: f64) -> BudgetPlan {
        let disposable_income = monthly_income - monthly_spending;
        let recommendation =
            recommend_package_tier(monthly_income, disposable_income, monthly_savings);

        // tier_index always lands inside the four-tier catalog; resolve keeps
        // the engine's fallback semantics for any shorter custom catalog
        let package = self.engine.catalog().resolve(recommendation.tier_index as i32).clone();
        let estimated_net_worth = self.engine.estimate_net_worth(
            recommendation.invest_amount,
            recommendation.tier_index as i32,
            DEFAULT_ESTIMATE_YEARS,
        );

        BudgetPlan {
            disposable_income,
            recommended_invest: recommendation.invest_amount,
            tier_index: recommendation.tier_index,
            package,
            estimated_net_worth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ladder_boundaries() {
        // Build disposable income so that invest / income hits each boundary
        // exactly: invest = disposable * 0.4, income = 1000
        let cases = [
            (0.099, 0),
            (0.10, 1),
            (0.199, 1),
            (0.20, 2),
            (0.299, 2),
            (0.30, 3),
        ];

        for (ratio, expected_tier) in cases {
            let disposable = ratio * 1000.0 / INVEST_FRACTION;
            let rec = recommend_package_tier(1000.0, disposable, f64::MAX);
            assert_eq!(
                rec.tier_index, expected_tier,
                "ratio {} should map to tier {}",
                ratio, expected_tier
            );
            assert_relative_eq!(rec.invest_amount, ratio * 1000.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_reference_budget_scenario() {
        // income 5000, savings 1000, spending 3500: disposable 1500, raw
        // invest 600 (under the savings cap), ratio 0.12 -> Balanced
        let rec = recommend_package_tier(5000.0, 5000.0 - 3500.0, 1000.0);

        assert_eq!(rec.invest_amount, 600.0);
        assert_eq!(rec.tier_index, 1);
    }

    #[test]
    fn test_invest_capped_by_savings() {
        let rec = recommend_package_tier(5000.0, 1500.0, 300.0);
        assert_eq!(rec.invest_amount, 300.0);
    }

    #[test]
    fn test_negative_disposable_invests_nothing() {
        let rec = recommend_package_tier(2000.0, -500.0, 1000.0);
        assert_eq!(rec.invest_amount, 0.0);
        assert_eq!(rec.tier_index, 0);
    }

    #[test]
    fn test_zero_income_yields_zero_ratio() {
        let rec = recommend_package_tier(0.0, 100.0, 100.0);
        assert_eq!(rec.tier_index, 0);
        assert_eq!(rec.invest_amount, 40.0);
    }

    #[test]
    fn test_plan_matches_engine_estimate() {
        let planner = BudgetPlanner::default();
        let plan = planner.plan(5000.0, 1000.0, 3500.0);

        assert_eq!(plan.disposable_income, 1500.0);
        assert_eq!(plan.recommended_invest, 600.0);
        assert_eq!(plan.tier_index, 1);
        assert_eq!(plan.package.name, "Balanced");

        let engine = ProjectionEngine::with_default_packages();
        assert_eq!(
            plan.estimated_net_worth,
            engine.estimate_net_worth(600.0, 1, DEFAULT_ESTIMATE_YEARS)
        );
        assert!(plan.estimated_net_worth > 600.0 * 240.0);
    }
}
