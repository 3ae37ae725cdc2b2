//! WealthPilot - Deterministic personal-finance projection engine
//!
//! This library provides:
//! - Multi-year compound-growth projections with monthly contributions
//! - Terminal net-worth estimates for the budget planner
//! - Package recommendations from a disposable-income ratio
//! - A fixed catalog of investment packages, optionally loaded from CSV
//! - A scenario runner for batch and per-package comparisons

pub mod catalog;
pub mod planner;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use catalog::{InvestmentPackage, PackageCatalog, RiskLevel};
pub use planner::{BudgetPlan, BudgetPlanner, Recommendation};
pub use projection::{ProjectionEngine, ProjectionRequest, ProjectionResult};
pub use scenario::ScenarioRunner;
