//! Scenario runner for batch projections
//!
//! Builds the engine once, then runs many projection requests against it
//! without re-resolving the catalog per call.

use crate::catalog::PackageCatalog;
use crate::projection::{ProjectionEngine, ProjectionRequest, ProjectionResult};
use rayon::prelude::*;

/// Pre-built scenario runner for batch projections
///
/// # Example
/// ```
/// use wealthpilot::{ProjectionRequest, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let base = ProjectionRequest::new(10_000.0, 500.0, 20, 2.0, 0);
/// let per_package = runner.run_across_packages(&base);
/// assert_eq!(per_package.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create a runner with the built-in package catalog
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::with_default_packages(),
        }
    }

    /// Create a runner with a custom catalog
    pub fn with_catalog(catalog: PackageCatalog) -> Self {
        Self {
            engine: ProjectionEngine::new(catalog),
        }
    }

    /// Run a single projection
    pub fn run(&self, request: &ProjectionRequest) -> ProjectionResult {
        self.engine.run_projection(request)
    }

    /// Run a batch of requests in parallel
    pub fn run_batch(&self, requests: &[ProjectionRequest]) -> Vec<ProjectionResult> {
        requests
            .par_iter()
            .map(|request| self.engine.run_projection(request))
            .collect()
    }

    /// Run one request once per catalog package, varying only the package
    ///
    /// Results come back in tier order, so index i is the trajectory under
    /// package i.
    pub fn run_across_packages(&self, base: &ProjectionRequest) -> Vec<ProjectionResult> {
        let requests: Vec<ProjectionRequest> = (0..self.engine.catalog().len())
            .map(|index| ProjectionRequest {
                package_index: index as i32,
                ..base.clone()
            })
            .collect();
        self.run_batch(&requests)
    }

    /// Get reference to the underlying engine
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let requests: Vec<_> = [5u32, 10, 20]
            .iter()
            .map(|&years| ProjectionRequest::new(1_000.0, 100.0, years, 0.0, 1))
            .collect();

        let results = runner.run_batch(&requests);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].values.len(), 6);
        assert_eq!(results[1].values.len(), 11);
        assert_eq!(results[2].values.len(), 21);
    }

    #[test]
    fn test_run_across_packages() {
        let runner = ScenarioRunner::new();
        let base = ProjectionRequest::new(10_000.0, 500.0, 20, 2.0, 0);

        let results = runner.run_across_packages(&base);
        assert_eq!(results.len(), 4);

        // Higher expected return should result in higher final balance
        for pair in results.windows(2) {
            assert!(pair[1].future_value > pair[0].future_value);
        }

        // Matches running the engine directly
        let direct = runner.run(&ProjectionRequest::new(10_000.0, 500.0, 20, 2.0, 2));
        assert_eq!(results[2].future_value, direct.future_value);
    }
}
