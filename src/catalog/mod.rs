//! Investment package catalog
//!
//! A fixed, ordered table of investment packages. The index into the catalog
//! doubles as the risk-tier rank consumed by the budget planner, so the
//! catalog is always kept sorted ascending by expected return.

mod loader;

pub use loader::{load_packages, CatalogError, DEFAULT_PACKAGES_PATH};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Ordinal risk label for an investment package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Get the display string matching the package sheet format
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            "Very High" => Ok(RiskLevel::VeryHigh),
            other => Err(CatalogError::UnknownRisk(other.to_string())),
        }
    }
}

/// A single investment package definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentPackage {
    /// Unique display label
    pub name: String,

    /// Annual nominal growth rate as a decimal fraction (0.05 = 5%)
    pub expected_return: f64,

    /// Ordinal risk label
    pub risk: RiskLevel,

    /// Free-text description for presentation
    pub description: String,
}

impl InvestmentPackage {
    pub fn new(name: &str, expected_return: f64, risk: RiskLevel, description: &str) -> Self {
        Self {
            name: name.to_string(),
            expected_return,
            risk,
            description: description.to_string(),
        }
    }
}

/// Ordered, immutable lookup table of investment packages
///
/// Always non-empty and sorted ascending by expected return, so that the
/// recommendation ladder's tier indices line up with catalog positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageCatalog {
    packages: Vec<InvestmentPackage>,
}

impl PackageCatalog {
    /// Create the built-in four-package catalog
    pub fn default_packages() -> Self {
        Self {
            packages: vec![
                InvestmentPackage::new(
                    "Conservative",
                    0.03,
                    RiskLevel::Low,
                    "Capital preservation first. Mostly bonds and high-grade income.",
                ),
                InvestmentPackage::new(
                    "Balanced",
                    0.05,
                    RiskLevel::Medium,
                    "Blend of equities and bonds for smoother long-term growth.",
                ),
                InvestmentPackage::new(
                    "Growth",
                    0.07,
                    RiskLevel::High,
                    "Mostly equities with some stabilisers. Built for long horizons.",
                ),
                InvestmentPackage::new(
                    "Aggressive",
                    0.09,
                    RiskLevel::VeryHigh,
                    "Equity-heavy and volatile, aiming for maximum long-run upside.",
                ),
            ],
        }
    }

    /// Build a catalog from explicit package definitions
    ///
    /// Fails if the list is empty or not sorted ascending by expected return,
    /// since tier indices from the planner ladder assume that ordering.
    pub fn from_packages(packages: Vec<InvestmentPackage>) -> Result<Self, CatalogError> {
        if packages.is_empty() {
            return Err(CatalogError::Empty);
        }
        for pair in packages.windows(2) {
            if pair[1].expected_return < pair[0].expected_return {
                return Err(CatalogError::OutOfOrder {
                    name: pair[1].name.clone(),
                });
            }
        }
        Ok(Self { packages })
    }

    /// Load a catalog from a packages CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        Self::from_packages(load_packages(path)?)
    }

    /// Resolve a package index, falling back to the first (lowest-risk) entry
    ///
    /// Out-of-range indices are a silent default, not an error: the caller
    /// always gets a usable package back.
    pub fn resolve(&self, index: i32) -> &InvestmentPackage {
        match usize::try_from(index).ok().and_then(|i| self.packages.get(i)) {
            Some(pkg) => pkg,
            None => {
                log::debug!(
                    "package index {} out of range, falling back to {}",
                    index,
                    self.packages[0].name
                );
                &self.packages[0]
            }
        }
    }

    /// Get a package by tier index, if present
    pub fn get(&self, index: usize) -> Option<&InvestmentPackage> {
        self.packages.get(index)
    }

    /// Number of packages in the catalog
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate packages in tier order
    pub fn iter(&self) -> impl Iterator<Item = &InvestmentPackage> {
        self.packages.iter()
    }
}

impl Default for PackageCatalog {
    fn default() -> Self {
        Self::default_packages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = PackageCatalog::default_packages();

        assert_eq!(catalog.len(), 4);
        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Conservative", "Balanced", "Growth", "Aggressive"]);

        assert_eq!(catalog.get(0).unwrap().expected_return, 0.03);
        assert_eq!(catalog.get(1).unwrap().expected_return, 0.05);
        assert_eq!(catalog.get(2).unwrap().expected_return, 0.07);
        assert_eq!(catalog.get(3).unwrap().expected_return, 0.09);
        assert_eq!(catalog.get(3).unwrap().risk, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_resolve_fallback() {
        let catalog = PackageCatalog::default_packages();

        assert_eq!(catalog.resolve(2).name, "Growth");
        assert_eq!(catalog.resolve(-1).name, "Conservative");
        assert_eq!(catalog.resolve(99).name, "Conservative");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_from_packages_rejects_empty() {
        let result = PackageCatalog::from_packages(Vec::new());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_packages_rejects_out_of_order() {
        let packages = vec![
            InvestmentPackage::new("High", 0.07, RiskLevel::High, "x"),
            InvestmentPackage::new("Low", 0.03, RiskLevel::Low, "x"),
        ];
        let result = PackageCatalog::from_packages(packages);
        assert!(matches!(result, Err(CatalogError::OutOfOrder { .. })));
    }

    #[test]
    fn test_risk_level_round_trip() {
        for risk in [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::VeryHigh,
        ] {
            assert_eq!(risk.as_str().parse::<RiskLevel>().unwrap(), risk);
        }
        assert!("Extreme".parse::<RiskLevel>().is_err());
    }
}
