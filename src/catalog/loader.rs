//! CSV-based package catalog loader
//!
//! Loads package definitions from data/packages.csv

use super::InvestmentPackage;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Default path to the packages file
pub const DEFAULT_PACKAGES_PATH: &str = "data/packages.csv";

/// Errors from loading or validating a package catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read package file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse package file: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown risk level: {0}")]
    UnknownRisk(String),

    #[error("package file contains no packages")]
    Empty,

    #[error("package {name} breaks ascending expected-return order")]
    OutOfOrder { name: String },
}

/// Load package definitions from a CSV file
///
/// Expected columns: name, expected_return, risk, description
pub fn load_packages(path: &Path) -> Result<Vec<InvestmentPackage>, CatalogError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut packages = Vec::new();
    for result in reader.deserialize() {
        let package: InvestmentPackage = result?;
        packages.push(package);
    }

    log::info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PackageCatalog;

    #[test]
    fn test_load_default_packages() {
        let catalog = PackageCatalog::from_csv_path(Path::new(DEFAULT_PACKAGES_PATH))
            .expect("failed to load data/packages.csv");

        // The shipped file matches the built-in defaults
        let defaults = PackageCatalog::default_packages();
        assert_eq!(catalog.len(), defaults.len());
        for (loaded, built_in) in catalog.iter().zip(defaults.iter()) {
            assert_eq!(loaded.name, built_in.name);
            assert_eq!(loaded.expected_return, built_in.expected_return);
            assert_eq!(loaded.risk, built_in.risk);
            assert_eq!(loaded.description, built_in.description);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_packages(Path::new("data/does_not_exist.csv"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
