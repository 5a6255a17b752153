//! Seed catalogs loaded from YAML files.
//!
//! A seed file is a sequence of products:
//!
//! ```yaml
//! - id: 1
//!   title: HTML húfa
//!   description: Húfa sem heldur hausnum heitum.
//!   price: 5000
//! - id: 2
//!   title: CSS sokkar
//!   description: Sokkar sem skalast vel.
//!   price: 3000
//! ```
//!
//! Every entry is validated while parsing; the error names the offending
//! entry.

use std::path::{Path, PathBuf};

use shopcart_core::Product;
use thiserror::Error;
use tracing::info;

use crate::catalog::{Catalog, CatalogError};

/// Errors that can occur when loading a seed catalog.
#[derive(Debug, Error)]
pub enum CatalogFileError {
    /// The file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid list of products.
    #[error("Invalid catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The products do not form a valid catalog.
    #[error("Invalid catalog file {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Parse a seed catalog from YAML text.
///
/// # Errors
///
/// Returns the YAML error (which includes validation failures and their
/// location) or a [`CatalogError`] for duplicate ids, wrapped with `path`.
pub fn parse_catalog(yaml: &str, path: &Path) -> Result<Catalog, CatalogFileError> {
    let products: Vec<Product> =
        serde_yaml::from_str(yaml).map_err(|source| CatalogFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Catalog::from_products(products).map_err(|source| CatalogFileError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a seed catalog from a YAML file.
///
/// # Errors
///
/// Returns [`CatalogFileError`] if the file cannot be read or does not
/// describe a valid catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogFileError> {
    info!(path = %path.display(), "Loading catalog from file");

    let content = std::fs::read_to_string(path).map_err(|source| CatalogFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&content, path)?;

    info!(products = catalog.len(), next_id = ?catalog.next_id(), "Parsed catalog");
    Ok(catalog)
}
