//! Loads the catalog from disk or falls back to the reference tables.

use std::path::Path;

use crate::domain::{Catalog, CatalogError};

/// Loads a catalog from `path`, or returns [`Catalog::reference`] when no
/// path is configured.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read, and the
/// parse/validation errors of [`Catalog::from_json_str`].
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let Some(path) = path else {
        tracing::debug!("No catalog file configured, using reference catalog");
        return Ok(Catalog::reference());
    };

    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = Catalog::from_json_str(&json)?;

    tracing::info!(
        path = %path.display(),
        shapes = catalog.shapes.len(),
        criteria = catalog.criteria.len(),
        platforms = catalog.platforms.len(),
        "Loaded catalog file"
    );

    Ok(catalog)
}
