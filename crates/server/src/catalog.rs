// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lazily loaded requirement rule catalog.
//!
//! The catalog is read once, on first use, and shared by every request after
//! that. Without a configured path the built-in catalog is used.

use citywise_domain::RuleCatalog;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

/// The catalog compiled into the server.
const BUILT_IN_CATALOG: &str = include_str!("../rules/default_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read rule catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("rule catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog comes from, and the catalog once loaded.
pub struct CatalogSource {
    path: Option<PathBuf>,
    cell: OnceCell<RuleCatalog>,
}

impl CatalogSource {
    /// Creates a source reading `path`, or the built-in catalog when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            cell: OnceCell::new(),
        }
    }

    /// Returns the catalog, loading it on first call.
    ///
    /// A failed load is not cached; the next call tries again.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn get(&self) -> Result<&RuleCatalog, CatalogError> {
        self.cell.get_or_try_init(|| self.load()).await
    }

    async fn load(&self) -> Result<RuleCatalog, CatalogError> {
        let catalog: RuleCatalog = match &self.path {
            Some(path) => {
                let raw: String =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|source| CatalogError::Read {
                            path: path.clone(),
                            source,
                        })?;
                serde_json::from_str(&raw)?
            }
            None => serde_json::from_str(BUILT_IN_CATALOG)?,
        };

        let source: String = self
            .path
            .as_ref()
            .map_or_else(|| String::from("built-in"), |p| p.display().to_string());
        info!(
            jurisdictions = catalog.jurisdictions.len(),
            rules = catalog.rule_count(),
            source = %source,
            "Rule catalog loaded"
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_built_in_catalog_parses() {
        let source: CatalogSource = CatalogSource::new(None);

        let catalog: &RuleCatalog = source.get().await.expect("built-in catalog should parse");

        assert!(catalog.jurisdiction("Phoenix").is_some());
        assert!(catalog.rule_count() > 0);
    }

    #[tokio::test]
    async fn test_catalog_is_loaded_once() {
        let source: CatalogSource = CatalogSource::new(None);

        let first: *const RuleCatalog = source.get().await.expect("load");
        let second: *const RuleCatalog = source.get().await.expect("load");

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_catalog_file() {
        let source: CatalogSource =
            CatalogSource::new(Some(PathBuf::from("/nonexistent/citywise/rules.json")));

        let result: Result<&RuleCatalog, CatalogError> = source.get().await;

        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[tokio::test]
    async fn test_catalog_file_is_read() {
        let path: PathBuf =
            std::env::temp_dir().join(format!("citywise_rules_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"jurisdictions": [{"name": "Tucson", "rules": []}]}"#,
        )
        .expect("write catalog");
        let source: CatalogSource = CatalogSource::new(Some(path.clone()));

        let catalog: &RuleCatalog = source.get().await.expect("catalog should load");

        assert!(catalog.jurisdiction("Tucson").is_some());
        assert!(catalog.jurisdiction("Phoenix").is_none());
        let _ = std::fs::remove_file(path);
    }
}
