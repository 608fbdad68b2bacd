//! RON data loader
//!
//! Loads the affix catalog and base item list from external RON files, with
//! fallback to the hardcoded defaults when a file is missing or malformed.

use std::fs;
use std::path::Path;

use crate::affix::{AffixCatalog, CatalogData};
use crate::error::CatalogError;
use crate::item::BaseItem;

use super::{default_base_items, default_catalog};

/// Load and validate an affix catalog from a RON file
pub fn load_catalog(path: &Path) -> Result<AffixCatalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let data: CatalogData = ron::from_str(&content)?;
    Ok(AffixCatalog::from_data(data))
}

/// Load a catalog, falling back to the built-in defaults on any failure
pub fn load_catalog_or_default(path: &Path) -> AffixCatalog {
    if path.exists() {
        match load_catalog(path) {
            Ok(catalog) => return catalog,
            Err(e) => log::warn!("failed to load catalog from {}: {}", path.display(), e),
        }
    }
    default_catalog()
}

/// Load base item definitions from a RON file
pub fn load_base_items(path: &Path) -> Result<Vec<BaseItem>, CatalogError> {
    let content = fs::read_to_string(path)?;
    Ok(ron::from_str(&content)?)
}

/// Load base items, falling back to the built-in defaults on any failure
pub fn load_base_items_or_default(path: &Path) -> Vec<BaseItem> {
    if path.exists() {
        match load_base_items(path) {
            Ok(bases) => return bases,
            Err(e) => log::warn!("failed to load base items from {}: {}", path.display(), e),
        }
    }
    default_base_items()
}

/// Write the built-in defaults out as RON, as a starting point for editing
pub fn export_default_data(dir: &Path) -> Result<(), CatalogError> {
    fs::create_dir_all(dir)?;
    let pretty = ron::ser::PrettyConfig::default();

    let catalog = ron::ser::to_string_pretty(&super::default_catalog_data(), pretty.clone())?;
    fs::write(dir.join("affixes.ron"), catalog)?;

    let bases = ron::ser::to_string_pretty(&default_base_items(), pretty)?;
    fs::write(dir.join("base_items.ron"), bases)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = Path::new("definitely/not/here.ron");
        let catalog = load_catalog_or_default(path);
        assert!(!catalog.is_empty());
        assert_eq!(load_base_items_or_default(path).len(), default_base_items().len());
    }

    #[test]
    fn test_export_then_load_round_trip() {
        let dir = std::env::temp_dir().join("gloomforge_export_test");
        export_default_data(&dir).unwrap();

        let catalog = load_catalog(&dir.join("affixes.ron")).unwrap();
        assert_eq!(catalog.len(), default_catalog().len());

        let bases = load_base_items(&dir.join("base_items.ron")).unwrap();
        assert_eq!(bases.len(), default_base_items().len());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join("gloomforge_malformed_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.ron");
        fs::write(&path, "(weapon: nonsense").unwrap();

        assert!(matches!(load_catalog(&path), Err(CatalogError::Parse(_))));
        // Fallback path still yields a usable catalog
        assert!(!load_catalog_or_default(&path).is_empty());

        fs::remove_dir_all(&dir).ok();
    }
}
