//! Built-in data and external data loading

pub mod defaults;
pub mod loader;

pub use defaults::{default_base_items, default_catalog, default_catalog_data};
pub use loader::{
    export_default_data, load_base_items, load_base_items_or_default, load_catalog,
    load_catalog_or_default,
};
