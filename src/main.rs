//! Gloomforge - Demo loot driver
//!
//! Rolls a handful of drops against the built-in catalog and prints them.
//! Usage: gloomforge [item_level] [count] [seed]

use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gloomforge::data::{load_base_items_or_default, load_catalog_or_default};
use gloomforge::gen::{generate_drops, RarityPolicy};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Gloomforge v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let item_level: u32 = match args.next() {
        Some(arg) => arg.parse().context("item_level must be a number")?,
        None => 60,
    };
    let count: usize = match args.next() {
        Some(arg) => arg.parse().context("count must be a number")?,
        None => 5,
    };
    let mut rng = match args.next() {
        Some(arg) => {
            let seed: u64 = arg.parse().context("seed must be a number")?;
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let data_dir = Path::new("data");
    let catalog = load_catalog_or_default(&data_dir.join("affixes.ron"));
    let bases = load_base_items_or_default(&data_dir.join("base_items.ron"));
    log::info!("catalog holds {} affix templates, {} base items", catalog.len(), bases.len());

    let drops = generate_drops(
        &catalog,
        &bases,
        item_level,
        count,
        &RarityPolicy::default(),
        &mut rng,
    )?;

    for (i, item) in drops.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", item.describe());
    }

    Ok(())
}
