use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gloomforge::data::{default_base_items, default_catalog};
use gloomforge::gen::{generate_drops, generate_item, Rarity, RarityPolicy};

fn bench_single_item(c: &mut Criterion) {
    let catalog = default_catalog();
    let bases = default_base_items();
    let sword = bases.iter().find(|b| b.name == "Rusted Blade").unwrap();

    c.bench_function("generate_rare_weapon", |b| {
        b.iter(|| {
            generate_item(
                black_box(&catalog),
                black_box(sword),
                black_box(80),
                &RarityPolicy::Forced(Rarity::Rare),
                Some(black_box(42)),
            )
        })
    });

    c.bench_function("generate_weighted_weapon", |b| {
        b.iter(|| {
            generate_item(
                black_box(&catalog),
                black_box(sword),
                black_box(80),
                &RarityPolicy::default(),
                Some(black_box(42)),
            )
        })
    });
}

fn bench_drop_batch(c: &mut Criterion) {
    let catalog = default_catalog();
    let bases = default_base_items();

    c.bench_function("generate_drops_100", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            generate_drops(
                black_box(&catalog),
                black_box(&bases),
                black_box(60),
                black_box(100),
                &RarityPolicy::default(),
                &mut rng,
            )
        })
    });
}

criterion_group!(benches, bench_single_item, bench_drop_batch);
criterion_main!(benches);
