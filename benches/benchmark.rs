// Scoring and validation benchmarks over generated catalogs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use skumatch::{Catalog, CatalogValidator, SimilarityScorer};

fn generate_catalog(items: usize, attributes: usize) -> Catalog {
    let mut rng = rand::rng();
    let names: Vec<String> = (0..attributes)
        .map(|i| format!("att-{}", (b'a' + (i % 26) as u8) as char))
        .collect();
    let rows = (0..items)
        .map(|i| {
            let values = names
                .iter()
                .map(|name| Some(format!("{}-{}", name, rng.random_range(0..20u32))))
                .collect();
            (format!("sku-{}", i + 1), values)
        })
        .collect();
    Catalog::from_rows(names, rows).unwrap()
}

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for size in [100, 1000, 10000].iter() {
        let catalog = generate_catalog(*size, 10);
        let validator = CatalogValidator::default();
        group.bench_with_input(BenchmarkId::new("skumatch", size), size, |b, _| {
            b.iter(|| validator.validate(black_box(&catalog)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_score_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_and_rank");

    for size in [100, 1000, 10000].iter() {
        let catalog = generate_catalog(*size, 10);
        let scorer = SimilarityScorer::default();
        group.bench_with_input(BenchmarkId::new("skumatch", size), size, |b, &size| {
            let mut rng = rand::rng();
            b.iter(|| {
                let reference = rng.random_range(0..size);
                scorer.score_and_rank(black_box(&catalog), reference).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_validate, benchmark_score_and_rank);
criterion_main!(benches);
