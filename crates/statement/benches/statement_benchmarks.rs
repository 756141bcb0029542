use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stagebill_catalog::{Catalog, Play};
use stagebill_statement::{statement_data, Invoice, Performance};

fn setup(performances: usize) -> (Invoice, Catalog) {
    let catalog = Catalog::from_iter([
        ("hamlet", Play::new("Hamlet", "tragedy")),
        ("as-like", Play::new("As You Like It", "comedy")),
        ("othello", Play::new("Othello", "tragedy")),
    ]);

    let ids = ["hamlet", "as-like", "othello"];
    let invoice = Invoice::new(
        "BigCo",
        (0..performances)
            .map(|i| Performance::new(ids[i % ids.len()], (i % 120) as u32))
            .collect(),
    );

    (invoice, catalog)
}

fn bench_statement_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_aggregation");

    for size in [1usize, 10, 100, 1_000] {
        let (invoice, catalog) = setup(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &size,
            |b, _| {
                b.iter(|| statement_data(black_box(&invoice), black_box(&catalog)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_statement_aggregation);
criterion_main!(benches);
