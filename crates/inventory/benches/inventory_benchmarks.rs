use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use invtrack_core::{ItemName, Quantity};
use invtrack_inventory::{Inventory, export};

fn stocked(size: usize) -> Inventory {
    let mut inv = Inventory::new();
    for i in 0..size {
        let name = ItemName::new(format!("item-{i:06}")).unwrap();
        inv.add(name, Quantity::new((i % 10) as i64)).unwrap();
    }
    inv
}

fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_scans");

    for size in [100usize, 1_000, 10_000] {
        let inv = stocked(size);

        group.bench_with_input(BenchmarkId::new("list", size), &inv, |b, inv| {
            b.iter(|| black_box(inv.list().unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("low_stock", size), &inv, |b, inv| {
            b.iter(|| black_box(inv.low_stock_default()));
        });

        group.bench_with_input(BenchmarkId::new("export_render", size), &inv, |b, inv| {
            b.iter(|| black_box(export::render(inv).unwrap()));
        });
    }

    group.finish();
}

fn bench_upsert(c: &mut Criterion) {
    c.bench_function("add_overwrite_existing", |b| {
        let mut inv = stocked(1_000);
        let name = ItemName::new("item-000500").unwrap();
        let mut n = 0i64;
        b.iter(|| {
            n += 1;
            inv.add(name.clone(), Quantity::new(n)).unwrap();
        });
    });
}

criterion_group!(benches, bench_scans, bench_upsert);
criterion_main!(benches);
