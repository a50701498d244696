use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use larder_core::ValueObject;
use larder_inventory::{Inventory, Item, ItemId, Name, TransactionLog};
use larder_logic::{parse_command, LogicManager};
use larder_model::{ModelManager, UserPrefs};

/// Inventory of `size` distinct items named `Item 1`, `Item 2`, ...
fn stocked_inventory(size: u32) -> Inventory {
    let items: Vec<Item> = (1..=size)
        .map(|n| {
            Item::new(
                Name::parse(&format!("Item {n}")).unwrap(),
                ItemId::new(n).unwrap(),
                100,
                [],
            )
        })
        .collect();
    Inventory::from_items(items).unwrap()
}

fn bench_parse_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_latency");

    let inputs = [
        ("add", "add n/Chocolate Muffin i/123456 c/40 t/baked t/popular t/sweet"),
        ("remove_preamble", "remove Chocolate Muffin i/123456 c/4"),
        ("edit", "edit 3 n/Blueberry Muffin t/baked t/fruit"),
        ("find", "find muffin bagel scone croissant"),
        ("unknown", "restock everything now"),
    ];
    for (label, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(label), input, |b, input| {
            b.iter(|| {
                let _ = black_box(parse_command(black_box(input)));
            });
        });
    }

    group.finish();
}

fn bench_remove_by_inventory_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_by_inventory_size");
    group.throughput(Throughput::Elements(2));

    for size in [10u32, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("remove_then_restock_last", size), size, |b, &size| {
            let model = ModelManager::new(stocked_inventory(size), TransactionLog::new(), UserPrefs::default());
            let mut logic = LogicManager::new(model);
            let remove = format!("remove Item {size} i/{size}");
            let restock = format!("add n/Item {size} i/{size} c/1");

            // Restocking keeps the count steady however many iterations run.
            b.iter(|| {
                logic.execute(black_box(&remove)).unwrap();
                logic.execute(black_box(&restock)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_latency, bench_remove_by_inventory_size);
criterion_main!(benches);
