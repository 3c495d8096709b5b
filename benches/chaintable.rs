#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chaintable::ChainedTable;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    for bucket_count in [11, 101, 1009] {
        group.bench_function(format!("chaintable insert, {bucket_count} buckets"), |b| {
            b.iter_batched(
                || ChainedTable::with_buckets(bucket_count).unwrap(),
                |mut table| {
                    for (key, value) in &items {
                        table.insert(key, value).unwrap();
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });

        let mut table = ChainedTable::with_buckets(bucket_count).unwrap();
        for (key, value) in &items {
            table.insert(key, value).unwrap();
        }
        group.bench_function(format!("chaintable get, {bucket_count} buckets"), |b| {
            b.iter(|| items.iter().filter(|(key, _)| table.get(key).is_some()).count());
        });
    }

    group.bench_function("rust std insert", |b| {
        b.iter_batched(
            || (HashMap::<String, String>::new(), items.clone()),
            |(mut rust_map, items)| {
                for (key, value) in items {
                    rust_map.insert(key, value);
                }
                rust_map
            },
            BatchSize::SmallInput,
        );
    });

    let rust_map: HashMap<String, String> = items.iter().cloned().collect();
    group.bench_function("rust std get", |b| {
        b.iter(|| items.iter().filter(|(key, _)| rust_map.get(key).is_some()).count());
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
