use std::iter;

use criterion::Criterion;
use spellbloom::{AtomicBloomFilter, BloomFilter};

fn key() -> String {
    let rng = fastrand::Rng::new();
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn populate(bf: &mut BloomFilter, n: usize) {
    for _ in 0..n {
        let item = key();
        bf.insert(&item);
    }
}

fn bench_bloom_filter_insert(c: &mut Criterion) {
    for n in [1000, 10000] {
        c.bench_function(&format!("insert-{}", n), |b| {
            let mut bf = BloomFilter::new(n, 0.01).unwrap();

            b.iter(|| {
                let item = key();
                bf.insert(&item);
            });
        });
    }

    c.bench_function("atomic-insert-10000", |b| {
        let bf = AtomicBloomFilter::new(10000, 0.01).unwrap();

        b.iter(|| {
            let item = key();
            bf.insert(&item);
        });
    });
}

fn bench_bloom_filter_query(c: &mut Criterion) {
    for (n, p) in [(1000, 0.01), (10000, 0.01), (10000, 0.0001)] {
        c.bench_function(&format!("query-{}-{}", n, p), |b| {
            let mut bf = BloomFilter::new(n, p).unwrap();
            populate(&mut bf, n);

            b.iter(|| {
                let item = key();
                bf.query(&item);
            });
        });
    }
}

criterion::criterion_group!(benches, bench_bloom_filter_insert, bench_bloom_filter_query);
criterion::criterion_main!(benches);
