use chainmap::ChainingHashMap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_put_with_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("chaining_put");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("from_capacity_1", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = ChainingHashMap::new(1, 0.75).unwrap();
                for key in 0..size {
                    map.put(key, key);
                }
                black_box(map.capacity())
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("chaining_search");

    for size in [100, 1_000, 10_000] {
        let mut map = ChainingHashMap::with_capacity(16).unwrap();
        for key in 0..size {
            map.put(key, key.wrapping_mul(31));
        }

        group.bench_with_input(BenchmarkId::new("hit", size), &size, |b, &size| {
            b.iter(|| {
                for key in (0..size).step_by(7) {
                    black_box(map.search(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, &size| {
            b.iter(|| black_box(map.search(size + 1)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_put_with_growth, bench_search);
criterion_main!(benches);
