use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use memlru::{LruCache, SharedLruCache};

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        let data = vec![b'x'; 1024];

        for id in 0..100u64 {
            cache.set(id, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)));
            counter += 1;
        });
    });

    group.bench_function("get_hit_shared", |b| {
        let cache = SharedLruCache::new(1000).unwrap();

        for id in 0..100u64 {
            cache.set(id, id);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_set_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_evicting", |b| {
        let mut cache = LruCache::new(100).unwrap();

        // Every set is a new key at a full cache
        let mut counter = 0u64;
        b.iter(|| {
            cache.set(counter, counter);
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = LruCache::new(100).unwrap();

        for id in 0..100u64 {
            cache.set(id, id);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 150)));
            } else {
                cache.set(counter % 150, counter);
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_set_with_eviction,
    bench_mixed_50_50
);
criterion_main!(benches);
