use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrucache::{CacheConfig, LruCache, NoopReporter};

fn cache(capacity: usize) -> LruCache<u64, Vec<u8>, NoopReporter> {
    LruCache::with_reporter(&CacheConfig::new(capacity), NoopReporter).unwrap()
}

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_cached", |b| {
        let mut cache = cache(1000);
        let data = vec![b'x'; 1024];

        for id in 0..100 {
            cache.set(id, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)));
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
        let mut cache = cache(1000);
        let data = vec![b'x'; 1024];

        for id in 0..100 {
            cache.set(id, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 100)));
            } else {
                cache.set(counter, data.clone());
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_full_cache", |b| {
        let mut cache = cache(10); // Small cache
        let data = vec![b'x'; 1024];

        let mut counter = 0u64;
        b.iter(|| {
            // Every insert is a new key, so every insert evicts
            cache.set(counter, data.clone());
            counter += 1;
        });
    });

    group.bench_function("get_or_insert_with_miss", |b| {
        let mut cache = cache(10);

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get_or_insert_with(counter % 100, || vec![b'x'; 64]));
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cached_get, bench_mixed_50_50, bench_eviction);
criterion_main!(benches);
