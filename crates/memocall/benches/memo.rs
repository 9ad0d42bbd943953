use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use memocall::{memoize, memoize_typed, Args, Silent, Value};

fn sum(args: &Args) -> i64 {
    args.positional_values()
        .iter()
        .chain(args.named_values().iter().map(|(_, v)| v))
        .map(|v| match v {
            Value::Int(i) => *i,
            _ => 0,
        })
        .sum()
}

fn bench_dynamic_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("positional_and_named", |b| {
        let memo = memoize(sum).with_notifier(Silent);

        let calls: Vec<Args> = (0..100)
            .map(|i| Args::positional([i, i + 1]).kwarg("z", i).kwarg("a", 1))
            .collect();

        // Warm the store
        for args in &calls {
            memo.call(args).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(memo.call(&calls[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_dynamic_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("fresh_key_each_call", |b| {
        let memo = memoize(sum).with_notifier(Silent);

        let mut counter = 0i64;
        b.iter(|| {
            // Every key is new, so every call computes and stores
            black_box(memo.call(&Args::positional([counter])).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_typed_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("tuple_key", |b| {
        let memo = memoize_typed(|&(x, y): &(u64, u64)| x.wrapping_mul(y)).with_notifier(Silent);

        for i in 0..100 {
            memo.call((i, i + 1)).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            let i = counter % 100;
            black_box(memo.call((i, i + 1)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dynamic_hit, bench_dynamic_miss, bench_typed_hit);
criterion_main!(benches);
