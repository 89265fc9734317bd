use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use tally_core::{StringFactory, Test};

fn benchmark_check_paths(c: &mut Criterion) {
    let counts: [usize; 3] = [16, 256, 4096];
    let mut group = c.benchmark_group("check_paths");

    for count in counts {
        group.bench_with_input(BenchmarkId::new("passing_int", count), &count, |b, &count| {
            b.iter(|| {
                let mut test = Test::new("bench");
                for n in 0..count as i64 {
                    test.check_int(black_box(n), black_box(n), 1, "bench");
                }
                black_box(test.passed())
            });
        });

        group.bench_with_input(BenchmarkId::new("failing_int", count), &count, |b, &count| {
            b.iter(|| {
                let mut test = Test::new("bench");
                for n in 0..count as i64 {
                    test.check_int(black_box(n), black_box(n + 1), 1, "bench");
                }
                black_box(test.failed())
            });
        });
    }

    group.finish();
}

fn benchmark_context_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("context_factory");

    group.bench_function("make_short", |b| {
        b.iter(|| {
            let mut factory = StringFactory::new();
            for n in 0..64 {
                black_box(factory.make(format_args!("context {n}")));
            }
        });
    });

    group.bench_function("make_truncating", |b| {
        let long = "x".repeat(4096);
        b.iter(|| {
            let mut factory = StringFactory::new();
            for _ in 0..64 {
                black_box(factory.make(format_args!("{long}")));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_check_paths, benchmark_context_factory);
criterion_main!(benches);
