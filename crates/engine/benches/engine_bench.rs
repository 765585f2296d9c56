use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use synapsis_engine::alignment::{lcs_similarity, Alignment};
use synapsis_engine::pairing::{resolve, MetricSense};
use synapsis_engine::recombination::{crossover, UniformDistance};

/// A base sequence plus `copies - 1` point-mutated variants of it.
fn related_sequences(rng: &mut Xoshiro256PlusPlus, copies: usize, len: usize) -> Vec<Vec<u8>> {
    let base: Vec<u8> = (0..len).map(|_| rng.random_range(0..4)).collect();
    (0..copies)
        .map(|_| {
            base.iter()
                .map(|&item| if rng.random_bool(0.05) { rng.random_range(0..4) } else { item })
                .collect()
        })
        .collect()
}

fn bench_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    for &len in &[100, 1_000, 4_000] {
        let pair = related_sequences(&mut rng, 2, len);
        group.throughput(Throughput::Elements((len * len) as u64));

        group.bench_with_input(BenchmarkId::new("lcs", len), &pair, |b, pair| {
            b.iter(|| Alignment::new(black_box(&pair[0]), black_box(&pair[1]), |x, y| x == y))
        });

        let alignment = Alignment::new(&pair[0], &pair[1], |x, y| x == y);
        group.bench_with_input(BenchmarkId::new("right_index", len), &alignment, |b, alignment| {
            b.iter(|| (0..len).map(|i| alignment.right_index(black_box(i))).sum::<usize>())
        });
    }

    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    for &len in &[1_000, 4_000] {
        let pair = related_sequences(&mut rng, 2, len);
        let alignment = Alignment::new(&pair[0], &pair[1], |x, y| x == y);
        let mut generator = UniformDistance::new(64, Xoshiro256PlusPlus::seed_from_u64(1)).unwrap();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("uniform_64", len), |b| {
            b.iter(|| crossover(&pair[0], &pair[1], &alignment, &mut generator))
        });
    }

    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    for &count in &[8, 32, 128] {
        let values: Vec<f64> = (0..count).map(|_| rng.random::<f64>()).collect();
        group.bench_with_input(BenchmarkId::new("resolve", count), &values, |b, values| {
            b.iter(|| {
                resolve(
                    black_box(values),
                    |a: &f64, b: &f64| (a - b).abs(),
                    MetricSense::LessIsMoreAlike,
                    None,
                )
            })
        });
    }

    let genome = related_sequences(&mut rng, 16, 200);
    group.bench_function("resolve_lcs_16x200", |b| {
        b.iter(|| {
            resolve(
                black_box(&genome),
                |a: &Vec<u8>, b: &Vec<u8>| lcs_similarity(a, b),
                MetricSense::MoreIsMoreAlike,
                Some(0.5),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_alignment, bench_crossover, bench_pairing);
criterion_main!(benches);
