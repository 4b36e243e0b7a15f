use criterion::measurement::Measurement;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion};
use numeric_array::{BinaryOp, NumericArray, UnaryOp};
use rand::distr::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[derive(Clone)]
pub struct ArrayConfig {
    seed: u64,
    lengths: Vec<usize>,
    measurement_time: u64,
    sample_size: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            lengths: vec![100, 10_000, 1_000_000],
            measurement_time: 5,
            sample_size: 20,
        }
    }
}

fn create_test_array(len: usize, seed: u64) -> NumericArray {
    let mut rng = StdRng::seed_from_u64(seed);
    let value_dist = Uniform::try_from(-1.0..1.0).unwrap();
    (0..len).map(|_| value_dist.sample(&mut rng)).collect()
}

fn configure_group<'a, M: Measurement>(
    c: &'a mut Criterion<M>,
    name: &str,
    config: &ArrayConfig,
) -> BenchmarkGroup<'a, M> {
    let mut group = c.benchmark_group(name);
    group.measurement_time(Duration::from_secs(config.measurement_time));
    group.sample_size(config.sample_size);
    group
}

pub fn bench_binary_ops(c: &mut Criterion) {
    let config = ArrayConfig::default();
    let mut group = configure_group(c, "Elementwise_Binary", &config);

    for &len in config.lengths.iter() {
        let a = create_test_array(len, config.seed);
        let b = create_test_array(len, config.seed + 1);

        for op in [BinaryOp::Add, BinaryOp::Divide, BinaryOp::Modulo] {
            group.bench_with_input(BenchmarkId::new(op.name(), len), &len, |bench, _| {
                bench.iter(|| a.binary(&b, op).unwrap());
            });
        }
    }
    group.finish();
}

pub fn bench_unary_ops(c: &mut Criterion) {
    let config = ArrayConfig::default();
    let mut group = configure_group(c, "Elementwise_Unary", &config);

    for &len in config.lengths.iter() {
        let a = create_test_array(len, config.seed);

        for op in [UnaryOp::Sin, UnaryOp::Exp, UnaryOp::Sqrt] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", op), len),
                &len,
                |bench, _| {
                    bench.iter(|| a.unary(op).unwrap());
                },
            );
        }
    }
    group.finish();
}

criterion_group!(elementwise_benches, bench_binary_ops, bench_unary_ops);
criterion_main!(elementwise_benches);
