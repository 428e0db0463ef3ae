use cascade::{CascadeError, Pipeline};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime; // To run async code within Criterion

// Using CascadeError directly for benchmark simplicity.
type BenchError = CascadeError;

// Builds a waterfall of `depth` steps: a source plus (depth - 1) transforms,
// each doing trivial synchronous work inside its async body.
fn build_pipeline(depth: usize) -> Pipeline<u64, BenchError> {
  let mut pipeline =
    Pipeline::<u64, BenchError>::new().source("seed", || async { Ok::<_, BenchError>(0u64) });
  for i in 1..depth {
    pipeline = pipeline.then(&format!("step_{}", i), |value: u64| async move {
      Ok::<_, BenchError>(value.wrapping_add(1))
    });
  }
  pipeline
}

fn bench_waterfall_depth(c: &mut Criterion) {
  let rt = Runtime::new().expect("Failed to create tokio runtime for benchmarks");
  let mut group = c.benchmark_group("waterfall_depth");

  for depth in [1usize, 4, 16, 64] {
    group.throughput(Throughput::Elements(depth as u64));
    group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
      let pipeline = build_pipeline(depth);
      b.to_async(&rt).iter(|| async {
        let outcome = pipeline.run().await;
        assert!(outcome.is_ok());
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_waterfall_depth);
criterion_main!(benches);
