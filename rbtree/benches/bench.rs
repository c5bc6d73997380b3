use core::hint::black_box;
use core::time::Duration;
use std::collections::BTreeSet;

use criterion::measurement::{Measurement, WallTime};
use criterion::{
    criterion_group, criterion_main, AxisScale, BatchSize, BenchmarkId, Criterion,
    PlotConfiguration,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rbtree::RbTree;

pub fn gen_shuffled_keys(count: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut vec: Vec<i32> = rand::seq::index::sample(&mut rng, i32::MAX as usize, count)
        .into_iter()
        .map(|a| a as i32)
        .collect();
    vec.shuffle(&mut rng);
    assert_eq!(vec.len(), count);
    vec
}

fn build_rbtree(keys: &[i32]) -> RbTree<'static, i32> {
    let mut tree = RbTree::new();
    for k in keys {
        tree.insert(*k).unwrap();
    }
    tree
}

const COUNTS: [usize; 4] = [10, 100, 1_000, 10_000];

fn insert<M: Measurement>(c: &mut Criterion<M>) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut g = c.benchmark_group("insert");
    g.plot_config(plot_config);

    for count in COUNTS {
        let keys = gen_shuffled_keys(count, 1);
        g.bench_with_input(BenchmarkId::new("rbtree", count), &keys, |b, keys| {
            b.iter(|| build_rbtree(keys))
        });
        g.bench_with_input(BenchmarkId::new("btreeset", count), &keys, |b, keys| {
            b.iter(|| keys.iter().copied().collect::<BTreeSet<_>>())
        });
    }
    g.finish();
}

fn remove<M: Measurement>(c: &mut Criterion<M>) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut g = c.benchmark_group("remove");
    g.plot_config(plot_config);

    for count in COUNTS {
        let keys = gen_shuffled_keys(count, 2);
        let mut order = keys.clone();
        order.shuffle(&mut ChaCha8Rng::seed_from_u64(3));

        g.bench_with_input(BenchmarkId::new("rbtree", count), &order, |b, order| {
            b.iter_batched_ref(
                || build_rbtree(&keys),
                |tree| {
                    for k in order {
                        black_box(tree.remove(k).unwrap());
                    }
                },
                BatchSize::SmallInput,
            )
        });
        g.bench_with_input(BenchmarkId::new("btreeset", count), &order, |b, order| {
            b.iter_batched_ref(
                || keys.iter().copied().collect::<BTreeSet<_>>(),
                |set| {
                    for k in order {
                        black_box(set.remove(k));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

fn iterate<M: Measurement>(c: &mut Criterion<M>) {
    let mut g = c.benchmark_group("iterate");

    for count in COUNTS {
        let keys = gen_shuffled_keys(count, 4);
        let tree = build_rbtree(&keys);
        let set = keys.iter().copied().collect::<BTreeSet<_>>();

        g.bench_with_input(BenchmarkId::new("rbtree", count), &tree, |b, tree| {
            b.iter(|| tree.iter().fold(0i64, |acc, k| acc + i64::from(*k)))
        });
        g.bench_with_input(BenchmarkId::new("btreeset", count), &set, |b, set| {
            b.iter(|| set.iter().fold(0i64, |acc, k| acc + i64::from(*k)))
        });
    }
    g.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(1))
        .warm_up_time(Duration::from_millis(100))
        .with_measurement(WallTime)
        ;
    targets = insert, remove, iterate
);
criterion_main!(benches);
