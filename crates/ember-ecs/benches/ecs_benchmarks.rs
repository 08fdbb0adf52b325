//! Criterion benchmarks for the entity/component core.
//!
//! Run with: `cargo bench --package ember-ecs`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ember_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}
impl Component for Position {
    const NAME: &'static str = "Position";
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Velocity {
    x: f32,
    y: f32,
}
impl Component for Velocity {
    const NAME: &'static str = "Velocity";
}

/// Populate a manager with `count` entities; every entity gets a Position,
/// every third also gets a Velocity.
fn populate(count: usize) -> EntityManager {
    let mut entities = EntityManager::new();
    for i in 0..count {
        let e = entities.create_entity().expect("pool exhausted");
        entities.add_component(
            e,
            Position {
                x: i as f32,
                y: i as f32 * 2.0,
            },
        );
        if i % 3 == 0 {
            entities.add_component(e, Velocity { x: 1.0, y: -1.0 });
        }
    }
    entities
}

fn bench_spawn(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn_with_components");
    for count in [1_000usize, 5_000, 9_999] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(populate(count)).entity_count());
        });
    }
    group.finish();
}

fn bench_component_churn(c: &mut Criterion) {
    c.bench_function("add_remove_churn_1000", |b| {
        let mut entities = populate(1_000);
        let ids: Vec<Entity> = entities.entities().to_vec();
        b.iter(|| {
            for &e in &ids {
                entities.add_component(e, Velocity { x: 2.0, y: 2.0 });
            }
            for &e in &ids {
                entities.remove_component::<Velocity>(e);
            }
            black_box(entities.components::<Velocity>().len())
        });
    });
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("entities_with");
    for count in [1_000usize, 9_999] {
        let mut entities = populate(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(entities.entities_with::<(Position, Velocity)>()).len());
        });
    }
    group.finish();
}

fn bench_dense_iteration(c: &mut Criterion) {
    c.bench_function("dense_iteration_9999", |b| {
        let mut entities = populate(9_999);
        b.iter(|| {
            let mut sum = 0.0f32;
            for pos in entities.components_mut::<Position>() {
                pos.x += 0.5;
                sum += pos.x;
            }
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_spawn,
    bench_component_churn,
    bench_query,
    bench_dense_iteration
);
criterion_main!(benches);
