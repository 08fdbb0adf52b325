//! Headless demo: a handful of movers drifting inside a clamped arena.
//!
//! Run with: `cargo run --package ember-engine --example bouncing`

use ember_engine::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut frame_loop = FrameLoop::new(FrameConfig { fixed_dt: 1.0 / 60.0 });

    let movement = frame_loop.systems_mut().register(MovementSystem::new());
    movement.set_boundaries(0.0, 0.0, 640.0, 360.0);
    movement.enable_boundary_clamping(true);

    // Scatter a few movers with deterministic velocities.
    let entities = frame_loop.entities_mut();
    for i in 0..8u32 {
        let e = entities.create_entity().expect("entity pool exhausted");
        entities.add_component(e, Position::new(320.0, 180.0));
        entities.add_component(
            e,
            Velocity::new(40.0 + 12.0 * i as f32, -30.0 + 9.0 * i as f32),
        );
        entities.add_component(e, Renderable::new(true, i as i32 % 3));
    }

    frame_loop.start();
    for _ in 0..300 {
        frame_loop.advance();
    }

    for entity in frame_loop.entities_mut().entities_with::<(Position, Renderable)>() {
        let pos = frame_loop
            .entities()
            .get_component::<Position>(entity)
            .expect("queried entity owns a position");
        tracing::info!(%entity, x = pos.x, y = pos.y, "final position");
    }

    tracing::info!(
        frames = frame_loop.frame_count(),
        elapsed = frame_loop.elapsed(),
        "simulation complete"
    );
    frame_loop.finish();
}
