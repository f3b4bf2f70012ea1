//! Simulated frame loop exercising the tween system end to end: a probe
//! flies out while spinning, a dish gets two overlapping tweens so the
//! later one wins. Run with RUST_LOG=info to watch the transforms move.

use glam::Vec3;
use glide::{Entity, EntityId, FrameClock, Scene, TweenGoal, TweenState};

const FIXED_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let mut scene = Scene::new();
    let probe = EntityId(1);
    let dish = EntityId(2);
    scene.spawn(Entity::new(probe).with_tag("probe"));
    scene.spawn(
        Entity::new(dish)
            .with_tag("dish")
            .with_pos(Vec3::new(0.0, 5.0, 0.0)),
    );

    let mut clock = FrameClock::new(FIXED_DT);
    let mut tweens = TweenState::new();

    // Probe: fly out along x while yawing a half turn, scale held.
    tweens.start(
        &scene,
        probe,
        TweenGoal::new()
            .with_position(Vec3::new(10.0, 0.0, 0.0))
            .with_rotation(Vec3::new(0.0, 180.0, 0.0))
            .with_scale(Vec3::ONE),
        clock.now(),
    );

    // Dish: two overlapping goals — the second one is the visible mover.
    let hold = scene.get(dish).map(|e| (e.rotation, e.scale)).unwrap();
    tweens.start(
        &scene,
        dish,
        TweenGoal::new()
            .with_position(Vec3::new(-5.0, 5.0, 0.0))
            .with_rotation(hold.0)
            .with_scale(hold.1),
        clock.now(),
    );
    tweens.start(
        &scene,
        dish,
        TweenGoal::new()
            .with_position(Vec3::new(5.0, 5.0, 5.0))
            .with_rotation(hold.0)
            .with_scale(hold.1)
            .with_position_speed(4.0),
        clock.now(),
    );

    let mut frame: u32 = 0;
    while tweens.is_any_active() {
        // A real host would pass the measured frame delta here.
        let steps = clock.accumulate(FIXED_DT);
        for _ in 0..steps {
            let now = clock.advance();
            tweens.tick(&mut scene, now);
        }

        frame += 1;
        if frame % 30 == 0 {
            for entity in scene.iter() {
                log::info!(
                    "t={:.2}s {} pos=({:.2}, {:.2}, {:.2}) yaw={:.1}",
                    clock.now(),
                    entity.tag,
                    entity.pos.x,
                    entity.pos.y,
                    entity.pos.z,
                    entity.rotation.y,
                );
            }
        }
    }

    log::info!("all tweens settled after {} frames ({:.2}s)", frame, clock.now());
    let probe_entity = scene.find_by_tag("probe").unwrap();
    println!(
        "probe arrived at ({:.1}, {:.1}, {:.1}), yaw {:.0}",
        probe_entity.pos.x, probe_entity.pos.y, probe_entity.pos.z, probe_entity.rotation.y
    );
}
