// tween/state.rs
//
// Tween registry — moves, rotates, and scales entities toward target
// transforms by EntityId, stepped once per frame. Completely decoupled
// from Entity/Scene internals beyond the transform fields it writes.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.start(&scene, id, TweenGoal::new().with_position(dest), clock.now());
//   tweens.tick(&mut scene, clock.now());  // once per fixed step

use glam::Vec3;
use crate::api::types::EntityId;
use crate::core::scene::Scene;
use super::lerp::lerp_vec3;

/// Default position speed, world units per second.
pub const DEFAULT_POSITION_SPEED: f32 = 10.0;
/// Default rotation speed, degrees per second.
pub const DEFAULT_ROTATION_SPEED: f32 = 60.0;
/// Default scale speed, scale units per second.
pub const DEFAULT_SCALE_SPEED: f32 = 100.0;

/// Target transform and per-axis speeds for a new tween.
///
/// Every target defaults to `Vec3::ZERO`: an axis the caller does not set
/// interpolates toward the origin. To hold an axis where it is, pass the
/// entity's current value for it.
#[derive(Debug, Clone, Copy)]
pub struct TweenGoal {
    /// Target world position.
    pub position: Vec3,
    /// Target Euler-angle rotation in degrees.
    pub rotation: Vec3,
    /// Target per-axis scale.
    pub scale: Vec3,
    /// Position speed, world units per second.
    pub position_speed: f32,
    /// Rotation speed, degrees per second.
    pub rotation_speed: f32,
    /// Scale speed, scale units per second.
    pub scale_speed: f32,
}

impl Default for TweenGoal {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ZERO,
            position_speed: DEFAULT_POSITION_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            scale_speed: DEFAULT_SCALE_SPEED,
        }
    }
}

impl TweenGoal {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder methods --

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_position_speed(mut self, speed: f32) -> Self {
        self.position_speed = speed;
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_scale_speed(mut self, speed: f32) -> Self {
        self.scale_speed = speed;
        self
    }

    /// Convenience: hold an entity's current transform on every axis the
    /// goal does not move, instead of defaulting toward the origin.
    pub fn holding(entity_pos: Vec3, entity_rotation: Vec3, entity_scale: Vec3) -> Self {
        Self::new()
            .with_position(entity_pos)
            .with_rotation(entity_rotation)
            .with_scale(entity_scale)
    }
}

/// A single in-flight transition for one entity.
///
/// All state is captured when the tween starts: start and target vectors
/// for the three axes, the path length of each (Euclidean distance from
/// start to target, possibly zero), the start time, and the speeds. Path
/// lengths never change for the life of the entry. `active` flips to
/// false exactly once, on completion or when the target entity is gone.
#[derive(Debug, Clone)]
pub struct Tween {
    target: EntityId,

    start_position: Vec3,
    target_position: Vec3,
    start_rotation: Vec3,
    target_rotation: Vec3,
    start_scale: Vec3,
    target_scale: Vec3,

    start_time: f32,

    position_speed: f32,
    rotation_speed: f32,
    scale_speed: f32,

    position_path: f32,
    rotation_path: f32,
    scale_path: f32,

    active: bool,
}

impl Tween {
    /// The entity this tween writes to.
    pub fn target(&self) -> EntityId {
        self.target
    }

    /// Whether this tween is still running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Fraction of a path covered after `elapsed` seconds at `speed`.
    /// A zero-length path is covered from the start.
    fn axis_fraction(elapsed: f32, speed: f32, path: f32) -> f32 {
        if path > 0.0 {
            elapsed * speed / path
        } else {
            1.0
        }
    }

    /// Fraction of the position path covered at time `now`.
    pub fn position_fraction(&self, now: f32) -> f32 {
        Self::axis_fraction(now - self.start_time, self.position_speed, self.position_path)
    }

    /// Fraction of the rotation path covered at time `now`.
    pub fn rotation_fraction(&self, now: f32) -> f32 {
        Self::axis_fraction(now - self.start_time, self.rotation_speed, self.rotation_path)
    }

    /// Fraction of the scale path covered at time `now`.
    pub fn scale_fraction(&self, now: f32) -> f32 {
        Self::axis_fraction(now - self.start_time, self.scale_speed, self.scale_path)
    }
}

/// Manages all in-flight tweens.
///
/// Entries keep insertion order. Overlapping tweens on the same entity
/// all run each tick; the later-started entry writes last, so its value
/// is the one left on the entity.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: Vec<Tween>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a transition for `id` toward `goal`, sampling the entity's
    /// current transform as the start state at time `now`.
    ///
    /// If the entity is not in the scene the call is a no-op: a handle
    /// that is already dead never produces an entry.
    pub fn start(&mut self, scene: &Scene, id: EntityId, goal: TweenGoal, now: f32) {
        let Some(entity) = scene.get(id) else {
            log::debug!("tween start skipped: entity {:?} not in scene", id);
            return;
        };

        self.tweens.push(Tween {
            target: id,
            start_position: entity.pos,
            target_position: goal.position,
            start_rotation: entity.rotation,
            target_rotation: goal.rotation,
            start_scale: entity.scale,
            target_scale: goal.scale,
            start_time: now,
            position_speed: goal.position_speed,
            rotation_speed: goal.rotation_speed,
            scale_speed: goal.scale_speed,
            position_path: entity.pos.distance(goal.position),
            rotation_path: entity.rotation.distance(goal.rotation),
            scale_path: entity.scale.distance(goal.scale),
            active: true,
        });
    }

    /// Advance every active tween to time `now`, writing interpolated
    /// transforms onto the scene's entities.
    ///
    /// Entries that finish (or whose entity has been despawned) are
    /// dropped at the end of the tick, so the registry never accumulates
    /// dead entries.
    pub fn tick(&mut self, scene: &mut Scene, now: f32) {
        if !self.is_any_active() {
            return;
        }

        for tween in self.tweens.iter_mut().filter(|t| t.active) {
            step(tween, scene, now);
        }

        self.tweens.retain(|t| t.active);
    }

    /// Whether at least one tween is still running.
    pub fn is_any_active(&self) -> bool {
        self.tweens.iter().any(|t| t.active)
    }

    /// Drop all tweens targeting an entity, running or not.
    pub fn remove_target(&mut self, id: EntityId) {
        self.tweens.retain(|t| t.target != id);
    }

    /// Iterate over the registered tweens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Tween> {
        self.tweens.iter()
    }

    /// Number of registered tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether no tweens are registered.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Clear all tweens.
    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}

/// One interpolation step for one entry.
///
/// Each axis advances independently: elapsed time times the axis speed
/// gives distance covered, divided by the axis path length gives the
/// blend fraction, and the clamped lerp of start toward target is written
/// straight onto the entity. The entry completes when all three fractions
/// have reached 1.0 (a zero-length axis counts as arrived).
fn step(tween: &mut Tween, scene: &mut Scene, now: f32) {
    let Some(entity) = scene.get_mut(tween.target) else {
        // Target despawned mid-flight: deactivate, touch nothing.
        log::debug!("tween target {:?} despawned, deactivating", tween.target);
        tween.active = false;
        return;
    };

    let position_fraction = tween.position_fraction(now);
    let rotation_fraction = tween.rotation_fraction(now);
    let scale_fraction = tween.scale_fraction(now);

    entity.pos = lerp_vec3(tween.start_position, tween.target_position, position_fraction);
    entity.rotation = lerp_vec3(tween.start_rotation, tween.target_rotation, rotation_fraction);
    entity.scale = lerp_vec3(tween.start_scale, tween.target_scale, scale_fraction);

    if position_fraction >= 1.0 && rotation_fraction >= 1.0 && scale_fraction >= 1.0 {
        tween.active = false;
    }
}
