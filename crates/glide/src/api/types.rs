/// Unique identifier for an entity in the scene.
///
/// Tweens hold an `EntityId` rather than any reference to the entity
/// itself; every lookup goes through the `Scene`, so a despawned entity
/// shows up as absent instead of dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);
