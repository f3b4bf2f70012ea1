use glam::Vec3;
use crate::api::types::EntityId;

/// A transformable object in the scene.
///
/// Carries only what the tween system reads and writes: a world
/// transform in three parts, each a 3-component vector. Rotation is an
/// Euler-angle vector in degrees; how (or whether) any of this is
/// rendered is the host's business.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Position in world space.
    pub pos: Vec3,
    /// Euler-angle rotation in degrees.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
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
}
