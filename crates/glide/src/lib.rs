pub mod api;
pub mod components;
pub mod core;
pub mod tween;

// Re-export key types at crate root for convenience
pub use api::types::EntityId;
pub use components::entity::Entity;
pub use core::clock::FrameClock;
pub use core::scene::Scene;
pub use tween::lerp::{lerp, lerp_vec3};
pub use tween::state::{Tween, TweenGoal, TweenState};
