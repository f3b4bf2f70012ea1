// tween/mod.rs
//
// The tween system: linear interpolation primitives plus the registry
// that steps every in-flight transition once per frame.

pub mod lerp;
pub mod state;

pub use lerp::{lerp, lerp_vec3};
pub use state::{Tween, TweenGoal, TweenState};
