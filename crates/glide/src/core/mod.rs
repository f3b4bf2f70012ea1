pub mod clock;
pub mod scene;

pub use clock::FrameClock;
pub use scene::Scene;
