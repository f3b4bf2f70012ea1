pub mod entity;

pub use entity::Entity;
