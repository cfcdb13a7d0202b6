//! Simulation module
//!
//! All simulation state and stepping logic lives here. This module must stay
//! pure and deterministic:
//! - One synchronous [`World::update`] per tick, no background work
//! - Stable insertion-order iteration (order must never affect physics;
//!   bodies are fully independent in this core)
//! - No rendering or platform dependencies; shapes are opaque payload
//!   carried for the rendering collaborator

pub mod body;
pub mod inspect;
pub mod shape;
pub mod world;

pub use body::Body;
pub use inspect::Property;
pub use shape::Shape;
pub use world::{BodyHandle, World};
