//! Math layer for the kinematics core
//!
//! All physical quantities are carried by the fixed-capacity [`Vector`];
//! orientation transforms for the rendering collaborator use the 2x2
//! rotation [`Matrix`]. Both are plain value types (no allocation, no
//! shared ownership).

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::{MAX_DIM, Vector};
