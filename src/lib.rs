//! Kinema2D - a minimal 2D rigid-body kinematics core
//!
//! Core modules:
//! - `math`: Fixed-capacity N-dimensional vectors and 2x2 rotation matrices
//! - `sim`: Bodies, the owning world, and the per-tick integration step
//!
//! The simulation is single-threaded and synchronous: the embedding shell
//! calls [`World::update`] once per frame with the elapsed wall-clock seconds,
//! then reads body state back for rendering. Rendering, windowing and the
//! interactive console are external collaborators; the core only carries the
//! state they inspect (shapes, named scalar properties).
//!
//! The numerical contract is deliberately unguarded: zero mass, zero inertia
//! or zero-length normalization produce NaN/Inf that propagate through later
//! ticks instead of halting. Callers guarantee `mass > 0` and `inertia > 0`
//! at body creation time.

pub mod math;
pub mod sim;

pub use math::{Matrix, Vector};
pub use sim::{Body, BodyHandle, Property, Shape, World};

/// Simulation configuration constants
pub mod consts {
    /// Fixed demo timestep (120 Hz)
    pub const SIM_DT: f64 = 1.0 / 120.0;

    /// Mass assigned to bodies created through [`crate::World::add_body`]
    pub const DEFAULT_BODY_MASS: f64 = 0.1;
    /// Moment of inertia assigned to new bodies
    pub const DEFAULT_INERTIA: f64 = 1.0;
    /// Friction coefficient assigned to new bodies
    pub const DEFAULT_FRICTION: f64 = 0.5;
    /// Restitution coefficient assigned to new bodies
    pub const DEFAULT_RESTITUTION: f64 = 0.5;
}

/// Result of a state mutation that can be silently refused.
///
/// The core never panics and never raises an error for a malformed request;
/// a request that fails its precondition is ignored, and the caller is told
/// so through this variant pair instead of through control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum OpOutcome {
    /// The mutation was performed.
    Applied,
    /// The mutation was skipped; the reason names the failed precondition.
    Ignored(IgnoreReason),
}

impl OpOutcome {
    /// True if the mutation was performed.
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, OpOutcome::Applied)
    }
}

/// Precondition that caused a mutation to be ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The vector does not carry enough active dimensions for the write.
    DimensionTooSmall,
    /// A positional or component index is outside the live range.
    IndexOutOfRange,
    /// A generation-checked handle no longer points at a live body.
    StaleHandle,
}

impl IgnoreReason {
    pub fn as_str(self) -> &'static str {
        match self {
            IgnoreReason::DimensionTooSmall => "dimension too small",
            IgnoreReason::IndexOutOfRange => "index out of range",
            IgnoreReason::StaleHandle => "stale handle",
        }
    }
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f64) -> f64 {
    use std::f64::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
