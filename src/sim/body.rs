//! A single simulated rigid body
//!
//! Continuous-state only: a body has no discrete phases, just one transition
//! ([`Body::update`]) applied once per tick by the owning world. All physical
//! quantities are public mutable fields so external inspection tools can read
//! and overwrite state between ticks without an accessor layer.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FRICTION, DEFAULT_INERTIA, DEFAULT_RESTITUTION};
use crate::math::Vector;
use crate::sim::Shape;

/// An independent simulated object with kinematic and dynamic state.
///
/// In 2D there is exactly one rotational degree of freedom, so all angular
/// state is scalar. Forces and torque accumulate between ticks and are
/// consumed (reset) by [`crate::World::update`] after each step; a caller
/// that wants a continuous force must re-apply it every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Position (2D)
    pub position: Vector,
    /// Velocity (2D)
    pub velocity: Vector,
    /// Acceleration, recomputed from force/drag/gravity each tick
    pub acceleration: Vector,
    /// Per-body gravity, added to the acceleration every tick
    pub gravity: Vector,

    /// Orientation angle in radians (unbounded, not wrapped)
    pub rotation: f64,
    /// Angular velocity in radians per second
    pub angular_vel: f64,
    /// Angular acceleration, recomputed from torque/drag each tick
    pub angular_acc: f64,

    /// Mass; must be positive, zero silently yields non-finite state
    pub mass: f64,
    /// Moment of inertia; must be positive, zero silently yields
    /// non-finite angular state
    pub inertia: f64,
    /// Friction coefficient (reserved for the future collision system)
    pub coeff_friction: f64,
    /// Restitution coefficient (reserved for the future collision system)
    pub coeff_restitution: f64,

    /// Accumulated force, consumed and reset every tick
    pub force: Vector,
    /// Accumulated torque, consumed and reset every tick
    pub torque: f64,

    /// Linear drag coefficients; the drag force is this vector negated and
    /// scaled by the x-component of the velocity
    pub linear_drag: Vector,
    /// Angular drag coefficient, applied against the angular velocity
    pub angular_drag: f64,

    /// Contact normal placeholder, never populated by this core
    pub normal: Vector,
    /// Externally applied impulse; currently cleared each tick without
    /// being folded into the velocity
    pub impulse: Vector,
    /// Center-of-mass placeholder, never populated by this core
    pub center_of_mass: Vector,

    /// Render-only shapes drawn at this body's position
    pub shapes: Vec<Shape>,
}

impl Body {
    /// Create a body from initial position, velocity, mass and force.
    ///
    /// Higher-order and angular state start at zero; inertia, friction and
    /// restitution take their conventional defaults, gravity starts as the
    /// 2D zero vector.
    pub fn new(position: Vector, velocity: Vector, mass: f64, force: Vector) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector::zero(2),
            gravity: Vector::zero(2),
            rotation: 0.0,
            angular_vel: 0.0,
            angular_acc: 0.0,
            mass,
            inertia: DEFAULT_INERTIA,
            coeff_friction: DEFAULT_FRICTION,
            coeff_restitution: DEFAULT_RESTITUTION,
            force,
            torque: 0.0,
            linear_drag: Vector::zero(2),
            angular_drag: 0.0,
            normal: Vector::zero(2),
            impulse: Vector::zero(2),
            center_of_mass: Vector::zero(2),
            shapes: Vec::new(),
        }
    }

    /// Advance the body by one semi-implicit Euler step.
    ///
    /// Velocity integrates from the freshly recomputed acceleration, then
    /// position integrates from the just-updated velocity; the angular state
    /// follows the same order. Nothing here checks for zero mass or inertia;
    /// the division simply produces non-finite values that propagate into
    /// later ticks.
    pub fn update(&mut self, dt: f64) {
        // drag magnitude uses the x component of the velocity as a speed
        // proxy rather than a full vector product
        let drag_force = -self.linear_drag * self.velocity.x();
        self.acceleration = (self.force + drag_force) / self.mass + self.gravity;
        self.velocity = self.velocity + self.acceleration * dt;
        self.position = self.position + self.velocity * dt;

        // TODO: decide whether the impulse should fold into the velocity
        // (velocity += impulse / mass) before the clear below
        self.impulse = Vector::zero(2);

        let drag_torque = -self.angular_drag * self.angular_vel;
        self.angular_acc = (self.torque + drag_torque) / self.inertia;
        self.angular_vel += self.angular_acc * dt;
        self.rotation += self.angular_vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn body_at_rest() -> Body {
        Body::new(
            Vector::from_xy(0.0, 0.0),
            Vector::zero(2),
            1.0,
            Vector::zero(2),
        )
    }

    #[test]
    fn test_update_without_inputs_is_a_no_op() {
        let mut body = Body::new(
            Vector::from_xy(3.0, 4.0),
            Vector::from_xy(0.0, 0.0),
            2.0,
            Vector::zero(2),
        );
        for dt in [0.001, 0.016, 1.0, 10.0] {
            body.update(dt);
            assert_eq!(body.position.as_slice(), &[3.0, 4.0]);
            assert_eq!(body.velocity.as_slice(), &[0.0, 0.0]);
            assert_eq!(body.rotation, 0.0);
        }
    }

    #[test]
    fn test_semi_implicit_order_single_step() {
        // v = (F/m)*dt from the fresh acceleration, then p moves by the
        // *updated* velocity
        let mut body = body_at_rest();
        body.mass = 2.0;
        let _ = body.force.set_xy(4.0, -8.0);

        body.update(0.5);

        assert!((body.acceleration.x() - 2.0).abs() < EPS);
        assert!((body.acceleration.y() + 4.0).abs() < EPS);
        assert!((body.velocity.x() - 1.0).abs() < EPS);
        assert!((body.velocity.y() + 2.0).abs() < EPS);
        assert!((body.position.x() - 0.5).abs() < EPS);
        assert!((body.position.y() + 1.0).abs() < EPS);
    }

    #[test]
    fn test_gravity_adds_to_acceleration() {
        let mut body = body_at_rest();
        let _ = body.gravity.set_xy(0.0, 9.8);
        body.update(1.0);
        assert!((body.velocity.y() - 9.8).abs() < EPS);
        assert!((body.position.y() - 9.8).abs() < EPS);
    }

    #[test]
    fn test_linear_drag_uses_velocity_x_proxy() {
        let mut body = body_at_rest();
        let _ = body.velocity.set_xy(2.0, 5.0);
        let _ = body.linear_drag.set_xy(1.0, 3.0);

        body.update(1.0);

        // drag = -(1,3) * vx = (-2,-6); acc = drag / m
        assert!((body.acceleration.x() + 2.0).abs() < EPS);
        assert!((body.acceleration.y() + 6.0).abs() < EPS);
        assert!((body.velocity.x() - 0.0).abs() < EPS);
        assert!((body.velocity.y() + 1.0).abs() < EPS);
    }

    #[test]
    fn test_angular_step_mirrors_linear() {
        let mut body = body_at_rest();
        body.inertia = 2.0;
        body.torque = 10.0;
        body.angular_drag = 0.5;
        body.angular_vel = 4.0;

        body.update(1.0);

        // drag torque = -0.5 * 4 = -2; ang_acc = (10 - 2) / 2 = 4
        assert!((body.angular_acc - 4.0).abs() < EPS);
        assert!((body.angular_vel - 8.0).abs() < EPS);
        assert!((body.rotation - 8.0).abs() < EPS);
    }

    #[test]
    fn test_impulse_cleared_without_being_applied() {
        let mut body = body_at_rest();
        let _ = body.impulse.set_xy(100.0, 100.0);
        body.update(1.0);
        assert_eq!(body.impulse.as_slice(), &[0.0, 0.0]);
        assert_eq!(body.velocity.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_zero_mass_degrades_to_non_finite_silently() {
        let mut body = body_at_rest();
        body.mass = 0.0;
        let _ = body.force.set_xy(1.0, 0.0);
        body.update(1.0);
        assert!(body.acceleration.x().is_infinite());
        assert!(!body.position.x().is_finite());
        // and the degradation persists through later ticks
        body.update(1.0);
        assert!(!body.position.x().is_finite());
    }

    #[test]
    fn test_body_serializes_with_named_fields() {
        let body = body_at_rest();
        let json = serde_json::to_value(&body).unwrap();
        for field in ["position", "velocity", "mass", "inertia", "force", "torque"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
