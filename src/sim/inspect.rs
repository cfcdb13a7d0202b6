//! Property-by-name access for the console collaborator
//!
//! The interactive console lives outside the core; what it needs from here
//! is a way to list bodies (positional indices, [`crate::World::iter`]) and
//! to read or overwrite one scalar field of one body by name. Unknown names
//! parse to `None` and out-of-range indices are ignored, matching the
//! silent-no-op error taxonomy of the rest of the core.

use crate::sim::{Body, World};
use crate::{IgnoreReason, OpOutcome};

/// A body scalar field addressable by name from the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    X,
    Y,
    Vx,
    Vy,
    Fx,
    Fy,
    Mass,
    Inertia,
    Friction,
    Restitution,
}

impl Property {
    /// Every addressable property, in display order
    pub const ALL: [Property; 10] = [
        Property::X,
        Property::Y,
        Property::Vx,
        Property::Vy,
        Property::Fx,
        Property::Fy,
        Property::Mass,
        Property::Inertia,
        Property::Friction,
        Property::Restitution,
    ];

    /// Parse a console property name; unknown names yield `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Property::X),
            "y" => Some(Property::Y),
            "vx" => Some(Property::Vx),
            "vy" => Some(Property::Vy),
            "fx" => Some(Property::Fx),
            "fy" => Some(Property::Fy),
            "mass" => Some(Property::Mass),
            "inertia" => Some(Property::Inertia),
            "friction" => Some(Property::Friction),
            "restitution" => Some(Property::Restitution),
            _ => None,
        }
    }

    /// The console name for this property
    pub fn as_str(self) -> &'static str {
        match self {
            Property::X => "x",
            Property::Y => "y",
            Property::Vx => "vx",
            Property::Vy => "vy",
            Property::Fx => "fx",
            Property::Fy => "fy",
            Property::Mass => "mass",
            Property::Inertia => "inertia",
            Property::Friction => "friction",
            Property::Restitution => "restitution",
        }
    }
}

impl Body {
    /// Read one scalar field by name
    pub fn property(&self, prop: Property) -> f64 {
        match prop {
            Property::X => self.position.x(),
            Property::Y => self.position.y(),
            Property::Vx => self.velocity.x(),
            Property::Vy => self.velocity.y(),
            Property::Fx => self.force.x(),
            Property::Fy => self.force.y(),
            Property::Mass => self.mass,
            Property::Inertia => self.inertia,
            Property::Friction => self.coeff_friction,
            Property::Restitution => self.coeff_restitution,
        }
    }

    /// Overwrite one scalar field by name.
    ///
    /// Vector-backed properties route through the component setter so the
    /// cached lengths stay consistent.
    pub fn set_property(&mut self, prop: Property, value: f64) -> OpOutcome {
        match prop {
            Property::X => self.position.set_component(0, value),
            Property::Y => self.position.set_component(1, value),
            Property::Vx => self.velocity.set_component(0, value),
            Property::Vy => self.velocity.set_component(1, value),
            Property::Fx => self.force.set_component(0, value),
            Property::Fy => self.force.set_component(1, value),
            Property::Mass => {
                self.mass = value;
                OpOutcome::Applied
            }
            Property::Inertia => {
                self.inertia = value;
                OpOutcome::Applied
            }
            Property::Friction => {
                self.coeff_friction = value;
                OpOutcome::Applied
            }
            Property::Restitution => {
                self.coeff_restitution = value;
                OpOutcome::Applied
            }
        }
    }
}

impl World {
    /// Read one scalar field of the body at a positional index
    pub fn property_at(&self, index: usize, prop: Property) -> Option<f64> {
        self.body_at(index).map(|b| b.property(prop))
    }

    /// Overwrite one scalar field of the body at a positional index.
    /// Ignored when the index is out of range.
    pub fn set_property_at(&mut self, index: usize, prop: Property, value: f64) -> OpOutcome {
        match self.body_at_mut(index) {
            Some(body) => body.set_property(prop, value),
            None => OpOutcome::Ignored(IgnoreReason::IndexOutOfRange),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;
    use crate::sim::Shape;

    #[test]
    fn test_parse_round_trips_every_property() {
        for prop in Property::ALL {
            assert_eq!(Property::parse(prop.as_str()), Some(prop));
        }
    }

    #[test]
    fn test_unknown_name_parses_to_none() {
        assert_eq!(Property::parse("spin"), None);
        assert_eq!(Property::parse(""), None);
        assert_eq!(Property::parse("Mass"), None); // names are exact
    }

    #[test]
    fn test_get_and_set_every_property() {
        let mut body = Body::new(
            Vector::from_xy(1.0, 2.0),
            Vector::from_xy(3.0, 4.0),
            0.5,
            Vector::from_xy(5.0, 6.0),
        );

        assert_eq!(body.property(Property::X), 1.0);
        assert_eq!(body.property(Property::Vy), 4.0);
        assert_eq!(body.property(Property::Fx), 5.0);
        assert_eq!(body.property(Property::Mass), 0.5);

        for (i, prop) in Property::ALL.iter().enumerate() {
            let value = 10.0 + i as f64;
            assert!(body.set_property(*prop, value).is_applied());
            assert_eq!(body.property(*prop), value);
        }
    }

    #[test]
    fn test_set_position_keeps_vector_length_consistent() {
        let mut body = Body::new(Vector::zero(2), Vector::zero(2), 1.0, Vector::zero(2));
        assert!(body.set_property(Property::X, 3.0).is_applied());
        assert!(body.set_property(Property::Y, 4.0).is_applied());
        assert!((body.position.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_world_set_out_of_range_is_ignored() {
        let mut world = World::new();
        world.add_body(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));

        let out = world.set_property_at(3, Property::Mass, 1.0);
        assert_eq!(out, OpOutcome::Ignored(IgnoreReason::IndexOutOfRange));
        assert_eq!(world.property_at(3, Property::Mass), None);

        assert!(world.set_property_at(0, Property::Mass, 2.5).is_applied());
        assert_eq!(world.property_at(0, Property::Mass), Some(2.5));
    }
}
