//! Render-only shape payload
//!
//! Bodies carry zero or more shapes purely for the rendering collaborator.
//! The physics core never inspects shape geometry; shapes are a tagged
//! variant rather than an open trait because the set of drawable kinds is
//! closed here. Polygon normals are reserved for a future collision
//! subsystem and are left empty by the constructors.

use serde::{Deserialize, Serialize};

use crate::math::Vector;

/// A drawable shape attached to a body, positioned at the body's position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A circle centered on the owning body
    Circle { radius: f64 },
    /// A convex polygon with vertices in body-local space
    Polygon {
        vertices: Vec<Vector>,
        /// Per-edge outward normals; unpopulated until a collision system
        /// exists to consume them
        normals: Vec<Vector>,
    },
}

impl Shape {
    /// Circle of the given radius
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    /// Convex polygon from body-local vertices
    pub fn polygon(vertices: Vec<Vector>) -> Self {
        Shape::Polygon {
            vertices,
            normals: Vec::new(),
        }
    }

    /// Sample outline points in world space for the rendering collaborator.
    ///
    /// Circles are sampled at `segments` evenly spaced angles; polygons
    /// return their vertices offset by the body position (`segments` is
    /// ignored).
    pub fn sample_outline(&self, position: &Vector, segments: usize) -> Vec<Vector> {
        match self {
            Shape::Circle { radius } => {
                let n = segments.max(3);
                (0..n)
                    .map(|i| {
                        let theta = std::f64::consts::TAU * i as f64 / n as f64;
                        Vector::from_xy(
                            position.x() + radius * theta.cos(),
                            position.y() + radius * theta.sin(),
                        )
                    })
                    .collect()
            }
            Shape::Polygon { vertices, .. } => vertices
                .iter()
                .map(|v| Vector::from_xy(position.x() + v.x(), position.y() + v.y()))
                .collect(),
        }
    }
}
