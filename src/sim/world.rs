//! The owning body collection and stepping authority
//!
//! Bodies live in a generation-checked slot arena: external collaborators
//! (selection, the console) hold [`BodyHandle`]s instead of raw references
//! and re-validate them cheaply every frame. A separate insertion-order list
//! drives iteration and positional access; simulation correctness must never
//! depend on visit order because bodies are fully independent here.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BODY_MASS;
use crate::math::Vector;
use crate::sim::{Body, Shape};
use crate::{IgnoreReason, OpOutcome};

/// Generation-checked reference to a body owned by a [`World`].
///
/// Stays cheap to copy and becomes stale (all lookups return `None`) once
/// the body it named is removed, even if the slot is later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Slot {
    generation: u32,
    body: Option<Body>,
}

/// The collection of all simulated bodies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    slots: Vec<Slot>,
    free: Vec<u32>,
    /// Live handles in insertion order; drives iteration and positional access
    order: Vec<BodyHandle>,
}

impl World {
    /// Empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every body by one tick, then consume its per-step inputs.
    ///
    /// Each live body is updated exactly once; afterwards its accumulated
    /// force is reset to the 2D zero vector and its torque to zero. Forces
    /// never persist across ticks: a held-down input must be re-applied
    /// before every call.
    pub fn update(&mut self, dt: f64) {
        for handle in &self.order {
            let slot = &mut self.slots[handle.index as usize];
            if let Some(body) = slot.body.as_mut() {
                body.update(dt);
                body.force = Vector::zero(2);
                body.torque = 0.0;
            }
        }
    }

    /// Create a body from initial position, velocity and force, attach the
    /// given shape and append it to the collection.
    ///
    /// The body gets the default mass and zero-initialized higher-order
    /// state.
    pub fn add_body(
        &mut self,
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        fx: f64,
        fy: f64,
        shape: Shape,
    ) -> BodyHandle {
        let mut body = Body::new(
            Vector::from_xy(x, y),
            Vector::from_xy(vx, vy),
            DEFAULT_BODY_MASS,
            Vector::from_xy(fx, fy),
        );
        body.shapes.push(shape);
        let handle = self.insert(body);
        log::debug!("added body {:?} at ({x}, {y})", handle);
        handle
    }

    /// Take ownership of a body, returning a handle to it
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.generation += 1;
                slot.body = Some(body);
                BodyHandle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    body: Some(body),
                });
                BodyHandle {
                    index,
                    generation: 0,
                }
            }
        };
        self.order.push(handle);
        handle
    }

    /// Remove the body a handle points at. Ignored for stale handles.
    pub fn remove(&mut self, handle: BodyHandle) -> OpOutcome {
        if !self.contains(handle) {
            return OpOutcome::Ignored(IgnoreReason::StaleHandle);
        }
        self.slots[handle.index as usize].body = None;
        self.free.push(handle.index);
        self.order.retain(|h| *h != handle);
        log::debug!("removed body {:?}", handle);
        OpOutcome::Applied
    }

    /// Remove the body at a positional (insertion-order) index. Ignored when
    /// the index is out of range; the collection is left untouched.
    pub fn remove_at(&mut self, index: usize) -> OpOutcome {
        match self.order.get(index) {
            Some(&handle) => self.remove(handle),
            None => OpOutcome::Ignored(IgnoreReason::IndexOutOfRange),
        }
    }

    /// Drop every body (and its shapes).
    ///
    /// Slots and their generation counters survive the clear, so handles
    /// issued before it stay stale even once their slots are reused.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.body.take().is_some() {
                slot.generation += 1;
                self.free.push(index as u32);
            }
        }
        self.order.clear();
        log::debug!("cleared all bodies");
    }

    /// True if the handle still points at a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.slots
            .get(handle.index as usize)
            .is_some_and(|slot| slot.generation == handle.generation && slot.body.is_some())
    }

    /// Look up a body by handle; `None` for stale handles
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_ref()
    }

    /// Mutable lookup by handle; `None` for stale handles
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_mut()
    }

    /// Body at a positional (insertion-order) index
    pub fn body_at(&self, index: usize) -> Option<&Body> {
        self.order.get(index).and_then(|&h| self.get(h))
    }

    /// Mutable body at a positional index
    pub fn body_at_mut(&mut self, index: usize) -> Option<&mut Body> {
        let handle = *self.order.get(index)?;
        self.get_mut(handle)
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no bodies are live
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live handles in insertion order
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.order.iter().copied()
    }

    /// Bodies in insertion order (read-only, e.g. for rendering)
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.order.iter().filter_map(|&h| self.get(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_end_to_end_single_step() {
        // body at (100,200), default mass 0.1, force (5,0), no drag/gravity:
        // one 1s step gives acc (50,0), vel (50,0), pos (150,200)
        let mut world = World::new();
        let handle = world.add_body(100.0, 200.0, 0.0, 0.0, 5.0, 0.0, Shape::circle(20.0));

        world.update(1.0);

        let body = world.get(handle).unwrap();
        assert!((body.acceleration.x() - 50.0).abs() < EPS);
        assert!((body.acceleration.y()).abs() < EPS);
        assert!((body.velocity.x() - 50.0).abs() < EPS);
        assert!((body.position.x() - 150.0).abs() < EPS);
        assert!((body.position.y() - 200.0).abs() < EPS);
        // force consumed
        assert_eq!(body.force.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_update_resets_force_and_torque_on_every_body() {
        let mut world = World::new();
        let a = world.add_body(0.0, 0.0, 0.0, 0.0, 3.0, -1.0, Shape::circle(1.0));
        let b = world.add_body(10.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        world.get_mut(b).unwrap().torque = 7.0;

        world.update(0.016);

        assert_eq!(world.get(a).unwrap().force.as_slice(), &[0.0, 0.0]);
        assert_eq!(world.get(b).unwrap().torque, 0.0);
    }

    #[test]
    fn test_force_does_not_persist_across_ticks() {
        let mut world = World::new();
        let h = world.add_body(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, Shape::circle(1.0));
        world.update(1.0);
        let vx_after_one = world.get(h).unwrap().velocity.x();
        world.update(1.0);
        // no force the second tick, velocity coasts
        assert!((world.get(h).unwrap().velocity.x() - vx_after_one).abs() < EPS);
    }

    #[test]
    fn test_remove_at_out_of_range_is_ignored() {
        let mut world = World::new();
        world.add_body(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        let before: Vec<BodyHandle> = world.handles().collect();

        let out = world.remove_at(5);

        assert_eq!(out, OpOutcome::Ignored(IgnoreReason::IndexOutOfRange));
        assert_eq!(world.len(), 1);
        assert_eq!(world.handles().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_remove_shifts_positional_indices() {
        let mut world = World::new();
        world.add_body(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        world.add_body(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        world.add_body(2.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));

        assert!(world.remove_at(0).is_applied());

        assert_eq!(world.len(), 2);
        assert_eq!(world.body_at(0).unwrap().position.x(), 1.0);
        assert_eq!(world.body_at(1).unwrap().position.x(), 2.0);
    }

    #[test]
    fn test_stale_handle_after_removal_and_reuse() {
        let mut world = World::new();
        let old = world.add_body(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        assert!(world.remove(old).is_applied());
        assert!(world.get(old).is_none());
        assert_eq!(world.remove(old), OpOutcome::Ignored(IgnoreReason::StaleHandle));

        // the slot gets reused, but the old handle stays stale
        let new = world.add_body(9.0, 9.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        assert!(world.contains(new));
        assert!(!world.contains(old));
        assert!(world.get(old).is_none());
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut world = World::new();
        let h = world.add_body(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        world.add_body(1.0, 1.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        world.clear();
        assert!(world.is_empty());
        assert!(world.get(h).is_none());
    }

    #[test]
    fn test_handle_from_before_clear_stays_stale_after_reuse() {
        let mut world = World::new();
        let old = world.add_body(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        world.clear();

        // the cleared slot gets reused; the pre-clear handle must not alias
        // the new occupant
        let new = world.add_body(5.0, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        assert!(!world.contains(old));
        assert!(world.get(old).is_none());
        assert!(world.get_mut(old).is_none());
        assert!(world.contains(new));
        assert_eq!(world.get(new).unwrap().position.x(), 5.0);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut world = World::new();
        for i in 0..4 {
            world.add_body(i as f64, 0.0, 0.0, 0.0, 0.0, 0.0, Shape::circle(1.0));
        }
        assert!(world.remove_at(1).is_applied());
        let xs: Vec<f64> = world.iter().map(|b| b.position.x()).collect();
        assert_eq!(xs, vec![0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_each_body_updated_exactly_once_per_tick() {
        let mut world = World::new();
        let handles: Vec<BodyHandle> = (0..3)
            .map(|i| world.add_body(0.0, 0.0, 1.0, 0.0, 0.0, 0.0, Shape::circle(i as f64 + 1.0)))
            .collect();

        world.update(1.0);

        for h in handles {
            // vx stays 1, position advanced by exactly one step
            let body = world.get(h).unwrap();
            assert!((body.position.x() - 1.0).abs() < EPS);
        }
    }
}
