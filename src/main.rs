//! Headless demo driver
//!
//! Stands in for a rendering shell: seeds a deterministic scenario, applies a
//! steady thrust to one body every tick (forces are consumed per tick and
//! must be re-applied), and logs state snapshots instead of drawing them.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use kinema2d::consts::SIM_DT;
use kinema2d::{Property, Shape, World};

const SEED: u64 = 0x2d_b0d1e5;
const BODY_COUNT: usize = 8;
const TICKS: u64 = 1200;

fn main() {
    env_logger::init();
    log::info!("kinema2d demo starting (seed {SEED})");

    let mut rng = Pcg32::seed_from_u64(SEED);
    let mut world = World::new();

    for i in 0..BODY_COUNT {
        let x = rng.random_range(50.0..750.0);
        let y = rng.random_range(50.0..750.0);
        let vx = rng.random_range(-20.0..20.0);
        let vy = rng.random_range(-20.0..20.0);
        let handle = world.add_body(x, y, vx, vy, 0.0, 0.0, Shape::circle(20.0));
        if let Some(body) = world.get_mut(handle)
            && i % 2 == 0
        {
            let _ = body.linear_drag.set_xy(0.05, 0.05);
        }
    }

    // give the first body some spin through the console-facing interface
    let _ = world.set_property_at(0, Property::Mass, 0.5);
    if let Some(body) = world.body_at_mut(0) {
        body.torque = 2.0;
    }

    let thrusted = world.handles().next();
    for tick in 0..TICKS {
        // re-apply the steady thrust before stepping
        if let Some(body) = thrusted.and_then(|h| world.get_mut(h)) {
            let _ = body.force.set_xy(1.0, 0.0);
        }

        world.update(SIM_DT);

        if tick % 240 == 0
            && let Some(body) = world.body_at(0)
        {
            log::info!(
                "tick {tick}: body 0 pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) rot={:.3}",
                body.position.x(),
                body.position.y(),
                body.velocity.x(),
                body.velocity.y(),
                kinema2d::normalize_angle(body.rotation),
            );
        }
    }

    log::info!(
        "done after {TICKS} ticks, {} bodies, body 0 speed {:.2}",
        world.len(),
        world.body_at(0).map(|b| b.velocity.length()).unwrap_or(0.0),
    );
}
