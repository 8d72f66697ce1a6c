//! Aerostat demo entry point.
//!
//! Runs the craft simulation core headless for a fixed number of seconds:
//! a scripted pilot sweeps the stick and fires periodic throttle bursts
//! while random thermal gusts heat and cool the envelope. Craft state is
//! logged once per simulated second.
//!
//! This binary is a smoke-test harness for the library, not a game: there
//! is no window, no renderer, and no force integration - the physics-body
//! component just accumulates the requests a host engine would consume.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=info cargo run --release -- --seconds 30
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec3;
use log::{info, warn};

use aerostat::components::body::PhysicsBody;
use aerostat::components::gasvolume::GasVolume;
use aerostat::components::scale::Scale;
use aerostat::components::steering::TiltSteering;
use aerostat::events::airdrained::observe_log_air_drained;
use aerostat::events::heat::HeatCmd;
use aerostat::resources::pilotinput::{PilotBridge, PilotCmd, setup_pilot_input};
use aerostat::resources::simconfig::SimConfig;
use aerostat::sim;
use aerostat::systems::time::update_world_time;

#[derive(Parser, Debug)]
#[command(
    name = "aerostat",
    about = "Headless demo run of the craft simulation core"
)]
struct Args {
    /// Path to the INI configuration file.
    #[arg(long, default_value = "./aerostat.ini")]
    config: String,

    /// Simulated duration in seconds.
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,

    /// Seed for the thermal gust generator.
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = SimConfig::with_path(&args.config);
    if let Err(err) = config.load_from_file() {
        warn!("{} - using built-in defaults", err);
    }
    let dt = config.fixed_delta();
    let tick_rate = config.tick_rate as u64;
    let tuning = config.tuning.clone();

    let mut world = World::new();
    sim::setup_world(&mut world);
    setup_pilot_input(&mut world);
    world.add_observer(observe_log_air_drained);
    world.flush();
    world.insert_resource(config);

    let craft = sim::spawn_craft(&mut world, tuning, Vec3::ONE);
    let pilot = world.resource::<PilotBridge>().tx.clone();

    let mut schedule = sim::build_tick_schedule();
    fastrand::seed(args.seed);

    let total_ticks = (args.seconds / dt).ceil() as u64;
    for tick in 0..total_ticks {
        let t = tick as f32 * dt;

        // Scripted pilot: a slow stick sweep plus a one-second throttle
        // burst at the start of every fifth second.
        let _ = pilot.send(PilotCmd::SteerX((t * 0.4).sin()));
        let _ = pilot.send(PilotCmd::SteerY(-(t * 0.25).cos().abs()));
        if tick % (tick_rate * 5) == 0 {
            let _ = pilot.send(PilotCmd::ThrottlePressed);
        }
        if tick % (tick_rate * 5) == tick_rate {
            let _ = pilot.send(PilotCmd::ThrottleReleased);
        }

        // Occasional thermal gusts from the environment.
        if fastrand::f32() < 0.01 {
            let delta = fastrand::f32() * 8.0 - 4.0;
            world.resource_mut::<Messages<HeatCmd>>().write(HeatCmd {
                target: craft,
                delta,
            });
        }

        update_world_time(&mut world, dt);
        schedule.run(&mut world);

        if tick % tick_rate == 0 {
            report(&world, craft, t);
        }
    }

    report(&world, craft, args.seconds);
    info!("demo finished after {} ticks", total_ticks);
}

fn report(world: &World, craft: Entity, t: f32) {
    let (Some(gas), Some(body), Some(steering), Some(scale)) = (
        world.get::<GasVolume>(craft),
        world.get::<PhysicsBody>(craft),
        world.get::<TiltSteering>(craft),
        world.get::<Scale>(craft),
    ) else {
        return;
    };
    info!(
        "t={:5.1}s volume={:6.2} roll={:7.2} target={:7.2} scale={:.2}",
        t,
        gas.volume(),
        body.rotator().roll,
        steering.target_deg,
        scale.scale.y
    );
}
