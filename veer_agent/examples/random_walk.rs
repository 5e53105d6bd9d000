// veer_agent/examples/random_walk.rs

//! Drives an agent through a short scripted walk under LoCoBot/ILQR noise
//! and prints the pose after every step. Run twice with the same seed to see
//! that the trajectory is reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use veer_agent::prelude::*;

fn main() -> Result<(), ActuationError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut registry = MoveRegistry::new();
    register_noisy_move_fns(&mut registry);

    let forward = ActuationSpec::new(0.25, "LoCoBot", "ILQR", 1.0)?;
    let turn = ActuationSpec::new(std::f64::consts::FRAC_PI_6, "LoCoBot", "ILQR", 1.0)?;

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut node = AgentNode::identity();

    let script = [
        ("noisy_move_forward", &forward),
        ("noisy_move_forward", &forward),
        ("noisy_turn_left", &turn),
        ("noisy_move_forward", &forward),
        ("noisy_turn_right", &turn),
        ("noisy_move_backward", &forward),
    ];

    for (step, (name, spec)) in script.iter().enumerate() {
        registry.execute(name, &mut node, spec, &mut rng)?;
        let pose = node.pose();
        let t = pose.translation.vector;
        println!(
            "step {step}: {name:<20} pos = ({:+.3}, {:+.3}, {:+.3})  yaw = {:+.3} rad",
            t.x,
            t.y,
            t.z,
            pose.rotation.angle(),
        );
    }

    Ok(())
}
