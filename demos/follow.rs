//! Pursuit demo: drives a point agent along a square path and logs each
//! steering target.
//!
//! Usage:
//! ```text
//! cargo run --example follow                        # default lookahead 2.0
//! cargo run --example follow -- 0.5                 # custom lookahead
//! RUST_LOG=pursuit=trace cargo run --example follow # per-query tracing
//! ```

use pursuit::{Path, Point2, Pursuit, PursuitError};
use tracing::{info, warn};

const STEP: f64 = 0.25;
const MAX_STEPS: usize = 500;

fn main() -> Result<(), PursuitError> {
    // Default: WARN for everything, INFO for the demo and the library.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("follow=info".parse().unwrap_or_default())
        .add_directive("pursuit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let look_ahead: f64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2.0);

    let path = Path::build(&[
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ])?;
    info!(
        way_points = path.way_point_count(),
        total_distance = path.total_distance(),
        look_ahead,
        "following path"
    );

    let pursuit = Pursuit::new(look_ahead);
    let mut agent = Point2::new(0.0, -1.0);
    for step in 0..MAX_STEPS {
        let target = match pursuit.target(&path, &agent) {
            Ok(target) => target,
            Err(err) => {
                info!(step, x = agent.x, y = agent.y, %err, "stopped");
                return Ok(());
            }
        };
        let heading = target.point() - agent;
        let remaining = heading.norm();
        if remaining < f64::EPSILON {
            info!(step, "agent sits on its target");
            return Ok(());
        }
        agent += heading * (STEP.min(remaining) / remaining);
        info!(
            step,
            x = agent.x,
            y = agent.y,
            target_x = target.point().x,
            target_y = target.point().y,
            "moved"
        );
    }
    warn!(max_steps = MAX_STEPS, "step limit reached before the path ended");
    Ok(())
}
