//! Headless match driver.
//!
//! Owns everything the engine refuses to: frame cadence, input, and score
//! reporting. Runs matches at a fixed 60Hz timestep with a scripted pilot,
//! branches on the step outcome, and publishes the final score record for
//! each match exactly once.
//!
//! Usage: `starward [seed] [rounds]`

use starward_core::config::{LevelConfig, Playfield};
use starward_core::id::SequentialIdSource;
use starward_core::input::{InputIntent, MoveAxis};
use starward_core::state::{MatchSummary, StepOutcome, WorldSnapshot};
use starward_sim::{new_match, step};

const TICK_RATE: f32 = 60.0;
const DT: f32 = 1.0 / TICK_RATE;

/// Hard cap per match so a stalemate cannot spin forever.
const MAX_STEPS: u64 = (TICK_RATE as u64) * 60 * 5;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let rounds: u32 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);

    let config = LevelConfig::default();
    let field = Playfield::default();

    // Restart is just re-running the initializer; each round gets a fresh
    // id source and a fresh one-shot reporter.
    for round in 0..rounds {
        log::info!("starting round {} (seed {})", round + 1, seed + round as u64);
        run_match(&config, field, seed + round as u64);
    }
}

fn run_match(config: &LevelConfig, field: Playfield, seed: u64) {
    let mut ids = SequentialIdSource::new();
    let mut world = new_match(config, field, &mut ids, seed);
    let mut reporter = SummaryReporter::new();

    loop {
        if world.time.tick >= MAX_STEPS {
            reporter.publish("stalemate", "step limit reached", world.summary());
            return;
        }

        let input = pilot(&world);
        match step(world, &input, DT, config, field, &mut ids) {
            StepOutcome::Continue(next) => world = next,
            StepOutcome::Win { cause, world } => {
                reporter.publish("victory", &cause.to_string(), world.summary());
                return;
            }
            StepOutcome::Loss { cause, world } => {
                reporter.publish("defeat", &cause.to_string(), world.summary());
                return;
            }
        }
    }
}

/// Scripted pilot: chase the column of the lowest (most dangerous) enemy
/// and hold the trigger.
fn pilot(world: &WorldSnapshot) -> InputIntent {
    let ship_center = world.ship.aabb().center().x;

    let target = world
        .enemies
        .iter()
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.aabb().center().x);

    let move_axis = match target {
        Some(x) if x > ship_center + 4.0 => MoveAxis::Right,
        Some(x) if x < ship_center - 4.0 => MoveAxis::Left,
        _ => MoveAxis::Still,
    };

    InputIntent {
        move_axis,
        firing: true,
    }
}

/// Publishes the final score record at most once per match, even if the
/// driver reaches more than one stop path.
struct SummaryReporter {
    published: bool,
}

impl SummaryReporter {
    fn new() -> Self {
        Self { published: false }
    }

    fn publish(&mut self, verdict: &str, message: &str, summary: MatchSummary) {
        if self.published {
            return;
        }
        self.published = true;

        let record = serde_json::json!({
            "player": "local",
            "outcome": verdict,
            "message": message,
            "score": summary.score,
            "durationSecs": summary.duration_secs,
            "enemiesRemaining": summary.enemies_remaining,
            "shipHealth": summary.ship_health,
        });
        println!("{record}");
    }
}
