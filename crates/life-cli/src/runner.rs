//! Timed render/step loop.

use anyhow::Result;
use life_core::RenderConfig;
use life_world::{GridHistory, Outcome, Renderer, Simulator};
use std::future::Future;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    MaxGenerations,
    Cycle { period: u64 },
    Extinct,
    Interrupted,
}

/// Render the current generation, then step, once per `interval_ms`, until
/// a stop condition is met or `shutdown` resolves.
pub async fn run<R, F>(
    sim: &mut Simulator,
    renderer: &mut R,
    config: &RenderConfig,
    shutdown: F,
) -> Result<StopReason>
where
    R: Renderer,
    F: Future<Output = ()>,
{
    let mut ticker = interval(Duration::from_millis(config.interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut history = GridHistory::default();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => return Ok(StopReason::Interrupted),
            _ = ticker.tick() => {}
        }

        let generation = sim.generation_count();
        renderer.render(generation, sim.current_grid())?;

        if config.stop_on_cycle {
            match history.observe(generation, sim.current_grid()) {
                Outcome::Evolving => {}
                Outcome::Cycle { period } => return Ok(StopReason::Cycle { period }),
                Outcome::Extinct => {
                    info!(generation, "All cells died");
                    return Ok(StopReason::Extinct);
                }
            }
        }

        if let Some(max) = config.max_generations {
            if generation >= max {
                return Ok(StopReason::MaxGenerations);
            }
        }

        sim.step(1);
        debug!(generation = sim.generation_count(), "Advanced");
    }
}
