//! classic — the 15×15 maze with one pellet collector and two pursuers.
//!
//! ```text
//! cargo run -p classic -- [config.json] [output-dir]
//! ```
//!
//! The optional JSON file overrides any subset of `EngineConfig` fields;
//! omitted fields keep their defaults.  `RUST_LOG=debug` logs every step.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use mz_agent::AgentStore;
use mz_behavior::Decision;
use mz_core::{EngineConfig, Tick};
use mz_output::{CsvWriter, OutputWriter, SimOutputObserver};
use mz_sim::{Level, SimBuilder, SimObserver, TickSummary};

const DEFAULT_OUTPUT_DIR: &str = "output/classic";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    captures:      usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, captures: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_capture(&mut self, _tick: Tick, _pursuer: mz_core::AgentId, _pursued: mz_core::AgentId) {
        self.captures += 1;
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summary_rows += 1;
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, decisions: &[Option<Decision>]) {
        self.snapshot_rows += agents.count;
        self.inner.on_snapshot(tick, agents, decisions);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    let config = load_config(config_path.as_deref())?;

    println!("=== classic — maze pursuit ===");
    println!(
        "Seed: {}  |  Max ticks: {}  |  Pellet value: {}",
        config.seed, config.max_ticks, config.pellet_value
    );

    // 1. Level and sim.
    let level = Level::classic()?;
    println!(
        "Maze: {}x{}  |  Pellets: {}  |  Agents: {}",
        level.world.width(),
        level.world.height(),
        level.objectives.len(),
        level.agents.len()
    );
    let mut sim = SimBuilder::from_level(config, level)?.build()?;

    // 2. Output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let score = sim.score();
    println!();
    println!("Simulation complete in {:.3} s after {} ticks", elapsed.as_secs_f64(), sim.tick.0);
    println!(
        "  Score: {}  |  Pellets eaten: {}/{}  |  Captures: {}",
        score.score,
        score.eaten,
        score.eaten + score.remaining,
        obs.captures
    );
    if score.is_won() {
        println!("  All pellets collected.");
    }
    if let Some(perf) = sim.performance_summary(sim.pursued()) {
        println!(
            "  Pursued decisions: {}  |  average score {:.1}  |  best {}",
            perf.decisions, perf.average, perf.best
        );
    }
    println!("  {}/agent_snapshots.csv : {} rows", output_dir.display(), obs.snapshot_rows);
    println!("  {}/tick_summaries.csv  : {} rows", output_dir.display(), obs.summary_rows);
    println!();

    // 5. Final positions.
    println!("{:<10} {:<12} {:<10} {:<10}", "Agent", "Role", "Cell", "State");
    println!("{}", "-".repeat(44));
    for agent in sim.agents.agent_ids() {
        println!(
            "{:<10} {:<12} {:<10} {:<10}",
            agent.0,
            sim.agents.role_of(agent).as_str(),
            sim.position(agent).to_string(),
            sim.behavioral_state(agent).map_or("-", |s| s.as_str()),
        );
    }
    println!();
    print!("{}", sim.world());

    Ok(())
}
