use std::path::PathBuf;

use anyhow::Context as _;
use orbiter_ai::{DecisionPolicy, PolicyConfig};
use orbiter_engine::{Action, WorldSnapshot};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReplayArg {
    /// JSON file holding the snapshots of one side, in tick order
    #[arg(long)]
    snapshots: PathBuf,
    /// Policy configuration file; defaults apply to omitted fields
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the policy's random source
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TickRecord {
    tick: u32,
    actions: Vec<Action>,
}

pub(crate) fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg {
        snapshots,
        config,
        seed,
        output,
    } = arg;

    let config = match config {
        Some(path) => util::read_policy_config_file(path)?,
        None => PolicyConfig::default(),
    };
    config.validate().context("Invalid policy configuration")?;

    let snapshots = util::read_snapshots_file(snapshots)?;
    for (index, snapshot) in snapshots.iter().enumerate() {
        snapshot
            .validate()
            .with_context(|| format!("Invalid snapshot at index {index}"))?;
    }

    let seed = seed.unwrap_or_else(rand::random);
    eprintln!("Replaying {} snapshots with seed {seed}", snapshots.len());

    let records = replay(&config, &snapshots, seed);
    let total_actions = records.iter().map(|r| r.actions.len()).sum::<usize>();
    eprintln!("Decided {total_actions} actions");

    Output::save_json(&records, output.clone())
}

fn replay(config: &PolicyConfig, snapshots: &[WorldSnapshot], seed: u64) -> Vec<TickRecord> {
    let mut policy = DecisionPolicy::new(config.clone());
    let mut rng = Pcg32::seed_from_u64(seed);
    snapshots
        .iter()
        .map(|snapshot| {
            let actions = policy.decide(snapshot, &mut rng);
            TickRecord {
                tick: policy.tick(),
                actions,
            }
        })
        .collect()
}
