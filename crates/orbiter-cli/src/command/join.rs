use std::path::PathBuf;

use orbiter_ai::JoinConfiguration;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct JoinArg {
    /// Resource budget granted at match start
    #[arg(long)]
    budget: u32,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &JoinArg) -> anyhow::Result<()> {
    let JoinArg { budget, output } = arg;

    let join = JoinConfiguration::from_budget(*budget);
    eprintln!(
        "Budget {budget}: {} with fuel {}, laser {}, regen {}, lives {}",
        join.role, join.fuel, join.laser, join.regen, join.lives
    );
    Output::save_json(&join, output.clone())
}
