use clap::{Parser, Subcommand};

use self::{join::JoinArg, replay::ReplayArg};

mod join;
mod replay;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the resource split for a join budget
    Join(#[clap(flatten)] JoinArg),
    /// Run the decision policy over recorded snapshots
    Replay(#[clap(flatten)] ReplayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Join(arg) => join::run(&arg)?,
        Mode::Replay(arg) => replay::run(&arg)?,
    }
    Ok(())
}
