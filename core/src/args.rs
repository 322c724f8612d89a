use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;
use search::Strategy;

#[derive(Parser, Debug)]
#[command(name = "Halberd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log UCI communication to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game between two strategies, printing every move.
    Selfplay(SelfplayArgs),

    /// Time every strategy on a fixed set of positions.
    Bench {
        #[arg(long, default_value_t = 3)]
        depth: u8,

        #[arg(long, default_value_t = 3000)]
        nodes: u64,
    },
}

#[derive(ClapArgs, Debug)]
pub struct SelfplayArgs {
    #[arg(long, default_value_t = Strategy::BestFirst)]
    pub white: Strategy,

    #[arg(long, default_value_t = Strategy::Negamax)]
    pub black: Strategy,

    /// Best-first tree size budget.
    #[arg(long, default_value_t = 3000)]
    pub nodes: u64,

    /// Negamax depth.
    #[arg(long, default_value_t = 3)]
    pub depth: u8,

    /// Seed for white; black uses the next one.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Starting position, the standard one when absent.
    #[arg(long)]
    pub fen: Option<String>,

    /// Stop after this many full moves.
    #[arg(long, default_value_t = 200)]
    pub max_moves: u32,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}
