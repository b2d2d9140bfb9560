// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard CLI for evaluating and comparing Poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, value_parser};
use log::error;

use fivecard_eval::HandRank;

pub mod commands;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a five cards hand.
    Eval {
        /// The hand cards as text (AH, TD, 2C) or codes (0..=51).
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Compares two five cards hands.
    Compare {
        /// The first hand cards.
        #[clap(long, short, required = true, num_args = 1..)]
        first: Vec<String>,
        /// The second hand cards.
        #[clap(long, short, required = true, num_args = 1..)]
        second: Vec<String>,
    },
    /// Evaluates all five cards hands and prints the count for each category.
    Stats {
        /// The number of evaluation tasks.
        #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=64))]
        tasks: u8,
    },
    /// Deals random hands and prints them from the strongest to the weakest.
    Sample {
        /// The number of hands to deal.
        #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(1..=10))]
        count: u8,
    },
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval { cards } => {
            let hand = commands::parse_hand(&cards)?;
            println!("{}", commands::describe(&hand));
        }
        Command::Compare { first, second } => {
            let first = commands::parse_hand(&first)?;
            let second = commands::parse_hand(&second)?;
            println!("{}", commands::compare(&first, &second));
        }
        Command::Stats { tasks } => {
            let counts = commands::count_hands(tasks as usize)?;
            for rank in HandRank::ranks() {
                println!("{:<16} {:>9}", format!("{rank}:"), counts[rank as usize]);
            }
            println!("{:<16} {:>9}", "Total:", counts.iter().sum::<u64>());
        }
        Command::Sample { count } => {
            let hands = commands::sample_hands(count as usize, &mut rand::rng())?;
            for (pos, hand) in hands.iter().enumerate() {
                println!("{:>2}. {hand}", pos + 1);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
