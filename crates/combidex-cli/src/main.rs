//! Command-line front end for the `combidex` structures.
//!
//! Builds one structure from the command line, prints its count, and then
//! prints the instances at the requested ranks.
//!
//! # Usage
//!
//! ```sh
//! combidex permutation --chars abcd --size 2 --rank 11
//! combidex combination red green blue yellow --size 2 --all
//! combidex base-n --chars 01 --size 64 --rank 18446744073709551615
//! combidex power-set a b c --all
//! combidex product --component a,b --component x,y,z --rank 5
//! ```
//!
//! Check that every rank round-trips through `rank_of`, split across 8 jobs:
//!
//! ```sh
//! combidex permutation --chars abcdefgh --verify --jobs 8
//! ```
//!
//! Set `RUST_LOG=debug` to see structure construction and partitioning.

use std::{
    iter, process,
    sync::atomic::{AtomicUsize, Ordering},
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use combidex::{
    BigBaseN, BigCombination, BigPermutation, BigPowerSet, BigProductSet, BigUint, Combinatorics,
    CombinatoricsError,
};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    structure: Structure,
}

#[derive(Debug, Subcommand)]
enum Structure {
    /// Ordered selections of `--size` seed elements.
    Permutation {
        #[command(flatten)]
        seed: SeedArgs,
        /// Elements per instance (default: the whole seed).
        #[arg(long, value_name = "K")]
        size: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Subsets of `--size` seed elements, kept in seed order.
    Combination {
        #[command(flatten)]
        seed: SeedArgs,
        /// Elements per instance (default: the whole seed).
        #[arg(long, value_name = "K")]
        size: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Words of length `--size` over the seed, repetition allowed.
    BaseN {
        #[command(flatten)]
        seed: SeedArgs,
        /// Word length (default: the seed length).
        #[arg(long, value_name = "K")]
        size: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Every subset of the seed.
    PowerSet {
        #[command(flatten)]
        seed: SeedArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// One element from each component.
    Product {
        /// Comma-separated component elements. Repeatable.
        #[arg(short, long = "component", value_name = "ELEMENTS", required = true)]
        components: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// Seed elements.
    #[arg(value_name = "ELEMENT", required_unless_present = "chars")]
    words: Vec<String>,

    /// Use the characters of this string as the seed.
    #[arg(long, value_name = "STRING", conflicts_with = "words")]
    chars: Option<String>,
}

impl SeedArgs {
    fn into_seed(self) -> (Vec<String>, &'static str) {
        match self.chars {
            Some(chars) => (chars.chars().map(String::from).collect(), ""),
            None => (self.words, " "),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    /// Elements joined by a space, or nothing for `--chars` seeds.
    Joined,
    /// Elements as a quoted list.
    List,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// How each instance is printed.
    #[arg(long, value_name = "STYLE", default_value = "joined")]
    style: Style,

    /// Rank to look up. Repeatable.
    #[arg(short, long = "rank", value_name = "RANK", conflicts_with = "all")]
    ranks: Vec<BigUint>,

    /// Print every instance in rank order.
    #[arg(long)]
    all: bool,

    /// Check that every rank round-trips through `rank_of`.
    #[arg(long)]
    verify: bool,

    /// Number of rank ranges to verify in parallel.
    #[arg(long, value_name = "N", default_value_t = 1)]
    jobs: usize,
}

impl OutputArgs {
    fn format(&self, item: &[String], separator: &str) -> String {
        match self.style {
            Style::Joined => item.join(separator),
            Style::List => format!("{item:?}"),
        }
    }
}

/// A structure plus the operations the CLI needs from it.
struct Target<'a, S> {
    structure: &'a S,
    rank_of: &'a (dyn Fn(&[String]) -> Option<BigUint> + Sync),
    separator: &'a str,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.structure) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(structure: Structure) -> Result<bool, CombinatoricsError> {
    match structure {
        Structure::Permutation { seed, size, output } => {
            let (seed, separator) = seed.into_seed();
            let size = size.unwrap_or(seed.len());
            let perm = BigPermutation::new(seed, size)?;
            let rank_of = |item: &[String]| perm.rank_of(item);
            report(&target(&perm, &rank_of, separator), &output)
        }
        Structure::Combination { seed, size, output } => {
            let (seed, separator) = seed.into_seed();
            let size = size.unwrap_or(seed.len());
            let comb = BigCombination::new(seed, size)?;
            let rank_of = |item: &[String]| comb.rank_of(item);
            report(&target(&comb, &rank_of, separator), &output)
        }
        Structure::BaseN { seed, size, output } => {
            let (seed, separator) = seed.into_seed();
            let size = size.unwrap_or(seed.len());
            let base = BigBaseN::new(seed, size)?;
            let rank_of = |item: &[String]| base.rank_of(item);
            report(&target(&base, &rank_of, separator), &output)
        }
        Structure::PowerSet { seed, output } => {
            let (seed, separator) = seed.into_seed();
            let set = BigPowerSet::new(seed)?;
            let rank_of = |item: &[String]| set.rank_of(item);
            report(&target(&set, &rank_of, separator), &output)
        }
        Structure::Product { components, output } => {
            let components = components
                .iter()
                .map(|c| c.split(',').map(String::from).collect())
                .collect();
            let set = BigProductSet::new(components)?;
            let rank_of = |item: &[String]| set.rank_of(item);
            report(&target(&set, &rank_of, " "), &output)
        }
    }
}

fn target<'a, S>(
    structure: &'a S,
    rank_of: &'a (dyn Fn(&[String]) -> Option<BigUint> + Sync),
    separator: &'a str,
) -> Target<'a, S> {
    Target {
        structure,
        rank_of,
        separator,
    }
}

fn report<S>(target: &Target<'_, S>, output: &OutputArgs) -> Result<bool, CombinatoricsError>
where
    S: Combinatorics<Item = Vec<String>, Rank = BigUint> + Sync,
{
    let structure = target.structure;
    println!("count: {}", structure.count());

    if output.all {
        for (rank, item) in ranked(structure) {
            println!("{rank}: {}", output.format(&item, target.separator));
        }
    }
    for rank in &output.ranks {
        let item = structure.lookup(rank)?;
        println!("{rank}: {}", output.format(&item, target.separator));
    }

    if output.verify {
        return verify(target, output.jobs);
    }
    Ok(true)
}

/// Pairs every instance with its rank, counting ranks in `BigUint`.
fn ranked<S>(structure: &S) -> impl Iterator<Item = (BigUint, S::Item)> + '_
where
    S: Combinatorics<Rank = BigUint>,
{
    let ranks = iter::successors(Some(BigUint::ZERO), |rank| Some(rank + 1_u8));
    ranks.zip(structure.iter())
}

fn verify<S>(target: &Target<'_, S>, jobs: usize) -> Result<bool, CombinatoricsError>
where
    S: Combinatorics<Item = Vec<String>, Rank = BigUint> + Sync,
{
    let structure = target.structure;
    let ranges = structure.partition(jobs)?;
    log::info!(
        "verifying {} ranks in {} ranges",
        structure.count(),
        ranges.len()
    );

    let mismatches = AtomicUsize::new(0);
    ranges.into_par_iter().try_for_each(|range| {
        let mut rank = range.start.clone();
        for item in structure.iter_range(range)? {
            let round_trip =
                (target.rank_of)(item.as_slice()).and_then(|r| structure.lookup(&r).ok());
            if round_trip.as_ref() != Some(&item) {
                log::warn!("rank {rank} does not round-trip: {item:?}");
                mismatches.fetch_add(1, Ordering::Relaxed);
            }
            rank += 1_u8;
        }
        Ok::<_, CombinatoricsError>(())
    })?;

    let mismatches = mismatches.into_inner();
    if mismatches == 0 {
        println!("verified: {} ranks", structure.count());
        Ok(true)
    } else {
        eprintln!("{mismatches} ranks failed to round-trip");
        Ok(false)
    }
}
