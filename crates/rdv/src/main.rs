//! `rdv` — rendezvous hashing from the command line.
//!
//! # Usage
//!
//! ```text
//! rdv -n a -n b -n c score user:42          # winning node and score
//! rdv -c rdv.toml top -k 2 user:42          # two best nodes, best first
//! rdv -c rdv.toml rank user:42              # every node with its score
//! rdv -c rdv.toml rebalance --add d         # how many keys move to d
//! rdv -a md5 -n a -n b bench -k 100000      # selection throughput
//! ```

mod config;
mod telemetry;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use rendezvous_placement::{HashAlgorithm, Migration, Rendezvous, migrations};
use tracing::{debug, info};

use config::CliConfig;

// -----------------------------------------------------------------------
// CLI definition
// -----------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "rdv", version, about = "Rendezvous (HRW) node selection")]
struct Cli {
    /// Path to TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the hash algorithm (md5, sha1, sha256, blake3).
    #[arg(short, long, global = true)]
    algorithm: Option<HashAlgorithm>,

    /// Node identifier. Repeat to list several; replaces configured nodes.
    #[arg(short = 'n', long = "node", global = true)]
    nodes: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the winning node and its score for a key.
    Score {
        /// Lookup key.
        key: String,
    },

    /// Print the N best nodes for a key, best first.
    Top {
        /// How many nodes to return. 0 returns every node.
        #[arg(short = 'k', long = "count", default_value = "1")]
        count: usize,

        /// Lookup key.
        key: String,
    },

    /// Print every node with its score for a key, best first.
    Rank {
        /// Lookup key.
        key: String,
    },

    /// Report which keys change owner after a membership change.
    Rebalance {
        /// Nodes to add.
        #[arg(long)]
        add: Vec<String>,

        /// Nodes to remove.
        #[arg(long)]
        remove: Vec<String>,

        /// Number of synthetic keys (`key-0`, `key-1`, ...) to place.
        #[arg(long, default_value = "10000")]
        keys: usize,
    },

    /// Time repeated selections.
    Bench {
        /// Number of lookups.
        #[arg(short = 'k', long = "count", default_value = "100000")]
        count: usize,
    },
}

// -----------------------------------------------------------------------
// Main
// -----------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CliConfig::load(cli.config.as_deref())?;

    telemetry::init(&config.log.level);

    if let Some(algorithm) = cli.algorithm {
        config.placement.algorithm = algorithm;
    }
    if !cli.nodes.is_empty() {
        config.placement.nodes = cli.nodes;
    }

    let engine = Rendezvous::from_config(&config.placement);
    debug!(
        algorithm = %config.placement.algorithm,
        nodes = engine.len(),
        "engine ready"
    );

    match cli.command {
        Commands::Score { key } => {
            let selection = engine.get_score(key.as_bytes());
            if selection.is_none() {
                bail!("no nodes configured");
            }
            println!("{}\t{}", selection.node, selection.score);
        }
        Commands::Top { count, key } => {
            for node in engine.get_n_top(count, key.as_bytes()) {
                println!("{node}");
            }
        }
        Commands::Rank { key } => {
            for scored in engine.rank(key.as_bytes()) {
                println!("{}\t{}", scored.node, scored.score);
            }
        }
        Commands::Rebalance { add, remove, keys } => {
            let report = rebalance(&config.placement, &add, &remove, keys);
            println!(
                "{} of {} keys move ({:.2}%)",
                report.moved.len(),
                keys,
                report.moved_percent(keys)
            );
            for ((from, to), n) in report.flows() {
                println!("  {from} -> {to}\t{n}");
            }
        }
        Commands::Bench { count } => {
            if engine.is_empty() {
                bail!("no nodes configured");
            }
            let start = Instant::now();
            for i in 0..count {
                engine.get_score(format!("key-{i}").as_bytes());
            }
            let elapsed = start.elapsed();
            let per_sec = count as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
            info!(count, ?elapsed, "benchmark finished");
            println!(
                "{count} lookups over {} nodes in {elapsed:.2?} ({per_sec:.0} lookups/s)",
                engine.len()
            );
        }
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Rebalance
// -----------------------------------------------------------------------

/// Keys that changed owner between the configured membership and the
/// membership after `add` and `remove`.
struct RebalanceReport {
    moved: Vec<Migration>,
}

impl RebalanceReport {
    fn moved_percent(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.moved.len() as f64 * 100.0 / total as f64
        }
    }

    /// Number of keys per `(from, to)` pair.
    fn flows(&self) -> BTreeMap<(&str, &str), usize> {
        let mut flows = BTreeMap::new();
        for m in &self.moved {
            *flows.entry((m.from.as_str(), m.to.as_str())).or_insert(0) += 1;
        }
        flows
    }
}

fn rebalance(
    placement: &rendezvous_placement::PlacementConfig,
    add: &[String],
    remove: &[String],
    key_count: usize,
) -> RebalanceReport {
    let before = Rendezvous::from_config(placement);
    let after = Rendezvous::from_config(placement);
    after.add_nodes(add.iter().cloned());
    after.remove_nodes(remove);

    let keys: Vec<String> = (0..key_count).map(|i| format!("key-{i}")).collect();
    let moved = migrations(&before, &after, &keys);
    info!(
        added = add.len(),
        removed = remove.len(),
        moved = moved.len(),
        "computed rebalance"
    );
    RebalanceReport { moved }
}
