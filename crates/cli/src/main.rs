//! SHiP-RRIP last-level cache trace replayer.
//!
//! This binary replays a memory access trace through the cache model. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON config file, then flag overrides.
//! 2. **Replay:** Loads the trace and feeds every access to the cache.
//! 3. **Reporting:** Prints the policy summary, optionally as JSON.

use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shiprrip_core::config::{Config, PolicyVariant, ShctScope};
use shiprrip_core::sim::{run_trace, trace};
use shiprrip_core::{LlcCache, LlcReplacementPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "shiprrip",
    author,
    version,
    about = "SHiP-RRIP last-level cache trace replayer",
    long_about = "Replay a memory access trace through a set-associative last-level cache \
                  managed by SHiP-RRIP replacement.\n\nTrace records are `<core> <pc> <address> <kind>`, \
                  one per line.\n\nExamples:\n  shiprrip run -t traces/mcf.txt\n  shiprrip run -t trace.txt --config llc.json --variant baseline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a trace and print the replacement statistics.
    Run {
        /// Trace file to replay.
        #[arg(short, long)]
        trace: PathBuf,

        /// JSON configuration file; missing fields take defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the policy variant.
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Give every core its own signature history counter table.
        #[arg(long)]
        per_core_shct: bool,

        /// Accesses between heartbeat reports (0 disables).
        #[arg(long)]
        heartbeat: Option<u64>,

        /// Print the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    /// Two-tier aging, hit training, four-tier insertion.
    Plus,
    /// Single-tier aging, eviction-only training, two-tier insertion.
    Baseline,
}

impl From<VariantArg> for PolicyVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Plus => Self::ShipRripPlus,
            VariantArg::Baseline => Self::ShipRrip,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            trace,
            config,
            variant,
            per_core_shct,
            heartbeat,
            json,
        } => {
            let mut config = load_config(config.as_deref());
            if let Some(v) = variant {
                config.variant = v.into();
            }
            if per_core_shct {
                config.shct_scope = ShctScope::PerCore;
            }
            if let Some(interval) = heartbeat {
                config.heartbeat_interval = interval;
            }
            cmd_run(&config, &trace, json);
        }
    }
}

/// Loads the configuration file, or the defaults when none is given.
///
/// Exits the process with code 1 if the file cannot be read or is invalid.
fn load_config(path: Option<&std::path::Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Could not read config '{}': {e}", path.display());
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}: {e}", path.display());
        process::exit(1);
    })
}

/// Replays `trace_path` through a cache built from `config` and prints the report.
fn cmd_run(config: &Config, trace_path: &std::path::Path, json: bool) {
    let mut cache = LlcCache::new(config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: invalid configuration: {e}");
        process::exit(1);
    });
    let accesses = trace::load_trace(trace_path, config.num_cores).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    info!(
        trace = %trace_path.display(),
        records = accesses.len(),
        policy = config.variant.name(),
        cores = cache.cores(),
        sets = cache.sets(),
        "replaying trace"
    );
    let summary = run_trace(&mut cache, &accesses, config.heartbeat_interval);
    let stats = cache.policy().stats();

    if json {
        let doc = serde_json::json!({
            "policy": config.variant.name(),
            "accesses": summary.accesses,
            "hits": stats.hits,
            "misses": stats.misses,
            "hit_rate": stats.hit_rate(),
            "evictions": summary.evictions,
            "writebacks": cache.writebacks(),
        });
        println!("{doc:#}");
    } else {
        print!("{}", cache.policy().report());
        println!("  Evictions     : {}", summary.evictions);
        println!("  Writebacks    : {}", cache.writebacks());
    }
}
