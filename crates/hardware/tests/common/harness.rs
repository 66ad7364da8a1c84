//! Small, deterministic cache configurations and access builders.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use shiprrip_core::common::AccessKind;
use shiprrip_core::common::constants::SIGN_SHIFT;
use shiprrip_core::config::{Config, PolicyVariant, ShctScope};
use shiprrip_core::{LlcAccess, ShipRripPolicy};

/// Routes policy `tracing` events to the test output, filtered by `RUST_LOG`.
///
/// Safe to call from every builder; only the first call installs the subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// In-memory log sink shared with a subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with every `tracing` event up to TRACE captured, and returns the text.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let sink = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// One core, `sets` sets of 16 ways, canonical policy.
pub fn config_with_sets(sets: usize) -> Config {
    init_logging();
    Config {
        num_cores: 1,
        sets_per_core: sets,
        ..Config::default()
    }
}

/// One core, a single 16-way set.
pub fn single_set_config() -> Config {
    config_with_sets(1)
}

/// Single-set configuration running the baseline variant.
pub fn baseline_config() -> Config {
    Config {
        variant: PolicyVariant::ShipRrip,
        ..single_set_config()
    }
}

/// `cores` cores with one set each and the given SHCT scope.
pub fn multicore_config(cores: usize, scope: ShctScope) -> Config {
    init_logging();
    Config {
        num_cores: cores,
        sets_per_core: 1,
        shct_scope: scope,
        ..Config::default()
    }
}

/// Fresh policy for a single-set cache.
pub fn single_set_policy() -> ShipRripPolicy {
    ShipRripPolicy::new(&single_set_config())
}

/// A PC whose signature is `sig`.
pub const fn pc_for_signature(sig: u64) -> u64 {
    sig << SIGN_SHIFT
}

/// Load on core 0, set 0, issued by the instruction at `pc`.
pub fn load(pc: u64) -> LlcAccess {
    LlcAccess {
        core: 0,
        set: 0,
        pc,
        address: 0,
        kind: AccessKind::Load,
    }
}

/// Load on `core`, set 0, issued by the instruction at `pc`.
pub fn load_on(core: usize, pc: u64) -> LlcAccess {
    LlcAccess {
        core,
        ..load(pc)
    }
}
