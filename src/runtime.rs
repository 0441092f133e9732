//! Process-wide calibration state.
//!
//! Hardware facts and thresholds are captured exactly once, lazily, on the
//! first sort (or an explicit [`initialize`] call). Concurrent first calls
//! either perform the one-time probe or wait for the thread doing it; after
//! that the state is read-only. Only the default flag set remains mutable,
//! behind an atomic.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use log::{debug, info};

use crate::flags::SortFlags;
use crate::hardware::HardwareFacts;
use crate::thresholds::Thresholds;

pub(crate) struct Runtime {
    pub hardware: HardwareFacts,
    pub thresholds: Thresholds,
}

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

const DEFAULT_FLAG_BITS: u32 = SortFlags::ALLOW_PARALLEL.bits()
    | SortFlags::ALLOW_RADIX.bits()
    | SortFlags::PREFER_THROUGHPUT.bits();

static DEFAULT_FLAGS: AtomicU32 = AtomicU32::new(DEFAULT_FLAG_BITS);

pub(crate) fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        let hardware = HardwareFacts::detect();
        let thresholds = Thresholds::calibrate(&hardware);

        info!(
            "vexsort runtime initialized on {} with {} total core(s) ({} performance, {} efficiency)",
            hardware.cpu_model,
            hardware.total_cores,
            hardware.performance_cores,
            hardware.efficiency_cores
        );
        debug!(
            "threshold configuration - insertion: {}, sample: {}, parallel: {}, radix: {}, cache-optimal: {}",
            thresholds.insertion_threshold,
            thresholds.sample_size,
            thresholds.parallel_threshold,
            thresholds.radix_threshold,
            thresholds.cache_optimal_elements
        );

        Runtime {
            hardware,
            thresholds,
        }
    })
}

/// Detects hardware and calibrates thresholds.
///
/// Idempotent and safe to call from multiple threads concurrently; normally
/// invoked implicitly by the first sort call.
pub fn initialize() {
    let _ = runtime();
}

/// Total physical cores as observed at initialization.
pub fn core_count() -> usize {
    runtime().hardware.total_cores
}

/// The thresholds calibrated for this machine.
pub fn current_thresholds() -> Thresholds {
    runtime().thresholds
}

/// Library version string.
pub fn library_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Replaces the process-wide default flag set used when a request carries
/// [`SortFlags::NONE`].
pub fn set_default_flags(flags: SortFlags) {
    DEFAULT_FLAGS.store(flags.bits(), Ordering::Relaxed);
}

/// The current process-wide default flag set.
pub fn default_flags() -> SortFlags {
    SortFlags::from_bits(DEFAULT_FLAGS.load(Ordering::Relaxed))
}
