//! Calibration of algorithm-selection thresholds from hardware facts.

use crate::hardware::HardwareFacts;

const ELEMENT_WIDTH: usize = std::mem::size_of::<i32>();

const DEFAULT_L1: usize = 32 * 1024;
const DEFAULT_L2: usize = 2 * 1024 * 1024;

/// Tuning values derived once per process from [`HardwareFacts`].
///
/// Every field is clamped to a sane floor and ceiling, so a degenerate probe
/// (all-zero facts) still produces a usable, nonzero configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Thresholds {
    /// Lengths at or below this go to insertion sort. Range 16..=64.
    pub insertion_threshold: usize,
    /// Minimum length before the fork-join parallel path is considered.
    /// Range 2^15..=2^22.
    pub parallel_threshold: usize,
    /// Minimum integer length before radix sort is preferred over comparison
    /// sorting. At least 2^18.
    pub radix_threshold: usize,
    /// Number of strided observations the near-sortedness probe takes.
    /// Range 48..=256.
    pub sample_size: usize,
    /// Chunk-size target for the parallel phase, sized to the L1 cache.
    pub cache_optimal_elements: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds::calibrate(&HardwareFacts::default())
    }
}

impl Thresholds {
    /// Derives the five tuning values from raw hardware facts.
    ///
    /// Pure and deterministic; absent or zero hardware values fall back to the
    /// conservative cache defaults before the formulas apply.
    pub fn calibrate(hw: &HardwareFacts) -> Thresholds {
        let l1 = if hw.l1_cache == 0 { DEFAULT_L1 } else { hw.l1_cache };
        let l2 = if hw.l2_cache == 0 { DEFAULT_L2 } else { hw.l2_cache };

        let insertion = (l1 / (4 * ELEMENT_WIDTH)).clamp(16, 64);

        let sample = (insertion * 6).clamp(48, 256);

        let total_cores = hw.total_cores.max(1);
        let performance_cores = hw.performance_cores.max(1);
        let perf_ratio = performance_cores as f32 / total_cores as f32;

        let mut parallel = (l2 / ELEMENT_WIDTH).max(1 << 15);
        parallel = (parallel as f32 * perf_ratio) as usize;
        parallel *= performance_cores;
        parallel = parallel.min(1 << 22);

        let radix = (2 * l2 / ELEMENT_WIDTH).max(1 << 18);

        let cache_optimal = (l1 / ELEMENT_WIDTH).max(insertion * 4);

        Thresholds {
            insertion_threshold: insertion,
            parallel_threshold: parallel,
            radix_threshold: radix,
            sample_size: sample,
            cache_optimal_elements: cache_optimal,
        }
    }
}
