//! Hardware facts consumed by the threshold calibrator.
//!
//! Probing is deliberately thin: core counts come from the standard library,
//! cache geometry from sysfs on Linux, and vector capability from runtime
//! feature detection. Every field degrades to the conservative defaults baked
//! into [`HardwareFacts::default`], so a failed probe still yields a usable
//! configuration. The record is captured once at initialization and never
//! mutated afterwards.

use crate::simd::{self, SimdLevel};

/// Read-only description of the machine the engine runs on.
#[derive(Clone, Debug)]
pub struct HardwareFacts {
    /// Total physical cores visible to the process.
    pub total_cores: usize,
    /// Cores expected to run at full clock (equals `total_cores` on
    /// homogeneous topologies).
    pub performance_cores: usize,
    /// Low-power cores, if the topology distinguishes them.
    pub efficiency_cores: usize,
    /// L1 data cache size in bytes.
    pub l1_cache: usize,
    /// L2 cache size in bytes.
    pub l2_cache: usize,
    /// L3 cache size in bytes (0 when absent or unknown).
    pub l3_cache: usize,
    /// Cache-line size in bytes.
    pub cache_line: usize,
    /// Vector register width in bytes (0 without a vector unit).
    pub simd_width: usize,
    /// Whether a vector unit usable by the partition kernel is present.
    pub has_simd: bool,
    /// Which accelerated partition strategy was selected.
    pub simd_level: SimdLevel,
    /// Marketing name of the CPU, for the initialization log line.
    pub cpu_model: String,
}

impl Default for HardwareFacts {
    fn default() -> Self {
        HardwareFacts {
            total_cores: 1,
            performance_cores: 1,
            efficiency_cores: 0,
            l1_cache: 32 * 1024,
            l2_cache: 2 * 1024 * 1024,
            l3_cache: 0,
            cache_line: 64,
            simd_width: 0,
            has_simd: false,
            simd_level: SimdLevel::None,
            cpu_model: String::from("Generic CPU"),
        }
    }
}

impl HardwareFacts {
    /// Probes the current machine, falling back field by field to the
    /// conservative defaults.
    pub fn detect() -> Self {
        let mut facts = HardwareFacts::default();

        facts.total_cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        facts.performance_cores = facts.total_cores;

        let level = simd::detect_level();
        facts.simd_level = level;
        facts.has_simd = level != SimdLevel::None;
        facts.simd_width = level.width_bytes();

        #[cfg(target_os = "linux")]
        linux::refine(&mut facts);

        facts
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use super::HardwareFacts;
    use std::fs;

    pub(super) fn refine(facts: &mut HardwareFacts) {
        if let Some(line) = read_usize("/sys/devices/system/cpu/cpu0/cache/index0/coherency_line_size") {
            facts.cache_line = line;
        }
        if let Some(l1) = read_cache_size("/sys/devices/system/cpu/cpu0/cache/index0/size") {
            facts.l1_cache = l1;
        }
        if let Some(l2) = read_cache_size("/sys/devices/system/cpu/cpu0/cache/index2/size") {
            facts.l2_cache = l2;
        }
        if let Some(l3) = read_cache_size("/sys/devices/system/cpu/cpu0/cache/index3/size") {
            facts.l3_cache = l3;
        }
        if let Some(model) = cpu_model() {
            facts.cpu_model = model;
        }
    }

    fn read_usize(path: &str) -> Option<usize> {
        fs::read_to_string(path).ok()?.trim().parse().ok()
    }

    /// Parses sysfs cache sizes of the form `32K`, `2048K`, or `8M`.
    fn read_cache_size(path: &str) -> Option<usize> {
        let text = fs::read_to_string(path).ok()?;
        let text = text.trim();
        let (digits, unit) = text.split_at(text.find(|c: char| !c.is_ascii_digit())?);
        let base: usize = digits.parse().ok()?;
        match unit {
            "K" => Some(base * 1024),
            "M" => Some(base * 1024 * 1024),
            _ => None,
        }
    }

    fn cpu_model() -> Option<String> {
        let cpuinfo = fs::read_to_string("/proc/cpuinfo").ok()?;
        cpuinfo
            .lines()
            .find(|line| line.starts_with("model name") || line.starts_with("Processor"))
            .and_then(|line| line.split_once(':'))
            .map(|(_, model)| model.trim().to_string())
    }
}
