//! Runtime-dispatched SIMD support for the partition kernel.
//!
//! Vector capability is probed once at initialization and recorded in
//! [`crate::hardware::HardwareFacts`]; the partition entry points consult that
//! record instead of compile-time feature flags, so a single binary runs
//! correctly on both capable and incapable hardware. The accelerated path is
//! an optimization only: its results are identical to scalar partitioning.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;

#[cfg(target_arch = "aarch64")]
pub mod neon;

/// Byte alignment used for pooled scratch buffers. Covers the widest vector
/// register the engine dispatches to (256-bit AVX2).
pub const SCRATCH_ALIGNMENT: usize = 32;

/// Vectorized partition strategy selected at initialization.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimdLevel {
    /// No usable vector unit; scalar partitioning only.
    None,
    /// 256-bit AVX2, 8 × i32 lanes.
    Avx2,
    /// 128-bit NEON, 4 × i32 lanes.
    Neon,
}

impl SimdLevel {
    /// Width of one vector register in bytes (0 when no vector unit).
    pub const fn width_bytes(self) -> usize {
        match self {
            SimdLevel::None => 0,
            SimdLevel::Avx2 => 32,
            SimdLevel::Neon => 16,
        }
    }

    /// Number of i32 lanes compared per block (0 when no vector unit).
    pub const fn lanes_i32(self) -> usize {
        self.width_bytes() / std::mem::size_of::<i32>()
    }
}

/// Probes the CPU for a usable vector unit.
pub fn detect_level() -> SimdLevel {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            return SimdLevel::Avx2;
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return SimdLevel::Neon;
        }
    }
    SimdLevel::None
}

/// Classification of one vector block against the broadcast pivot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BlockClass {
    /// Every lane is ≤ pivot; the block can be kept in bulk when it already
    /// sits at the partition boundary.
    AllLe,
    /// No lane is ≤ pivot; the block needs no moves at all.
    NoneLe,
    /// Mixed block; degrade to scalar per-element handling.
    Mixed,
}

fn classify_block(block: &[i32], pivot: i32, level: SimdLevel) -> BlockClass {
    debug_assert_eq!(block.len(), level.lanes_i32());

    match level {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        // SAFETY: `level` is only Avx2 when detect_level() observed AVX2
        // support, and the block holds exactly 8 lanes.
        SimdLevel::Avx2 => unsafe { avx2::classify_block(block.as_ptr(), pivot) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: `level` is only Neon when detect_level() observed NEON
        // support, and the block holds exactly 4 lanes.
        SimdLevel::Neon => unsafe { neon::classify_block(block.as_ptr(), pivot) },
        _ => BlockClass::Mixed,
    }
}

/// Lomuto partition of `data` around a median-of-three pivot, comparing whole
/// vector blocks against the broadcast pivot where possible.
///
/// Returns the pivot's final index. Callers must have checked that `level`
/// names a present vector unit and that `data` has at least two elements.
pub(crate) fn partition_i32(data: &mut [i32], level: SimdLevel) -> usize {
    if level.lanes_i32() == 0 {
        return crate::kernels::introsort::scalar_partition(data);
    }

    let last = data.len() - 1;
    let mid = data.len() / 2;

    if data[0] > data[mid] {
        data.swap(0, mid);
    }
    if data[mid] > data[last] {
        data.swap(mid, last);
    }
    if data[0] > data[mid] {
        data.swap(0, mid);
    }
    data.swap(mid, last);
    let pivot = data[last];

    let lanes = level.lanes_i32();
    let mut i = 0;
    let mut j = 0;

    while j + lanes <= last {
        match classify_block(&data[j..j + lanes], pivot, level) {
            BlockClass::AllLe if i == j => i += lanes,
            BlockClass::NoneLe => {}
            _ => {
                for k in 0..lanes {
                    if data[j + k] <= pivot {
                        data.swap(i, j + k);
                        i += 1;
                    }
                }
            }
        }
        j += lanes;
    }

    while j < last {
        if data[j] <= pivot {
            data.swap(i, j);
            i += 1;
        }
        j += 1;
    }

    data.swap(i, last);
    i
}
