//! Behavioural flags controlling algorithm selection.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitset of behaviour flags accepted by [`crate::sort`].
///
/// An empty set asks for the process-wide defaults (see
/// [`crate::runtime::default_flags`]). `PREFER_THROUGHPUT` and
/// `PREFER_EFFICIENCY` are mutually exclusive; when both are present
/// throughput wins, and when neither is present throughput is assumed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortFlags(u32);

impl SortFlags {
    /// No flags set; the engine substitutes the process defaults.
    pub const NONE: SortFlags = SortFlags(0);
    /// Permit the fork-join parallel path for large inputs.
    pub const ALLOW_PARALLEL: SortFlags = SortFlags(1 << 0);
    /// Permit LSD radix sort for large integer inputs.
    pub const ALLOW_RADIX: SortFlags = SortFlags(1 << 1);
    /// Require a stable sort (buffer-based merge sort).
    pub const FORCE_STABLE: SortFlags = SortFlags(1 << 2);
    /// Bias selection toward raw throughput (default).
    pub const PREFER_THROUGHPUT: SortFlags = SortFlags(1 << 3);
    /// Bias selection toward efficiency; doubles the parallel threshold.
    pub const PREFER_EFFICIENCY: SortFlags = SortFlags(1 << 4);
    /// Use the vectorized partition whenever the hardware supports it,
    /// regardless of the throughput heuristic.
    pub const FORCE_SIMD: SortFlags = SortFlags(1 << 5);

    const ALL: u32 = (1 << 6) - 1;

    /// Raw bit representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reconstructs a flag set from raw bits, discarding unknown bits.
    pub const fn from_bits(bits: u32) -> Self {
        SortFlags(bits & Self::ALL)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is also set in `self`.
    pub const fn contains(self, other: SortFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `self` with the flags in `other` added.
    pub const fn with(self, other: SortFlags) -> Self {
        SortFlags(self.0 | other.0)
    }

    /// Returns `self` with the flags in `other` cleared.
    pub const fn without(self, other: SortFlags) -> Self {
        SortFlags(self.0 & !other.0)
    }

    /// Resolves the throughput/efficiency conflict: efficiency loses when both
    /// are requested, and throughput is assumed when neither is.
    pub(crate) fn resolved(self) -> Self {
        let mut flags = self;
        if flags.contains(Self::PREFER_EFFICIENCY) && flags.contains(Self::PREFER_THROUGHPUT) {
            flags = flags.without(Self::PREFER_EFFICIENCY);
        }
        if !flags.contains(Self::PREFER_EFFICIENCY) {
            flags = flags.with(Self::PREFER_THROUGHPUT);
        }
        flags
    }
}

impl BitOr for SortFlags {
    type Output = SortFlags;

    fn bitor(self, rhs: SortFlags) -> SortFlags {
        self.with(rhs)
    }
}

impl BitOrAssign for SortFlags {
    fn bitor_assign(&mut self, rhs: SortFlags) {
        *self = self.with(rhs);
    }
}

impl BitAnd for SortFlags {
    type Output = SortFlags;

    fn bitand(self, rhs: SortFlags) -> SortFlags {
        SortFlags(self.0 & rhs.0)
    }
}

impl fmt::Debug for SortFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(SortFlags, &str); 6] = [
            (SortFlags::ALLOW_PARALLEL, "ALLOW_PARALLEL"),
            (SortFlags::ALLOW_RADIX, "ALLOW_RADIX"),
            (SortFlags::FORCE_STABLE, "FORCE_STABLE"),
            (SortFlags::PREFER_THROUGHPUT, "PREFER_THROUGHPUT"),
            (SortFlags::PREFER_EFFICIENCY, "PREFER_EFFICIENCY"),
            (SortFlags::FORCE_SIMD, "FORCE_SIMD"),
        ];

        if self.is_empty() {
            return write!(f, "SortFlags(NONE)");
        }

        write!(f, "SortFlags(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        write!(f, ")")
    }
}
