//! # vexsort
//!
//! An adaptive, hardware-aware sorting engine for numeric buffers.
//!
//! On first use the library probes the machine (core counts, cache sizes,
//! vector capability) and calibrates selection thresholds from what it finds.
//! Each [`sort`] call then picks among insertion sort, introsort with a
//! vectorized partition, LSD radix sort, a stable merge sort, and a rayon
//! fork-join parallel sort, based on the buffer's size, kind, measured
//! presortedness, and the request's [`SortFlags`].
//!
//! Merge-based paths draw scratch space from a shared per-kind pool and fall
//! back to private allocations under contention, so concurrent sorts never
//! block on each other. Every resource failure inside the engine degrades to
//! a slower kernel instead of surfacing as an error.
//!
//! ## Example
//!
//! ```
//! use vexsort::{sort, SortBuffer, SortFlags, SortRequest};
//!
//! let mut data = vec![5i32, -3, 0, 42, -1];
//! sort(SortRequest {
//!     buffer: SortBuffer::Int32(&mut data),
//!     flags: SortFlags::NONE,
//! })
//! .unwrap();
//! assert_eq!(data, vec![-3, -1, 0, 5, 42]);
//! ```

pub mod error;
pub mod flags;
pub mod hardware;
pub mod kernels;
pub mod parallel;
pub mod pool;
pub mod runtime;
pub mod sampler;
pub mod simd;
pub mod sort;
pub mod thresholds;

pub use error::SortError;
pub use flags::SortFlags;
pub use hardware::HardwareFacts;
pub use runtime::{
    core_count, current_thresholds, default_flags, initialize, library_version, set_default_flags,
};
pub use sort::{
    sort, sort_bytes, sort_float32, sort_int32, sort_with_comparator, SortBuffer, SortRequest,
};
pub use thresholds::Thresholds;
