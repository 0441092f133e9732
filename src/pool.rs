//! Process-wide scratch-buffer pool for merge-based kernels.
//!
//! One single-slot pool exists per numeric kind. A reservation is an atomic
//! test-and-set that never blocks: when the slot is already held, the caller
//! allocates a private buffer for the duration of the call instead. The shared
//! buffer is therefore an optimization, never a correctness dependency. Its
//! capacity only grows across reuses and its contents are never assumed valid
//! across reservations.

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

use crate::simd::SCRATCH_ALIGNMENT;

/// Shared scratch slot for sorts of `i32` buffers.
pub static INT_SCRATCH: ScratchPool<i32> = ScratchPool::new();

/// Shared scratch slot for sorts of `f32` buffers.
pub static FLOAT_SCRATCH: ScratchPool<f32> = ScratchPool::new();

/// Element types the process-wide pools may hold.
///
/// Pool storage is allocated zeroed, so an all-zero bit pattern must be a
/// valid value of the type.
pub trait PoolItem: Copy + Send + 'static {}

impl PoolItem for i32 {}
impl PoolItem for f32 {}

/// Vector-width-aligned heap region owned by a pool slot.
struct AlignedBuf<T> {
    ptr: NonNull<T>,
    len: usize,
}

// The buffer is plain owned memory; the pool's reservation flag provides the
// exclusive-access discipline.
unsafe impl<T: Send> Send for AlignedBuf<T> {}

impl<T: PoolItem> AlignedBuf<T> {
    fn layout(len: usize) -> Option<Layout> {
        let size = len.checked_mul(std::mem::size_of::<T>())?;
        Layout::from_size_align(size, SCRATCH_ALIGNMENT.max(std::mem::align_of::<T>())).ok()
    }

    /// Fallible zeroed allocation; `None` on exhaustion rather than abort.
    fn allocate(len: usize) -> Option<AlignedBuf<T>> {
        debug_assert!(len > 0);
        let layout = Self::layout(len)?;
        let ptr = unsafe { alloc_zeroed(layout) as *mut T };
        let ptr = NonNull::new(ptr)?;
        Some(AlignedBuf { ptr, len })
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the region was allocated zeroed for exactly `len` elements
        // and PoolItem guarantees zero bits are a valid value.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Drop for AlignedBuf<T> {
    fn drop(&mut self) {
        let size = self.len * std::mem::size_of::<T>();
        let align = SCRATCH_ALIGNMENT.max(std::mem::align_of::<T>());
        // SAFETY: same layout as the allocation.
        unsafe {
            let layout = Layout::from_size_align_unchecked(size, align);
            dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

/// A single-slot reservation guarding one reusable scratch buffer.
pub struct ScratchPool<T> {
    in_use: AtomicBool,
    buffer: UnsafeCell<Option<AlignedBuf<T>>>,
}

// SAFETY: the buffer cell is only touched while `in_use` is held, which the
// reservation protocol makes exclusive.
unsafe impl<T: Send> Sync for ScratchPool<T> {}

impl<T: PoolItem> ScratchPool<T> {
    pub const fn new() -> Self {
        ScratchPool {
            in_use: AtomicBool::new(false),
            buffer: UnsafeCell::new(None),
        }
    }

    /// Attempts to reserve the slot with at least `min_capacity` elements.
    ///
    /// Returns `None` immediately when the slot is already held or when
    /// growing the backing buffer fails; never blocks. The buffer's contents
    /// are unspecified.
    pub fn reserve(&'static self, min_capacity: usize) -> Option<ScratchGuard<T>> {
        if min_capacity == 0 {
            return None;
        }
        if self.in_use.swap(true, Ordering::Acquire) {
            return None;
        }

        // SAFETY: the flag is held, so this thread has exclusive access.
        let slot = unsafe { &mut *self.buffer.get() };
        let capacity = slot.as_ref().map_or(0, |buf| buf.len);
        if capacity < min_capacity {
            // Free the undersized buffer before growing so peak usage stays
            // at one buffer.
            *slot = None;
            match AlignedBuf::allocate(min_capacity) {
                Some(grown) => *slot = Some(grown),
                None => {
                    warn!(
                        "failed to grow shared scratch buffer to {} elements",
                        min_capacity
                    );
                    self.in_use.store(false, Ordering::Release);
                    return None;
                }
            }
        }

        Some(ScratchGuard { pool: self })
    }

    fn release(&self) {
        self.in_use.store(false, Ordering::Release);
    }
}

/// Exclusive access to a pool's scratch buffer; releases the slot on drop.
pub struct ScratchGuard<T: PoolItem> {
    pool: &'static ScratchPool<T>,
}

impl<T: PoolItem> Deref for ScratchGuard<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: holding the guard means holding the reservation flag.
        unsafe { (*self.pool.buffer.get()).as_ref().map_or(&[], |buf| {
            std::slice::from_raw_parts(buf.ptr.as_ptr(), buf.len)
        }) }
    }
}

impl<T: PoolItem> DerefMut for ScratchGuard<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: holding the guard means holding the reservation flag.
        unsafe {
            (*self.pool.buffer.get())
                .as_mut()
                .map_or(&mut [], AlignedBuf::as_mut_slice)
        }
    }
}

impl<T: PoolItem> Drop for ScratchGuard<T> {
    fn drop(&mut self) {
        self.pool.release();
    }
}

/// Scratch storage for one call: the shared slot when available, otherwise a
/// private allocation that lives for the call's duration.
pub(crate) enum ScratchLease<T: PoolItem> {
    Pooled(ScratchGuard<T>),
    Private(Vec<T>),
}

impl<T: PoolItem> ScratchLease<T> {
    /// Leases scratch covering `template.len()` elements.
    ///
    /// Slot contention falls back to a private fallible allocation; `None`
    /// means even that failed and the caller must pick a buffer-free kernel.
    pub(crate) fn acquire(
        pool: &'static ScratchPool<T>,
        template: &[T],
    ) -> Option<ScratchLease<T>> {
        if let Some(guard) = pool.reserve(template.len()) {
            return Some(ScratchLease::Pooled(guard));
        }

        debug!(
            "scratch slot contended, using a private buffer for {} elements",
            template.len()
        );
        let mut private = Vec::new();
        if private.try_reserve_exact(template.len()).is_err() {
            warn!(
                "private scratch allocation of {} elements failed",
                template.len()
            );
            return None;
        }
        private.extend_from_slice(template);
        Some(ScratchLease::Private(private))
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            ScratchLease::Pooled(guard) => &mut guard[..],
            ScratchLease::Private(buffer) => buffer.as_mut_slice(),
        }
    }
}
