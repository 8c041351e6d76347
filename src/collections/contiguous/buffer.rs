use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::CapacityOverflow;

/// An owned, uninitialized heap block with room for exactly `cap` values of `T`.
///
/// Buffer never reads, writes or drops the values it has room for, it only manages the
/// allocation. Tracking which slots are initialized is the responsibility of the owner, (see
/// [`Vector`](super::Vector)) which must drop its live elements before the Buffer is dropped.
///
/// A capacity of zero, or a zero-sized `T`, never allocates and uses a dangling pointer instead.
pub(crate) struct Buffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a new Buffer with capacity 0, without allocating.
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a new Buffer with room for exactly `cap` values.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout would exceed `isize::MAX` bytes. An
    /// allocation failure calls [`alloc::handle_alloc_error`] rather than returning.
    pub fn with_cap(cap: usize) -> Result<Buffer<T>, CapacityOverflow> {
        let layout = Buffer::<T>::make_layout(cap)?;
        Ok(Buffer {
            ptr: Buffer::<T>::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        })
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub const fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// The largest capacity a Buffer of `T` can have.
    pub const fn max_cap() -> usize {
        match size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Moves the first `len` values into a new allocation of exactly `new_cap` slots, releasing
    /// the old one. Slots past `len` are uninitialized afterwards, whatever they held before.
    ///
    /// If `new_cap` equals the current capacity, nothing happens and the pointer is unchanged.
    ///
    /// # Safety
    /// `len` must be no greater than `new_cap` or the current capacity, and the first `len` slots
    /// must be initialized. Any values in slots `new_cap..` must already have been dropped or moved
    /// out by the caller.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout would exceed `isize::MAX` bytes, in which
    /// case the Buffer is left untouched.
    pub unsafe fn realloc(&mut self, len: usize, new_cap: usize) -> Result<(), CapacityOverflow> {
        if new_cap == self.cap {
            return Ok(());
        }

        let new = Buffer::<T>::with_cap(new_cap)?;

        // SAFETY: Both pointers are valid for len values, the caller guarantees that len fits in
        // both allocations and the two allocations are distinct. (Or dangling, for ZSTs, where a
        // copy is a no-op.) The values are moved bitwise and the old slots are never read again.
        unsafe {
            new.ptr.copy_from_nonoverlapping(self.ptr, len);
        }

        #[cfg(feature = "log")]
        log::trace!(
            "buffer of {} moved {} values from {:p} (cap {}) to {:p} (cap {})",
            std::any::type_name::<T>(),
            len,
            self.ptr,
            self.cap,
            new.ptr,
            new_cap,
        );

        // The old allocation is released when the old Buffer is dropped here.
        drop(mem::replace(self, new));
        Ok(())
    }

    /// Creates a [`Layout`] for `cap` values of `T`.
    fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    /// Allocates memory for the provided [`Layout`]. Returns a dangling pointer for a zero-sized
    /// layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            #[cfg(feature = "log")]
            log::trace!("allocating {} bytes for {}", layout.size(), std::any::type_name::<T>());

            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // The layout was valid when this Buffer was allocated, so it still is.
        let Ok(layout) = Buffer::<T>::make_layout(self.cap) else { return };

        if layout.size() != 0 {
            #[cfg(feature = "log")]
            log::trace!("releasing {} bytes at {:p}", layout.size(), self.ptr);

            // SAFETY: ptr was allocated in the global allocator with this same layout. Zero-sized
            // layouts aren't allocated and are guarded against deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

// SAFETY: Buffer uniquely owns its allocation, so it can be sent whenever T can.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer has no interior mutability; shared references only expose the pointer value.
unsafe impl<T: Sync> Sync for Buffer<T> {}
