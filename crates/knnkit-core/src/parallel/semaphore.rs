//! Counting semaphore with RAII permits.

use parking_lot::{Condvar, Mutex};

/// A counting semaphore bounding how many work units run at once.
///
/// Permits are handed out as [`SemaphorePermit`] guards and returned to the
/// pool when the guard is dropped, on whichever thread that happens.
#[derive(Debug)]
pub struct Semaphore {
    available: Mutex<usize>,
    released: Condvar,
    capacity: usize,
}

impl Semaphore {
    /// Creates a semaphore with `capacity` permits (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            available: Mutex::new(capacity),
            released: Condvar::new(),
            capacity,
        }
    }

    /// Blocks until a permit is free and takes it.
    pub fn acquire(&self) -> SemaphorePermit<'_> {
        let mut available = self.available.lock();
        while *available == 0 {
            self.released.wait(&mut available);
        }
        *available -= 1;
        SemaphorePermit { semaphore: self }
    }

    /// Takes a permit if one is free, without blocking.
    #[cfg(test)]
    pub(crate) fn try_acquire(&self) -> Option<SemaphorePermit<'_>> {
        let mut available = self.available.lock();
        if *available == 0 {
            return None;
        }
        *available -= 1;
        Some(SemaphorePermit { semaphore: self })
    }

    /// Number of permits not currently held.
    #[must_use]
    pub(crate) fn available_permits(&self) -> usize {
        *self.available.lock()
    }

    /// Total number of permits.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn release(&self) {
        let mut available = self.available.lock();
        *available += 1;
        drop(available);
        self.released.notify_one();
    }
}

/// A held permit; dropping it releases the slot.
#[derive(Debug)]
#[must_use = "dropping the permit releases it immediately"]
pub struct SemaphorePermit<'a> {
    semaphore: &'a Semaphore,
}

impl Drop for SemaphorePermit<'_> {
    fn drop(&mut self) {
        self.semaphore.release();
    }
}

// Compile-time check: permits must be able to travel to worker threads.
#[allow(dead_code)]
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Semaphore>();
    assert_send_sync::<SemaphorePermit<'static>>();
};
