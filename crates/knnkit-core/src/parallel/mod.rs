//! Parallel row dispatcher.
//!
//! Fans a per-row reduction out over a bounded worker pool and collects one
//! scalar per row into a pre-sized result buffer.
//!
//! # Execution model
//!
//! One fork-join per call on a dedicated rayon pool built for that call:
//!
//! 1. The result buffer is allocated at full length before any thread starts.
//! 2. A pool of `min(workers, rows)` threads is built and torn down per call.
//! 3. The calling thread takes a [`Semaphore`] permit before spawning each
//!    row. The spawned job owns its permit and drops it only after the row's
//!    result is written, so at most `workers` rows are in flight.
//! 4. Buffer writes go through a single mutex.
//! 5. The rayon scope joins every job; all writes happen-before return, and
//!    a panicking row is re-raised once the scope completes.

mod semaphore;

pub use semaphore::{Semaphore, SemaphorePermit};

use std::num::NonZeroUsize;

use parking_lot::Mutex;

use crate::Element;

/// Computes `reduce(i)` for every `i` in `0..rows` with at most `workers`
/// rows in flight and returns the results in row order.
///
/// Rows complete in any order. The call returns only after every row has
/// been written. A panic inside `reduce` is propagated to the caller once
/// all spawned rows have finished. If the pool cannot be built the rows are
/// reduced on the calling thread instead.
pub fn fan_out_rows<T, F>(rows: usize, workers: NonZeroUsize, reduce: F) -> Vec<T>
where
    T: Element,
    F: Fn(usize) -> T + Sync,
{
    let permits = Semaphore::new(workers.get());
    run_admitted(rows, workers.get().min(rows), &permits, reduce)
}

/// Runs every row on a pool of `pool_threads` threads, admitting each row
/// through `permits`.
pub(crate) fn run_admitted<T, F>(
    rows: usize,
    pool_threads: usize,
    permits: &Semaphore,
    reduce: F,
) -> Vec<T>
where
    T: Element,
    F: Fn(usize) -> T + Sync,
{
    let buffer = Mutex::new(vec![T::ZERO; rows]);
    if rows == 0 {
        return buffer.into_inner();
    }

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(pool_threads.max(1))
        .thread_name(|i| format!("knnkit-row-{i}"))
        .build()
    {
        Ok(pool) => pool,
        Err(err) => {
            tracing::warn!(error = %err, "row pool unavailable, reducing sequentially");
            return sequential_rows(rows, reduce);
        }
    };

    tracing::debug!(
        rows,
        threads = pool.current_num_threads(),
        permits = permits.capacity(),
        "fanning out row reduction"
    );

    let buffer_ref = &buffer;
    let reduce_ref = &reduce;
    pool.in_place_scope(|scope| {
        for row in 0..rows {
            let permit = permits.acquire();
            scope.spawn(move |_| {
                let value = reduce_ref(row);
                buffer_ref.lock()[row] = value;
                drop(permit);
            });
        }
    });

    debug_assert_eq!(permits.available_permits(), permits.capacity());
    buffer.into_inner()
}

/// Computes `reduce(i)` for every row on the calling thread.
#[inline]
pub fn sequential_rows<T, F>(rows: usize, reduce: F) -> Vec<T>
where
    T: Element,
    F: Fn(usize) -> T,
{
    (0..rows).map(reduce).collect()
}


#[cfg(test)]
mod semaphore_tests;
