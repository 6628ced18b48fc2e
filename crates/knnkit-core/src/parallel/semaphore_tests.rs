//! Tests for the counting semaphore.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use super::Semaphore;

#[test]
fn test_capacity_is_at_least_one() {
    assert_eq!(Semaphore::new(0).capacity(), 1);
    assert_eq!(Semaphore::new(4).capacity(), 4);
}

#[test]
fn test_try_acquire_exhausts_permits() {
    let semaphore = Semaphore::new(2);
    let first = semaphore.try_acquire();
    let second = semaphore.try_acquire();
    assert!(first.is_some());
    assert!(second.is_some());
    assert!(semaphore.try_acquire().is_none());
    assert_eq!(semaphore.available_permits(), 0);
}

#[test]
fn test_drop_releases_permit() {
    let semaphore = Semaphore::new(1);
    {
        let _permit = semaphore.acquire();
        assert_eq!(semaphore.available_permits(), 0);
    }
    assert_eq!(semaphore.available_permits(), 1);
}

#[test]
fn test_acquire_blocks_until_release_on_other_thread() {
    let semaphore = Semaphore::new(1);
    let released = AtomicBool::new(false);

    let held = semaphore.acquire();
    thread::scope(|scope| {
        scope.spawn(|| {
            let _permit = semaphore.acquire();
            assert!(
                released.load(Ordering::SeqCst),
                "acquire returned before the permit was released"
            );
        });

        thread::sleep(Duration::from_millis(20));
        released.store(true, Ordering::SeqCst);
        drop(held);
    });

    assert_eq!(semaphore.available_permits(), 1);
}

#[test]
fn test_permit_can_be_released_on_another_thread() {
    let semaphore = Semaphore::new(1);
    let permit = semaphore.acquire();
    thread::scope(|scope| {
        scope.spawn(move || drop(permit));
    });
    assert_eq!(semaphore.available_permits(), 1);
}
