//! Synchronization helpers.

use std::sync::{Mutex, MutexGuard};

/// Extension trait for [`Mutex`] that treats poisoning as recoverable.
///
/// A poisoned lock means another thread panicked while holding the guard;
/// for the shared test fixtures in this workspace the panic itself is the
/// interesting failure, so the data behind the lock is still usable.
pub trait IgnoreLock<T> {
    /// Locks the mutex, returning the guard even if the lock is poisoned.
    fn lock_ignore_poison(&self) -> MutexGuard<'_, T>;
}

impl<T> IgnoreLock<T> for Mutex<T> {
    fn lock_ignore_poison(&self) -> MutexGuard<'_, T> {
        match self.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
