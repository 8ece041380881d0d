//! Per-instance unlock scope.

use crate::error::{FieldLockError, Result};
use crate::record::LockedRecord;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// The `attributes_unlocked` flag of one record instance.
///
/// Defaults to locked. Cloning yields a fresh, locked state: a cloned record
/// is a different instance.
#[derive(Debug, Default)]
pub struct UnlockState {
    unlocked: Arc<AtomicBool>,
}

impl UnlockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the instance is inside an active unlock scope.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::Acquire)
    }

    /// Enter an unlock scope, returning the guard that leaves it.
    ///
    /// Fails with [`FieldLockError::NestedUnlock`] if a scope is already active.
    pub fn acquire(&self, type_name: &str) -> Result<UnlockGuard> {
        self.unlocked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FieldLockError::NestedUnlock {
                type_name: type_name.to_string(),
            })?;

        debug!(type_name, "entered unlock scope");
        Ok(UnlockGuard {
            unlocked: Arc::clone(&self.unlocked),
        })
    }
}

impl Clone for UnlockState {
    fn clone(&self) -> Self {
        Self::default()
    }
}

/// RAII guard for an unlock scope.
///
/// When dropped, the instance is locked again. This holds on unwinding too.
#[derive(Debug)]
pub struct UnlockGuard {
    unlocked: Arc<AtomicBool>,
}

impl Drop for UnlockGuard {
    fn drop(&mut self) {
        self.unlocked.store(false, Ordering::Release);
        debug!("left unlock scope");
    }
}

/// Whether `record` is inside an active unlock scope.
pub fn attributes_unlocked<R: LockedRecord + ?Sized>(record: &R) -> bool {
    record.unlock_state().is_unlocked()
}

/// Run `action` on `record` with lock enforcement suspended.
///
/// The record is locked again on every exit path. Whatever `action` returns,
/// including its own `Result`, is passed through untouched.
///
/// # Returns
///
/// * `Ok(value)` - The action ran and returned `value`
/// * `Err(FieldLockError::NestedUnlock)` - The record was already unlocked;
///   the action did not run
pub fn with_unlocked<T, R, F>(record: &mut T, action: F) -> Result<R>
where
    T: LockedRecord + ?Sized,
    F: FnOnce(&mut T) -> R,
{
    let _guard = record.unlock_state().acquire(record.type_name())?;
    Ok(action(record))
}
