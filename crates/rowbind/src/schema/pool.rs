//! Checkout/return pooling of runner placeholders.

use crate::runner::{placeholders, Runner};
use crate::scanner::BoundScanner;

use rowbind_core::{Reflect, Slot};

use std::num::NonZeroUsize;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, PoisonError};

/// Get the default number of idle runners kept, which is `cpu_core_count * 2`
/// including logical cores.
fn get_default_max_idle() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get) * 2
}

/// Configuration for runner pool behavior.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Runners returned beyond this many are dropped.
    pub max_idle: usize,
}

impl PoolConfig {
    /// Creates a new pool configuration with default settings.
    pub fn new() -> Self {
        Self {
            max_idle: get_default_max_idle(),
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Bound scanners and the idle placeholder sets of their runners.
#[derive(Debug)]
pub(crate) struct Pool {
    scanners: Arc<[BoundScanner]>,
    idle: Mutex<Vec<Vec<Slot>>>,
    config: PoolConfig,
}

impl Pool {
    pub(crate) fn new(scanners: Arc<[BoundScanner]>, config: PoolConfig) -> Pool {
        Pool {
            scanners,
            idle: Mutex::new(vec![]),
            config,
        }
    }

    pub(crate) fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub(crate) fn idle(&self) -> usize {
        self.lock().len()
    }

    /// Checks out a runner, reusing idle placeholders when there are any.
    pub(crate) fn get<T: Reflect>(&self) -> PooledRunner<'_, T> {
        let slots = self
            .lock()
            .pop()
            .unwrap_or_else(|| placeholders(&self.scanners));

        PooledRunner {
            runner: Runner::with_slots(self.scanners.clone(), slots),
            pool: self,
        }
    }

    fn put(&self, slots: Vec<Slot>) {
        let mut idle = self.lock();
        if idle.len() < self.config.max_idle {
            idle.push(slots);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<Slot>>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A runner checked out of a [`Schema`](crate::Schema).
///
/// When dropped, the runner is returned to the pool for reuse.
pub struct PooledRunner<'a, T: Reflect> {
    runner: Runner<T>,
    pool: &'a Pool,
}

impl<T: Reflect> Deref for PooledRunner<'_, T> {
    type Target = Runner<T>;

    fn deref(&self) -> &Self::Target {
        &self.runner
    }
}

impl<T: Reflect> DerefMut for PooledRunner<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.runner
    }
}

impl<T: Reflect> Drop for PooledRunner<'_, T> {
    fn drop(&mut self) {
        self.pool.put(self.runner.take_slots());
    }
}
