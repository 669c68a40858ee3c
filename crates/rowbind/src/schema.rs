mod pool;
pub use pool::{PoolConfig, PooledRunner};

use crate::{runner, Scanner};
use pool::Pool;

use rowbind_core::{Reflect, Result, Row, Rows};

use std::marker::PhantomData;
use tracing::debug;

/// A binding from rows to records of type `T` that can be shared between
/// threads.
///
/// Scanners are bound once, when the schema is built. Each read checks out
/// a runner and returns it afterwards.
#[derive(Debug)]
pub struct Schema<T> {
    pool: Pool,
    _record: PhantomData<fn() -> T>,
}

pub struct Builder<T> {
    scanners: Vec<Scanner>,
    pool: PoolConfig,
    _record: PhantomData<fn() -> T>,
}

impl<T: Reflect> Schema<T> {
    pub fn builder() -> Builder<T> {
        Builder::default()
    }

    /// Binds `scanners` with the default pool configuration.
    pub fn new<S: Into<Scanner>>(scanners: impl IntoIterator<Item = S>) -> Result<Schema<T>> {
        Schema::builder().scanners(scanners).build()
    }

    /// Checks out a runner. It returns to the pool when dropped.
    pub fn get(&self) -> PooledRunner<'_, T> {
        self.pool.get()
    }

    pub fn all<R: Rows + ?Sized>(&self, rows: &mut R) -> Result<Vec<T>> {
        self.get().all(rows)
    }

    pub fn one<R: Rows + ?Sized>(&self, rows: &mut R) -> Result<T> {
        self.get().one(rows)
    }

    pub fn first<R: Rows + ?Sized>(&self, rows: &mut R) -> Result<T> {
        self.get().first(rows)
    }

    pub fn scan_row(&self, row: impl Row) -> Result<T> {
        self.get().scan_row(row)
    }

    pub fn pool_config(&self) -> &PoolConfig {
        self.pool.config()
    }

    /// The number of runners waiting in the pool.
    pub fn idle_runners(&self) -> usize {
        self.pool.idle()
    }
}

impl<T: Reflect> Builder<T> {
    pub fn scanner(&mut self, scanner: impl Into<Scanner>) -> &mut Self {
        self.scanners.push(scanner.into());
        self
    }

    pub fn scanners<S>(&mut self, scanners: impl IntoIterator<Item = S>) -> &mut Self
    where
        S: Into<Scanner>,
    {
        self.scanners.extend(scanners.into_iter().map(Into::into));
        self
    }

    /// Set the maximum number of idle runners kept for reuse
    pub fn max_idle_runners(&mut self, max_idle: usize) -> &mut Self {
        self.pool.max_idle = max_idle;
        self
    }

    pub fn pool_config(&mut self, config: PoolConfig) -> &mut Self {
        self.pool = config;
        self
    }

    /// Binds every scanner against `T`.
    pub fn build(&self) -> Result<Schema<T>> {
        let scanners = runner::bind::<T>(&self.scanners)?;

        debug!(
            record = T::SHAPE.type_name,
            scanners = scanners.len(),
            max_idle = self.pool.max_idle,
            "built schema"
        );

        Ok(Schema {
            pool: Pool::new(scanners, self.pool.clone()),
            _record: PhantomData,
        })
    }
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Builder {
            scanners: vec![],
            pool: PoolConfig::default(),
            _record: PhantomData,
        }
    }
}
