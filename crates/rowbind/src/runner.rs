//! Drives a row cursor and builds one record per row.

use crate::scanner::BoundScanner;
use crate::Scanner;

use rowbind_core::descriptor::Resolver;
use rowbind_core::{Error, Reflect, Result, Row, Rows, Slot};

use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Reads rows into records of type `T`.
///
/// A runner owns the placeholders its cursor scans into, so one runner
/// serves one read at a time. Use a [`Schema`](crate::Schema) to share a
/// binding between threads.
pub struct Runner<T> {
    scanners: Arc<[BoundScanner]>,
    slots: Vec<Slot>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Reflect> Runner<T> {
    /// Binds `scanners` against `T`.
    ///
    /// Every path is resolved and every converter checked against its field
    /// before the runner is returned. Without scanners, `T` itself is read
    /// from a single column.
    pub fn new(scanners: &[Scanner]) -> Result<Runner<T>> {
        Ok(Runner::from_bound(bind::<T>(scanners)?))
    }

    pub(crate) fn from_bound(scanners: Arc<[BoundScanner]>) -> Runner<T> {
        let slots = placeholders(&scanners);
        Runner::with_slots(scanners, slots)
    }

    pub(crate) fn with_slots(scanners: Arc<[BoundScanner]>, slots: Vec<Slot>) -> Runner<T> {
        Runner {
            scanners,
            slots,
            _record: PhantomData,
        }
    }

    /// Moves the placeholders out, leaving the runner without columns.
    pub(crate) fn take_slots(&mut self) -> Vec<Slot> {
        std::mem::take(&mut self.slots)
    }

    /// The number of columns each row must provide.
    pub fn columns(&self) -> usize {
        self.slots.len()
    }

    /// Reads every remaining row.
    ///
    /// The cursor is closed before returning, whether or not reading
    /// succeeded.
    pub fn all<R: Rows + ?Sized>(&mut self, rows: &mut R) -> Result<Vec<T>> {
        let res = self.read_all(rows);
        close(rows, res)
    }

    /// Reads exactly one row. Fails if the cursor yields none or more than
    /// one.
    pub fn one<R: Rows + ?Sized>(&mut self, rows: &mut R) -> Result<T> {
        let res = self.read_first(rows, true);
        close(rows, res)
    }

    /// Reads the first row and ignores the rest. Fails if the cursor yields
    /// none.
    pub fn first<R: Rows + ?Sized>(&mut self, rows: &mut R) -> Result<T> {
        let res = self.read_first(rows, false);
        close(rows, res)
    }

    /// Reads a single row handle.
    pub fn scan_row(&mut self, row: impl Row) -> Result<T> {
        row.scan(&mut self.slots)?;
        self.build()
    }

    fn read_all<R: Rows + ?Sized>(&mut self, rows: &mut R) -> Result<Vec<T>> {
        let mut records = vec![];

        while rows.next() {
            rows.scan(&mut self.slots)?;
            records.push(self.build()?);
            trace!(row = records.len(), "scanned row");
        }

        rows.err()?;
        Ok(records)
    }

    fn read_first<R: Rows + ?Sized>(&mut self, rows: &mut R, exact: bool) -> Result<T> {
        if !rows.next() {
            rows.err()?;
            return Err(Error::no_rows());
        }

        rows.scan(&mut self.slots)?;
        let record = self.build()?;
        trace!(row = 1, "scanned row");

        if exact && rows.next() {
            return Err(Error::too_many_rows());
        }

        rows.err()?;
        Ok(record)
    }

    /// Commits the scanned placeholders into a fresh record.
    fn build(&mut self) -> Result<T> {
        let mut record = T::default();

        for (i, (scanner, slot)) in self.scanners.iter().zip(&mut self.slots).enumerate() {
            scanner
                .commit(&mut record, slot.take())
                .map_err(|err| err.context(scanner_context(i, scanner.path())))?;
        }

        Ok(record)
    }
}

impl<T> core::fmt::Debug for Runner<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Runner")
            .field("scanners", &self.scanners)
            .finish()
    }
}

/// Resolves and checks every scanner against `T`.
pub(crate) fn bind<T: Reflect>(scanners: &[Scanner]) -> Result<Arc<[BoundScanner]>> {
    let mut resolver = Resolver::of::<T>();

    let bound = if scanners.is_empty() {
        vec![Scanner::root().bind(&mut resolver)?]
    } else {
        scanners
            .iter()
            .enumerate()
            .map(|(i, scanner)| {
                scanner
                    .bind(&mut resolver)
                    .map_err(|err| err.context(scanner_context(i, scanner.path())))
            })
            .collect::<Result<Vec<_>>>()?
    };

    debug!(
        record = T::SHAPE.type_name,
        scanners = bound.len(),
        paths = resolver.len(),
        "bound scanners"
    );

    Ok(bound.into())
}

pub(crate) fn placeholders(scanners: &[BoundScanner]) -> Vec<Slot> {
    scanners.iter().map(BoundScanner::slot).collect()
}

fn scanner_context(i: usize, path: &str) -> Error {
    rowbind_core::err!("scanner {} ({})", i, path)
}

/// Closes the cursor and folds a close failure into `res`.
fn close<R: Rows + ?Sized, V>(rows: &mut R, res: Result<V>) -> Result<V> {
    let Err(err) = rows.close() else {
        return res;
    };

    warn!(error = %err, "failed to close rows");
    Err(Error::close_failure(err, res.err()))
}
