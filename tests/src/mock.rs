use rowbind::{Error, Result, Row, Rows, Slot, Value};

use std::collections::VecDeque;

/// An in-memory row cursor.
#[derive(Debug, Default)]
pub struct MockRows {
    rows: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,

    /// Reported by `err` once the rows run out
    fail: Option<Error>,

    /// Returned by `close`
    close_error: Option<Error>,

    scanned: usize,
    closed: usize,
}

/// A single-row result. `None` stands for a query that matched nothing.
#[derive(Debug)]
pub struct MockRow(pub Option<Vec<Value>>);

impl MockRows {
    pub fn new(rows: impl IntoIterator<Item = Vec<Value>>) -> MockRows {
        MockRows {
            rows: rows.into_iter().collect(),
            ..MockRows::default()
        }
    }

    pub fn empty() -> MockRows {
        MockRows::default()
    }

    /// Makes the cursor stop with `err` after its rows are consumed.
    pub fn fail_with(mut self, err: Error) -> MockRows {
        self.fail = Some(err);
        self
    }

    /// Makes `close` fail with `err`.
    pub fn fail_close(mut self, err: Error) -> MockRows {
        self.close_error = Some(err);
        self
    }

    /// Number of rows read through `scan`.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Number of times `close` was called.
    pub fn closed(&self) -> usize {
        self.closed
    }

    /// Rows not yet reached by `next`.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl Rows for MockRows {
    fn next(&mut self) -> bool {
        self.current = self.rows.pop_front();
        self.current.is_some()
    }

    fn scan(&mut self, slots: &mut [Slot]) -> Result<()> {
        let Some(row) = &self.current else {
            rowbind::bail!("scan called without a current row");
        };
        fill(row, slots)?;
        self.scanned += 1;
        Ok(())
    }

    fn err(&mut self) -> Result<()> {
        if self.rows.is_empty() {
            if let Some(err) = &self.fail {
                return Err(err.clone());
            }
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed += 1;
        match self.close_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Row for MockRow {
    fn scan(self, slots: &mut [Slot]) -> Result<()> {
        match self.0 {
            Some(row) => fill(&row, slots),
            None => Err(Error::no_rows()),
        }
    }
}

fn fill(row: &[Value], slots: &mut [Slot]) -> Result<()> {
    if row.len() != slots.len() {
        rowbind::bail!("expected {} columns, row has {}", slots.len(), row.len());
    }

    for (slot, value) in slots.iter_mut().zip(row) {
        slot.set(value.clone())?;
    }
    Ok(())
}
