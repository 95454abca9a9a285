use crate::csv_processor::handle::{OpenMode, Table, TableHandle};
use crate::csv_processor::tokenizer::split;
use crate::utils::{Result, TableOptions};
use std::path::Path;

pub type Row = Vec<String>;

/// Positional reading: every line becomes a [`Row`].
pub trait RowRead: Table {
    /// Replaces the field-name list with the next line. Call at most once,
    /// before reading any row.
    fn read_fieldnames(&mut self) -> Result<bool> {
        self.handle_mut().read_fieldnames()
    }

    fn read_next_line(&mut self) -> Result<Option<Row>> {
        let handle = self.handle_mut();
        Ok(handle
            .read_raw_line()?
            .map(|line| split(&line, handle.delimiter())))
    }

    fn read_all_lines(&mut self) -> Result<Vec<Row>> {
        self.rows().collect()
    }

    fn rows(&mut self) -> RowIterator<'_> {
        RowIterator {
            handle: self.handle_mut(),
        }
    }
}

pub struct RowIterator<'a> {
    handle: &'a mut TableHandle,
}

impl Iterator for RowIterator<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.handle.read_raw_line() {
            Ok(Some(line)) => Some(Ok(split(&line, self.handle.delimiter()))),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

pub struct RowReader {
    handle: TableHandle,
}

impl RowReader {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, TableOptions::default())
    }

    pub fn with_options(path: impl AsRef<Path>, options: TableOptions) -> Self {
        Self {
            handle: TableHandle::open(path, OpenMode::Read, options),
        }
    }

    pub fn try_open(path: impl AsRef<Path>, options: TableOptions) -> Result<Self> {
        Ok(Self {
            handle: TableHandle::try_open(path, OpenMode::Read, options)?,
        })
    }

    pub fn into_handle(self) -> TableHandle {
        self.handle
    }
}

impl Table for RowReader {
    fn handle(&self) -> &TableHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut TableHandle {
        &mut self.handle
    }
}

impl RowRead for RowReader {}
