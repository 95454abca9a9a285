use crate::csv_processor::handle::{OpenMode, Table, TableHandle};
use crate::csv_processor::tokenizer::combine;
use crate::utils::{Result, TableOptions};
use std::path::Path;

/// Positional writing: every row becomes one delimiter-joined line.
pub trait RowWrite: Table {
    /// Writes the field-name list as a line. Only meaningful as the first
    /// line of a freshly created file.
    fn write_fieldnames(&mut self) -> Result<()> {
        let handle = self.handle_mut();
        let line = combine(handle.fieldnames(), handle.delimiter());
        handle.write_raw_line(&line)
    }

    fn write_line<S: AsRef<str>>(&mut self, row: &[S]) -> Result<()> {
        let handle = self.handle_mut();
        let line = combine(row, handle.delimiter());
        handle.write_raw_line(&line)
    }

    fn write_lines<R: AsRef<[S]>, S: AsRef<str>>(&mut self, rows: &[R]) -> Result<()> {
        for row in rows {
            self.write_line(row.as_ref())?;
        }
        Ok(())
    }
}

pub struct RowWriter {
    handle: TableHandle,
}

impl RowWriter {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, TableOptions::default())
    }

    pub fn with_options(path: impl AsRef<Path>, options: TableOptions) -> Self {
        Self {
            handle: TableHandle::open(path, OpenMode::Write, options),
        }
    }

    pub fn try_open(path: impl AsRef<Path>, options: TableOptions) -> Result<Self> {
        Ok(Self {
            handle: TableHandle::try_open(path, OpenMode::Write, options)?,
        })
    }

    pub fn rows_written(&self) -> usize {
        self.handle.lines_written()
    }

    pub fn into_handle(self) -> TableHandle {
        self.handle
    }
}

impl Table for RowWriter {
    fn handle(&self) -> &TableHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut TableHandle {
        &mut self.handle
    }
}

impl RowWrite for RowWriter {}
