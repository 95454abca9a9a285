use crate::csv_processor::handle::{OpenMode, Table, TableHandle};
use crate::csv_processor::record_reader::Record;
use crate::csv_processor::tokenizer::combine;
use crate::utils::{CsvTableError, Result, TableOptions};
use std::path::Path;

/// Serializes `record` in field-name order, terminating every value
/// (the last one included) with the delimiter.
pub(crate) fn format_record(record: &Record, fieldnames: &[String], delimiter: &str) -> Result<String> {
    let mut line = String::new();
    for name in fieldnames {
        let value = record
            .get(name)
            .ok_or_else(|| CsvTableError::MissingField(name.clone()))?;
        line.push_str(value);
        line.push_str(delimiter);
    }
    Ok(line)
}

/// Named-column writing in field-name order.
pub trait RecordWrite: Table {
    /// Writes the field-name list as a line. Only meaningful as the first
    /// line of a freshly created file.
    fn write_fieldnames(&mut self) -> Result<()> {
        let handle = self.handle_mut();
        let line = combine(handle.fieldnames(), handle.delimiter());
        handle.write_raw_line(&line)
    }

    /// Fails with [`CsvTableError::MissingField`] before writing anything if
    /// `record` lacks one of the field names.
    fn write_line(&mut self, record: &Record) -> Result<()> {
        let handle = self.handle_mut();
        let line = format_record(record, handle.fieldnames(), handle.delimiter())?;
        handle.write_raw_line(&line)
    }

    fn write_lines(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            self.write_line(record)?;
        }
        Ok(())
    }
}

pub struct RecordWriter {
    handle: TableHandle,
}

impl RecordWriter {
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

impl Table for RecordWriter {
    fn handle(&self) -> &TableHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut TableHandle {
        &mut self.handle
    }
}

impl RecordWrite for RecordWriter {}
