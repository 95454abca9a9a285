use crate::csv_processor::handle::{OpenMode, Table, TableHandle};
use crate::utils::{Result, TableOptions};
use std::collections::BTreeMap;
use std::path::Path;

pub type Record = BTreeMap<String, String>;

/// Binds one line to the field-name list by position.
///
/// Missing trailing segments become empty strings, segments beyond the last
/// name are ignored, and a repeated name keeps the later value.
pub(crate) fn parse_record(line: &str, fieldnames: &[String], delimiter: &str) -> Record {
    let mut terminated = String::with_capacity(line.len() + delimiter.len());
    terminated.push_str(line);
    terminated.push_str(delimiter);

    let mut record = Record::new();
    let mut rest = terminated.as_str();
    for name in fieldnames {
        let value = match rest.find(delimiter) {
            Some(pos) if !delimiter.is_empty() => {
                let value = &rest[..pos];
                rest = &rest[pos + delimiter.len()..];
                value
            }
            _ => std::mem::take(&mut rest),
        };
        record.insert(name.clone(), value.to_string());
    }
    record
}

/// Named-column reading: every line becomes a [`Record`] keyed by the
/// field-name list.
pub trait RecordRead: Table {
    /// Replaces the field-name list with the next line. Call at most once,
    /// before reading any record.
    fn read_fieldnames(&mut self) -> Result<bool> {
        self.handle_mut().read_fieldnames()
    }

    fn read_next_line(&mut self) -> Result<Option<Record>> {
        let handle = self.handle_mut();
        Ok(handle
            .read_raw_line()?
            .map(|line| parse_record(&line, handle.fieldnames(), handle.delimiter())))
    }

    fn read_all_lines(&mut self) -> Result<Vec<Record>> {
        self.records().collect()
    }

    fn records(&mut self) -> RecordIterator<'_> {
        RecordIterator {
            handle: self.handle_mut(),
        }
    }
}

pub struct RecordIterator<'a> {
    handle: &'a mut TableHandle,
}

impl Iterator for RecordIterator<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.handle.read_raw_line() {
            Ok(Some(line)) => Some(Ok(parse_record(
                &line,
                self.handle.fieldnames(),
                self.handle.delimiter(),
            ))),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

pub struct RecordReader {
    handle: TableHandle,
}

impl RecordReader {
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

impl Table for RecordReader {
    fn handle(&self) -> &TableHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut TableHandle {
        &mut self.handle
    }
}

impl RecordRead for RecordReader {}
