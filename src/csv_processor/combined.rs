use crate::csv_processor::handle::{OpenMode, Table, TableHandle};
use crate::csv_processor::reader::RowRead;
use crate::csv_processor::record_reader::RecordRead;
use crate::csv_processor::record_writer::RecordWrite;
use crate::csv_processor::writer::RowWrite;
use crate::utils::{Result, TableOptions};
use std::path::Path;

/// Row reading and writing over one handle opened read-write.
///
/// Reads start at the top of the file; writes are appended at the end. The
/// two positions are not coordinated. A missing file is created.
pub struct RowReaderWriter {
    handle: TableHandle,
}

impl RowReaderWriter {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, TableOptions::default())
    }

    pub fn with_options(path: impl AsRef<Path>, options: TableOptions) -> Self {
        Self {
            handle: TableHandle::open(path, OpenMode::ReadWrite, options),
        }
    }

    pub fn try_open(path: impl AsRef<Path>, options: TableOptions) -> Result<Self> {
        Ok(Self {
            handle: TableHandle::try_open(path, OpenMode::ReadWrite, options)?,
        })
    }

    pub fn into_handle(self) -> TableHandle {
        self.handle
    }
}

impl Table for RowReaderWriter {
    fn handle(&self) -> &TableHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut TableHandle {
        &mut self.handle
    }
}

impl RowRead for RowReaderWriter {}

impl RowWrite for RowReaderWriter {}

/// Record counterpart of [`RowReaderWriter`].
pub struct RecordReaderWriter {
    handle: TableHandle,
}

impl RecordReaderWriter {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, TableOptions::default())
    }

    pub fn with_options(path: impl AsRef<Path>, options: TableOptions) -> Self {
        Self {
            handle: TableHandle::open(path, OpenMode::ReadWrite, options),
        }
    }

    pub fn try_open(path: impl AsRef<Path>, options: TableOptions) -> Result<Self> {
        Ok(Self {
            handle: TableHandle::try_open(path, OpenMode::ReadWrite, options)?,
        })
    }

    pub fn into_handle(self) -> TableHandle {
        self.handle
    }
}

impl Table for RecordReaderWriter {
    fn handle(&self) -> &TableHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut TableHandle {
        &mut self.handle
    }
}

impl RecordRead for RecordReaderWriter {}

impl RecordWrite for RecordReaderWriter {}
