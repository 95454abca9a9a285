pub mod analyzer;
pub mod combined;
pub mod handle;
pub mod reader;
pub mod record_reader;
pub mod record_writer;
pub mod tokenizer;
pub mod writer;

pub use analyzer::{analyze_table, TableSummary};
pub use combined::{RecordReaderWriter, RowReaderWriter};
pub use handle::{OpenMode, Table, TableHandle};
pub use reader::{Row, RowIterator, RowRead, RowReader};
pub use record_reader::{Record, RecordIterator, RecordRead, RecordReader};
pub use record_writer::{RecordWrite, RecordWriter};
pub use tokenizer::{combine, split};
pub use writer::{RowWrite, RowWriter};

/// Traits needed to call reader and writer methods.
pub mod prelude {
    pub use super::handle::Table;
    pub use super::reader::RowRead;
    pub use super::record_reader::RecordRead;
    pub use super::record_writer::RecordWrite;
    pub use super::writer::RowWrite;
}
