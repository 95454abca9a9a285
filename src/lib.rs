//! Reading and writing delimiter-separated text tables, either as positional
//! rows or as records keyed by field name.
//!
//! ```no_run
//! use csv_table::prelude::*;
//! use csv_table::{Record, RecordReader, RecordWriter, TableOptions};
//!
//! # fn main() -> csv_table::Result<()> {
//! let options = TableOptions::new().fieldnames(["id", "name"]);
//! let mut writer = RecordWriter::with_options("people.csv", options);
//! writer.write_fieldnames()?;
//! let mut record = Record::new();
//! record.insert("id".to_string(), "1".to_string());
//! record.insert("name".to_string(), "foo".to_string());
//! writer.write_line(&record)?;
//! drop(writer);
//!
//! let mut reader = RecordReader::open("people.csv");
//! reader.read_fieldnames()?;
//! for record in reader.records() {
//!     println!("{:?}", record?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod csv_processor;
pub mod utils;

pub use csv_processor::{
    analyze_table, combine, prelude, split, OpenMode, Record, RecordReader, RecordReaderWriter,
    RecordWriter, Row, RowReader, RowReaderWriter, RowWriter, Table, TableHandle, TableSummary,
};
pub use utils::{CsvTableError, FieldNames, Result, TableOptions};
