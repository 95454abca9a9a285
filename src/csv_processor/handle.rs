use crate::csv_processor::tokenizer::split;
use crate::utils::{CsvTableError, Result, TableOptions, DEFAULT_DELIMITER};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, LineWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
    ReadWrite,
}

impl OpenMode {
    pub fn can_read(self) -> bool {
        matches!(self, OpenMode::Read | OpenMode::ReadWrite)
    }

    pub fn can_write(self) -> bool {
        matches!(self, OpenMode::Write | OpenMode::ReadWrite)
    }
}

/// Read and write ends of an open table file.
///
/// In read-write mode the two ends are separate descriptors, so the read
/// cursor and the append position move independently.
struct LineStream {
    reader: Option<BufReader<File>>,
    writer: Option<LineWriter<File>>,
    pending_newline: bool,
}

/// True when `path` holds data whose last byte is not a newline.
fn lacks_final_newline(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl LineStream {
    fn open(path: &Path, mode: OpenMode) -> io::Result<Self> {
        let writer = match mode {
            OpenMode::Read => None,
            OpenMode::Write => Some(File::create(path)?),
            OpenMode::ReadWrite => Some(OpenOptions::new().create(true).append(true).open(path)?),
        };
        let reader = if mode.can_read() {
            Some(BufReader::new(File::open(path)?))
        } else {
            None
        };
        let pending_newline = mode == OpenMode::ReadWrite && lacks_final_newline(path)?;

        Ok(Self {
            reader,
            writer: writer.map(LineWriter::new),
            pending_newline,
        })
    }
}

/// Owner of a table's delimiter, field-name list and open file.
///
/// The file is opened on construction in a mode that never changes and is
/// flushed and closed when the handle is dropped.
pub struct TableHandle {
    path: PathBuf,
    mode: OpenMode,
    delimiter: String,
    fieldnames: Vec<String>,
    stream: Option<LineStream>,
    open_error: Option<io::Error>,
    lines_read: usize,
    lines_written: usize,
    unterminated_tail: bool,
}

impl TableHandle {
    /// Opens `path` without failing. If the file cannot be opened the handle
    /// still exists: reads report end of stream and writes are dropped.
    /// Use [`TableHandle::is_open`] or [`TableHandle::open_error`] to tell.
    pub fn open(path: impl AsRef<Path>, mode: OpenMode, options: TableOptions) -> Self {
        let path = path.as_ref().to_path_buf();

        let delimiter = if options.delimiter.is_empty() {
            warn!(path = %path.display(), "empty delimiter, using {:?}", DEFAULT_DELIMITER);
            DEFAULT_DELIMITER.to_string()
        } else {
            options.delimiter
        };
        let fieldnames = options.fieldnames.resolve(&delimiter);

        let (stream, open_error) = match LineStream::open(&path, mode) {
            Ok(stream) => {
                debug!(path = %path.display(), ?mode, "opened table");
                (Some(stream), None)
            }
            Err(e) => {
                warn!(path = %path.display(), ?mode, "failed to open table: {}", e);
                (None, Some(e))
            }
        };

        Self {
            path,
            mode,
            delimiter,
            fieldnames,
            stream,
            open_error,
            lines_read: 0,
            lines_written: 0,
            unterminated_tail: false,
        }
    }

    /// Like [`TableHandle::open`], but reports an unopenable file or an empty
    /// delimiter as an error.
    pub fn try_open(path: impl AsRef<Path>, mode: OpenMode, options: TableOptions) -> Result<Self> {
        if options.delimiter.is_empty() {
            return Err(CsvTableError::InvalidDelimiter);
        }

        let mut handle = Self::open(path, mode, options);
        match handle.open_error.take() {
            Some(source) => Err(CsvTableError::Unavailable {
                path: handle.path.clone(),
                source,
            }),
            None => Ok(handle),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn fieldnames(&self) -> &[String] {
        &self.fieldnames
    }

    pub fn set_fieldnames(&mut self, fieldnames: Vec<String>) {
        self.fieldnames = fieldnames;
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    pub fn open_error(&self) -> Option<&io::Error> {
        self.open_error.as_ref()
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Reads one header line into the field-name list. Leaves the list
    /// untouched and returns `false` at end of stream.
    pub fn read_fieldnames(&mut self) -> Result<bool> {
        match self.read_raw_line()? {
            Some(line) => {
                self.fieldnames = split(&line, &self.delimiter);
                debug!(path = %self.path.display(), fieldnames = ?self.fieldnames, "read header");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Next line with its terminator stripped, or `None` at end of stream.
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the read.
    pub(crate) fn read_raw_line(&mut self) -> Result<Option<String>> {
        let reader = match self.stream.as_mut().and_then(|s| s.reader.as_mut()) {
            Some(reader) => reader,
            None => return Ok(None),
        };

        let mut buf = Vec::new();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // The newline that closed an unterminated line we already returned.
        if self.unterminated_tail && buf == b"\n" {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                self.unterminated_tail = false;
                return Ok(None);
            }
        }
        self.unterminated_tail = buf.last() != Some(&b'\n');

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        self.lines_read += 1;
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Appends `line` followed by a newline. Dropped silently when the handle
    /// has no write end.
    pub(crate) fn write_raw_line(&mut self, line: &str) -> Result<()> {
        let stream = match self.stream.as_mut() {
            Some(stream) => stream,
            None => return Ok(()),
        };
        let writer = match stream.writer.as_mut() {
            Some(writer) => writer,
            None => return Ok(()),
        };

        // Terminate an unfinished last line before appending after it.
        if stream.pending_newline {
            writer.write_all(b"\n")?;
            stream.pending_newline = false;
        }
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.stream.as_mut().and_then(|s| s.writer.as_mut()) {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for TableHandle {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!(path = %self.path.display(), "failed to flush table on close: {}", e);
        }
        if self.stream.take().is_some() {
            debug!(
                path = %self.path.display(),
                lines_read = self.lines_read,
                lines_written = self.lines_written,
                "closed table"
            );
        }
    }
}

impl std::fmt::Debug for TableHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableHandle")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("delimiter", &self.delimiter)
            .field("fieldnames", &self.fieldnames)
            .field("is_open", &self.is_open())
            .finish()
    }
}

/// Access to the [`TableHandle`] a reader or writer operates on.
pub trait Table {
    fn handle(&self) -> &TableHandle;

    fn handle_mut(&mut self) -> &mut TableHandle;

    fn fieldnames(&self) -> &[String] {
        self.handle().fieldnames()
    }

    fn delimiter(&self) -> &str {
        self.handle().delimiter()
    }

    fn is_open(&self) -> bool {
        self.handle().is_open()
    }

    fn flush(&mut self) -> Result<()> {
        self.handle_mut().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unopenable_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("table.csv");

        let mut handle = TableHandle::open(&path, OpenMode::Read, TableOptions::default());
        assert!(!handle.is_open());
        assert!(handle.open_error().is_some());
        assert!(!handle.read_fieldnames().unwrap());
        assert!(handle.read_raw_line().unwrap().is_none());
        handle.write_raw_line("ignored").unwrap();
        assert_eq!(handle.lines_written(), 0);
    }

    #[test]
    fn try_open_surfaces_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = TableHandle::try_open(&path, OpenMode::Read, TableOptions::default()).unwrap_err();
        match err {
            CsvTableError::Unavailable { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_delimiter_rejected_or_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        let options = TableOptions::new().delimiter("");

        assert!(matches!(
            TableHandle::try_open(&path, OpenMode::Write, options.clone()),
            Err(CsvTableError::InvalidDelimiter)
        ));
        let handle = TableHandle::open(&path, OpenMode::Write, options);
        assert_eq!(handle.delimiter(), ",");
    }

    #[test]
    fn joined_fieldnames_resolved_with_handle_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        let options = TableOptions::new().delimiter(";").fieldnames("id;name");

        let handle = TableHandle::open(&path, OpenMode::Write, options);
        assert_eq!(handle.fieldnames(), ["id", "name"]);
    }

    #[test]
    fn strips_crlf_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, "a,b\r\nc,d").unwrap();

        let mut handle = TableHandle::open(&path, OpenMode::Read, TableOptions::default());
        assert_eq!(handle.read_raw_line().unwrap().as_deref(), Some("a,b"));
        assert_eq!(handle.read_raw_line().unwrap().as_deref(), Some("c,d"));
        assert_eq!(handle.read_raw_line().unwrap(), None);
        assert_eq!(handle.lines_read(), 2);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        std::fs::write(&path, b"caf\xe9,x\nok,y\n").unwrap();

        let mut handle = TableHandle::open(&path, OpenMode::Read, TableOptions::default());
        assert_eq!(handle.read_raw_line().unwrap().as_deref(), Some("caf\u{fffd},x"));
        assert_eq!(handle.read_raw_line().unwrap().as_deref(), Some("ok,y"));
        assert_eq!(handle.read_raw_line().unwrap(), None);
    }

    #[test]
    fn read_fieldnames_on_empty_stream_keeps_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "").unwrap();

        let options = TableOptions::new().fieldnames(["x", "y"]);
        let mut handle = TableHandle::open(&path, OpenMode::Read, options);
        assert!(!handle.read_fieldnames().unwrap());
        assert_eq!(handle.fieldnames(), ["x", "y"]);
    }
}
