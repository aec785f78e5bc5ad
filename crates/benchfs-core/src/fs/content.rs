//! Whole-file text and byte I/O with transparent gzip handling.
//!
//! Whether a path is compressed is decided purely by its suffix
//! ([`crate::LocatorConfig::compressed_suffix`]). Contents are never sniffed,
//! so a gzip file without the suffix is read as raw bytes.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{LocatorError, LocatorResult};
use crate::fs::temp::TempFile;
use crate::locator::FileLocator;

/// Which reader variant a [`ContentStream`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Bytes are passed through unchanged.
    Plain,
    /// Bytes are gunzipped on the fly.
    Gzip,
}

/// A buffered sequential reader over a file, optionally decompressing.
///
/// The underlying file handle is closed when the stream is dropped.
#[derive(Debug)]
pub enum ContentStream {
    Plain(BufReader<File>),
    Gzip(BufReader<MultiGzDecoder<File>>),
}

impl ContentStream {
    /// Returns the variant in use.
    pub fn kind(&self) -> StreamKind {
        match self {
            ContentStream::Plain(_) => StreamKind::Plain,
            ContentStream::Gzip(_) => StreamKind::Gzip,
        }
    }
}

impl Read for ContentStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ContentStream::Plain(r) => r.read(buf),
            ContentStream::Gzip(r) => r.read(buf),
        }
    }
}

impl BufRead for ContentStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            ContentStream::Plain(r) => r.fill_buf(),
            ContentStream::Gzip(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            ContentStream::Plain(r) => r.consume(amt),
            ContentStream::Gzip(r) => r.consume(amt),
        }
    }
}

impl FileLocator {
    /// Opens `path` for reading, gunzipping when it has the compressed suffix.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::NotFound`] if `path` does not exist (checked before opening).
    /// - [`LocatorError::PermissionDenied`] if the file is not readable.
    /// - [`LocatorError::Io`] for any other failure.
    pub fn open_content_stream(&self, path: impl AsRef<Path>) -> LocatorResult<ContentStream> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LocatorError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|e| LocatorError::from_io(path, e))?;
        let stream = if self.config.is_compressed(path) {
            ContentStream::Gzip(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            ContentStream::Plain(BufReader::new(file))
        };

        self.observer.stream_opened(path, stream.kind());
        Ok(stream)
    }

    /// Reads the whole text content of `path`.
    ///
    /// Lines may end in `\n`, `\r\n` or a bare `\r`. Every line, including
    /// the last one, comes back terminated by a single `\n`. An empty file
    /// yields an empty string.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::NotFound`] if `path` does not exist.
    /// - [`LocatorError::Io`] on read failure, corrupt gzip data or invalid UTF-8.
    pub fn read_text(&self, path: impl AsRef<Path>) -> LocatorResult<String> {
        let mut stream = self.open_content_stream(path)?;
        let mut buffer = String::new();
        let mut line = String::new();

        loop {
            line.clear();
            if stream.read_line(&mut line)? == 0 {
                break;
            }
            push_lines(&mut buffer, &line);
        }

        Ok(buffer)
    }

    /// Writes `content` to `dest`, truncating any existing file.
    ///
    /// Destinations with the compressed suffix are gzip-encoded. The write is
    /// not atomic: a failure part-way leaves a partial file behind.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::NotFound`] if the parent directory does not exist.
    /// - [`LocatorError::PermissionDenied`] if `dest` is not writable.
    /// - [`LocatorError::Io`] for any other failure.
    pub fn write_text(&self, dest: impl AsRef<Path>, content: &str) -> LocatorResult<()> {
        let dest = dest.as_ref();
        let file = File::create(dest).map_err(|e| LocatorError::from_io(dest, e))?;
        let mut writer = BufWriter::new(file);

        if self.config.is_compressed(dest) {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            encoder.write_all(content.as_bytes())?;
            writer = encoder.finish()?;
        } else {
            writer.write_all(content.as_bytes())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Writes `content` into a fresh persistent temp file.
    ///
    /// `suffix` defaults to [`crate::LocatorConfig::default_temp_suffix`].
    /// If the write fails the temp file is removed again.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::TempAllocation`] if no temp file could be allocated.
    /// - [`LocatorError::Io`] if writing fails.
    pub fn write_text_to_temp(
        &self,
        content: &str,
        suffix: Option<&str>,
    ) -> LocatorResult<TempFile> {
        let suffix = suffix.unwrap_or(&self.config.default_temp_suffix);
        let temp = self.create_temp_file(suffix, false)?;

        if let Err(e) = self.write_text(temp.path(), content) {
            self.discard_temp(temp);
            return Err(e);
        }
        Ok(temp)
    }

    /// Deletes an abandoned temp file, reporting rather than returning a failure.
    fn discard_temp(&self, temp: TempFile) {
        let path = temp.path().to_path_buf();
        if let Err(e) = temp.delete() {
            self.observer.temp_cleanup_failed(&path, &e);
        }
    }

    /// Reads the raw bytes of `path`.
    ///
    /// The file length is taken from its metadata up front and exactly that
    /// many bytes are read. No decompression is applied.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::NotFound`] if `path` does not exist.
    /// - [`LocatorError::ShortRead`] if the stream ends before the declared length.
    /// - [`LocatorError::Io`] for any other failure.
    pub fn read_all_bytes(&self, path: impl AsRef<Path>) -> LocatorResult<Vec<u8>> {
        self.read_all_bytes_with(path.as_ref(), || {})
    }

    /// [`FileLocator::read_all_bytes`] with a hook run between taking the
    /// declared length and reading.
    fn read_all_bytes_with(
        &self,
        path: &Path,
        after_stat: impl FnOnce(),
    ) -> LocatorResult<Vec<u8>> {
        let file = File::open(path).map_err(|e| LocatorError::from_io(path, e))?;
        let declared = file.metadata()?.len();

        self.observer.bytes_reading(path, declared);
        after_stat();
        read_declared(path, file, declared)
    }
}

/// Appends each line of a `read_line` chunk to `buffer`, `\n`-terminated.
///
/// A chunk ends at `\n` or end of stream, so any `\r` inside it is either
/// half of the closing `\r\n` or a line break of its own.
fn push_lines(buffer: &mut String, chunk: &str) {
    let body = match chunk.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => chunk.strip_suffix('\r').unwrap_or(chunk),
    };
    for line in body.split('\r') {
        buffer.push_str(line);
        buffer.push('\n');
    }
}

/// Reads until `declared` bytes are collected or the source runs dry.
fn read_declared(path: &Path, mut source: impl Read, declared: u64) -> LocatorResult<Vec<u8>> {
    let len = usize::try_from(declared).map_err(|_| {
        io::Error::new(
            io::ErrorKind::OutOfMemory,
            format!("{} is too large to buffer ({declared} bytes)", path.display()),
        )
    })?;
    let mut bytes = vec![0u8; len];
    let mut offset = 0;

    while offset < len {
        match source.read(&mut bytes[offset..]) {
            Ok(0) => break,
            Ok(n) => offset += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(LocatorError::Io(e)),
        }
    }

    if offset < len {
        return Err(LocatorError::ShortRead {
            path: path.to_path_buf(),
            expected: declared,
            actual: offset as u64,
        });
    }
    Ok(bytes)
}
