use crate::error::ConverterError;
use std::fs::File;
use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

/// A reader over either a local file or a document already held in memory
pub(crate) enum SourceReader {
    /// Local file reader
    Local(BufReader<File>),
    /// Uploaded document bytes
    Memory(Cursor<Vec<u8>>),
}

impl SourceReader {
    /// Opens a local file; the handle is closed when the reader is dropped
    pub(crate) fn open<P: AsRef<Path>>(path: P) -> Result<SourceReader, ConverterError> {
        let file = File::open(path)?;
        Ok(SourceReader::Local(BufReader::new(file)))
    }

    pub(crate) fn from_bytes(bytes: Vec<u8>) -> SourceReader {
        SourceReader::Memory(Cursor::new(bytes))
    }
}

impl Read for SourceReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            SourceReader::Local(reader) => reader.read(buf),
            SourceReader::Memory(reader) => reader.read(buf),
        }
    }
}

impl Seek for SourceReader {
    fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
        match self {
            SourceReader::Local(reader) => reader.seek(pos),
            SourceReader::Memory(reader) => reader.seek(pos),
        }
    }
}
