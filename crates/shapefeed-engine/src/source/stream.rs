use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use super::ByteSource;

/// [`ByteSource`] over any [`Read`] implementation.
#[derive(Debug)]
pub struct StreamSource<R> {
    inner: R,
}

impl<R: Read> StreamSource<R> {
    #[inline]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn read(&mut self, dst: &mut [u8], element_size: usize, count: usize) -> io::Result<()> {
        debug_assert_eq!(dst.len(), element_size * count, "buffer does not match element run");
        self.inner.read_exact(dst)
    }
}

/// Binary record file opened for reading.
///
/// The handle is closed when this value is dropped.
pub type FileSource = StreamSource<BufReader<File>>;

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open record file {}", path.display()))?;
        log::debug!("opened record file {}", path.display());
        Ok(StreamSource::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_read_fills_buffer() {
        let mut src = StreamSource::new(&[1u8, 2, 3, 4, 5][..]);
        let mut buf = [0u8; 4];
        src.read(&mut buf, 4, 1).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn short_read_is_an_error() {
        let mut src = StreamSource::new(&[1u8, 2][..]);
        let mut buf = [0u8; 4];
        let err = src.read(&mut buf, 4, 1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn open_missing_file_fails() {
        let path = std::env::temp_dir().join("shapefeed-missing-file.dat");
        let _ = std::fs::remove_file(&path);
        assert!(FileSource::open(&path).is_err());
    }

    #[test]
    fn file_source_reads_file_contents() {
        let path = std::env::temp_dir()
            .join(format!("shapefeed-stream-{}.dat", std::process::id()));
        std::fs::write(&path, [9u8, 8, 7, 6, 5, 4, 3, 2]).unwrap();

        let mut src = FileSource::open(&path).unwrap();
        let mut buf = [0u8; 8];
        src.read(&mut buf, 4, 2).unwrap();
        assert_eq!(buf, [9, 8, 7, 6, 5, 4, 3, 2]);
        assert!(src.read(&mut [0u8; 1], 1, 1).is_err());

        drop(src);
        std::fs::remove_file(&path).unwrap();
    }
}
