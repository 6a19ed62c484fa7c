//! Byte sources.
//!
//! The decoder never sees a file handle; it only pulls fixed-size element
//! runs through [`ByteSource`].

mod scripted;
mod stream;

pub use scripted::ScriptedSource;
pub use stream::{FileSource, StreamSource};

use std::io;

/// Supplies raw bytes on demand.
pub trait ByteSource {
    /// Fills `dst` with `count` elements of `element_size` bytes each.
    ///
    /// `dst.len()` is always `element_size * count`. Anything short of a
    /// complete fill is an error; callers must not trust the contents of
    /// `dst` after a failure.
    fn read(&mut self, dst: &mut [u8], element_size: usize, count: usize) -> io::Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read(&mut self, dst: &mut [u8], element_size: usize, count: usize) -> io::Result<()> {
        (**self).read(dst, element_size, count)
    }
}
