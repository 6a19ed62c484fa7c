use std::io;

use crate::codec::{self, ByteOrder, KIND_WIDTH, PARAM_WIDTH};
use crate::kind::ShapeKind;

use super::ByteSource;

/// Scripted source used when no real record file is wanted.
///
/// A single tag-sized read yields a fixed kind tag; any run of `f64`
/// elements is filled with a fixed repeated parameter value. The source never
/// runs dry, so it can serve any number of records. Each read is logged.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kind: ShapeKind,
    value: f64,
    order: ByteOrder,
    reads: usize,
}

impl ScriptedSource {
    pub const DEFAULT_VALUE: f64 = 2.1;

    pub fn new() -> Self {
        Self {
            kind: ShapeKind::CIRCLE,
            value: Self::DEFAULT_VALUE,
            order: ByteOrder::Native,
            reads: 0,
        }
    }

    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    /// Number of reads served so far.
    #[inline]
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for ScriptedSource {
    fn read(&mut self, dst: &mut [u8], element_size: usize, count: usize) -> io::Result<()> {
        self.reads += 1;

        // A single tag-sized element is a kind read, whenever it comes.
        if element_size == KIND_WIDTH && count == 1 {
            dst.copy_from_slice(&codec::encode_kind(self.kind, self.order));
            log::info!("ScriptedSource::read(): kind: {}", self.kind);
            return Ok(());
        }

        if element_size != PARAM_WIDTH {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("scripted source cannot serve {element_size}-byte elements"),
            ));
        }
        let encoded = codec::encode_param(self.value, self.order);
        for chunk in dst.chunks_exact_mut(PARAM_WIDTH) {
            chunk.copy_from_slice(&encoded);
        }
        let values = vec![self.value.to_string(); count].join(" ");
        log::info!("ScriptedSource::read(): params: {{ {values} }}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_read_is_circle_kind() {
        let mut src = ScriptedSource::new();
        let mut tag = [0u8; KIND_WIDTH];
        src.read(&mut tag, KIND_WIDTH, 1).unwrap();
        assert_eq!(codec::decode_kind(&tag, ByteOrder::Native), ShapeKind::CIRCLE);
    }

    #[test]
    fn later_reads_repeat_the_value() {
        let mut src = ScriptedSource::new();
        src.read(&mut [0u8; KIND_WIDTH], KIND_WIDTH, 1).unwrap();

        let mut params = [0u8; PARAM_WIDTH * 3];
        src.read(&mut params, PARAM_WIDTH, 3).unwrap();
        assert_eq!(codec::decode_params(&params, ByteOrder::Native), vec![2.1, 2.1, 2.1]);
        assert_eq!(src.reads(), 2);
    }

    #[test]
    fn kind_is_served_on_every_tag_read() {
        let mut src = ScriptedSource::new().with_kind(ShapeKind::SQUARE);
        for _ in 0..2 {
            let mut tag = [0u8; KIND_WIDTH];
            src.read(&mut tag, KIND_WIDTH, 1).unwrap();
            assert_eq!(codec::decode_kind(&tag, ByteOrder::Native), ShapeKind::SQUARE);
            src.read(&mut [0u8; PARAM_WIDTH * 8], PARAM_WIDTH, 8).unwrap();
        }
        assert_eq!(src.reads(), 4);
    }

    #[test]
    fn odd_element_size_is_rejected() {
        let mut src = ScriptedSource::new();
        let mut buf = [0u8; 6];
        let err = src.read(&mut buf, 2, 3).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
