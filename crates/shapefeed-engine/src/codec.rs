//! Record wire layout.
//!
//! ```text
//! [kind: i32][param_0 .. param_{n-1}: f64]
//! ```
//!
//! There is no length prefix: `n` is known only once the kind has been
//! resolved through the registry.

use crate::kind::ShapeKind;

/// Width of the kind tag in bytes.
pub const KIND_WIDTH: usize = core::mem::size_of::<i32>();

/// Width of one parameter in bytes.
pub const PARAM_WIDTH: usize = core::mem::size_of::<f64>();

/// Byte order of numeric fields.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ByteOrder {
    /// Whatever the host uses. Files written on one platform are read back
    /// on the same platform.
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    #[inline]
    fn fix_u32(self, bits: u32) -> u32 {
        match self {
            ByteOrder::Native => bits,
            ByteOrder::Little => u32::from_le(bits),
            ByteOrder::Big => u32::from_be(bits),
        }
    }

    #[inline]
    fn fix_u64(self, bits: u64) -> u64 {
        match self {
            ByteOrder::Native => bits,
            ByteOrder::Little => u64::from_le(bits),
            ByteOrder::Big => u64::from_be(bits),
        }
    }
}

/// Decodes a kind tag from exactly [`KIND_WIDTH`] bytes.
#[inline]
pub fn decode_kind(bytes: &[u8; KIND_WIDTH], order: ByteOrder) -> ShapeKind {
    let bits: u32 = bytemuck::pod_read_unaligned(bytes);
    ShapeKind::new(order.fix_u32(bits) as i32)
}

/// Decodes a parameter block. `bytes.len()` must be a multiple of [`PARAM_WIDTH`].
pub fn decode_params(bytes: &[u8], order: ByteOrder) -> Vec<f64> {
    debug_assert_eq!(bytes.len() % PARAM_WIDTH, 0, "partial parameter in block");
    bytes
        .chunks_exact(PARAM_WIDTH)
        .map(|chunk| {
            let bits: u64 = bytemuck::pod_read_unaligned(chunk);
            f64::from_bits(order.fix_u64(bits))
        })
        .collect()
}

/// Encodes a kind tag.
#[inline]
pub fn encode_kind(kind: ShapeKind, order: ByteOrder) -> [u8; KIND_WIDTH] {
    // fix_* is its own inverse, so it converts in both directions.
    let bits = order.fix_u32(kind.tag() as u32);
    bytemuck::cast(bits)
}

/// Encodes one parameter.
#[inline]
pub fn encode_param(value: f64, order: ByteOrder) -> [u8; PARAM_WIDTH] {
    let bits = order.fix_u64(value.to_bits());
    bytemuck::cast(bits)
}

/// Serializes one record in the same layout the decoder expects.
pub fn encode_record(kind: ShapeKind, params: &[f64], order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(KIND_WIDTH + params.len() * PARAM_WIDTH);
    out.extend_from_slice(&encode_kind(kind, order));
    for &p in params {
        out.extend_from_slice(&encode_param(p, order));
    }
    out
}
