use std::fmt;
use std::io;

use crate::kind::ShapeKind;

/// Reason code shared by every failure the engine reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorCode {
    /// The source ran out before the expected byte count was available.
    ShortRead,
    /// The tag is not present in the registry.
    UnknownKind,
    /// The kind was already registered.
    DuplicateRegistration,
}

/// Which part of a record a short read happened in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Section {
    Kind,
    Params,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Kind => f.write_str("kind tag"),
            Section::Params => f.write_str("parameters"),
        }
    }
}

/// A failed [`RecordDecoder::decode`](crate::decoder::RecordDecoder::decode).
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    ShortRead {
        section: Section,
        /// Byte offset (from the start of the record) where the read began.
        offset: usize,
        /// Bytes the read needed.
        wanted: usize,
        /// What the source reported. `UnexpectedEof` for a plain truncation.
        cause: io::ErrorKind,
    },
    UnknownKind {
        kind: ShapeKind,
        /// Byte offset of the tag.
        offset: usize,
    },
}

impl DecodeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::ShortRead { .. } => ErrorCode::ShortRead,
            DecodeError::UnknownKind { .. } => ErrorCode::UnknownKind,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::ShortRead { section, offset, wanted, cause } => {
                write!(f, "short read in {section} at byte {offset}: needed {wanted} bytes")?;
                if *cause != io::ErrorKind::UnexpectedEof {
                    write!(f, " ({cause})")?;
                }
                Ok(())
            }
            DecodeError::UnknownKind { kind, offset } => {
                write!(f, "unknown shape kind {} at byte {offset}", kind.tag())
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// A rejected registry operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateRegistration(ShapeKind),
}

impl RegistryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::DuplicateRegistration(_) => ErrorCode::DuplicateRegistration,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateRegistration(kind) => {
                write!(f, "shape kind {kind} is already registered")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        let short = DecodeError::ShortRead {
            section: Section::Kind,
            offset: 0,
            wanted: 4,
            cause: io::ErrorKind::UnexpectedEof,
        };
        let unknown = DecodeError::UnknownKind { kind: ShapeKind::new(99), offset: 0 };
        let dup = RegistryError::DuplicateRegistration(ShapeKind::CIRCLE);
        assert_eq!(short.code(), ErrorCode::ShortRead);
        assert_eq!(unknown.code(), ErrorCode::UnknownKind);
        assert_eq!(dup.code(), ErrorCode::DuplicateRegistration);
    }

    #[test]
    fn messages_carry_offsets() {
        let e = DecodeError::ShortRead {
            section: Section::Params,
            offset: 4,
            wanted: 24,
            cause: io::ErrorKind::UnexpectedEof,
        };
        assert_eq!(e.to_string(), "short read in parameters at byte 4: needed 24 bytes");
        let e = DecodeError::UnknownKind { kind: ShapeKind::new(99), offset: 0 };
        assert_eq!(e.to_string(), "unknown shape kind 99 at byte 0");
    }

    #[test]
    fn message_names_a_non_eof_cause() {
        let e = DecodeError::ShortRead {
            section: Section::Kind,
            offset: 0,
            wanted: 4,
            cause: io::ErrorKind::PermissionDenied,
        };
        assert_eq!(e.to_string(), "short read in kind tag at byte 0: needed 4 bytes (permission denied)");
    }
}
