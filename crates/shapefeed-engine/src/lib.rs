//! Shapefeed engine crate.
//!
//! Decodes fixed-layout binary shape records and renders them through an
//! abstract surface.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`kind`] | `ShapeKind` tag |
//! | [`codec`] | record wire layout, `ByteOrder` |
//! | [`source`] | `ByteSource`, file / stream / scripted sources |
//! | [`surface`] | `RenderTarget`, null and console targets |
//! | [`scene`] | `DrawList` recording target |
//! | [`shapes`] | `Shape` trait and built-in variants |
//! | [`registry`] | `ShapeRegistry` kind → constructor map |
//! | [`decoder`] | `RecordDecoder` |
//! | [`error`] | `DecodeError`, `RegistryError`, `ErrorCode` |
//!
//! # Quick start
//!
//! ```rust
//! use shapefeed_engine::codec::{encode_record, ByteOrder};
//! use shapefeed_engine::{DrawList, RecordDecoder, ShapeKind, ShapeRegistry, StreamSource};
//!
//! let registry = ShapeRegistry::with_builtin();
//! let mut decoder = RecordDecoder::new(&registry);
//!
//! let bytes = encode_record(ShapeKind::CIRCLE, &[1.0, 2.0, 3.0], ByteOrder::Native);
//! decoder.decode(&mut StreamSource::new(&bytes[..])).unwrap();
//!
//! let mut list = DrawList::new();
//! decoder.render(&mut list);
//! assert_eq!(list.len(), 1);
//! ```

pub mod codec;
pub mod decoder;
pub mod error;
pub mod kind;
pub mod logging;
pub mod registry;
pub mod scene;
pub mod shapes;
pub mod source;
pub mod surface;

pub use decoder::{DecodedRecord, DecoderConfig, FailurePolicy, RecordDecoder};
pub use error::{DecodeError, ErrorCode, RegistryError};
pub use kind::ShapeKind;
pub use registry::{builtin_shapes, RegisterReport, ShapeCtor, ShapeRegistry};
pub use scene::DrawList;
pub use shapes::Shape;
pub use source::{ByteSource, FileSource, ScriptedSource, StreamSource};
pub use surface::{ConsoleTarget, NullTarget, RenderTarget};
