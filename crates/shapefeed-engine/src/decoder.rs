use std::collections::HashMap;
use std::io;

use crate::codec::{self, ByteOrder, KIND_WIDTH, PARAM_WIDTH};
use crate::error::{DecodeError, Section};
use crate::kind::ShapeKind;
use crate::registry::ShapeRegistry;
use crate::shapes::Shape;
use crate::source::ByteSource;
use crate::surface::RenderTarget;

/// What a failed [`RecordDecoder::decode`] does to the held record.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FailurePolicy {
    /// Keep the previously held record (if any). `is_valid()` keeps
    /// reporting whatever it reported before the failed call.
    #[default]
    Retain,
    /// Drop to the empty state.
    Clear,
}

/// Decoder configuration.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    pub byte_order: ByteOrder,
    pub on_failure: FailurePolicy,
}

#[derive(Debug, Clone, PartialEq)]
struct Held {
    kind: ShapeKind,
    params: Vec<f64>,
}

/// Borrowed view of the held record.
#[derive(Debug, Clone, Copy)]
pub struct DecodedRecord<'a> {
    pub kind: ShapeKind,
    pub shape: &'a dyn Shape,
    pub params: &'a [f64],
}

/// Reads one record at a time and renders the most recent success.
///
/// States:
/// - empty: nothing decoded yet (or cleared)
/// - holding: a complete (shape, params) pair is available for rendering
///
/// Shape variants are cached per kind and reused for every later record of
/// the same kind; the registry is only asked for kinds not seen before.
pub struct RecordDecoder<'r> {
    registry: &'r ShapeRegistry,
    config: DecoderConfig,
    cache: HashMap<ShapeKind, Box<dyn Shape>>,
    current: Option<Held>,
    last_error: Option<DecodeError>,
}

impl<'r> RecordDecoder<'r> {
    pub fn new(registry: &'r ShapeRegistry) -> Self {
        Self::with_config(registry, DecoderConfig::default())
    }

    pub fn with_config(registry: &'r ShapeRegistry, config: DecoderConfig) -> Self {
        Self {
            registry,
            config,
            cache: HashMap::new(),
            current: None,
            last_error: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes one record from `source`.
    ///
    /// On success the new record replaces the held one. On failure nothing
    /// partially read is kept and the held record follows
    /// [`DecoderConfig::on_failure`]. The error is also kept for
    /// [`last_error`](Self::last_error).
    pub fn decode(&mut self, source: &mut dyn ByteSource) -> Result<(), DecodeError> {
        match self.read_record(source) {
            Ok(held) => {
                log::debug!("decoded {} record with {} params", held.kind, held.params.len());
                self.current = Some(held);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                log::debug!("decode failed: {e}");
                if self.config.on_failure == FailurePolicy::Clear {
                    self.current = None;
                }
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Draws the held record onto `surface`. Does nothing when empty.
    ///
    /// The held record is not consumed; rendering again repeats the same calls.
    pub fn render(&self, surface: &mut dyn RenderTarget) {
        if let Some(record) = self.record() {
            record.shape.draw(surface, record.params);
        }
    }

    /// True while a decoded record is held.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    pub fn record(&self) -> Option<DecodedRecord<'_>> {
        let held = self.current.as_ref()?;
        let shape = self.cache.get(&held.kind)?;
        Some(DecodedRecord { kind: held.kind, shape: shape.as_ref(), params: &held.params })
    }

    /// Error from the most recent `decode`, or `None` if it succeeded.
    #[inline]
    pub fn last_error(&self) -> Option<&DecodeError> {
        self.last_error.as_ref()
    }

    /// Kinds with a cached variant, in ascending tag order.
    pub fn cached_kinds(&self) -> Vec<ShapeKind> {
        let mut kinds: Vec<_> = self.cache.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Drops the held record and the last error. Cached variants stay.
    pub fn clear(&mut self) {
        self.current = None;
        self.last_error = None;
    }

    fn read_record(&mut self, source: &mut dyn ByteSource) -> Result<Held, DecodeError> {
        let order = self.config.byte_order;

        let mut tag = [0u8; KIND_WIDTH];
        source
            .read(&mut tag, KIND_WIDTH, 1)
            .map_err(|e| short_read(Section::Kind, 0, KIND_WIDTH, &e))?;
        let kind = codec::decode_kind(&tag, order);

        // A variant seen for the first time is only cached once the whole
        // record has been read.
        let (count, fresh) = match self.cache.get(&kind) {
            Some(shape) => (shape.param_count(), None),
            None => {
                log::debug!("no cached variant for {kind}; asking registry");
                let shape = self
                    .registry
                    .create(kind)
                    .ok_or(DecodeError::UnknownKind { kind, offset: 0 })?;
                (shape.param_count(), Some(shape))
            }
        };

        // No source can hold more than usize::MAX bytes.
        let wanted = count.checked_mul(PARAM_WIDTH).ok_or(DecodeError::ShortRead {
            section: Section::Params,
            offset: KIND_WIDTH,
            wanted: usize::MAX,
            cause: io::ErrorKind::InvalidInput,
        })?;
        let mut buf = vec![0u8; wanted];
        source
            .read(&mut buf, PARAM_WIDTH, count)
            .map_err(|e| short_read(Section::Params, KIND_WIDTH, wanted, &e))?;
        let params = codec::decode_params(&buf, order);

        if let Some(shape) = fresh {
            self.cache.insert(kind, shape);
        }
        Ok(Held { kind, params })
    }
}

fn short_read(section: Section, offset: usize, wanted: usize, err: &io::Error) -> DecodeError {
    log::debug!("reading {section} at byte {offset} failed: {err}");
    DecodeError::ShortRead { section, offset, wanted, cause: err.kind() }
}

impl std::fmt::Debug for RecordDecoder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordDecoder")
            .field("config", &self.config)
            .field("cached", &self.cached_kinds())
            .field("current", &self.current)
            .field("last_error", &self.last_error)
            .finish()
    }
}
