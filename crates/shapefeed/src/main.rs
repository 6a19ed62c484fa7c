mod config;

use std::process::ExitCode;

use anyhow::Result;
use shapefeed_engine::logging::init_logging;
use shapefeed_engine::{builtin_shapes, ByteSource, RecordDecoder, RenderTarget, ShapeRegistry};

use crate::config::AppConfig;

fn main() -> ExitCode {
    let config = AppConfig::from_args(std::env::args_os().skip(1));
    init_logging(config.logging.clone());

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Decodes one record, renders it once and reports whether it was valid.
fn run(config: &AppConfig) -> Result<bool> {
    let mut registry = ShapeRegistry::new();
    registry.register_all(builtin_shapes()).into_result()?;

    let (mut source, mut target) = endpoints(config)?;
    let mut decoder = RecordDecoder::with_config(&registry, config.decoder.clone());

    if let Err(e) = decoder.decode(&mut *source) {
        log::warn!("{}: {e}", config.input.display());
    }
    decoder.render(&mut *target);

    Ok(decoder.is_valid())
}

#[cfg(not(feature = "scripted"))]
fn endpoints(config: &AppConfig) -> Result<(Box<dyn ByteSource>, Box<dyn RenderTarget>)> {
    use shapefeed_engine::{FileSource, NullTarget};

    let source = FileSource::open(&config.input)?;
    Ok((Box::new(source), Box::new(NullTarget)))
}

#[cfg(feature = "scripted")]
fn endpoints(config: &AppConfig) -> Result<(Box<dyn ByteSource>, Box<dyn RenderTarget>)> {
    use shapefeed_engine::{ConsoleTarget, ScriptedSource};

    log::info!("scripted mode: ignoring {}", config.input.display());
    let source = ScriptedSource::new().with_byte_order(config.decoder.byte_order);
    Ok((Box::new(source), Box::new(ConsoleTarget::stdout())))
}
