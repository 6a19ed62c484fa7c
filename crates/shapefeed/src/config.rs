use std::ffi::OsString;
use std::path::PathBuf;

use shapefeed_engine::logging::LoggingConfig;
use shapefeed_engine::DecoderConfig;

/// Input file used when no path is given.
pub const DEFAULT_INPUT: &str = "features.dat";

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub decoder: DecoderConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            decoder: DecoderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from command-line arguments (program name
    /// already stripped). The only argument is the optional input path.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        if let Some(path) = args.into_iter().next() {
            config.input = PathBuf::from(path);
        }
        config
    }
}
