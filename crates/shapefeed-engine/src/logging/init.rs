use env_logger::{Builder, Env, WriteStyle};
use log::LevelFilter;

/// How a shapefeed process sets up its logger.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives such as `"shapefeed_engine=debug"`. Takes precedence
    /// over `RUST_LOG` when set.
    pub filter: Option<String>,
    /// Level applied when neither `filter` nor `RUST_LOG` says anything.
    pub fallback_level: LevelFilter,
    /// Color override. `None` leaves the choice to `RUST_LOG_STYLE`.
    pub write_style: Option<WriteStyle>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            fallback_level: LevelFilter::Info,
            write_style: None,
        }
    }
}

impl LoggingConfig {
    fn builder(&self) -> Builder {
        let env = Env::default().default_filter_or(self.fallback_level.to_string());
        let mut builder = Builder::from_env(env);

        if let Some(filter) = &self.filter {
            builder.parse_filters(filter);
        }
        if let Some(style) = self.write_style {
            builder.write_style(style);
        }
        // Runs are one-shot; wall-clock stamps add nothing to the trace.
        builder.format_timestamp(None);
        builder
    }
}

/// Installs the global logger.
///
/// Returns `false` when a logger was already in place (an earlier call, or a
/// test harness); the existing one is left alone.
pub fn init_logging(config: LoggingConfig) -> bool {
    let installed = config.builder().try_init().is_ok();
    if installed {
        log::debug!("logger installed (fallback level {})", config.fallback_level);
    }
    installed
}
