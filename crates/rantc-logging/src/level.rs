//! Runtime control of the stderr log level

use crate::error::{LoggingError, LoggingResult};
use once_cell::sync::OnceCell;
use rantc_core::LogLevel;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

type FilterHandle = reload::Handle<LevelFilter, Registry>;

/// Changes the level of the filter installed by [`init_logging`](crate::init_logging)
///
/// Settings are read after the subscriber is up, so the CLI starts at `info`
/// and narrows or widens the level once the configuration is known.
pub struct LevelControl {
    filter: OnceCell<FilterHandle>,
}

impl LevelControl {
    pub const fn new() -> Self {
        Self {
            filter: OnceCell::new(),
        }
    }

    /// The control bound to the global subscriber
    pub fn global() -> &'static LevelControl {
        static GLOBAL: LevelControl = LevelControl::new();
        &GLOBAL
    }

    /// Bind the filter handle. Only the first call succeeds.
    pub fn install(&self, handle: FilterHandle) -> LoggingResult<()> {
        self.filter
            .set(handle)
            .map_err(|_| LoggingError::AlreadyInstalled)
    }

    /// Swap the active level filter.
    pub fn set_level(&self, level: LogLevel) -> LoggingResult<()> {
        let handle = self.filter.get().ok_or(LoggingError::NotInitialized)?;
        handle.reload(level_filter(level))?;
        Ok(())
    }
}

impl Default for LevelControl {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
