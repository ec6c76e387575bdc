use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

/// Installs the global subscriber. The terminal is owned by the UI, so
/// output only goes to a file; without a configured path nothing is logged.
pub fn init_tracing(config: &LogConfig, verbose: bool) -> AppResult<bool> {
    let Some(path) = config.path.as_ref() else {
        return Ok(false);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to create log directory: {}", parent.display()),
            )
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log: {}", path.display()))
        })?;

    let filter = build_filter(&config.filter, verbose)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::config(format!("failed to install log subscriber: {err}")))?;
    Ok(true)
}

fn build_filter(directives: &str, verbose: bool) -> AppResult<EnvFilter> {
    if verbose {
        return Ok(EnvFilter::new("debug"));
    }
    if let Ok(from_env) = EnvFilter::try_from_env("FOLIO_LOG") {
        return Ok(from_env);
    }
    EnvFilter::try_new(directives)
        .map_err(|err| AppError::config(format!("invalid log filter {directives:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{build_filter, init_tracing};
    use crate::config::LogConfig;

    #[test]
    fn init_without_path_is_a_noop() {
        let installed = init_tracing(&LogConfig::default(), false).expect("no-op init");
        assert!(!installed);
    }

    #[test]
    fn verbose_overrides_configured_filter() {
        let filter = build_filter("warn", true).expect("verbose filter");
        assert_eq!(filter.to_string(), "debug");
    }
}
