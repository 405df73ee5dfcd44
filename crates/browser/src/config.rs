//! Runtime settings: defaults, then environment, then CLI flags.

use std::path::PathBuf;

use storefront_observability::LogFormat;

use crate::cli::CliArgs;

pub const DATASET_ENV: &str = "STOREFRONT_DATASET";
pub const LOG_FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dataset_path: PathBuf,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("products.json"),
            log_format: LogFormat::Text,
        }
    }
}

impl Settings {
    /// Settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings from an arbitrary key lookup (the environment in production).
    ///
    /// An unparsable log format keeps the default; logging is not up yet, so
    /// the problem is reported on stderr.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(path) = lookup(DATASET_ENV).filter(|v| !v.trim().is_empty()) {
            settings.dataset_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(LOG_FORMAT_ENV) {
            match raw.parse() {
                Ok(format) => settings.log_format = format,
                Err(e) => eprintln!("{LOG_FORMAT_ENV}: {e}; using {:?}", settings.log_format),
            }
        }

        settings
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        if let Some(path) = &args.dataset {
            self.dataset_path = path.clone();
        }
        if let Some(format) = args.log_format {
            self.log_format = format;
        }
        self
    }
}
