use std::env;

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    /// Structured JSON, one event per line, for log shippers.
    Json,
}

/// Result format on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub log_format: LogFormat,
    pub output: OutputFormat,
}

impl CliConfig {
    /// Read `QUID6_LOG_FORMAT` and `QUID6_OUTPUT`. Unset variables keep their defaults.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("QUID6_LOG_FORMAT") {
            config.log_format = match raw.trim().to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(eyre::eyre!(
                        "QUID6_LOG_FORMAT must be text or json, got {other:?}"
                    ));
                }
            };
        }

        if let Some(raw) = lookup("QUID6_OUTPUT") {
            config.output = match raw.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => {
                    return Err(eyre::eyre!("QUID6_OUTPUT must be text or json, got {other:?}"));
                }
            };
        }

        Ok(config)
    }
}
