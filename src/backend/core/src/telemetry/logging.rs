//! Structured logging with JSON/pretty formats and email redaction.
//!
//! Talentgate logs every access decision at `debug` with the principal's id
//! and email. Emails are personal data, so the field goes through
//! [`mask_email`] first.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static EMAIL_PATTERN: OnceLock<Option<regex::Regex>> = OnceLock::new();
static REDACT_EMAILS: OnceLock<bool> = OnceLock::new();

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty or compact)
    #[serde(default)]
    pub format: LogFormat,

    /// Per-module log levels
    #[serde(default)]
    pub module_levels: HashMap<String, String>,

    /// Whether to include file/line information
    #[serde(default = "default_include_location")]
    pub include_location: bool,

    /// Whether to include target (module path)
    #[serde(default = "default_include_target")]
    pub include_target: bool,

    /// Mask principal emails in log fields
    #[serde(default = "default_redact_emails")]
    pub redact_emails: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            module_levels: HashMap::new(),
            include_location: default_include_location(),
            include_target: default_include_target(),
            redact_emails: default_redact_emails(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format for production/structured logging
    #[default]
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

// Default value functions
fn default_log_level() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}

fn default_include_location() -> bool {
    true
}

fn default_include_target() -> bool {
    true
}

fn default_redact_emails() -> bool {
    true
}

fn email_pattern() -> Option<&'static regex::Regex> {
    EMAIL_PATTERN
        .get_or_init(|| {
            regex::Regex::new(r"(?P<first>[A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*@(?P<domain>[A-Za-z0-9.-]+)")
                .ok()
        })
        .as_ref()
}

/// Mask the local part of every email address in `value`, keeping the first
/// character and the domain: `jane.doe@acme.io` becomes `j***@acme.io`.
///
/// Returns `value` unchanged when redaction was disabled by [`init_logging`].
/// The setting is fixed on first use, so call `init_logging` before logging.
pub fn mask_email(value: &str) -> String {
    if !*REDACT_EMAILS.get_or_init(default_redact_emails) {
        return value.to_string();
    }
    match email_pattern() {
        Some(pattern) => pattern.replace_all(value, "$first***@$domain").into_owned(),
        None => value.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// Fails if a subscriber is already installed, a level directive does not
/// parse, or [`mask_email`] already ran with a different redaction setting.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    if let Err(requested) = REDACT_EMAILS.set(config.redact_emails) {
        if REDACT_EMAILS.get() != Some(&requested) {
            anyhow::bail!(
                "email redaction already fixed to {} before logging was initialized",
                !requested
            );
        }
    }

    let mut filter = EnvFilter::try_new(&config.level)?;
    for (module, level) in &config.module_levels {
        let directive = format!("{}={}", module, level);
        filter = filter.add_directive(directive.parse()?);
    }

    match config.format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(config.include_target);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(config.include_target);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(config.include_target);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
