use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output shape chosen by the host: compact lines for a terminal, JSON for log collectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// CloudWatch stamps each line itself, so Lambda turns `timestamps` off.
    Json { timestamps: bool },
}

impl LogFormat {
    pub fn for_cli(json: bool) -> Self {
        if json {
            LogFormat::Json { timestamps: true }
        } else {
            LogFormat::Compact
        }
    }

    pub fn for_lambda() -> Self {
        LogFormat::Json { timestamps: false }
    }
}

/// Used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "restock_watch=debug,info"
    } else {
        "restock_watch=info"
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json { timestamps: true } => registry.with(layer.json()).init(),
        LogFormat::Json { timestamps: false } => registry.with(layer.without_time().json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_formats() {
        assert_eq!(LogFormat::for_cli(false), LogFormat::Compact);
        assert_eq!(LogFormat::for_cli(true), LogFormat::Json { timestamps: true });
        assert_eq!(LogFormat::for_lambda(), LogFormat::Json { timestamps: false });
    }

    #[test]
    fn test_default_directive_follows_verbosity() {
        assert_eq!(default_directive(false), "restock_watch=info");
        assert_eq!(default_directive(true), "restock_watch=debug,info");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
