use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Builds the filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        return "role_forms=debug,info".to_string();
    }
    format!("role_forms={}", level.unwrap_or(DEFAULT_LEVEL))
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    // stdout carries the rendered form, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(false, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, None), "role_forms=info");
        assert_eq!(default_directive(false, Some("warn")), "role_forms=warn");
        assert_eq!(default_directive(true, Some("warn")), "role_forms=debug,info");
    }
}
