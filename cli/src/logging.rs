use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so answers on stdout stay pipeable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Map a configured level name onto a filter directive
pub fn level_directive(level: Option<&str>, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }

    match level.map(str::to_lowercase).as_deref() {
        Some(level @ ("trace" | "debug" | "info" | "warn" | "error")) => level.to_string(),
        _ => "warn".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(level_directive(Some("error"), true), "debug");
    }

    #[test]
    fn test_known_levels_pass_through() {
        assert_eq!(level_directive(Some("TRACE"), false), "trace");
        assert_eq!(level_directive(Some("info"), false), "info");
    }

    #[test]
    fn test_unknown_level_falls_back() {
        assert_eq!(level_directive(Some("chatty"), false), "warn");
        assert_eq!(level_directive(None, false), "warn");
    }
}
