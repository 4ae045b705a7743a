//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with the report on stdout.
//! `THEMECHECK_LOG` takes an `EnvFilter` directive and wins over `-v`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "THEMECHECK_LOG";

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("themecheck={level}")
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "themecheck=warn");
        assert_eq!(default_directive(2), "themecheck=debug");
        assert_eq!(default_directive(9), "themecheck=trace");
    }
}
