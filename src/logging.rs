//! Tracing subscriber setup for the CLI.
//!
//! Log lines go to stderr so they never mix with results on stdout.

use tracing_subscriber::EnvFilter;

/// Filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter: an explicit directive wins over the `-v` count.
///
/// An unparsable directive falls back to the verbosity default.
pub fn build_filter(verbosity: u8, directive: Option<&str>) -> EnvFilter {
    let fallback = default_directive(verbosity);
    match directive {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(fallback)),
        None => EnvFilter::new(fallback),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8, directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity, directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "debug");
        assert_eq!(default_directive(2), "trace");
        assert_eq!(default_directive(9), "trace");
    }

    #[test]
    fn explicit_directive_wins() {
        let filter = build_filter(0, Some("thinknum=trace"));
        assert_eq!(filter.to_string(), "thinknum=trace");
    }

    #[test]
    fn invalid_directive_falls_back() {
        let filter = build_filter(1, Some("thinknum=loudest"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0, None);
        init(2, Some("trace"));
    }
}
