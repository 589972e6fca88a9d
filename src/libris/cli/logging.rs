use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LIBRIS_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "libris=debug"
    } else {
        "warn"
    }
}

/// Installs the stderr subscriber. `$LIBRIS_LOG` overrides the level picked by `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Logs go to stderr so listings on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_crate_debug() {
        assert_eq!(default_directive(true), "libris=debug");
        assert_eq!(default_directive(false), "warn");
    }
}
