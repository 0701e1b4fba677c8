//! Tracing subscriber setup.
//!
//! Events go to stderr so they never mix with command output. The filter
//! comes from `NOTEPAD_LOG` (EnvFilter syntax); without it the level is
//! `warn`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

use crate::constants::env_vars;

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(env_vars::LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "warn");
        assert_eq!(default_directives(true), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
    }
}
