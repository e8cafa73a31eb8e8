//! Logging initialization for the CLI.
//!
//! Log lines go to stderr so reports on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output
    Development,
    /// JSON structured output
    Production,
}

pub fn init(profile: Profile, verbose: bool) {
    let default_filter = if verbose {
        "notediff=debug,notediff_core=debug"
    } else {
        "notediff=info,notediff_core=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A second init (e.g. from tests) leaves the first subscriber in place.
    let _ = match profile {
        Profile::Development => builder.try_init(),
        Profile::Production => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(Profile::Development, false);
        init(Profile::Production, true);
    }
}
