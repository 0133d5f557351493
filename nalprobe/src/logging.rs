//! Log setup for `nalprobe`.
//!
//! Output goes to stderr so stdout stays clean for the listing. The level comes from
//! `NALPROBE_LOG` when set, otherwise from the number of `-v` flags. Records emitted through
//! `log` by the scanning crates are forwarded as well.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "NALPROBE_LOG";

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
