//! Tracing setup shared by the CLI and the MCP server
//!
//! Logs always go to stderr: stdout carries command output or the MCP
//! protocol. Set `LOG_FORMAT=json` for JSON lines; `RUST_LOG` directives are
//! honoured on top of the default level.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map a `-v` count to a level, starting from `warn`
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn json_requested() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Install the global subscriber.
///
/// `crate_names` get `level`; everything else stays at the `RUST_LOG`
/// default. Fails if a subscriber is already installed.
pub fn init_tracing(crate_names: &[&str], level: LevelFilter) -> anyhow::Result<()> {
    let mut filter = EnvFilter::from_default_env();
    for name in crate_names {
        filter = filter.add_directive(format!("{}={}", name, level).parse()?);
    }

    let registry = tracing_subscriber::registry().with(filter);

    if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), LevelFilter::WARN);
        assert_eq!(verbosity_level(1), LevelFilter::INFO);
        assert_eq!(verbosity_level(2), LevelFilter::DEBUG);
        assert_eq!(verbosity_level(9), LevelFilter::TRACE);
    }
}
