use tracing::info;
use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["datekit", "dk_core", "dk_time", "dk_holidays"];

/// Map a verbosity count to a level name.
///
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives enabling `verbosity` for every workspace crate.
pub fn default_filter(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install a global `fmt` subscriber for the workspace crates.
///
/// `RUST_LOG` overrides the verbosity if set. Returns `false` when a global
/// subscriber was already installed, so calling this more than once is
/// harmless.
pub fn init(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();
    if installed {
        info!(level = level_for(verbosity), "logging initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_covers_every_crate() {
        assert_eq!(
            default_filter(2),
            "datekit=debug,dk_core=debug,dk_time=debug,dk_holidays=debug"
        );
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(9), "trace");
    }
}
