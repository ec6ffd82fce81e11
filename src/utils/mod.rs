use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() -> bool {
    init_tracing_with(DEFAULT_DIRECTIVE)
}

/// Initializes tracing with `directive` layered over `RUST_LOG`.
///
/// Only the first call installs a subscriber. Returns `false` when an earlier
/// call already did, in which case `directive` is logged as ignored.
pub fn init_tracing_with(directive: &str) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        installed = true;
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        for part in directive.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(err) => eprintln!("ignoring log directive `{part}`: {err}"),
            }
        }

        let _ = fmt().with_env_filter(filter).try_init();
    });
    if !installed {
        tracing::warn!(directive, "tracing already initialized; log filter ignored");
    }
    installed
}
