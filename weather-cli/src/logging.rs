use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["weather", "weather_core"];

/// Initialize tracing on stderr; stdout is reserved for the weather report.
///
/// Defaults to `warn` for our own crates. `RUST_LOG` overrides it, e.g.
/// `RUST_LOG=weather_core=debug weather Paris`.
pub fn init() {
    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}=warn"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
