use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_tree::HierarchicalLayer;
use tracing_tree::time::Uptime;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber for binaries. `RUST_LOG` overrides the
/// default filter. Calling this twice is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let tree = HierarchicalLayer::new(2)
        .with_writer(std::io::stderr)
        .with_targets(true)
        .with_bracketed_fields(true)
        .with_timer(Uptime::default());

    if tracing_subscriber::registry().with(filter).with(tree).try_init().is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
