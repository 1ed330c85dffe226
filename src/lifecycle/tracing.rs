/// Initializes structured logging for a binary.
///
/// Filtering is driven by the `RUST_LOG` environment variable:
/// - `RUST_LOG=info` - lifecycle events and effective cart mutations
/// - `RUST_LOG=debug` - per-request traffic on top
/// - `RUST_LOG=storefront=debug` - debug only for this crate
///
/// Call once, from `main`, never from the library.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
