use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub static DEFAULT_LOG_FILTER: &str = "info,hid_barcode=debug";

/// Initializes the global logging facility.
///
/// If `RUST_LOG` is not set, the global default logging level is `info`, and
/// `hid_barcode` itself logs at `debug`.
///
/// Log messages are written to standard error, keeping standard output free
/// for scanner output lines.
///
/// # Panics
///
/// Panics if the initialization was unsuccessful, likely because a global
/// subscriber was already installed.
pub fn initialize_logging(json_output: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json_output {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
