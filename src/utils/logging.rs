/// Console logging for the serve binary. Verbosity comes from `RUST_LOG`
/// through the standard env filter.
pub fn setup_console_log() {
    use std::io;
    use tracing_subscriber::{prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(io::stdout),
        )
        .with(EnvFilter::from_default_env())
        .init();
}
