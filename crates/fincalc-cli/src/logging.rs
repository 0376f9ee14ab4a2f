use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber. Quiet unless `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("fincalc=debug,fincalc_core=debug,warn")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
