use crate::app_system::AppConfig;

/// Configure tracing once at startup for the whole process.
///
/// `RUST_LOG` wins when set; otherwise `config.log_filter` applies.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=storefront_core::store=debug,info cargo run
/// ```
pub fn setup_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
