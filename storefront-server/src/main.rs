use storefront_server::{Config, Server, init_logger, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env, then configuration
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return Err(e.into());
        }
    };

    // 2. Logging (guard flushes the file writer on exit)
    let _log_guard = init_logger(&config.log_level, config.log_dir.as_deref());

    print_banner();
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Storefront server starting..."
    );

    // 3. Serve until Ctrl-C / SIGTERM
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
