use clap::Parser;
use std::error::Error;
use subnet_query::{init_logging, run, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_config)?;

    log::info!(
        "#Start {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let server = run(&config).await?;
    log::info!("Listening on http://{}/", server.addr());

    let shutdown = server.shutdown_signal();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Received Ctrl-C");
            shutdown.notify_one();
        }
    });

    server.wait().await
}
