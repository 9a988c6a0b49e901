use clap::Parser;

use trivia_api::config::{Args, Config};
use trivia_api::telemetry::init_telemetry;
use trivia_api::Application;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(&args)?;

    if args.validate {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    init_telemetry();
    tracing::info!("starting trivia-api on {}", config.bind_address());

    let app = Application::new(config).await?;
    app.serve(shutdown_signal()).await
}
