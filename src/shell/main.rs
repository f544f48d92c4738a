use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use idle_time_report::shared::infrastructure::report_sink::csv_directory::CsvDirectorySink;
use idle_time_report::shell::cli::{Cli, Command, execute};
use idle_time_report::shell::config::ReportConfig;
use idle_time_report::shell::http::router;
use idle_time_report::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let config = ReportConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { addr, out } => {
            let sink = Arc::new(CsvDirectorySink::new(out));
            let app = router(AppState::new(config, sink));
            tracing::info!("report endpoints: http://{}/idle-time/summary", addr);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("cannot bind {addr}"))?;
            axum::serve(listener, app).await?;
        }
        command => execute(command, &config).await?,
    }
    Ok(())
}
