use clap::arg;
use clap::command;
use clap::Parser;
use anyhow::Result;
use token_status::display::Page;
use token_status::poller::StatusPoller;
use token_status::server;
use token_status::utils::config_loader;
use token_status::utils::logging;
use token_status::utils::logging::LogLevel;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "token-status.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL" , value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // -------------------------------
    // 1. Load YAML config, start logging
    // -------------------------------

    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level)?;
    let settings = &service_config.settings;

    // -------------------------------
    // 2. Page header and poller
    // -------------------------------

    let page = Page::new(&settings.page.header_selector).shared();
    let poller = StatusPoller::from_settings(settings, page.clone())?;
    info!("polling {} every {} ms", settings.poller.status_url(), settings.poller.interval_ms);
    let handle = poller.start().await;

    // -------------------------------
    // 3. Serve rendered header and metrics until Ctrl-C
    // -------------------------------

    let http_server = server::server::start(settings, page);
    info!("Service starting...");
    tokio::select! {
        res = http_server => {
            if let Err(err) = &res {
                error!("http server stopped: {:#}", err);
            }
            handle.stop().await?;
            res
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown requested");
            handle.stop().await
        }
    }
}
