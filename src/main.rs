//! Wiring & DI. Entry point: bootstrap adapters, inject into services, start the scheduler.
//! No business logic here; the pipeline lives in CheckService.

use clap::Parser;
use dotenv::dotenv;
use maint_notify::adapters::browser::ChromiumSheetGateway;
use maint_notify::adapters::clock::SystemClock;
use maint_notify::adapters::mail::SmtpNotifier;
use maint_notify::adapters::persistence::FileRunLog;
use maint_notify::adapters::scheduling::DailyScheduler;
use maint_notify::ports::{ClockPort, NotifierPort, PipelinePort, RunLogPort, SheetGateway};
use maint_notify::shared::config::AppConfig;
use maint_notify::usecases::{CheckService, MaintenanceChecker, SheetFetcher};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Daily truck maintenance reminder from a shared spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "maint-notify", version, about)]
struct Cli {
    /// Run one check immediately, in addition to the daily schedule.
    #[arg(long)]
    run_now: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load_or_default();
    debug!(
        email_configured = cfg.is_email_configured(),
        "SMTP credentials"
    );
    let date_order = cfg.date_order()?;

    // --- Adapters ---
    let run_log: Arc<dyn RunLogPort> = Arc::new(FileRunLog::new(cfg.log_path_or_default()));
    let sheet: Arc<dyn SheetGateway> = Arc::new(ChromiumSheetGateway::new(cfg.fetch_timeout()));
    let notifier: Arc<dyn NotifierPort> = Arc::new(SmtpNotifier::new(
        cfg.smtp_host_or_default(),
        cfg.smtp_port_or_default(),
        cfg.email_user.clone(),
        cfg.email_pass.clone(),
    ));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    // --- Pipeline ---
    let sheet_url = cfg.sheet_url_or_default();
    info!(
        url = %sheet_url,
        max_retries = cfg.max_retries_or_default(),
        timeout_secs = cfg.fetch_timeout().as_secs(),
        ?date_order,
        "pipeline configured"
    );
    let fetcher = SheetFetcher::new(sheet, Arc::clone(&run_log), cfg.max_retries_or_default());
    let checker = MaintenanceChecker::new(notifier, Arc::clone(&run_log), clock, date_order);
    let pipeline: Arc<dyn PipelinePort> = Arc::new(CheckService::new(
        fetcher,
        checker,
        Arc::clone(&run_log),
        sheet_url,
    ));

    // --- Scheduler ---
    let mut scheduler = DailyScheduler::new(
        &cfg.schedule_or_default(),
        &cfg.timezone_or_default(),
        Arc::clone(&pipeline),
        Arc::clone(&run_log),
    )
    .await?;
    scheduler.start().await?;
    run_log
        .record(&format!(
            "Scheduler is set up to run daily ({}).",
            scheduler.describe()
        ))
        .await;

    if cli.run_now {
        run_log.record("Manual execution triggered.").await;
        let pipeline = Arc::clone(&pipeline);
        tokio::spawn(async move {
            pipeline.run_once().await;
        });
    }

    tokio::signal::ctrl_c().await?;
    info!("interrupt received; shutting down");
    scheduler.shutdown().await?;
    Ok(())
}
