use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use headshot_resolver::application::ImageLookupService;
use headshot_resolver::domain::CancellationSignal;
use headshot_resolver::infrastructure::{
    AppConfig, CliArgs, ReqwestHttpClient, StorageManager, SystemClock,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = match &args.config {
        Some(path) => StorageManager::with_dir(
            path.parent()
                .map(std::path::Path::to_path_buf)
                .unwrap_or_default(),
        ),
        None => StorageManager::new()?,
    };
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn spawn_ctrl_c_handler(cancel: CancellationSignal) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received, cancelling lookups");
            cancel.cancel();
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = headshot_resolver::VERSION, "Starting headshot resolver");

    let http = Arc::new(ReqwestHttpClient::new(config.provider.request_timeout())?);
    let service = ImageLookupService::new(config.provider.clone(), http, Arc::new(SystemClock));

    let cancel = CancellationSignal::new();
    spawn_ctrl_c_handler(cancel.clone());

    for name in &args.names {
        let images = service.lookup(name, &cancel).await;
        match images.first() {
            Some(image) => println!("{name}\t{}", image.url()),
            None => println!("{name}\t-"),
        }
    }

    debug!(stats = %service.cache().stats(), "Done");

    Ok(())
}
