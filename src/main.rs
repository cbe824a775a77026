use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dotenvy::dotenv;
use fileit::config::UploadConfig;
use fileit::infrastructure::storage;
use fileit::services::uploader::Uploader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Upload images to an S3 bucket and print a markdown link for each.
#[derive(Parser, Debug)]
#[command(name = "fileit", version)]
struct Cli {
    /// Image files to upload (.png or .jpg)
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing with EnvFilter. Log lines go to stderr so stdout
    // stays reserved for the markdown links.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fileit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    if cli.files.is_empty() {
        eprintln!("Need files to upload as params.");
        process::exit(1);
    }

    let config = UploadConfig::from_env();
    let store = storage::setup_storage(&config).await;
    let uploader = Uploader::new(store, config);

    let summary = uploader
        .run(&cli.files, &mut io::stdout().lock(), &mut io::stderr().lock())
        .await?;

    info!(
        "Done: {} uploaded, {} skipped, {} failed",
        summary.uploaded, summary.skipped, summary.failed
    );
    Ok(())
}
