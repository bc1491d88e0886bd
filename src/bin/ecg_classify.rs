//! ecg-classify — 心电图分类命令行工具
//!
//! Usage:
//!   ecg-classify classify <image> [--details] [--json]   Classify one ECG image
//!   ecg-classify batch <image>... [--json]               Classify several images in one request
//!   ecg-classify health                                  Show backend status
//!   ecg-classify classes [--json]                        List class codes known to the backend

use anyhow::Context;
use clap::{Parser, Subcommand};
use ecg_classify::{
    display, ClassificationGateway, Error, GatewayBuilder, GatewayConfig, SubmissionSession,
    UploadCandidate,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ecg-classify", version, about = "Classify ECG images against the arrhythmia classification API")]
struct Cli {
    /// Base URL of the classification API
    #[arg(long, env = "ECG_API_URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// YAML config file with base_url / request_timeout_secs / proxy_url
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single ECG image
    Classify {
        image: PathBuf,
        /// Include class explanation and probability distribution
        #[arg(long)]
        details: bool,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify several ECG images in one request
    Batch {
        #[arg(required = true)]
        images: Vec<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Check whether the API is online
    Health,
    /// List the classes the model knows about
    Classes {
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ecg_classify=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Request, validation and session errors carry a message meant for the user.
/// Configuration and I/O failures keep their context chain (`loading <path>`).
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(Error::Configuration { .. } | Error::Io(_)) | None => format!("Error: {:#}", err),
        Some(e) => e.user_message(),
    }
}

fn build_gateway(cli: &Cli) -> anyhow::Result<ClassificationGateway> {
    let config = match &cli.config {
        Some(path) => GatewayConfig::from_yaml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GatewayConfig::from_env()?,
    };
    let mut builder = GatewayBuilder::new().config(config);
    if let Some(url) = &cli.api_url {
        builder = builder.base_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let gateway = build_gateway(&cli)?;

    match cli.command {
        Command::Classify {
            image,
            details,
            json,
        } => {
            let candidate = UploadCandidate::from_path(&image).await?;
            let session = SubmissionSession::new();
            session.select(candidate).map_err(Error::from)?;
            if let Some(selected) = session.selected() {
                eprintln!(
                    "Uploading {} ({})",
                    selected.file_name().unwrap_or("image"),
                    display::format_size_kb(selected.size_bytes())
                );
            }
            let result = session.submit(&gateway).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if details {
                print!("{}", display::render_details(&result));
            } else {
                print!("{}", display::render_result(&result));
            }
        }
        Command::Batch { images, json } => {
            let mut candidates = Vec::with_capacity(images.len());
            for path in &images {
                let candidate = UploadCandidate::from_path(path).await?;
                match gateway.validate_file(candidate) {
                    Ok(c) => candidates.push(c),
                    Err(e) => eprintln!("Skipping {}: {}", path.display(), e.user_message()),
                }
            }
            if candidates.is_empty() {
                anyhow::bail!("no image files to classify");
            }
            let outcomes = gateway.submit_batch(&candidates).await.map_err(Error::from)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            } else {
                print!("{}", display::render_batch(&outcomes));
            }
        }
        Command::Health => {
            let status = gateway.check_health().await;
            println!("{}", display::render_health(status));
        }
        Command::Classes { json } => {
            let catalog = gateway.fetch_classes().await.map_err(Error::from)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                print!("{}", display::render_catalog(&catalog));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
