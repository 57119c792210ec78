//! SkyScale copilot command-line client.
//!
//! Results go to stdout; logs go to stderr.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use skyscale_copilot::config::Config;
use skyscale_copilot::copilot::Copilot;
use skyscale_copilot::error::AppError;
use skyscale_copilot::ingest::{DocumentDraft, Ingestor};
use skyscale_copilot::planrag::{PlanRagClient, Service};

#[derive(Parser)]
#[command(name = "skyscale-copilot")]
#[command(about = "SkyScale on-call copilot, backed by PlanRAG", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the copilot a production question
    Ask {
        /// Service the question is about
        #[arg(long, value_enum, default_value_t = Service::Search)]
        service: Service,

        /// Show the evidence (plan) behind the answer
        #[arg(long)]
        evidence: bool,

        /// Print the normalized reply as JSON
        #[arg(long)]
        json: bool,

        /// The question
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// Inject a document into PlanRAG
    Ingest {
        /// Tenant (defaults to SKYSCALE_TENANT_ID)
        #[arg(long)]
        tenant: Option<String>,

        /// Service the document belongs to
        #[arg(long, value_enum, default_value_t = Service::Search)]
        service: Service,

        /// Region (defaults to SKYSCALE_REGION)
        #[arg(long)]
        region: Option<String>,

        /// Document title (defaults to the file name)
        #[arg(long, default_value = "")]
        title: String,

        /// Comma-separated tags, e.g. "p1, search, us-east-1"
        #[arg(long, default_value = "")]
        tags: String,

        /// Text file to read the content from
        #[arg(long, conflicts_with = "content", required_unless_present = "content")]
        file: Option<PathBuf>,

        /// Content given inline
        #[arg(long)]
        content: Option<String>,
    },
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_level);

    tracing::info!(
        "Configuration loaded: base_url={}, tenant={}, timeout={}ms",
        config.base_url,
        config.tenant_id,
        config.request_timeout_ms
    );

    match run(cli.command, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging to stderr only (stdout is for results).
fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            level
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

async fn run(command: Commands, config: Config) -> Result<ExitCode, AppError> {
    let client = PlanRagClient::new(config.api_key.clone(), config.client_config())?;

    match command {
        Commands::Ask {
            service,
            evidence,
            json,
            question,
        } => {
            let copilot =
                Copilot::new(client, &config.tenant_id, &config.region).with_service(service);
            let Some(reply) = copilot.ask(&question.join(" ")).await else {
                tracing::warn!("Question is blank, nothing asked");
                return Ok(ExitCode::FAILURE);
            };

            if json {
                match serde_json::to_string_pretty(&reply) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        tracing::error!("Failed to serialize reply: {e}");
                        return Ok(ExitCode::FAILURE);
                    }
                }
            } else {
                print!("{}", reply.render(evidence));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Ingest {
            tenant,
            service,
            region,
            title,
            tags,
            file,
            content,
        } => {
            let mut draft = DocumentDraft::new(
                tenant.unwrap_or_else(|| config.tenant_id.clone()),
                service,
                region.unwrap_or_else(|| config.region.clone()),
            )
            .with_title(title)
            .with_tags(tags)
            .with_content(content.unwrap_or_default());

            if let Some(path) = file {
                draft.load_file(&path).await?;
            }

            let outcome = Ingestor::new(client).submit(&draft).await;
            println!("{}", outcome.message());
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
