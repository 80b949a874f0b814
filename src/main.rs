use clap::Parser;
use schemematch_api::{AppState, RestApi};
use schemematch_core::MatchingEngine;
use schemematch_storage::{load_catalog, RegistrationLog};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Welfare scheme matching server
#[derive(Parser, Debug)]
#[command(name = "schemematch")]
#[command(about = "Recommend welfare schemes for an applicant profile", long_about = None)]
struct Args {
    /// Path to the JSON scheme catalog
    #[arg(long, env = "SCHEMEMATCH_CATALOG", default_value = "./data/schemes.json")]
    catalog: PathBuf,

    /// Path to the append-only registration log
    #[arg(long, env = "SCHEMEMATCH_REGISTRATIONS", default_value = "./data/registrations.jsonl")]
    registrations: PathBuf,

    /// Address to bind
    #[arg(long, env = "SCHEMEMATCH_HOST", default_value = "127.0.0.1")]
    host: String,

    /// HTTP API port
    #[arg(long, env = "SCHEMEMATCH_HTTP_PORT", default_value_t = 8000)]
    http_port: u16,

    /// Number of recommendations returned per request
    #[arg(long, env = "SCHEMEMATCH_TOP_N", default_value_t = schemematch_api::DEFAULT_TOP_N)]
    top_n: usize,

    /// Log level
    #[arg(long, env = "SCHEMEMATCH_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting schemematch v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);
    info!("Registrations: {:?}", args.registrations);

    // Built once; read-only for the lifetime of the process
    let catalog = load_catalog(&args.catalog);
    let engine = Arc::new(MatchingEngine::new(catalog));
    info!(
        "Text index built: {} schemes, {} terms",
        engine.len(),
        engine.index().vocabulary_len()
    );

    let registrations = Arc::new(RegistrationLog::open(&args.registrations)?);
    let state = AppState::new(engine, registrations).with_top_n(args.top_n);

    info!("HTTP API: http://{}:{}/", args.host, args.http_port);

    tokio::select! {
        res = RestApi::start(state, &args.host, args.http_port) => {
            res?;
            info!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Shutting down...");
    Ok(())
}
