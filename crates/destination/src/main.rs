use anyhow::Context;
use clap::Parser;
use proto_grpc::destination::destination_connector_server::DestinationConnectorServer;
use tokio::signal::unix;
use tonic::codec::CompressionEncoding;
use tonic::transport::server::TcpIncoming;

use destination::{config, metrics, DestinationService};

/// The orchestrator ships batch files up to 50 MiB framed messages.
const MAX_MESSAGE_SIZE: usize = 50 * 1024 * 1024;

#[derive(clap::Parser, Debug)]
#[clap(about = "Fivetran destination connector for SurrealDB.")]
struct Args {
    /// Port on which to listen for rpcs from the orchestrator.
    #[clap(short, long, default_value_t = 50052)]
    port: u16,

    /// The log verbosity. Can be one of trace|debug|info|warn|error.
    #[clap(long = "log.level", default_value = "info")]
    log_level: String,

    /// Log format written to stderr.
    #[clap(long = "log.format", value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,
}

#[derive(Debug, clap::ValueEnum, Clone, Copy)]
enum LogFormat {
    /// Logs are written to stderr in jsonl format.
    Json,
    /// Plain text.
    Text,
}

impl ToString for LogFormat {
    fn to_string(&self) -> String {
        match self {
            LogFormat::Json => "json",
            LogFormat::Text => "text",
        }
        .to_string()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // SURREAL_FIVETRAN_DEBUG overrides the configured verbosity. Restrict
    // logged modules to our own crates; tonic's debug logging is noisy.
    let level = if config::debug_enabled() {
        "debug"
    } else {
        args.log_level.as_str()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_new(format!(
        "destination={level},surreal_client={level}"
    ))
    .context("parsing log level")?;

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter);
    match args.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }

    // Bind our port before anything else; exit non-zero when it is taken.
    let addr = format!("0.0.0.0:{}", args.port)
        .parse()
        .context("parsing listen address")?;
    let incoming = TcpIncoming::new(addr, true, None)
        .map_err(|e| anyhow::anyhow!("binding listen port {}: {e}", args.port))?;

    metrics::spawn_reporter(metrics::Metrics::global(), metrics::report_interval());

    let service = DestinationConnectorServer::new(DestinationService::default())
        .max_decoding_message_size(MAX_MESSAGE_SIZE)
        .max_encoding_message_size(MAX_MESSAGE_SIZE)
        .accept_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Gzip);

    // Gracefully exit on either SIGINT (ctrl-c) or SIGTERM.
    let mut sigint =
        unix::signal(unix::SignalKind::interrupt()).context("installing SIGINT handler")?;
    let mut sigterm =
        unix::signal(unix::SignalKind::terminate()).context("installing SIGTERM handler")?;
    let signal = async move {
        tokio::select! {
            _ = sigint.recv() => (),
            _ = sigterm.recv() => (),
        }
        tracing::info!("caught signal to exit");
    };

    tracing::info!(port = args.port, message = "destination server started");
    tonic::transport::Server::builder()
        .add_service(service)
        .serve_with_incoming_shutdown(incoming, signal)
        .await
        .context("serving rpc requests")?;

    Ok(())
}
