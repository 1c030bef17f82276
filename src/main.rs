use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cookbook::{api, config::ServiceConfig, normalize, Cookbook};

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Recipe catalog that resolves recipes into base ingredients")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the cookbook HTTP server
    Serve {
        /// Address to bind (overrides COOKBOOK_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port for the HTTP API (overrides COOKBOOK_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Normalize a handwritten recipe name and print it
    Parse {
        /// The text to normalize
        input: String,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "cookbook=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(host, port).await,
        Some(Commands::Parse { input }) => {
            let name = normalize::normalize_name(&input)
                .ok_or_else(|| anyhow::anyhow!("Invalid recipe name: {:?}", input))?;
            println!("{}", name);
            Ok(())
        }
        None => serve(None, None).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = ServiceConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let addr = config.bind_addr();
    let app = api::create_router_with_config(Cookbook::new(), config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Cookbook server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Cookbook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
