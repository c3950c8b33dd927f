use anyhow::Context;
use clap::Parser;
use server::routes::{build_router, AppState};
use server::session::SessionManager;
use shared::Vocab;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Main-method of the application.
/// Parses command-line arguments, loads the vocabulary, then serves the
/// game until Ctrl+C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Command line arguments
    #[derive(Parser, Debug)]
    #[clap(author, version, about)]
    struct Args {
        /// Server IP address to bind to
        #[clap(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Server port to listen on
        #[clap(short, long, default_value = "8080")]
        port: u16,
        /// Word list file, one word per line
        #[clap(long, default_value = "data/vocab.txt")]
        vocab: String,
        /// Words a player must find to win
        #[clap(short, long, default_value = "3")]
        target_count: usize,
        /// Seed for reproducible jumbles
        #[clap(long)]
        jumble_seed: Option<u64>,
        /// Seconds of inactivity before a session is dropped
        #[clap(long, default_value = "1800")]
        session_timeout: u64,
        /// Maximum number of concurrent game sessions
        #[clap(long, default_value = "1000")]
        max_sessions: usize,
        /// Directory holding the stylesheet and polling script
        #[clap(long, default_value = "server/static")]
        static_dir: String,
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("server=info,tower_http=warn")),
        )
        .init();

    // Parse command line arguments
    let args = Args::parse();

    let vocab = Vocab::from_file(&args.vocab)
        .with_context(|| format!("loading word list from {}", args.vocab))?;
    info!("loaded {} vocabulary words from {}", vocab.len(), args.vocab);

    let sessions = Arc::new(RwLock::new(SessionManager::new(
        args.max_sessions,
        Duration::from_secs(args.session_timeout),
    )));

    // Spawn the idle-session sweeper
    {
        let sessions = Arc::clone(&sessions);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                interval.tick().await;
                let expired = sessions.write().await.check_timeouts();
                if !expired.is_empty() {
                    info!("swept {} idle sessions", expired.len());
                }
            }
        });
    }

    let state = AppState {
        vocab: Arc::new(vocab),
        sessions,
        target_count: args.target_count,
        jumble_seed: args.jumble_seed,
    };
    let app = build_router(state, &args.static_dir);

    let address = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;
    info!("serving the jumble game on http://{}", address);

    // Handle shutdown gracefully
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received Ctrl+C, shutting down gracefully");
        })
        .await?;

    Ok(())
}
