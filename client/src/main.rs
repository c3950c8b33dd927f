use anyhow::Result;
use clap::Parser;
use client::network::GameClient;
use client::solver;
use log::info;
use shared::GameSnapshot;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server to play against
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Let the solver play instead of reading words from stdin
    #[arg(long)]
    auto: bool,

    /// Pause between automatic attempts in milliseconds
    #[arg(long, default_value = "250")]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    info!("Connecting to: {}", args.server);
    let game = GameClient::new(&args.server)?;
    let snapshot = game.start().await?;

    println!("Jumble: {}", snapshot.jumble);
    println!(
        "Find {} of the {} vocabulary words.",
        snapshot.target,
        snapshot.vocab.len()
    );

    if args.auto {
        play_auto(&game, &snapshot, Duration::from_millis(args.delay_ms)).await
    } else {
        play_interactive(&game).await
    }
}

/// Submits solver candidates until the game is solved.
async fn play_auto(game: &GameClient, snapshot: &GameSnapshot, delay: Duration) -> Result<()> {
    for word in solver::candidates(snapshot) {
        let reply = game.check(&word).await?;
        if let Some(message) = &reply.message {
            println!("{:>8}  {}", word, message);
        }
        if reply.result {
            println!("Solved with {:?}.", reply.matches);
            return Ok(());
        }
        tokio::time::sleep(delay).await;
    }

    println!("Ran out of candidates before reaching the target.");
    Ok(())
}

/// Reads attempts from stdin until the game is solved or input ends.
async fn play_interactive(game: &GameClient) -> Result<()> {
    println!("Type a word and press enter; an empty line quits.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let word = line.trim();
        if word.is_empty() {
            break;
        }

        let reply = game.check(word).await?;
        if let Some(message) = &reply.message {
            println!("{}", message);
        }
        println!("Found {}/{}", reply.matches.len(), reply.target);

        if reply.result {
            println!("You win!");
            break;
        }
    }

    Ok(())
}
