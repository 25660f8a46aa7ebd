use std::path::PathBuf;

use clap::Parser;
use quote_quiz::{Config, Game};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the politics and pop-culture CSV sheets
    #[arg(short, long, default_value = "data/spreadsheet")]
    data_dir: PathBuf,

    /// Directory holding `<id>.jpg` portraits and `default.jpg`
    #[arg(short, long, default_value = "data/photos")]
    photos_dir: PathBuf,

    /// Seed for reproducible rounds
    #[arg(short, long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    log::info!("Reading quotes from {}", args.data_dir.display());

    let game = Game::new(Config {
        data_dir: args.data_dir,
        photos_dir: args.photos_dir,
        seed: args.seed,
    });

    if let Err(e) = game.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
