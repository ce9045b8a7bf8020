use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dominance")]
#[command(about = "Report the dominant color of an image as a hex triplet")]
struct Cli {
    /// Path to the image file
    image: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dominance=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // a failure to open or decode the file is reported but not fatal: the run still resolves to
    // the no-color outcome
    match dominance::dominant_color(&cli.image) {
        Ok(Some(swatch)) => println!("Dominant Color: {}", swatch.hex()),
        Ok(None) => println!("No dominant color found"),
        Err(e) => {
            eprintln!("Error: {e}");
            println!("No dominant color found");
        }
    }
}
