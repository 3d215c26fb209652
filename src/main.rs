use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use marquee::core::config::{load_config, resolve};
use marquee::tui;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal movie finder powered by OMDb")]
struct Args {
    /// OMDb API key (overrides the config file and OMDB_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to marquee.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let resolved = resolve(&config, args.api_key.as_deref());

    log::info!(
        "Marquee starting up (key configured: {}, posters: {})",
        resolved.api_key.is_some(),
        resolved.posters
    );

    tui::run(resolved)
}
