use clap::Parser;
use libinfo::Preview;
use libinfo::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "libinfo", about = "Library info viewer")]
struct Args {
    /// Delay before the library info is loaded, in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Show preset data immediately instead of the delayed load
    #[arg(short, long, value_enum)]
    preview: Option<Preview>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal owns stdout
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("libinfo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            config::LibInfoConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.delay_ms);

    log::info!(
        "libinfo starting up (delay={}ms, preview={:?})",
        resolved.load_delay.as_millis(),
        args.preview
    );

    libinfo::tui::run(resolved, args.preview)
}
