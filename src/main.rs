use anyhow::{Context, Result};
use clap::Parser;
use sparkify_etl::warehouse::{MemoryWarehouse, SqliteWarehouse, Warehouse};
use sparkify_etl::{pipeline, EtlError};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sparkify-etl")]
#[command(about = "Load the song catalog and playback logs into the analytics warehouse")]
struct Args {
    /// Path to the output SQLite warehouse database file.
    #[arg(value_name = "WAREHOUSE_DB")]
    warehouse_db: PathBuf,

    /// Directory containing the song catalog files.
    #[arg(long, default_value = "data/song_data")]
    song_data: PathBuf,

    /// Directory containing the session log files.
    #[arg(long, default_value = "data/log_data")]
    log_data: PathBuf,

    /// Parse, transform and resolve without writing anything to disk.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

fn run_etl<W: Warehouse>(store: &mut W, args: &Args) -> Result<(), EtlError> {
    pipeline::run(store, &args.song_data, &args.log_data)?;

    let counts = store.counts()?;
    info!("");
    info!("Warehouse contains:");
    info!("  {} songs", counts.songs);
    info!("  {} artists", counts.artists);
    info!("  {} time rows", counts.time);
    info!("  {} users", counts.users);
    info!("  {} songplays", counts.songplays);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Song catalog: {}", args.song_data.display());
    info!("Session logs: {}", args.log_data.display());

    if args.dry_run {
        warn!("Dry run: nothing will be written to {}", args.warehouse_db.display());
        let mut store = MemoryWarehouse::new();
        run_etl(&mut store, &args).context("ETL run failed")?;
    } else {
        info!("Opening warehouse database at {}", args.warehouse_db.display());
        let mut store = SqliteWarehouse::open(&args.warehouse_db)?;
        run_etl(&mut store, &args).context("ETL run failed")?;
    }

    info!("Run completed successfully.");
    Ok(())
}
