use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use greenside::{Catalog, CourseMode, HoleCount, generate_course};
use greenside_app::state::config::{self, GreensideConfig};
use greenside_app::state::ScorecardService;
use greenside_app::store::JsonFileStore;

#[derive(Parser, Debug)]
#[command(name = "greenside", about = "Short-game scorecard data tools")]
struct Cli {
    /// Config file path (default: ~/.config/greenside/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate the pre-built course catalog document.
    ///
    /// This is the offline data-build step; the runtime always reads the
    /// document embedded at compile time.
    GenCatalog {
        /// Output path (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Seed for a reproducible build (default: thread RNG)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate and print a one-off course layout.
    Preview {
        /// Course mode
        #[arg(long, value_enum, default_value_t = CourseMode::Indoor)]
        mode: CourseMode,
        /// Hole count: 9 or 18
        #[arg(long, default_value = "18")]
        holes: HoleCount,
        /// Seed for a reproducible layout (default: thread RNG)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print aggregate statistics over the stored round history.
    Stats {
        /// Only count rounds of this mode
        #[arg(long, value_enum)]
        mode: Option<CourseMode>,
        /// Only count rounds of this hole count (9 or 18)
        #[arg(long)]
        holes: Option<HoleCount>,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("greenside=info,greenside_app=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    // Load (or create) config file
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let config = config::load(&config_path);

    match cli.command {
        Command::GenCatalog { out, seed } => gen_catalog(out, seed),
        Command::Preview { mode, holes, seed } => preview(mode, holes, seed),
        Command::Stats { mode, holes } => show_stats(&config, mode, holes),
    }
}

fn gen_catalog(out: Option<PathBuf>, seed: Option<u64>) -> anyhow::Result<()> {
    let catalog = match seed {
        Some(seed) => Catalog::generate(&mut StdRng::seed_from_u64(seed)),
        None => Catalog::generate(&mut rand::thread_rng()),
    };
    let json = catalog.to_json_pretty()?;
    match out {
        Some(path) => {
            std::fs::write(&path, json + "\n")?;
            tracing::info!("wrote catalog to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn preview(mode: CourseMode, holes: HoleCount, seed: Option<u64>) -> anyhow::Result<()> {
    let course = match seed {
        Some(seed) => generate_course(&mut StdRng::seed_from_u64(seed), mode, holes),
        None => generate_course(&mut rand::thread_rng(), mode, holes),
    };
    println!("{}", serde_json::to_string_pretty(&course)?);
    Ok(())
}

fn show_stats(
    config: &GreensideConfig,
    mode: Option<CourseMode>,
    holes: Option<HoleCount>,
) -> anyhow::Result<()> {
    let catalog = Catalog::load()?;
    let dir = config
        .data_dir
        .clone()
        .unwrap_or_else(JsonFileStore::default_dir);

    let rt = tokio::runtime::Runtime::new()?;
    let stats = rt.block_on(async {
        let store = JsonFileStore::new(dir);
        let service = ScorecardService::load(store, catalog, config.stats).await;
        service.stats_for(mode, holes)
    });

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
