mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pile_core::{discover, ConfigSnapshot, Photo, Theme, SLIDERS};
use report::{build_session, grid_report, pile_report, SessionOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pile", version, about = "Compute photo-pile layouts and configs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct SessionArgs {
    /// Table variant; each theme scatters the prints differently
    #[arg(long, default_value = "light")]
    theme: Theme,
    /// Saved config snapshot (parameters + seed) to start from
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override a parameter, e.g. `--set scatter=20` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    assignments: Vec<String>,
    /// Start from this seed instead of the snapshot's
    #[arg(long)]
    seed: Option<i64>,
    /// Press "reshuffle" this many times
    #[arg(long, default_value_t = 0)]
    reshuffles: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scattered pile layout as JSON
    Layout {
        #[arg(long, default_value = "public")]
        dir: PathBuf,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Print the grid layout as JSON
    Grid {
        #[arg(long, default_value = "public")]
        dir: PathBuf,
    },
    /// Print (or write) a config snapshot
    Config {
        /// Number of photos the seed advances by on reshuffle
        #[arg(long, default_value_t = 0)]
        photos: usize,
        #[command(flatten)]
        session: SessionArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the tunable parameters and their slider ranges
    Sliders,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout { dir, session } => {
            let photos = load_photos(&dir);
            let opts = session_options(&session)?;
            let session = build_session(photos.len(), &opts)?;
            log::info!(
                "[layout] {} photos theme={} seed={}",
                photos.len(),
                session.theme(),
                session.seed()
            );
            print_json(&pile_report(&photos, &session))?;
        }
        Commands::Grid { dir } => {
            let photos = load_photos(&dir);
            print_json(&grid_report(&photos))?;
        }
        Commands::Config {
            photos,
            session,
            out,
        } => {
            let opts = session_options(&session)?;
            let session = build_session(photos, &opts)?;
            let snapshot = session.snapshot();
            match out {
                Some(path) => {
                    snapshot
                        .save(&path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("[config] saved to {}", path.display());
                }
                None => println!("{}", snapshot.to_json()?),
            }
        }
        Commands::Sliders => {
            for spec in &SLIDERS {
                println!(
                    "{:<14} {:<14} {:>5} .. {:<5} step {}",
                    spec.key.wire_name(),
                    spec.label(),
                    spec.min,
                    spec.max,
                    spec.step
                );
            }
        }
    }
    Ok(())
}

fn session_options(args: &SessionArgs) -> anyhow::Result<SessionOptions> {
    let snapshot = match &args.config {
        Some(path) => Some(
            ConfigSnapshot::load(path).with_context(|| format!("reading {}", path.display()))?,
        ),
        None => None,
    };
    Ok(SessionOptions {
        theme: args.theme,
        snapshot,
        assignments: args.assignments.clone(),
        seed: args.seed,
        reshuffles: args.reshuffles,
    })
}

// A missing photo folder is an empty gallery, not a failure.
fn load_photos(dir: &Path) -> Vec<Photo> {
    match discover(dir) {
        Ok(photos) => {
            if photos.is_empty() {
                log::warn!("no photos found in {}", dir.display());
            }
            photos
        }
        Err(e) => {
            log::warn!("cannot read {}: {e}", dir.display());
            Vec::new()
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
