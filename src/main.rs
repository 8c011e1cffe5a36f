//! Command-line front end: generate one map and print it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter, Log, Metadata, Record};

use bsp_dungeon::dungeon_gen::distance_sq;
use bsp_dungeon::pathfinding::{find_path, unreachable_rooms};
use bsp_dungeon::render::{render_ascii, render_codes};
use bsp_dungeon::{DungeonConfig, DungeonGenerator, DungeonMap, PassOptions};

/// Generate a BSP dungeon and print it as ASCII
#[derive(Parser, Debug)]
#[command(name = "bsp-dungeon")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON config file; missing fields keep their defaults
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Seed for the pass (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Force a boss pass
    #[arg(short = 'b', long = "boss")]
    boss: bool,

    /// Stage number, used with --boss-every
    #[arg(long = "stage", default_value_t = 1)]
    stage: u32,

    /// Every Nth stage is a boss stage (0 disables)
    #[arg(long = "boss-every", default_value_t = 0)]
    boss_every: u32,

    /// Override grid width
    #[arg(long = "width")]
    width: Option<i32>,

    /// Override grid height
    #[arg(long = "height")]
    height: Option<i32>,

    /// Print the generation report as JSON after the map
    #[arg(long = "report")]
    report: bool,

    /// Print numeric cell codes (0 floor, 1 wall) instead of glyphs
    #[arg(long = "codes")]
    codes: bool,

    /// Print the effective config as JSON and exit
    #[arg(long = "dump-config")]
    dump_config: bool,

    /// Serve profiling scopes over puffin_http
    #[arg(long = "profile")]
    profile: bool,

    /// More log output (repeat for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn is_boss_pass(&self) -> bool {
        self.boss || (self.boss_every > 0 && self.stage % self.boss_every == 0)
    }
}

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn load_config(args: &Args) -> Result<DungeonConfig> {
    let mut config = match &args.config {
        Some(path) => DungeonConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DungeonConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate().context("invalid dungeon config")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(args.log_level()))
        .context("failed to install logger")?;

    let config = load_config(&args)?;
    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // Keep the server alive until the pass is done
    let _server = if args.profile {
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr)
            .with_context(|| format!("failed to start profiler server on {addr}"))?;
        puffin::set_scopes_on(true);
        info!("serving profile data on {addr}");
        Some(server)
    } else {
        None
    };

    let mut generator = DungeonGenerator::new(config)?;
    let pass = PassOptions {
        boss: args.is_boss_pass(),
        seed: args.seed,
    };
    let report = generator.generate(pass);
    puffin::GlobalProfiler::lock().new_frame();

    let map = if args.codes {
        render_codes(&generator)
    } else {
        render_ascii(&generator)
    };
    println!("{}", map.trim_end());

    let unreachable = unreachable_rooms(&generator);
    if !unreachable.is_empty() {
        warn!("{} rooms unreachable from the start room: {:?}", unreachable.len(), unreachable);
    }

    if let Some(exit) = generator.exit_location() {
        let start = generator.start_room().center();
        let straight = (distance_sq(start, exit) as f64).sqrt();
        match find_path(&generator, start, exit) {
            Some(path) => info!(
                "exit {:?}: {:.1} cells away, {} steps to walk",
                exit,
                straight,
                path.len()
            ),
            None => warn!("exit {:?} is not reachable from the start room", exit),
        }
    }

    if args.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!("seed {}", report.seed);
    }

    Ok(())
}
