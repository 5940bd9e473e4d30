use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use snap_engine::common::config::{Config, config_file};
use snap_engine::common::geometry::{Point, Rect};
use snap_engine::common::log;
use snap_engine::layout_engine::{
    DirectionCategory, DirectionGroup, FractionalRect, SnapTarget, SnapZones, WindowDirection,
    resolve,
};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

#[derive(Parser)]
#[command(name = "snap-cli")]
#[command(about = "Inspect window snapping layouts and snap zones")]
struct Cli {
    /// Config file to use instead of ~/.snap-engine.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a pointer position during a drag
    Classify {
        /// Pointer position as X,Y
        #[arg(long, allow_hyphen_values = true)]
        pointer: Point,
        /// Usable screen frame as X,Y,WIDTH,HEIGHT
        #[arg(long, allow_hyphen_values = true)]
        screen: Rect,
        /// Dead zone as X,Y,WIDTH,HEIGHT (defaults to the screen inset by the configured margins)
        #[arg(long, allow_hyphen_values = true)]
        dead_zone: Option<Rect>,
        /// Direction suggested by the previous sample
        #[arg(long, default_value = "NoAction")]
        prior: WindowDirection,
    },
    /// Print the fractional frame of a direction
    Resolve {
        direction: WindowDirection,
        /// Screen frame to apply the fractions to, as X,Y,WIDTH,HEIGHT
        #[arg(long, allow_hyphen_values = true)]
        screen: Option<Rect>,
    },
    /// List direction groups in menu order
    List {
        /// Only print this group (general, halves, quarters, ...)
        #[arg(long)]
        group: Option<DirectionGroup>,
    },
    /// Show everything known about a direction
    Describe { direction: WindowDirection },
}

#[derive(Serialize)]
struct Resolved {
    direction: WindowDirection,
    fraction: Option<FractionalRect>,
    frame: Option<Rect>,
}

#[derive(Serialize)]
struct GroupListing {
    group: DirectionGroup,
    members: &'static [WindowDirection],
}

#[derive(Serialize)]
struct Description {
    direction: WindowDirection,
    categories: DirectionCategory,
    group: Option<DirectionGroup>,
    radial_menu_angle: Option<f64>,
    has_radial_menu_angle: bool,
    should_fill_radial_menu: bool,
    next_preview_direction: WindowDirection,
    fraction: Option<FractionalRect>,
}

fn main() {
    log::init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let output = match cli.command {
        Commands::Classify { pointer, screen, dead_zone, prior } => {
            let config = load_config(cli.config.as_deref())?;
            serde_json::to_string_pretty(&classify(&config, pointer, screen, dead_zone, prior))?
        }
        Commands::Resolve { direction, screen } => {
            let fraction = resolve(direction);
            let frame = fraction.zip(screen).map(|(fraction, screen)| fraction.apply_to(screen));
            serde_json::to_string_pretty(&Resolved { direction, fraction, frame })?
        }
        Commands::List { group } => {
            let listing: Vec<GroupListing> = match group {
                Some(group) => vec![GroupListing { group, members: group.members() }],
                None => DirectionGroup::iter()
                    .map(|group| GroupListing { group, members: group.members() })
                    .collect(),
            };
            serde_json::to_string_pretty(&listing)?
        }
        Commands::Describe { direction } => serde_json::to_string_pretty(&describe(direction))?,
    };
    Ok(output)
}

#[instrument(skip(config))]
fn classify(
    config: &Config,
    pointer: Point,
    screen: Rect,
    dead_zone: Option<Rect>,
    prior: WindowDirection,
) -> SnapTarget {
    if !config.snapping.enabled {
        debug!("snapping disabled in config");
        return SnapTarget { direction: WindowDirection::NoAction, frame: None };
    }

    let zones = match dead_zone {
        Some(dead_zone) => SnapZones::new(screen, dead_zone),
        None => SnapZones::with_margins(screen, &config.snapping.margins),
    };
    zones.target(pointer, prior)
}

fn describe(direction: WindowDirection) -> Description {
    Description {
        direction,
        categories: direction.membership(),
        group: DirectionGroup::of(direction),
        radial_menu_angle: direction.radial_menu_angle(),
        has_radial_menu_angle: direction.has_radial_menu_angle(),
        should_fill_radial_menu: direction.should_fill_radial_menu(),
        next_preview_direction: direction.next_preview_direction(),
        fraction: resolve(direction),
    }
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match explicit {
        Some(path) => Config::read(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => match config_file().filter(|path| path.exists()) {
            Some(path) => Config::read(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        },
    };

    for issue in config.validate() {
        warn!("{issue}");
    }
    let fixes = config.auto_fix_values();
    if fixes > 0 {
        debug!(fixes, "reset invalid config values to defaults");
    }
    Ok(config)
}
