mod game;
mod term;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use snake::{GameConfig, Session};

/// Snake on a wrap-around or walled grid.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable snake collision with walls.
    #[arg(short = 'w', long)]
    wall: bool,
    /// Enable snake collision with itself.
    #[arg(short = 'b', long)]
    body: bool,
    /// Enable speed increase on every apple.
    #[arg(short = 's', long)]
    speed: bool,
    /// Initial length of the snake.
    #[arg(short = 'z', long, value_parser = clap::value_parser!(u64).range(1..))]
    size: Option<u64>,
    /// Number of grid columns.
    #[arg(long, value_parser = clap::value_parser!(i32).range(2..=100))]
    columns: Option<i32>,
    /// Number of grid rows.
    #[arg(long, value_parser = clap::value_parser!(i32).range(2..=100))]
    rows: Option<i32>,
    /// Seed for apple placement and segment colors.
    #[arg(long)]
    seed: Option<u64>,
    /// YAML file with game settings; flags override it.
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Where log lines go, since the terminal is taken by the board.
    #[arg(long, value_name = "PATH", default_value = "snake.log")]
    log_file: PathBuf,
}

impl Args {
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_yaml_file(path)?,
            None => GameConfig::default(),
        };

        config.wall |= self.wall;
        config.body |= self.body;
        config.speed |= self.speed;
        if let Some(size) = self.size {
            config.size = usize::try_from(size).context("size does not fit in memory")?;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config.checked()?)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)?;

    let config = args.into_config()?;
    let session = Session::new(config)?;

    let mut game = game::SnakeGame::new(session)?;
    game.initialize()?;

    // The terminal is restored even when the game loop fails
    let res = game.play();
    game.restore()?;
    info!("bye");
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from(["snake", "-w", "-b", "-z", "7", "--seed", "3"]);
        let config = args.into_config().unwrap();
        assert!(config.wall);
        assert!(config.body);
        assert!(!config.speed);
        assert_eq!(config.size, 7);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_zero_size_rejected_by_parser() {
        assert!(Args::try_parse_from(["snake", "--size", "0"]).is_err());
    }

    #[test]
    fn test_grid_flags() {
        let args = Args::parse_from(["snake", "--columns", "30", "--rows", "15", "-s"]);
        let config = args.into_config().unwrap();
        assert_eq!((config.columns, config.rows), (30, 15));
        assert!(config.speed);
    }
}
