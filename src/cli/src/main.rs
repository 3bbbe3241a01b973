#![warn(clippy::pedantic)]

mod config;

use std::{fmt::Write, path::PathBuf, process};

use clap::{ArgAction, Parser};
use config::Config;
use cube_core::{Color, Cube, Scrambler};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info, warn};
use owo_colors::OwoColorize;

/// Scrambles an NxNxN cube and prints the result
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The number of pieces along each edge of the cube
    cube_size: usize,

    /// The number of random moves to scramble with
    scramble_length: usize,

    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Seed the scramble generator for a reproducible scramble
    #[arg(long)]
    seed: Option<u64>,

    /// Moves to apply after the scramble, e.g. "R U' F2"
    #[arg(long, short = 'm')]
    moves: Option<String>,

    /// Print stickers with ANSI colors
    #[arg(long)]
    color: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    color_eyre::install()?;

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    info!("Using {config:?}");

    let mut cube = Cube::new(cli.cube_size)?;

    let mut scrambler = match cli.seed.or(config.scramble.seed) {
        Some(seed) => Scrambler::with_seed(seed),
        None => Scrambler::new(),
    };
    let scramble = scrambler.scramble(cli.scramble_length);
    cube.apply_moves(&scramble);

    if let Some(moves) = &cli.moves {
        let skipped = cube.apply_notation(moves);
        if skipped > 0 {
            warn!("Ignored {skipped} unrecognized moves in {moves:?}");
        }
    }

    println!("Scramble: {scramble}");
    if cli.color || config.display.color {
        print!("{}", colored_net(&cube)?);
    } else {
        print!("{cube}");
    }
    println!("Valid: {}", cube.validate());

    Ok(())
}

fn colored_net(cube: &Cube) -> color_eyre::Result<String> {
    let mut out = String::new();

    cube.write_net(&mut out, |out, color| {
        let code = color.map_or('-', Color::code);
        match color {
            Some(Color::White) => write!(out, "{} ", code.black().on_white()),
            Some(Color::Orange) => write!(out, "{} ", code.black().on_truecolor(255, 128, 0)),
            Some(Color::Green) => write!(out, "{} ", code.black().on_green()),
            Some(Color::Red) => write!(out, "{} ", code.white().on_red()),
            Some(Color::Blue) => write!(out, "{} ", code.white().on_blue()),
            Some(Color::Yellow) => write!(out, "{} ", code.black().on_yellow()),
            None => write!(out, "{code} "),
        }
    })?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["cube", "4", "25", "--seed", "9", "-vv"]).unwrap();
        assert_eq!(cli.cube_size, 4);
        assert_eq!(cli.scramble_length, 25);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.color);
    }

    #[test]
    fn test_missing_arguments_are_errors() {
        let err = Cli::try_parse_from(["cube", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_colored_net_has_every_sticker() {
        let cube = Cube::new(3).unwrap();
        let net = colored_net(&cube).unwrap();
        assert_eq!(net.lines().count(), 9);
        assert_eq!(net.matches('W').count(), 9);
        assert_eq!(net.matches('Y').count(), 9);
    }
}
