//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use domain::{Coordinate, TransportMode};

fn parse_coordinate(text: &str) -> Result<Coordinate, String> {
    Coordinate::parse(text).map_err(|e| e.to_string())
}

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "routeplanner")]
#[command(author, version, about = "Plan driving, walking and biking routes", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Route {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        to: Coordinate,
        #[arg(short, long, default_value = "driving")]
        mode: TransportMode,
    },
    Interactive,
    Health,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_route_command() {
    let cli = parse_args(&[
        "routeplanner",
        "route",
        "--from",
        "52.52,13.405",
        "--to",
        "52.3906,13.0645",
    ])
    .unwrap();
    if let Commands::Route { from, to, mode } = cli.command {
        assert_eq!(from, Coordinate::berlin());
        assert_eq!(to, Coordinate::potsdam());
        assert_eq!(mode, TransportMode::Driving);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_parses_route_with_mode() {
    let cli = parse_args(&[
        "routeplanner",
        "route",
        "--from",
        "52.52,13.405",
        "--to",
        "52.3906,13.0645",
        "-m",
        "bike",
    ])
    .unwrap();
    if let Commands::Route { mode, .. } = cli.command {
        assert_eq!(mode, TransportMode::Biking);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_parses_negative_coordinates() {
    let cli = parse_args(&[
        "routeplanner",
        "route",
        "--from",
        "-33.9249,18.4241",
        "--to",
        "-34.0,18.5",
    ])
    .unwrap();
    if let Commands::Route { from, .. } = cli.command {
        assert!((from.latitude() + 33.9249).abs() < f64::EPSILON);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_rejects_out_of_range_coordinate() {
    let result = parse_args(&[
        "routeplanner",
        "route",
        "--from",
        "95.0,13.4",
        "--to",
        "52.3906,13.0645",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_unknown_mode() {
    let result = parse_args(&[
        "routeplanner",
        "route",
        "--from",
        "52.52,13.405",
        "--to",
        "52.3906,13.0645",
        "--mode",
        "teleport",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_route_requires_both_endpoints() {
    let result = parse_args(&["routeplanner", "route", "--from", "52.52,13.405"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_interactive_command() {
    let cli = parse_args(&["routeplanner", "interactive"]).unwrap();
    assert!(matches!(cli.command, Commands::Interactive));
}

#[test]
fn cli_parses_health_command() {
    let cli = parse_args(&["routeplanner", "health"]).unwrap();
    assert!(matches!(cli.command, Commands::Health));
}

#[test]
fn cli_parses_config_path() {
    let cli = parse_args(&["routeplanner", "--config", "/etc/routeplanner.toml", "health"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/routeplanner.toml")));
}

#[test]
fn cli_parses_verbose_flag() {
    let cli = parse_args(&["routeplanner", "-v", "health"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["routeplanner", "-vvv", "health"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_requires_subcommand() {
    let result = parse_args(&["routeplanner"]);
    assert!(result.is_err());
}
