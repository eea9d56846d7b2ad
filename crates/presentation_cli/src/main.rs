//! Route planner CLI
//!
//! Plans routes between coordinate pairs, one-shot or interactively.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod input;
mod terminal;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::ports::DirectionsPort;
use application::{PlannerState, RouteError, RoutePlanner};
use clap::{Parser, Subcommand};
use domain::{Coordinate, RequestId, TransportMode};
use infrastructure::{
    AppConfig, ChannelPresenter, DirectionsAppConfig, OsrmDirectionsAdapter, ProviderKind,
    RouteEvent, StraightLineDirectionsAdapter, init_telemetry,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::input::{InputLine, parse_coordinate, parse_line};
use crate::terminal::{emit, render_event, render_invalid_input, render_status};

/// Route planner CLI
#[derive(Parser)]
#[command(name = "routeplanner")]
#[command(author, version, about = "Plan driving, walking and biking routes", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "ROUTEPLANNER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a single route and print it
    ///
    /// Example: routeplanner route --from 52.52,13.405 --to 52.3906,13.0645 --mode biking
    Route {
        /// Start point as LAT,LON
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        from: Coordinate,

        /// End point as LAT,LON
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        to: Coordinate,

        /// Travel mode: driving, walking or biking
        #[arg(short, long, default_value = "driving")]
        mode: TransportMode,
    },

    /// Read requests from stdin, one `LAT,LON LAT,LON [MODE]` per line
    ///
    /// Every line supersedes the request before it; only the newest route is
    /// printed. `status` shows the planner state, `quit` stops.
    Interactive,

    /// Check that the directions provider is reachable
    Health,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the configured directions provider
fn directions_provider(config: &DirectionsAppConfig) -> anyhow::Result<Arc<dyn DirectionsPort>> {
    let provider: Arc<dyn DirectionsPort> = match config.provider {
        ProviderKind::Osrm => Arc::new(OsrmDirectionsAdapter::from_config(
            &config.client_config(),
        )?),
        ProviderKind::StraightLine => Arc::new(StraightLineDirectionsAdapter::new()),
    };
    Ok(provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_telemetry(&config.telemetry)?;

    let directions = directions_provider(&config.directions)?;
    info!(provider = %config.directions.provider, "Directions provider ready");

    match cli.command {
        Commands::Route { from, to, mode } => {
            let (presenter, mut events) = ChannelPresenter::new();
            let planner = RoutePlanner::spawn(directions, Arc::new(presenter), config.planner);

            let id = planner.submit_route(from, to, mode).await?;
            let succeeded = await_outcome(&planner, &mut events, id).await?;
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        },

        Commands::Interactive => {
            let (presenter, events) = ChannelPresenter::new();
            let planner = RoutePlanner::spawn(directions, Arc::new(presenter), config.planner);
            run_interactive(&planner, events).await?;
            Ok(ExitCode::SUCCESS)
        },

        Commands::Health => {
            if directions.is_available().await {
                println!("✅ Healthy ({})", config.directions.provider);
                Ok(ExitCode::SUCCESS)
            } else {
                println!("❌ Unhealthy: {} unreachable", config.directions.provider);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

/// Print events until request `id` has finished
///
/// Returns whether at least one route was shown for it.
async fn await_outcome(
    planner: &RoutePlanner,
    events: &mut UnboundedReceiver<RouteEvent>,
    id: RequestId,
) -> anyhow::Result<bool> {
    while let Some(event) = events.recv().await {
        let finished = event.request_id() == id && !matches!(event, RouteEvent::Cleared(_));
        let shown = matches!(event, RouteEvent::Shown(_));
        if let Some(line) = render_event(&event) {
            emit(line);
        }
        if finished {
            if shown {
                drain_alternatives(planner, events).await?;
            }
            return Ok(shown);
        }
    }
    anyhow::bail!("route planner stopped before request {id} finished")
}

/// Print the remaining candidates of a response whose first route was shown
///
/// All candidates of one response are published in one planner step, so once
/// a status round-trip completes they are all queued.
async fn drain_alternatives(
    planner: &RoutePlanner,
    events: &mut UnboundedReceiver<RouteEvent>,
) -> anyhow::Result<()> {
    planner.status().await?;
    while let Ok(event) = events.try_recv() {
        if let Some(line) = render_event(&event) {
            emit(line);
        }
    }
    Ok(())
}

async fn run_interactive(
    planner: &RoutePlanner,
    mut events: UnboundedReceiver<RouteEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                match parse_line(&line) {
                    Ok(InputLine::Empty) => {},
                    Ok(InputLine::Status) => println!("{}", render_status(&planner.status().await?)),
                    Ok(InputLine::Quit) => break,
                    Ok(InputLine::Route(request)) => {
                        planner
                            .submit_route(request.source, request.destination, request.mode)
                            .await?;
                    },
                    Err(e) => emit(render_invalid_input(&RouteError::from(e))),
                }
            },
            Some(event) = events.recv() => {
                if let Some(line) = render_event(&event) {
                    emit(line);
                }
            },
        }
    }

    // Let the newest request finish before exiting.
    if let PlannerState::Requesting(id) = planner.status().await?.state {
        await_outcome(planner, &mut events, id).await?;
    } else {
        drain_alternatives(planner, &mut events).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn straight_line_provider_needs_no_url() {
        let config = DirectionsAppConfig {
            provider: ProviderKind::StraightLine,
            base_url: String::new(),
            ..Default::default()
        };
        assert!(directions_provider(&config).is_ok());
    }

    #[tokio::test]
    async fn one_shot_route_with_straight_line_provider() {
        let (presenter, mut events) = ChannelPresenter::new();
        let planner = RoutePlanner::spawn(
            Arc::new(StraightLineDirectionsAdapter::new()),
            Arc::new(presenter),
            application::RoutePlannerConfig::default(),
        );

        let id = planner
            .submit_route(
                Coordinate::berlin(),
                Coordinate::potsdam(),
                TransportMode::Biking,
            )
            .await
            .unwrap();
        let shown = tokio_test::assert_ok!(await_outcome(&planner, &mut events, id).await);
        assert!(shown);
        assert_eq!(planner.status().await.unwrap().published, 1);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
