//! Route command handler for computing paths across the campus.

use anyhow::{Context, Result};
use clap::ValueEnum;

use campusroute_lib::{plan_route, Graph, RouteAlgorithm, RouteRequest};

use crate::output::{OutputFormat, RouteSummary};

/// Search strategy selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    Dijkstra,
    DepthFirst,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::DepthFirst => RouteAlgorithm::DepthFirst,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Starting node name.
    pub from: String,
    /// Destination node name.
    pub to: String,
    /// Only use accessible connections.
    pub accessible: bool,
    /// Plan an evacuation route.
    pub emergency: bool,
    /// Start the journey in a car.
    pub by_car: bool,
    pub algorithm: AlgorithmArg,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(&self.from, &self.to)
            .with_algorithm(self.algorithm.into())
            .accessible(self.accessible)
            .emergency(self.emergency)
            .by_car(self.by_car)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    graph: &Graph,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = args.to_request();
    let plan = plan_route(graph, &request)
        .with_context(|| format!("failed to plan a route from {} to {}", args.from, args.to))?;
    let summary = RouteSummary::from_plan(graph, &plan, request.constraints);

    match format {
        OutputFormat::Text => println!("{}", summary.render_text()),
        OutputFormat::Json => println!(
            "{}",
            summary
                .render_json()
                .context("failed to serialize route summary")?
        ),
    }
    Ok(())
}
