//! Route planning over a campus graph.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search strategies (Dijkstra, depth-first)
//! - [`RouteRequest`] - Name-based planning request with policies
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Entry point for name-based requests
//! - [`find_path`] - Entry point for callers that already hold node handles
//!
//! # Example
//!
//! ```ignore
//! use campusroute_lib::{plan_route, RouteRequest};
//!
//! let request = RouteRequest::new("Car Park", "Lecture Hall").by_car(true);
//! let plan = plan_route(&graph, &request)?;
//! println!("{} m over {} hops", plan.total_distance, plan.hop_count());
//! ```

mod planner;

pub use planner::{select_planner, DepthFirstPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::{PathConstraints, RouteLeg, TravelMode};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Frontier-ordered search over `(node, mode)` states.
    #[default]
    Dijkstra,
    /// Depth-first label-correcting relaxation.
    DepthFirst,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::DepthFirst => "depth-first",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    pub constraints: PathConstraints,
    pub start_mode: TravelMode,
    /// Raised by the caller to abandon the search at the next frontier pop.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl RouteRequest {
    /// Walking route with no special policies, planned with Dijkstra.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::default(),
            constraints: PathConstraints::default(),
            start_mode: TravelMode::Foot,
            cancel: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn accessible(mut self, value: bool) -> Self {
        self.constraints.require_accessible = value;
        self
    }

    pub fn emergency(mut self, value: bool) -> Self {
        self.constraints.emergency_mode = value;
        self
    }

    pub fn by_car(mut self, value: bool) -> Self {
        self.start_mode = TravelMode::from_start_by_car(value);
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub start_mode: TravelMode,
    pub steps: Vec<NodeId>,
    pub legs: Vec<RouteLeg>,
    pub total_distance: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Mode the traveller ends the route in.
    pub fn final_mode(&self) -> TravelMode {
        self.legs
            .last()
            .map(|leg| leg.arrival_mode)
            .unwrap_or(self.start_mode)
    }

    /// Node names along the route.
    pub fn step_names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.steps
            .iter()
            .map(|id| graph.name(*id).unwrap_or("<unknown>"))
            .collect()
    }
}

/// Compute a route between two node handles with Dijkstra.
///
/// Fails with [`Error::InvalidReference`] before searching if either handle
/// belongs to another graph, and with [`Error::RouteNotFound`] when no
/// admissible path exists.
pub fn find_path(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    require_accessible: bool,
    emergency_mode: bool,
    start_by_car: bool,
) -> Result<RoutePlan> {
    let constraints = PathConstraints {
        require_accessible,
        emergency_mode,
    };
    plan_between(
        graph,
        RouteAlgorithm::Dijkstra,
        start,
        goal,
        TravelMode::from_start_by_car(start_by_car),
        &constraints,
        None,
    )
}

/// Compute a route for a name-based request.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = graph.resolve(&request.start)?;
    let goal = graph.resolve(&request.goal)?;

    plan_between(
        graph,
        request.algorithm,
        start,
        goal,
        request.start_mode,
        &request.constraints,
        request.cancel.as_deref(),
    )
}

fn plan_between(
    graph: &Graph,
    algorithm: RouteAlgorithm,
    start: NodeId,
    goal: NodeId,
    start_mode: TravelMode,
    constraints: &PathConstraints,
    cancel: Option<&AtomicBool>,
) -> Result<RoutePlan> {
    for node in [start, goal] {
        if !graph.contains(node) {
            return Err(Error::InvalidReference {
                node: node.to_string(),
            });
        }
    }

    debug!(
        %algorithm,
        start = graph.name(start),
        goal = graph.name(goal),
        %start_mode,
        require_accessible = constraints.require_accessible,
        emergency_mode = constraints.emergency_mode,
        "planning route"
    );

    let planner = select_planner(algorithm);
    let route = planner
        .find_path(graph, start, goal, start_mode, constraints, cancel)?
        .ok_or_else(|| Error::RouteNotFound {
            start: graph.name(start).unwrap_or_default().to_string(),
            goal: graph.name(goal).unwrap_or_default().to_string(),
        })?;

    Ok(RoutePlan {
        algorithm,
        start,
        goal,
        start_mode,
        steps: route.steps,
        legs: route.legs,
        total_distance: route.total_distance,
    })
}
