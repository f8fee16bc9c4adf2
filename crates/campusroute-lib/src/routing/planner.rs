//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and one implementation per
//! search algorithm so `plan_route` can stay agnostic of how the state space
//! is explored.

use std::sync::atomic::AtomicBool;

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::path::{
    find_route_depth_first, find_route_dijkstra, PathConstraints, Route, TravelMode,
};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Ok(Some(route))` if a route is found, `Ok(None)` otherwise.
    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        start_mode: TravelMode,
        constraints: &PathConstraints,
        cancel: Option<&AtomicBool>,
    ) -> Result<Option<Route>>;
}

/// Frontier-ordered search; settles every `(node, mode)` state once.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        start_mode: TravelMode,
        constraints: &PathConstraints,
        cancel: Option<&AtomicBool>,
    ) -> Result<Option<Route>> {
        find_route_dijkstra(graph, start, goal, start_mode, constraints, cancel)
    }
}

/// Depth-first relaxation. Same distances as Dijkstra, more work on dense
/// graphs.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstPlanner;

impl RoutePlanner for DepthFirstPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::DepthFirst
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        start_mode: TravelMode,
        constraints: &PathConstraints,
        cancel: Option<&AtomicBool>,
    ) -> Result<Option<Route>> {
        find_route_depth_first(graph, start, goal, start_mode, constraints, cancel)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::DepthFirst => Box::new(DepthFirstPlanner),
    }
}
