//! Campus route planner library entry points.
//!
//! This crate models a building or campus as a directed graph and finds the
//! shortest route between two locations while honouring evacuation,
//! accessibility and car/foot travel policies. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Edge, EdgeSpec, Graph, GraphBuilder, Node, NodeId};
pub use path::{next_mode, PathConstraints, Route, RouteLeg, SearchState, TravelMode};
pub use routing::{find_path, plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
