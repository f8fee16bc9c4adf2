use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::sync::atomic::{self, AtomicBool};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Node, NodeId};

/// How the traveller is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Car,
    #[default]
    Foot,
}

impl TravelMode {
    pub fn from_start_by_car(start_by_car: bool) -> Self {
        if start_by_car {
            TravelMode::Car
        } else {
            TravelMode::Foot
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TravelMode::Car => "car",
            TravelMode::Foot => "foot",
        };
        f.write_str(value)
    }
}

/// Unit of shortest-path bookkeeping: the same node can be reached at
/// different costs by car and on foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub node: NodeId,
    pub mode: TravelMode,
}

impl SearchState {
    pub fn new(node: NodeId, mode: TravelMode) -> Self {
        Self { node, mode }
    }
}

/// Policies applied during pathfinding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathConstraints {
    /// Only use accessible edges; unlocks accessibility-only nodes.
    pub require_accessible: bool,
    /// Evacuation routing: avoid emergency-blocked edges, unlock
    /// emergency-only nodes.
    pub emergency_mode: bool,
}

impl PathConstraints {
    /// Decide whether `edge`, leaving `current` while travelling in `mode`,
    /// may be traversed.
    pub fn allows(&self, graph: &Graph, edge: &Edge, mode: TravelMode, current: &Node) -> bool {
        let Some(destination) = graph.node(edge.target) else {
            return false;
        };

        if self.emergency_mode && edge.is_emergency_blocked {
            return false;
        }

        if !self.emergency_mode && destination.is_emergency_only {
            return false;
        }

        if self.require_accessible && !edge.is_accessible {
            return false;
        }

        // Lifts and similar are reserved for travellers who asked for them.
        if !self.require_accessible && destination.requires_accessibility {
            return false;
        }

        // A car may only take a non-road edge from the spot where it parks.
        if mode == TravelMode::Car && !edge.is_accessible_by_car && !current.is_parking_spot {
            return false;
        }

        true
    }

    /// Mode in effect after departing `current`.
    pub fn next_mode(&self, current: &Node, mode: TravelMode) -> TravelMode {
        next_mode(current, mode, self.require_accessible)
    }
}

/// Apply the parking rule: a car is left behind at a parking spot, unless an
/// accessible route was requested and the spot itself is not accessible.
/// Foot travel never reverts to car travel.
pub fn next_mode(current: &Node, mode: TravelMode, require_accessible: bool) -> TravelMode {
    if mode == TravelMode::Car
        && current.is_parking_spot
        && (!require_accessible || current.requires_accessibility)
    {
        TravelMode::Foot
    } else {
        mode
    }
}

/// One traversed edge of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
    /// Mode the edge was checked against when leaving `from`.
    pub departure_mode: TravelMode,
    /// Mode after leaving `from`, i.e. the mode on arrival at `to`.
    pub arrival_mode: TravelMode,
}

/// Physical route produced by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub steps: Vec<NodeId>,
    pub legs: Vec<RouteLeg>,
    pub total_distance: f64,
}

impl Route {
    fn trivial(node: NodeId) -> Self {
        Self {
            steps: vec![node],
            legs: Vec::new(),
            total_distance: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Predecessor {
    state: SearchState,
    distance: f64,
}

/// Run Dijkstra's algorithm over `(node, mode)` states and return the
/// lowest-cost route that satisfies `constraints`.
///
/// Returns `Ok(None)` when `goal` cannot be reached and
/// [`Error::SearchCancelled`] when `cancel` is raised mid-search.
pub fn find_route_dijkstra(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    start_mode: TravelMode,
    constraints: &PathConstraints,
    cancel: Option<&AtomicBool>,
) -> Result<Option<Route>> {
    if start == goal {
        return Ok(Some(Route::trivial(start)));
    }

    let start_state = SearchState::new(start, start_mode);
    let mut distances: HashMap<SearchState, f64> = HashMap::new();
    let mut parents: HashMap<SearchState, Predecessor> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut settled = 0usize;

    distances.insert(start_state, 0.0);
    queue.push(QueueEntry::new(graph, start_state, 0.0));

    while let Some(entry) = queue.pop() {
        check_cancelled(cancel)?;

        let current = entry.state;
        let current_distance = match distances.get(&current) {
            Some(distance) if *distance < entry.cost.0 => continue,
            Some(distance) => *distance,
            None => continue,
        };
        settled += 1;

        if current.node == goal {
            debug!(
                settled,
                distance = current_distance,
                mode = %current.mode,
                "dijkstra reached goal"
            );
            return Ok(Some(reconstruct_route(
                &parents,
                start_state,
                current,
                current_distance,
            )));
        }

        let Some(node) = graph.node(current.node) else {
            continue;
        };
        let departure_mode = constraints.next_mode(node, current.mode);

        for edge in graph.neighbours(current.node) {
            if !constraints.allows(graph, edge, current.mode, node) {
                continue;
            }

            let next = SearchState::new(edge.target, departure_mode);
            let next_cost = current_distance + edge.distance;
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                trace!(from = %node.name, to = %edge.target, cost = next_cost, "relaxed state");
                distances.insert(next, next_cost);
                parents.insert(
                    next,
                    Predecessor {
                        state: current,
                        distance: edge.distance,
                    },
                );
                queue.push(QueueEntry::new(graph, next, next_cost));
            }
        }
    }

    debug!(settled, "dijkstra exhausted frontier without reaching goal");
    Ok(None)
}

/// Depth-first label-correcting relaxation over `(node, mode)` states.
///
/// Explores edges in insertion order and keeps relaxing until no state
/// improves. Produces optimal distances like [`find_route_dijkstra`] but may
/// revisit states many times.
pub fn find_route_depth_first(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    start_mode: TravelMode,
    constraints: &PathConstraints,
    cancel: Option<&AtomicBool>,
) -> Result<Option<Route>> {
    if start == goal {
        return Ok(Some(Route::trivial(start)));
    }

    let start_state = SearchState::new(start, start_mode);
    let mut distances: HashMap<SearchState, f64> = HashMap::new();
    let mut parents: HashMap<SearchState, Predecessor> = HashMap::new();
    let mut stack = vec![start_state];
    let mut expansions = 0usize;

    distances.insert(start_state, 0.0);

    while let Some(current) = stack.pop() {
        check_cancelled(cancel)?;

        // Nothing beyond the goal can shorten the path to it.
        if current.node == goal {
            continue;
        }
        let Some(node) = graph.node(current.node) else {
            continue;
        };
        let current_distance = *distances.get(&current).unwrap_or(&f64::INFINITY);
        let departure_mode = constraints.next_mode(node, current.mode);
        expansions += 1;

        let mut improved = Vec::new();
        for edge in graph.neighbours(current.node) {
            if !constraints.allows(graph, edge, current.mode, node) {
                continue;
            }

            let next = SearchState::new(edge.target, departure_mode);
            let next_cost = current_distance + edge.distance;
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(
                    next,
                    Predecessor {
                        state: current,
                        distance: edge.distance,
                    },
                );
                improved.push(next);
            }
        }
        // Reversed so the first edge is explored first.
        stack.extend(improved.into_iter().rev());
    }

    let best = [TravelMode::Car, TravelMode::Foot]
        .into_iter()
        .map(|mode| SearchState::new(goal, mode))
        .filter_map(|state| distances.get(&state).map(|distance| (state, *distance)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.mode.cmp(&b.0.mode)));

    debug!(
        expansions,
        reached = best.is_some(),
        "depth-first relaxation finished"
    );

    Ok(best.map(|(state, distance)| reconstruct_route(&parents, start_state, state, distance)))
}

fn check_cancelled(cancel: Option<&AtomicBool>) -> Result<()> {
    match cancel {
        Some(flag) if flag.load(atomic::Ordering::Relaxed) => Err(Error::SearchCancelled),
        _ => Ok(()),
    }
}

/// Walk the predecessor links back to `start`, then collapse the state path
/// into a physical node path.
fn reconstruct_route(
    parents: &HashMap<SearchState, Predecessor>,
    start: SearchState,
    goal: SearchState,
    total_distance: f64,
) -> Route {
    let mut legs = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(parent) = parents.get(&current) else {
            break;
        };
        legs.push(RouteLeg {
            from: parent.state.node,
            to: current.node,
            distance: parent.distance,
            departure_mode: parent.state.mode,
            arrival_mode: current.mode,
        });
        current = parent.state;
        // Predecessor links form a tree under non-negative weights; this
        // bound only guards against a corrupted map.
        if legs.len() > parents.len() {
            break;
        }
    }
    legs.reverse();

    // A self-loop can switch mode without moving; it is not a physical step.
    legs.retain(|leg| leg.from != leg.to);

    let mut steps = vec![current.node];
    for leg in &legs {
        if steps.last() != Some(&leg.to) {
            steps.push(leg.to);
        }
    }

    Route {
        steps,
        legs,
        total_distance,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    state: SearchState,
    name: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(graph: &'a Graph, state: SearchState, cost: f64) -> Self {
        Self {
            state,
            name: graph.name(state.node).unwrap_or_default(),
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then
        // by node name, then car before foot.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.name.cmp(self.name))
            .then_with(|| other.state.mode.cmp(&self.state.mode))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
