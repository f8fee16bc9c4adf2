use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a node name to be offered as a
/// suggestion when a lookup misses.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a node inside a specific [`Graph`].
///
/// The handle remembers which graph issued it, so passing a node from one
/// graph into a search over another is reported instead of silently
/// resolving to an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    graph: u64,
    index: usize,
}

impl NodeId {
    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} (graph {})", self.index, self.graph)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index as u64)
    }
}

/// A location in the campus layout: a room, corridor junction, door, lift or
/// parking area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    /// Car travellers may leave their vehicle here.
    pub is_parking_spot: bool,
    /// The node may only be approached on an accessible route (e.g. a lift).
    pub requires_accessibility: bool,
    /// The node is only usable during an evacuation (e.g. a fire exit).
    pub is_emergency_only: bool,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_parking_spot: false,
            requires_accessibility: false,
            is_emergency_only: false,
        }
    }

    pub fn parking_spot(mut self, value: bool) -> Self {
        self.is_parking_spot = value;
        self
    }

    pub fn requires_accessibility(mut self, value: bool) -> Self {
        self.requires_accessibility = value;
        self
    }

    pub fn emergency_only(mut self, value: bool) -> Self {
        self.is_emergency_only = value;
        self
    }
}

/// Directed edge within the routing graph, owned by its source node.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub distance: f64,
    pub is_accessible: bool,
    pub is_accessible_by_car: bool,
    pub is_emergency_blocked: bool,
}

/// Attributes of an edge prior to graph construction, when the destination
/// is still referenced by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub distance: f64,
    pub is_accessible: bool,
    pub is_accessible_by_car: bool,
    pub is_emergency_blocked: bool,
}

impl EdgeSpec {
    /// Step-free pedestrian connection.
    pub fn walkway(distance: f64) -> Self {
        Self {
            distance,
            is_accessible: true,
            is_accessible_by_car: false,
            is_emergency_blocked: false,
        }
    }

    /// Road usable by cars as well as pedestrians.
    pub fn road(distance: f64) -> Self {
        Self {
            distance,
            is_accessible: true,
            is_accessible_by_car: true,
            is_emergency_blocked: false,
        }
    }

    /// Pedestrian connection with steps.
    pub fn stairs(distance: f64) -> Self {
        Self {
            distance,
            is_accessible: false,
            is_accessible_by_car: false,
            is_emergency_blocked: false,
        }
    }

    pub fn accessible(mut self, value: bool) -> Self {
        self.is_accessible = value;
        self
    }

    pub fn by_car(mut self, value: bool) -> Self {
        self.is_accessible_by_car = value;
        self
    }

    pub fn emergency_blocked(mut self, value: bool) -> Self {
        self.is_emergency_blocked = value;
        self
    }
}

/// Graph structure used by pathfinding algorithms.
///
/// Storage is shared, so clones are cheap and independent searches can run
/// against the same graph from several threads.
#[derive(Debug, Clone)]
pub struct Graph {
    id: u64,
    nodes: Arc<Vec<Node>>,
    adjacency: Arc<Vec<Vec<Edge>>>,
    name_to_id: Arc<HashMap<String, NodeId>>,
}

impl Graph {
    /// Start building a new graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` was issued by this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.graph == self.id && id.index < self.nodes.len()
    }

    /// Lookup a node identifier by its case-sensitive name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if !self.contains(id) {
            return None;
        }
        self.nodes.get(id.index)
    }

    /// Lookup a node name by identifier.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.name.as_str())
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(move |(index, node)| {
            (
                NodeId {
                    graph: self.id,
                    index,
                },
                node,
            )
        })
    }

    /// Return the outgoing edges for a given node, in insertion order.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        if !self.contains(id) {
            return &[];
        }
        self.adjacency
            .get(id.index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Node names most similar to `name`, best match first.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .map(|node| {
                let score = strsim::jaro_winkler(&needle, &node.name.to_lowercase());
                (score, node.name.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Resolve a node name, attaching close matches to the error on a miss.
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        self.node_id(name).ok_or_else(|| Error::UnknownNode {
            name: name.to_string(),
            suggestions: self.fuzzy_node_matches(name, 3),
        })
    }
}

/// Incremental constructor for [`Graph`].
///
/// Edges refer to nodes by name and may be declared before their endpoints;
/// everything is validated in [`GraphBuilder::build`].
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<(String, String, EdgeSpec)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, spec: EdgeSpec) -> Self {
        self.edges.push((from.into(), to.into(), spec));
        self
    }

    /// Add the same connection in both directions.
    pub fn two_way(self, a: impl Into<String>, b: impl Into<String>, spec: EdgeSpec) -> Self {
        let a = a.into();
        let b = b.into();
        self.edge(a.clone(), b.clone(), spec).edge(b, a, spec)
    }

    /// Validate the declared nodes and edges and freeze them into a graph.
    pub fn build(self) -> Result<Graph> {
        let id = NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed);

        let mut name_to_id = HashMap::with_capacity(self.nodes.len());
        for (index, node) in self.nodes.iter().enumerate() {
            if name_to_id
                .insert(node.name.clone(), NodeId { graph: id, index })
                .is_some()
            {
                return Err(Error::DuplicateNode {
                    name: node.name.clone(),
                });
            }
        }

        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); self.nodes.len()];
        for (from, to, spec) in self.edges {
            let (Some(source), Some(target)) = (name_to_id.get(&from), name_to_id.get(&to))
            else {
                return Err(Error::MalformedGraph { from, to });
            };
            if !spec.distance.is_finite() || spec.distance < 0.0 {
                return Err(Error::InvalidDistance {
                    from,
                    to,
                    distance: spec.distance,
                });
            }
            adjacency[source.index].push(Edge {
                target: *target,
                distance: spec.distance,
                is_accessible: spec.is_accessible,
                is_accessible_by_car: spec.is_accessible_by_car,
                is_emergency_blocked: spec.is_emergency_blocked,
            });
        }

        debug!(
            nodes = self.nodes.len(),
            edges = adjacency.iter().map(Vec::len).sum::<usize>(),
            "built campus graph"
        );

        Ok(Graph {
            id,
            nodes: Arc::new(self.nodes),
            adjacency: Arc::new(adjacency),
            name_to_id: Arc::new(name_to_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> Graph {
        Graph::builder()
            .node(Node::new("Entrance"))
            .node(Node::new("Hall"))
            .node(Node::new("Lift").requires_accessibility(true))
            .two_way("Entrance", "Hall", EdgeSpec::walkway(4.0))
            .edge("Hall", "Lift", EdgeSpec::walkway(1.0))
            .build()
            .expect("graph builds")
    }

    #[test]
    fn edges_keep_insertion_order() {
        let graph = small_graph();
        let hall = graph.node_id("Hall").unwrap();
        let targets: Vec<_> = graph
            .neighbours(hall)
            .iter()
            .map(|edge| graph.name(edge.target).unwrap())
            .collect();
        assert_eq!(targets, vec!["Entrance", "Lift"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn node_ids_follow_insertion_order() {
        let graph = small_graph();
        let indices: Vec<_> = ["Entrance", "Hall", "Lift"]
            .iter()
            .map(|name| graph.node_id(name).unwrap().index())
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn foreign_ids_are_not_contained() {
        let first = small_graph();
        let second = small_graph();
        let hall = first.node_id("Hall").unwrap();
        assert!(first.contains(hall));
        assert!(!second.contains(hall));
        assert!(second.node(hall).is_none());
        assert!(second.neighbours(hall).is_empty());
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let err = GraphBuilder::new()
            .node(Node::new("A"))
            .edge("A", "Nowhere", EdgeSpec::walkway(1.0))
            .build()
            .expect_err("dangling edge");
        assert!(matches!(err, Error::MalformedGraph { ref to, .. } if to == "Nowhere"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = GraphBuilder::new()
            .node(Node::new("A"))
            .node(Node::new("A").parking_spot(true))
            .build()
            .expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateNode { .. }));
    }

    #[test]
    fn negative_and_nan_distances_are_rejected() {
        for distance in [-1.0, f64::NAN, f64::INFINITY] {
            let err = GraphBuilder::new()
                .node(Node::new("A"))
                .node(Node::new("B"))
                .edge("A", "B", EdgeSpec::road(distance))
                .build()
                .expect_err("bad distance");
            assert!(matches!(err, Error::InvalidDistance { .. }));
        }
    }

    #[test]
    fn resolve_suggests_close_names() {
        let graph = small_graph();
        let err = graph.resolve("Entrnce").expect_err("typo");
        match err {
            Error::UnknownNode { suggestions, .. } => {
                assert_eq!(suggestions.first().map(String::as_str), Some("Entrance"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
