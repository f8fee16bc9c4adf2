#![allow(dead_code)]

use campusroute_lib::{EdgeSpec, Graph, GraphBuilder, Node, RoutePlan};

/// `A` is a parking spot; `B -> C` is a footpath a car cannot use.
pub fn parking_scenario() -> Graph {
    GraphBuilder::new()
        .node(Node::new("A").parking_spot(true))
        .node(Node::new("B"))
        .node(Node::new("C"))
        .edge("A", "B", EdgeSpec::road(5.0))
        .edge("B", "C", EdgeSpec::walkway(3.0))
        .edge("A", "C", EdgeSpec::road(20.0))
        .build()
        .expect("parking scenario builds")
}

/// Small campus with a fire exit, a lift, stairs and two car parks.
pub fn campus() -> Graph {
    GraphBuilder::new()
        .node(Node::new("Road"))
        .node(Node::new("Car Park").parking_spot(true))
        .node(
            Node::new("Accessible Bay")
                .parking_spot(true)
                .requires_accessibility(true),
        )
        .node(Node::new("Main Door"))
        .node(Node::new("Lobby"))
        .node(Node::new("Corridor"))
        .node(Node::new("Fire Exit").emergency_only(true))
        .node(Node::new("Courtyard"))
        .node(Node::new("Lift").requires_accessibility(true))
        .node(Node::new("First Floor"))
        .edge("Road", "Car Park", EdgeSpec::road(10.0))
        .edge("Road", "Accessible Bay", EdgeSpec::road(14.0))
        .edge("Car Park", "Main Door", EdgeSpec::walkway(6.0))
        .edge("Accessible Bay", "Main Door", EdgeSpec::walkway(3.0))
        .two_way("Main Door", "Lobby", EdgeSpec::walkway(2.0))
        .two_way("Lobby", "Corridor", EdgeSpec::walkway(5.0).emergency_blocked(true))
        .two_way("Corridor", "Courtyard", EdgeSpec::walkway(5.0))
        .edge("Lobby", "Fire Exit", EdgeSpec::walkway(4.0))
        .edge("Fire Exit", "Courtyard", EdgeSpec::walkway(9.0))
        .edge("Lobby", "First Floor", EdgeSpec::stairs(8.0))
        .edge("Lobby", "Lift", EdgeSpec::walkway(1.0))
        .edge("Lift", "First Floor", EdgeSpec::walkway(1.0))
        .edge("First Floor", "Lobby", EdgeSpec::stairs(8.0))
        .build()
        .expect("campus builds")
}

pub fn names(graph: &Graph, plan: &RoutePlan) -> Vec<String> {
    plan.step_names(graph)
        .into_iter()
        .map(str::to_string)
        .collect()
}
