//! Built-in sample campus used by the CLI.

use campusroute_lib::{EdgeSpec, Graph, GraphBuilder, Node, Result};

/// A two-building campus with a visitor car park, an accessible parking bay,
/// a lift, stairs and an evacuation route through the fire exit.
pub fn sample_campus() -> Result<Graph> {
    GraphBuilder::new()
        .node(Node::new("Main Gate"))
        .node(Node::new("Ring Road"))
        .node(Node::new("Visitor Parking").parking_spot(true))
        .node(
            Node::new("Accessible Parking")
                .parking_spot(true)
                .requires_accessibility(true),
        )
        .node(Node::new("Entrance"))
        .node(Node::new("Reception"))
        .node(Node::new("East Corridor"))
        .node(Node::new("Fire Exit").emergency_only(true))
        .node(Node::new("Assembly Point"))
        .node(Node::new("Lift").requires_accessibility(true))
        .node(Node::new("Stairwell"))
        .node(Node::new("Lecture Hall"))
        .node(Node::new("Library"))
        .two_way("Main Gate", "Ring Road", EdgeSpec::road(120.0))
        .two_way("Ring Road", "Visitor Parking", EdgeSpec::road(80.0))
        .two_way("Ring Road", "Accessible Parking", EdgeSpec::road(150.0))
        .two_way("Main Gate", "Entrance", EdgeSpec::walkway(260.0))
        .two_way("Visitor Parking", "Entrance", EdgeSpec::walkway(90.0))
        .two_way("Accessible Parking", "Entrance", EdgeSpec::walkway(20.0))
        .two_way("Entrance", "Reception", EdgeSpec::walkway(15.0))
        .two_way(
            "Reception",
            "East Corridor",
            EdgeSpec::walkway(40.0).emergency_blocked(true),
        )
        .two_way("East Corridor", "Library", EdgeSpec::walkway(35.0))
        .edge("Reception", "Fire Exit", EdgeSpec::walkway(25.0))
        .edge("Fire Exit", "Assembly Point", EdgeSpec::walkway(60.0))
        .edge("Library", "Assembly Point", EdgeSpec::walkway(50.0))
        .edge("Entrance", "Assembly Point", EdgeSpec::walkway(130.0).emergency_blocked(true))
        .two_way("Reception", "Lift", EdgeSpec::walkway(5.0))
        .two_way("Lift", "Lecture Hall", EdgeSpec::walkway(10.0))
        .two_way("Reception", "Stairwell", EdgeSpec::stairs(8.0))
        .two_way("Stairwell", "Lecture Hall", EdgeSpec::stairs(12.0))
        .build()
}
