use thiserror::Error;

/// Convenient result alias for the campus routing library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node name could not be found in the graph.
    #[error("unknown node name: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a node handle does not belong to the graph being searched.
    #[error("node {node} does not belong to this graph")]
    InvalidReference { node: String },

    /// Raised when no admissible route exists between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when an edge references a node that was never added.
    #[error("malformed graph: edge from {from} references missing node {to}")]
    MalformedGraph { from: String, to: String },

    /// Raised when two nodes share the same name.
    #[error("duplicate node name encountered: {name}")]
    DuplicateNode { name: String },

    /// Raised when an edge distance is negative or not finite.
    #[error("invalid distance {distance} on edge {from} -> {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    /// Raised when the caller cancelled a running search.
    #[error("route search was cancelled")]
    SearchCancelled,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
