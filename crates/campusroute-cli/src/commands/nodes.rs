//! Lists the locations known to the campus graph.

use anyhow::{Context, Result};
use serde::Serialize;

use campusroute_lib::Graph;

use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct NodeListing<'a> {
    name: &'a str,
    parking: bool,
    accessible_only: bool,
    emergency_only: bool,
    exits: usize,
}

/// Handle the nodes subcommand.
pub fn handle_nodes_command(graph: &Graph, format: OutputFormat) -> Result<()> {
    let listings: Vec<_> = graph
        .nodes()
        .map(|(id, node)| NodeListing {
            name: &node.name,
            parking: node.is_parking_spot,
            accessible_only: node.requires_accessibility,
            emergency_only: node.is_emergency_only,
            exits: graph.neighbours(id).len(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&listings).context("failed to serialize node list")?
        ),
        OutputFormat::Text => {
            for listing in &listings {
                let mut tags = Vec::new();
                if listing.parking {
                    tags.push("parking");
                }
                if listing.accessible_only {
                    tags.push("accessible only");
                }
                if listing.emergency_only {
                    tags.push("emergency only");
                }
                if tags.is_empty() {
                    println!("- {} ({} exits)", listing.name, listing.exits);
                } else {
                    println!(
                        "- {} ({} exits) [{}]",
                        listing.name,
                        listing.exits,
                        tags.join(", ")
                    );
                }
            }
        }
    }
    Ok(())
}
