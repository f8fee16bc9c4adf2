//! Output formatting for route rendering.
//!
//! Plans are rendered either as a numbered plain-text list or as JSON with
//! node names resolved, so consumers never see raw node handles.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use campusroute_lib::{Graph, PathConstraints, RouteAlgorithm, RoutePlan, TravelMode};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Route with node names resolved, ready for printing or serialization.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub start_mode: TravelMode,
    pub constraints: PathConstraints,
    pub total_distance: f64,
    pub hops: usize,
    pub steps: Vec<RouteStep>,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    /// Distance of the leg that arrived here; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TravelMode>,
}

impl RouteSummary {
    pub fn from_plan(graph: &Graph, plan: &RoutePlan, constraints: PathConstraints) -> Self {
        let name_of = |id| graph.name(id).unwrap_or("<unknown>").to_string();

        let mut steps = Vec::with_capacity(plan.steps.len());
        if let Some(first) = plan.steps.first() {
            steps.push(RouteStep {
                index: 1,
                name: name_of(*first),
                distance: None,
                mode: None,
            });
        }
        for leg in &plan.legs {
            steps.push(RouteStep {
                index: steps.len() + 1,
                name: name_of(leg.to),
                distance: Some(leg.distance),
                mode: Some(leg.arrival_mode),
            });
        }

        Self {
            algorithm: plan.algorithm,
            start: name_of(plan.start),
            goal: name_of(plan.goal),
            start_mode: plan.start_mode,
            constraints,
            total_distance: plan.total_distance,
            hops: plan.hop_count(),
            steps,
        }
    }

    /// Human-friendly route view with algorithm annotation.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Route from {} to {} (algorithm: {})",
            self.start, self.goal, self.algorithm
        );
        let _ = writeln!(
            out,
            "Policies: accessible={} emergency={} start={}",
            yes_no(self.constraints.require_accessible),
            yes_no(self.constraints.emergency_mode),
            mode_label(self.start_mode)
        );
        for step in &self.steps {
            match (step.distance, step.mode) {
                (Some(distance), Some(mode)) => {
                    let _ = writeln!(
                        out,
                        "{:>3}. {:<24} +{:.1} {}",
                        step.index,
                        step.name,
                        distance,
                        mode_label(mode)
                    );
                }
                _ => {
                    let _ = writeln!(out, "{:>3}. {}", step.index, step.name);
                }
            }
        }
        let _ = write!(
            out,
            "Total distance: {:.1} over {} hops",
            self.total_distance, self.hops
        );
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn mode_label(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Car => "by car",
        TravelMode::Foot => "on foot",
    }
}
