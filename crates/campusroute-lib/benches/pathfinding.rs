use campusroute_lib::{
    plan_route, EdgeSpec, Graph, GraphBuilder, Node, RouteAlgorithm, RouteRequest,
};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

const GRID_SIZE: usize = 12;

fn cell(row: usize, col: usize) -> String {
    format!("R{row}C{col}")
}

/// Square campus grid: roads along the top row and left column, footpaths
/// everywhere else, and a car park at every fourth cell of the top row.
fn grid_campus() -> Graph {
    let mut builder = GraphBuilder::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let parking = row == 0 && col % 4 == 0;
            builder = builder.node(Node::new(cell(row, col)).parking_spot(parking));
        }
    }
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let distance = 1.0 + ((row * 7 + col * 3) % 5) as f64;
            let spec = if row == 0 || col == 0 {
                EdgeSpec::road(distance)
            } else {
                EdgeSpec::walkway(distance)
            };
            if col + 1 < GRID_SIZE {
                builder = builder.two_way(cell(row, col), cell(row, col + 1), spec);
            }
            if row + 1 < GRID_SIZE {
                builder = builder.two_way(cell(row, col), cell(row + 1, col), spec);
            }
        }
    }
    builder.build().expect("grid builds")
}

static GRAPH: Lazy<Graph> = Lazy::new(grid_campus);
static DIJKSTRA_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new(cell(GRID_SIZE - 1, 0), cell(GRID_SIZE - 1, GRID_SIZE - 1)).by_car(true)
});
static DEPTH_FIRST_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    DIJKSTRA_REQUEST
        .clone()
        .with_algorithm(RouteAlgorithm::DepthFirst)
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("dijkstra_grid_by_car", |b| {
        let request = &*DIJKSTRA_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.total_distance)
        });
    });

    c.bench_function("depth_first_grid_by_car", |b| {
        let request = &*DEPTH_FIRST_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.total_distance)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
