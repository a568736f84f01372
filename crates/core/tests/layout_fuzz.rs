use core::layout::graph::LayoutGraph;
use core::layout::mst::minimum_spanning_forest;
use core::{LayoutConfig, LayoutGenerator};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};

/// Independent Prim's implementation used as an oracle for total forest
/// weight. Grows each component from its lowest-index unvisited node by
/// repeatedly taking the cheapest edge crossing the cut.
fn prim_forest_weight(graph: &LayoutGraph) -> u64 {
    let nodes = graph.nodes();
    let index_of = |room| nodes.iter().position(|&n| n == room).expect("endpoint in nodes");

    let mut visited = vec![false; nodes.len()];
    let mut total = 0u64;

    for start in 0..nodes.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;

        loop {
            let mut cheapest: Option<(u32, usize)> = None;
            for edge in graph.edges() {
                let (from, to) = (index_of(edge.from), index_of(edge.to));
                let crossing = match (visited[from], visited[to]) {
                    (true, false) => Some(to),
                    (false, true) => Some(from),
                    _ => None,
                };
                if let Some(outside) = crossing
                    && cheapest.is_none_or(|(weight, _)| edge.weight < weight)
                {
                    cheapest = Some((edge.weight, outside));
                }
            }

            match cheapest {
                Some((weight, outside)) => {
                    visited[outside] = true;
                    total += weight as u64;
                }
                None => break,
            }
        }
    }

    total
}

fn component_count(graph: &LayoutGraph) -> usize {
    let nodes = graph.nodes();
    let index_of = |room| nodes.iter().position(|&n| n == room).expect("endpoint in nodes");

    let mut parent: Vec<usize> = (0..nodes.len()).collect();
    fn find(parent: &mut Vec<usize>, mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for edge in graph.edges() {
        let (a, b) = (find(&mut parent, index_of(edge.from)), find(&mut parent, index_of(edge.to)));
        if a != b {
            parent[a] = b;
        }
    }

    (0..nodes.len()).filter(|&i| find(&mut parent, i) == i).count()
}

fn run_layout_case(seed: u64) -> Result<(), String> {
    let config = LayoutConfig {
        room_count: (seed % 9) as usize,
        horizontal_extent: 5.0 + (seed % 7) as f32 * 10.0,
        min_room_distance: 1.0 + (seed % 3) as f32,
        floor_count: 1 + (seed % 4) as usize,
        seed,
        ..LayoutConfig::default()
    };
    let mut generator = LayoutGenerator::new(config);
    let layout = generator.generate();
    let graph = generator.graph();

    // No unordered pair may appear twice.
    for (index, left) in graph.edges().iter().enumerate() {
        for right in &graph.edges()[index + 1..] {
            if left.connects(right.from, right.to) {
                return Err(format!("duplicate edge on seed {seed}: {left:?} vs {right:?}"));
            }
        }
    }

    // A spanning forest has exactly K - C edges.
    let forest = minimum_spanning_forest(graph);
    let expected = graph.node_count() - component_count(graph);
    if forest.len() != expected {
        return Err(format!(
            "seed {seed}: forest has {} edges, expected {expected}",
            forest.len()
        ));
    }
    if layout.corridors.len() != forest.len() {
        return Err(format!("seed {seed}: corridor count diverged from forest size"));
    }

    // Kruskal's total weight must match the Prim oracle.
    let kruskal: u64 = forest.iter().map(|e| e.weight as u64).sum();
    let prim = prim_forest_weight(graph);
    if kruskal != prim {
        return Err(format!("seed {seed}: kruskal weight {kruskal} != prim weight {prim}"));
    }

    // Distance capping must never re-introduce an overlap.
    if layout.relaxation_converged {
        for (index, &left) in layout.room_positions.iter().enumerate() {
            for &right in &layout.room_positions[index + 1..] {
                let distance = left.distance(right);
                if distance < config.min_room_distance - config.epsilon {
                    return Err(format!("seed {seed}: rooms only {distance} apart"));
                }
            }
        }
    }

    Ok(())
}

#[test]
fn test_fuzz_layout_invariants() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));

    runner
        .run(&any::<u64>(), |seed| {
            run_layout_case(seed).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("layout generation should preserve graph and spacing invariants");
}
