use crate::graph::directed::DirectedGraph;
use rand::prelude::*;

/// Generates a uniform random directed multigraph with `nodes` nodes and
/// `arcs` arcs
///
/// Arc lengths are drawn uniformly from `0..=max_length`, so zero-length
/// arcs occur on purpose. Self-loops are skipped; parallel arcs are kept.
pub fn generate_gnm(nodes: usize, arcs: usize, max_length: i64) -> DirectedGraph<i64> {
    assert!(nodes >= 2, "nodes must be at least 2");

    let mut graph = DirectedGraph::with_capacity(nodes);
    let mut rng = rand::thread_rng();

    let mut added = 0;
    while added < arcs {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        if u != v {
            let length = rng.gen_range(0..=max_length);
            if graph.add_arc(u, v, length).is_some() {
                added += 1;
            }
        }
    }

    graph
}

/// Generates a layered digraph with a single source and a single target
///
/// Node 0 is the source, the last node is the target. The source fans out
/// to every node of the first layer, consecutive layers are completely
/// wired, and the last layer fans in to the target. The instance therefore
/// has `width` arc-disjoint source-target paths, which makes it a useful
/// stress input for disjoint-path queries.
pub fn generate_layered(layers: usize, width: usize, max_length: i64) -> DirectedGraph<i64> {
    assert!(layers >= 1, "layers must be at least 1");
    assert!(width >= 1, "width must be at least 1");

    let nodes = layers * width + 2;
    let mut graph = DirectedGraph::with_capacity(nodes);
    let mut rng = rand::thread_rng();

    let source = 0;
    let target = nodes - 1;
    let layer_node = |layer: usize, slot: usize| 1 + layer * width + slot;

    for slot in 0..width {
        let length = rng.gen_range(0..=max_length);
        let _ = graph.add_arc(source, layer_node(0, slot), length);
    }

    for layer in 1..layers {
        for from_slot in 0..width {
            for to_slot in 0..width {
                let length = rng.gen_range(0..=max_length);
                let _ = graph.add_arc(layer_node(layer - 1, from_slot), layer_node(layer, to_slot), length);
            }
        }
    }

    for slot in 0..width {
        let length = rng.gen_range(0..=max_length);
        let _ = graph.add_arc(layer_node(layers - 1, slot), target, length);
    }

    graph
}
