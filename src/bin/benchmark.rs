use std::time::Instant;

use log::info;
use suurballe::graph::generators::{generate_gnm, generate_layered};
use suurballe::graph::Graph;
use suurballe::Suurballe;

fn main() {
    env_logger::init();

    // Graph sizes to test: (nodes, arcs per node)
    let gnm_sizes = vec![
        (1_000, 4),
        (10_000, 4),
        (50_000, 4),
        (100_000, 4),
    ];
    let k = 4;
    let max_length = 100;

    println!("=====================================================");
    println!("Benchmark: arc-disjoint shortest paths, k = {}", k);
    println!("=====================================================");

    let mut results = Vec::new();

    for &(nodes, arc_factor) in &gnm_sizes {
        info!("generating G(n,m) instance with {} nodes", nodes);
        let graph = generate_gnm(nodes, nodes * arc_factor, max_length);
        println!(
            "\nGraph has {} nodes and {} arcs",
            graph.node_count(),
            graph.arc_count()
        );

        let source = 0;
        let target = nodes - 1;

        let mut alg = Suurballe::new(&graph, &graph);
        let start = Instant::now();
        let found = alg.run(source, target, k).unwrap();
        let elapsed = start.elapsed();

        println!(
            "  - Found {} arc-disjoint paths of total length {} in {:?}",
            found,
            alg.total_length(),
            elapsed
        );
        results.push((nodes, graph.arc_count(), found, elapsed));
    }

    // Layered instances always contain k disjoint paths, so every run
    // exercises the full k augmentations including reverse-arc cancels.
    for &(layers, width) in &[(10usize, 8usize), (50, 8), (100, 16)] {
        info!("generating layered instance {}x{}", layers, width);
        let graph = generate_layered(layers, width, max_length);
        let source = 0;
        let target = graph.node_count() - 1;

        let mut alg = Suurballe::new(&graph, &graph);
        let start = Instant::now();
        let found = alg.run(source, target, k).unwrap();
        let elapsed = start.elapsed();

        println!(
            "\nLayered {}x{}: {} nodes, {} arcs",
            layers,
            width,
            graph.node_count(),
            graph.arc_count()
        );
        println!(
            "  - Found {} arc-disjoint paths of total length {} in {:?}",
            found,
            alg.total_length(),
            elapsed
        );
        results.push((graph.node_count(), graph.arc_count(), found, elapsed));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<8} | {:<12}",
        "Nodes", "Arcs", "Paths", "Time (ms)"
    );
    println!("-----------------------------------------------------");
    for (nodes, arcs, found, elapsed) in &results {
        println!(
            "{:<10} | {:<10} | {:<8} | {:<12.2}",
            nodes,
            arcs,
            found,
            elapsed.as_secs_f64() * 1000.0
        );
    }
}
