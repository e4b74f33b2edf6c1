//! Minimum-length arc-disjoint paths in directed graphs.
//!
//! This library finds `k` arc-disjoint directed paths of minimum total
//! length from a source node to a target node in a digraph with
//! non-negative integer arc lengths. The problem is a special case of
//! minimum cost flow with unit capacities, and the implementation is a
//! specialized successive shortest path algorithm: each augmentation runs
//! a Dijkstra-style search over the residual graph under reduced costs,
//! then shifts the node potentials so that all residual arcs stay
//! non-negative for the next round.
//!
//! Besides the paths themselves, the algorithm exposes the underlying
//! 0/1 arc flow and the node potentials (the dual solution), just like a
//! general min-cost flow solver would.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::suurballe::Suurballe;
pub use graph::directed::DirectedGraph;
pub use graph::path::Path;

/// Error types for the library
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Source node not found in graph: {0}")]
    SourceNotFound(usize),

    #[error("Target node not found in graph: {0}")]
    TargetNotFound(usize),

    #[error("Negative length on arc {0}")]
    NegativeLength(usize),

    #[error("init must be called before find_flow")]
    NotInitialized,

    #[error("find_flow must be called before find_paths")]
    FlowNotComputed,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
