use crate::graph::traits::{Graph, LengthMap};
use num_traits::{PrimInt, Signed};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed multigraph implementation using adjacency lists
///
/// Every arc gets a dense identifier in insertion order, so flow values,
/// lengths and predecessor entries can all be kept in plain vectors
/// indexed by arc. Parallel arcs and self-loops are allowed.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Number of nodes in the graph
    node_count: usize,

    /// Arc endpoints indexed by arc id: arc_id -> (source, target)
    arcs: Vec<(usize, usize)>,

    /// Arc lengths indexed by arc id
    lengths: Vec<W>,

    /// Outgoing arcs for each node: node_id -> [arc_id]
    outgoing: HashMap<usize, Vec<usize>>,

    /// Incoming arcs for each node: node_id -> [arc_id]
    incoming: HashMap<usize, Vec<usize>>,
}

impl<W> DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            node_count: 0,
            arcs: Vec::new(),
            lengths: Vec::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Creates a new directed graph with the specified number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        let mut graph = DirectedGraph {
            node_count: nodes,
            arcs: Vec::new(),
            lengths: Vec::new(),
            outgoing: HashMap::with_capacity(nodes),
            incoming: HashMap::with_capacity(nodes),
        };

        // Initialize empty arc lists for each node
        for n in 0..nodes {
            graph.outgoing.insert(n, Vec::new());
            graph.incoming.insert(n, Vec::new());
        }

        graph
    }

    /// Adds a node to the graph and returns its ID
    pub fn add_node(&mut self) -> usize {
        let new_id = self.node_count;
        self.outgoing.insert(new_id, Vec::new());
        self.incoming.insert(new_id, Vec::new());
        self.node_count += 1;
        new_id
    }

    /// Adds a directed arc between two nodes and returns its ID
    ///
    /// Returns `None` if either endpoint does not exist. Arc lengths may
    /// be zero; the disjoint-path algorithm rejects negative values at
    /// `init`, so `validate_non_negative` is worth calling on graphs
    /// built from untrusted input.
    pub fn add_arc(&mut self, from: usize, to: usize, length: W) -> Option<usize> {
        if !self.has_node(from) || !self.has_node(to) {
            return None;
        }

        let arc_id = self.arcs.len();
        self.arcs.push((from, to));
        self.lengths.push(length);

        self.outgoing.entry(from).or_default().push(arc_id);
        self.incoming.entry(to).or_default().push(arc_id);

        Some(arc_id)
    }

    /// Returns the first arc from `from` to `to` in iteration order, if any
    pub fn find_arc(&self, from: usize, to: usize) -> Option<usize> {
        self.outgoing
            .get(&from)
            .and_then(|arcs| arcs.iter().find(|&&a| self.arcs[a].1 == to).copied())
    }

    /// Returns the length of an arc
    pub fn arc_length(&self, arc: usize) -> W {
        self.lengths[arc]
    }

    /// Validate that the graph doesn't have negative arc lengths
    pub fn validate_non_negative(&self) -> bool {
        self.lengths.iter().all(|&len| len >= W::zero())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph for DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    fn source(&self, arc: usize) -> usize {
        self.arcs[arc].0
    }

    fn target(&self, arc: usize) -> usize {
        self.arcs[arc].1
    }

    fn outgoing_arcs(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if let Some(arcs) = self.outgoing.get(&node) {
            Box::new(arcs.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_arcs(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if let Some(arcs) = self.incoming.get(&node) {
            Box::new(arcs.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> LengthMap<W> for DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn length(&self, arc: usize) -> W {
        self.lengths[arc]
    }
}
