use std::fmt::Debug;

/// Trait representing a read-only directed graph with stable arc identifiers
///
/// Nodes and arcs are dense indices: nodes are `0..node_count()` and arcs
/// are `0..arc_count()`. Iteration order of the arc iterators is
/// implementation-defined but must not change while the graph is borrowed.
pub trait Graph: Debug {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of arcs in the graph
    fn arc_count(&self) -> usize;

    /// Returns the tail node of an arc
    fn source(&self, arc: usize) -> usize;

    /// Returns the head node of an arc
    fn target(&self, arc: usize) -> usize;

    /// Returns an iterator over the arcs leaving a node
    fn outgoing_arcs(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over the arcs entering a node
    fn incoming_arcs(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }
}

/// Read-only mapping from arcs to lengths
///
/// The algorithm reads lengths through this trait so that they can live
/// inside the graph structure or in a separate container.
pub trait LengthMap<W> {
    /// Returns the length of an arc
    fn length(&self, arc: usize) -> W;
}

impl<W: Copy> LengthMap<W> for Vec<W> {
    fn length(&self, arc: usize) -> W {
        self[arc]
    }
}
