use std::fmt::Debug;

use num_traits::{PrimInt, Signed};

use crate::data_structures::{BinHeap, HeapState};
use crate::graph::{Graph, LengthMap};

/// Shortest-path engine for the residual graph of a 0/1 flow
///
/// This is a specialized Dijkstra: arcs with flow 0 are traversed forward,
/// arcs with flow 1 are traversed backward, and all lengths are reduced by
/// the node potentials so that every residual arc is non-negative. After a
/// successful search the potentials of the processed nodes are shifted by
/// their distance to keep that property for the next augmentation.
///
/// One engine instance performs exactly one search; the caller constructs
/// a fresh one per augmentation so that the flow it reads stays immutable
/// for the duration of the search.
pub(crate) struct ResidualDijkstra<'a, W, G, L>
where
    W: PrimInt + Signed + Debug,
    G: Graph,
    L: LengthMap<W>,
{
    graph: &'a G,
    lengths: &'a L,
    flow: &'a [i32],
    potential: &'a mut [W],

    /// Per-search reduced-cost distances of processed nodes
    dist: Vec<W>,

    /// Predecessor arc of each reached node in the shortest-path tree
    pred: &'a mut [Option<usize>],

    /// Nodes finalized by this search, in pop order
    proc_nodes: Vec<usize>,

    source: usize,
    target: usize,
}

impl<'a, W, G, L> ResidualDijkstra<'a, W, G, L>
where
    W: PrimInt + Signed + Debug,
    G: Graph,
    L: LengthMap<W>,
{
    pub(crate) fn new(
        graph: &'a G,
        lengths: &'a L,
        flow: &'a [i32],
        potential: &'a mut [W],
        pred: &'a mut [Option<usize>],
        source: usize,
        target: usize,
    ) -> Self {
        let node_count = graph.node_count();
        ResidualDijkstra {
            graph,
            lengths,
            flow,
            potential,
            dist: vec![W::zero(); node_count],
            pred,
            proc_nodes: Vec::new(),
            source,
            target,
        }
    }

    /// Runs the search. Returns true if the target is reachable in the
    /// residual graph.
    ///
    /// On success `pred` holds the shortest-path tree restricted to the
    /// processed nodes and the potentials are updated. On failure the
    /// potentials are left untouched.
    pub(crate) fn run(mut self) -> bool {
        let mut heap: BinHeap<W> = BinHeap::new(self.graph.node_count());
        heap.push(self.source, W::zero());
        self.pred[self.source] = None;

        // Process nodes
        while !heap.is_empty() && heap.top() != self.target {
            let u = heap.top();
            let prio = heap.prio();
            // Unreduced distance of u in the current residual graph
            let d = prio + self.potential[u];
            self.dist[u] = prio;
            heap.pop();
            self.proc_nodes.push(u);

            // Traverse outgoing arcs with residual forward capacity
            for e in self.graph.outgoing_arcs(u) {
                if self.flow[e] == 0 {
                    let v = self.graph.target(e);
                    let nd = d + self.lengths.length(e) - self.potential[v];
                    match heap.state(v) {
                        HeapState::PreHeap => {
                            heap.push(v, nd);
                            self.pred[v] = Some(e);
                        }
                        HeapState::InHeap => {
                            if nd < heap.priority(v) {
                                heap.decrease(v, nd);
                                self.pred[v] = Some(e);
                            }
                        }
                        HeapState::PostHeap => {}
                    }
                }
            }

            // Traverse incoming arcs carrying flow, i.e. reverse residual arcs
            for e in self.graph.incoming_arcs(u) {
                if self.flow[e] == 1 {
                    let v = self.graph.source(e);
                    let nd = d - self.lengths.length(e) - self.potential[v];
                    match heap.state(v) {
                        HeapState::PreHeap => {
                            heap.push(v, nd);
                            self.pred[v] = Some(e);
                        }
                        HeapState::InHeap => {
                            if nd < heap.priority(v) {
                                heap.decrease(v, nd);
                                self.pred[v] = Some(e);
                            }
                        }
                        HeapState::PostHeap => {}
                    }
                }
            }
        }
        if heap.is_empty() {
            return false;
        }

        // Update potentials of processed nodes
        let t_dist = heap.prio();
        for &n in &self.proc_nodes {
            self.potential[n] = self.potential[n] + self.dist[n] - t_dist;
        }
        true
    }
}
