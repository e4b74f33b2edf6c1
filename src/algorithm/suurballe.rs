use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use num_traits::{PrimInt, Signed};

use crate::algorithm::residual::ResidualDijkstra;
use crate::graph::{Graph, LengthMap, Path};
use crate::{Error, Result};

/// Storage for a result map that is either owned by the algorithm or
/// borrowed from the caller
///
/// Borrowed maps are resized and zeroed at `init` and keep the final
/// values after the algorithm instance is dropped.
#[derive(Debug)]
enum MapStore<'a, T> {
    Owned(Vec<T>),
    Borrowed(&'a mut Vec<T>),
}

impl<'a, T> MapStore<'a, T> {
    fn vec_mut(&mut self) -> &mut Vec<T> {
        match self {
            MapStore::Owned(vec) => vec,
            MapStore::Borrowed(vec) => vec,
        }
    }

    fn reset(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        let vec = self.vec_mut();
        vec.clear();
        vec.resize(len, value);
    }
}

impl<'a, T> Deref for MapStore<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            MapStore::Owned(vec) => vec.as_slice(),
            MapStore::Borrowed(vec) => vec.as_slice(),
        }
    }
}

impl<'a, T> DerefMut for MapStore<'a, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        match self {
            MapStore::Owned(vec) => vec.as_mut_slice(),
            MapStore::Borrowed(vec) => vec.as_mut_slice(),
        }
    }
}

/// Algorithm for finding arc-disjoint paths between two nodes having
/// minimum total length
///
/// The problem is a special case of minimum cost flow with unit
/// capacities, solved by successive shortest path augmentation: every
/// round runs a Dijkstra-style search on the residual graph under reduced
/// costs and flips the flow along the found path. Reverse residual arcs
/// let later rounds cancel arcs chosen earlier, so the union of the final
/// paths is globally optimal, not just greedily stacked.
///
/// Arc lengths must be non-negative integers; `init` rejects negative
/// values. For node-disjoint paths, split the nodes of the input graph
/// before calling the algorithm.
///
/// # Examples
///
/// ```
/// use suurballe::{DirectedGraph, Suurballe};
///
/// let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(4);
/// graph.add_arc(0, 1, 1).unwrap();
/// graph.add_arc(0, 2, 5).unwrap();
/// graph.add_arc(1, 3, 1).unwrap();
/// graph.add_arc(2, 3, 1).unwrap();
///
/// let mut alg = Suurballe::new(&graph, &graph);
/// let found = alg.run(0, 3, 2).unwrap();
/// assert_eq!(found, 2);
/// assert_eq!(alg.total_length(), 8);
/// ```
#[derive(Debug)]
pub struct Suurballe<'a, W, G, L = G>
where
    W: PrimInt + Signed + Debug,
    G: Graph,
    L: LengthMap<W>,
{
    /// The digraph the algorithm runs on
    graph: &'a G,

    /// The arc lengths
    lengths: &'a L,

    /// Arc map of the current flow, 0 or 1 per arc
    flow: MapStore<'a, i32>,

    /// Node map of the current potentials (the dual solution)
    potential: MapStore<'a, W>,

    /// Predecessor arc of each node in the latest shortest-path tree
    pred: Vec<Option<usize>>,

    /// The found arc-disjoint paths
    paths: Vec<Path>,
    path_num: usize,

    source: Option<usize>,
    target: Option<usize>,
}

impl<'a, W, G, L> Suurballe<'a, W, G, L>
where
    W: PrimInt + Signed + Debug,
    G: Graph,
    L: LengthMap<W>,
{
    /// Creates a new algorithm instance for the given graph and lengths
    pub fn new(graph: &'a G, lengths: &'a L) -> Self {
        Suurballe {
            graph,
            lengths,
            flow: MapStore::Owned(Vec::new()),
            potential: MapStore::Owned(Vec::new()),
            pred: Vec::new(),
            paths: Vec::new(),
            path_num: 0,
            source: None,
            target: None,
        }
    }

    /// Uses the given vector as the flow map instead of an internal one
    ///
    /// The vector is resized over the arcs and zeroed by `init`; it holds
    /// the union of the found paths as 0/1 values after the run.
    pub fn with_flow_map(mut self, map: &'a mut Vec<i32>) -> Self {
        self.flow = MapStore::Borrowed(map);
        self
    }

    /// Uses the given vector as the potential map instead of an internal
    /// one
    ///
    /// The vector is resized over the nodes and zeroed by `init`; it holds
    /// the dual solution after the run.
    pub fn with_potential_map(mut self, map: &'a mut Vec<W>) -> Self {
        self.potential = MapStore::Borrowed(map);
        self
    }

    /// Runs the algorithm: at most `k` arc-disjoint paths from `s` to `t`
    ///
    /// Equivalent to `init(s)`, `find_flow(t, k)` and `find_paths()` in
    /// sequence. Returns the number of paths found, which is `k` if the
    /// graph contains at least `k` arc-disjoint paths from `s` to `t`.
    pub fn run(&mut self, s: usize, t: usize, k: usize) -> Result<usize> {
        self.init(s)?;
        self.find_flow(t, k)?;
        self.find_paths()?;
        Ok(self.path_num)
    }

    /// Initializes the algorithm for the given source node
    ///
    /// Zeroes the flow and potential maps and validates that every arc
    /// length is non-negative.
    pub fn init(&mut self, s: usize) -> Result<()> {
        if !self.graph.has_node(s) {
            return Err(Error::SourceNotFound(s));
        }
        for e in 0..self.graph.arc_count() {
            if self.lengths.length(e) < W::zero() {
                return Err(Error::NegativeLength(e));
            }
        }

        self.source = Some(s);
        self.target = None;
        self.flow.reset(self.graph.arc_count(), 0);
        self.potential.reset(self.graph.node_count(), W::zero());
        self.pred = vec![None; self.graph.node_count()];
        self.paths.clear();
        self.path_num = 0;
        Ok(())
    }

    /// Executes the successive shortest path algorithm to find an optimal
    /// flow, which is the union of `k` or fewer arc-disjoint paths
    ///
    /// Returns the number of augmenting paths found. Stops early when the
    /// target becomes unreachable in the residual graph; fewer than `k`
    /// paths is an ordinary outcome, not an error.
    ///
    /// `init` must have been called before.
    pub fn find_flow(&mut self, t: usize, k: usize) -> Result<usize> {
        let s = self.source.ok_or(Error::NotInitialized)?;
        if !self.graph.has_node(t) {
            return Err(Error::TargetNotFound(t));
        }
        self.target = Some(t);
        self.path_num = 0;
        if s == t {
            return Ok(0);
        }

        // Find successive shortest paths
        while self.path_num < k {
            let found = ResidualDijkstra::new(
                self.graph,
                self.lengths,
                &self.flow,
                &mut self.potential,
                &mut self.pred,
                s,
                t,
            )
            .run();
            if !found {
                break;
            }
            self.path_num += 1;

            // Set the flow along the found shortest path. Arcs entering
            // the current node were used forward, arcs leaving it were
            // used in reverse and their earlier flow is cancelled.
            let mut u = t;
            while let Some(e) = self.pred[u] {
                if u == self.graph.target(e) {
                    self.flow[e] = 1;
                    u = self.graph.source(e);
                } else {
                    self.flow[e] = 0;
                    u = self.graph.target(e);
                }
            }
        }
        Ok(self.path_num)
    }

    /// Computes the paths from the found flow
    ///
    /// The flow is the union of `path_num` arc-disjoint source-target
    /// paths; this walks that union greedily and peels off one path at a
    /// time. Which arcs end up grouped into which path depends on the
    /// graph's arc iteration order, the multiset of arcs over all paths
    /// does not.
    ///
    /// `find_flow` must have been called before.
    pub fn find_paths(&mut self) -> Result<()> {
        let s = self.source.ok_or(Error::NotInitialized)?;
        let t = self.target.ok_or(Error::FlowNotComputed)?;

        let mut res_flow: Vec<i32> = self.flow.to_vec();
        self.paths.clear();

        for _ in 0..self.path_num {
            let mut path = Path::new();
            let mut n = s;
            while n != t {
                let e = self
                    .graph
                    .outgoing_arcs(n)
                    .find(|&e| res_flow[e] == 1)
                    .expect("unit flow conserves at every node between source and target");
                res_flow[e] = 0;
                path.add_back(e);
                n = self.graph.target(e);
            }
            self.paths.push(path);
        }
        Ok(())
    }

    /// Returns the total length of the found paths, i.e. the total cost
    /// of the found flow
    pub fn total_length(&self) -> W {
        let mut c = W::zero();
        for e in 0..self.graph.arc_count() {
            if self.flow[e] == 1 {
                c = c + self.lengths.length(e);
            }
        }
        c
    }

    /// Returns the flow value on the given arc: 1 if the arc is part of
    /// one of the found paths, otherwise 0
    pub fn flow(&self, arc: usize) -> i32 {
        self.flow[arc]
    }

    /// Returns a read-only view of the flow map
    pub fn flow_map(&self) -> &[i32] {
        &self.flow
    }

    /// Returns the potential of the given node
    pub fn potential(&self, node: usize) -> W {
        self.potential[node]
    }

    /// Returns a read-only view of the potential map (the dual solution)
    pub fn potential_map(&self) -> &[W] {
        &self.potential
    }

    /// Returns the number of paths found
    pub fn path_num(&self) -> usize {
        self.path_num
    }

    /// Returns the `i`-th found path
    ///
    /// Panics if `i` is not below `path_num()`.
    pub fn path(&self, i: usize) -> &Path {
        &self.paths[i]
    }

    /// Returns all found paths
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }
}
