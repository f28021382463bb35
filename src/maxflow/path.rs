/*
 * Copyright (c) 2017-2023 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Augmenting path search in residual graphs.
//!
//! An augmenting path leads from the source to the sink using only arcs
//! with positive residual capacity. The search is implemented once and
//! parametrized by its [`Frontier`]: a stack gives depth-first search
//! ([`DepthFirst`], used by Ford-Fulkerson), a FIFO queue gives
//! breadth-first search ([`BreadthFirst`], used by Edmonds-Karp).
//!
//! The search records the incoming arc of each discovered node. This
//! predecessor array is also the set of visited nodes: a node is visited
//! iff it has a predecessor or is the source. The search stops as soon
//! as the sink is discovered.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::{CapacityGraph, ResidualGraph};
//! use rs_maxflow::maxflow::path::{BreadthFirst, PathFinder};
//!
//! let g = CapacityGraph::from_arcs(4, vec![(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 1)]);
//! let r = ResidualGraph::new(&g).unwrap();
//!
//! let mut bfs = BreadthFirst::new();
//! let path = bfs.find_path(&r, 0, 3).unwrap();
//! assert_eq!(path.nodes(), &[0, 3]);
//! ```

use crate::collections::Frontier;
use crate::residual::ResidualGraph;
use crate::traits::Capacity;

use std::cmp::Ordering;
use std::collections::VecDeque;

const NONE: usize = usize::MAX;

/// A path in a residual graph.
///
/// The path is stored as its sequence of nodes and the sequence of arcs
/// between consecutive nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<usize>,
    arcs: Vec<usize>,
}

impl Path {
    /// Return the nodes of the path from source to sink.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Return the arcs of the path from source to sink.
    pub fn arcs(&self) -> &[usize] {
        &self.arcs
    }

    /// Return the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// A strategy for finding augmenting paths.
pub trait PathFinder<F> {
    /// Search an augmenting path from `src` to `snk`.
    ///
    /// Returns `None` if the sink cannot be reached via arcs with positive
    /// residual capacity.
    fn find_path(&mut self, g: &ResidualGraph<F>, src: usize, snk: usize) -> Option<&Path>;
}

/// The order in which the neighbors of a node are put into the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborOrder {
    /// Ascending node id.
    ById,
    /// Descending residual capacity, ties broken by ascending node id.
    ByResidual,
}

impl Default for NeighborOrder {
    fn default() -> Self {
        NeighborOrder::ById
    }
}

/// Graph search for augmenting paths with frontier `Fr`.
#[derive(Clone, Debug)]
pub struct Search<Fr> {
    order: NeighborOrder,
    /// The incoming arc of each visited node.
    pred: Vec<usize>,
    frontier: Fr,
    /// Arcs to be followed from the current node.
    cands: Vec<(usize, usize)>,
    path: Path,
}

/// Depth-first search for augmenting paths.
pub type DepthFirst = Search<Vec<usize>>;

/// Breadth-first search for augmenting paths.
///
/// The returned paths have a minimal number of arcs.
pub type BreadthFirst = Search<VecDeque<usize>>;

impl<Fr> Default for Search<Fr>
where
    Fr: Default,
{
    fn default() -> Self {
        Self::with_order(NeighborOrder::default())
    }
}

impl<Fr> Search<Fr>
where
    Fr: Default,
{
    /// Create a new search expanding neighbors by ascending node id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new search expanding neighbors in the given order.
    pub fn with_order(order: NeighborOrder) -> Self {
        Search {
            order,
            pred: vec![],
            frontier: Fr::default(),
            cands: vec![],
            path: Path::default(),
        }
    }
}

impl<Fr> Search<Fr> {
    /// Return the neighbor order of this search.
    pub fn order(&self) -> NeighborOrder {
        self.order
    }

    /// Return the incoming arc of `u` in the latest search.
    ///
    /// Returns `None` if `u` has not been reached (or is the source).
    pub fn incoming(&self, u: usize) -> Option<usize> {
        self.pred.get(u).cloned().filter(|&e| e != NONE)
    }
}

impl<F, Fr> PathFinder<F> for Search<Fr>
where
    F: Capacity,
    Fr: Frontier<usize>,
{
    fn find_path(&mut self, g: &ResidualGraph<F>, src: usize, snk: usize) -> Option<&Path> {
        self.pred.clear();
        self.pred.resize(g.num_nodes(), NONE);
        self.frontier.clear();
        self.frontier.push(src);

        'search: while let Some(u) = self.frontier.pop() {
            self.cands.clear();
            for &(e, v) in g.neighs(u) {
                if v != src && self.pred[v] == NONE && g.residual(e).is_pos() {
                    self.cands.push((e, v));
                }
            }

            if self.order == NeighborOrder::ByResidual {
                // stable, so ties keep ascending node ids
                self.cands.sort_by(|&(e, _), &(f, _)| {
                    g.residual(f).partial_cmp(&g.residual(e)).unwrap_or(Ordering::Equal)
                });
            }

            for &(e, v) in &self.cands {
                self.pred[v] = e;
                if v == snk {
                    break 'search;
                }
                self.frontier.push(v);
            }
        }

        // sink cannot be reached
        if self.pred[snk] == NONE {
            return None;
        }

        self.path.nodes.clear();
        self.path.arcs.clear();
        let mut v = snk;
        while v != src {
            let e = self.pred[v];
            self.path.nodes.push(v);
            self.path.arcs.push(e);
            v = g.tail(e);
        }
        self.path.nodes.push(src);
        self.path.nodes.reverse();
        self.path.arcs.reverse();

        Some(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::{BreadthFirst, DepthFirst, NeighborOrder, PathFinder};
    use crate::{CapacityGraph, ResidualGraph};

    fn ladder() -> ResidualGraph<i32> {
        // 0 -> 1 -> 2 -> 5 and 0 -> 3 -> 5 and 0 -> 4 -> 5
        let g = CapacityGraph::from_arcs(
            6,
            vec![(0, 1, 3), (1, 2, 3), (2, 5, 3), (0, 3, 2), (3, 5, 2), (0, 4, 7), (4, 5, 7)],
        );
        ResidualGraph::new(&g).unwrap()
    }

    fn check_path(r: &ResidualGraph<i32>, nodes: &[usize], arcs: &[usize]) {
        assert_eq!(nodes.len(), arcs.len() + 1);
        for (i, &e) in arcs.iter().enumerate() {
            assert_eq!(r.tail(e), nodes[i]);
            assert_eq!(r.head(e), nodes[i + 1]);
            assert!(r.residual(e) > 0);
        }
    }

    #[test]
    fn test_dfs() {
        let r = ladder();
        let mut dfs = DepthFirst::new();
        let path = dfs.find_path(&r, 0, 5).unwrap();
        check_path(&r, path.nodes(), path.arcs());
        assert_eq!(path.nodes().first(), Some(&0));
        assert_eq!(path.nodes().last(), Some(&5));
        // the stack expands the largest neighbor first
        assert_eq!(path.nodes(), &[0, 4, 5]);
        assert_eq!(dfs.incoming(4), r.find_arc(0, 4));
        assert_eq!(dfs.incoming(0), None);
    }

    #[test]
    fn test_bfs_shortest() {
        let r = ladder();
        let mut bfs = BreadthFirst::new();
        let path = bfs.find_path(&r, 0, 5).unwrap();
        check_path(&r, path.nodes(), path.arcs());
        assert_eq!(path.len(), 2);
        assert_eq!(path.nodes(), &[0, 3, 5]);
    }

    #[test]
    fn test_bfs_by_residual() {
        let r = ladder();
        let mut bfs = BreadthFirst::with_order(NeighborOrder::ByResidual);
        assert_eq!(bfs.order(), NeighborOrder::ByResidual);
        let path = bfs.find_path(&r, 0, 5).unwrap();
        assert_eq!(path.nodes(), &[0, 4, 5]);
    }

    #[test]
    fn test_no_path() {
        let mut r = ladder();
        for &(u, v) in &[(0, 1), (0, 3), (0, 4)] {
            let e = r.find_arc(u, v).unwrap();
            let c = r.residual(e);
            r.push_flow(e, c);
        }
        assert!(DepthFirst::new().find_path(&r, 0, 5).is_none());
        assert!(BreadthFirst::new().find_path(&r, 0, 5).is_none());
    }

    #[test]
    fn test_reverse_arc() {
        // 0 -> 1 -> 3 is saturated, the only path uses 1 -> 0 backwards
        let g = CapacityGraph::from_arcs(4, vec![(0, 1, 1), (1, 3, 1), (2, 1, 1)]);
        let mut r = ResidualGraph::new(&g).unwrap();
        let e = r.find_arc(0, 1).unwrap();
        r.push_flow(e, 1);
        let path = BreadthFirst::new().find_path(&r, 2, 0).map(|p| p.nodes().to_vec());
        assert_eq!(path, Some(vec![2, 1, 0]));
    }
}
