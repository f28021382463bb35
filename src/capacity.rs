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

//! The input graph of a max-flow problem.
//!
//! A [`CapacityGraph`] is a static directed graph on the nodes `0..n`
//! whose edges carry a capacity. It may contain parallel edges; those
//! are merged (by summing their capacities) when the residual graph is
//! constructed.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::CapacityGraph;
//!
//! let g = CapacityGraph::from_adjacency(&[
//!     vec![(1, 10), (2, 5)],
//!     vec![(3, 5)],
//!     vec![(3, 10)],
//!     vec![],
//! ]);
//!
//! assert_eq!(g.num_nodes(), 4);
//! assert_eq!(g.num_edges(), 4);
//! assert_eq!(g.capacity(0, 2), 5);
//! assert_eq!(g.capacity(2, 0), 0);
//! assert!(g.validate().is_ok());
//! ```

use crate::builder::CapacityGraphBuilder;
use crate::error::{Error, Result};
use crate::traits::Capacity;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed edge with capacity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<F> {
    /// The source node of the edge.
    pub src: usize,
    /// The sink node of the edge.
    pub snk: usize,
    /// The capacity of the edge.
    pub cap: F,
}

/// A directed graph with edge capacities.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CapacityGraph<F> {
    nnodes: usize,
    edges: Vec<Edge<F>>,
}

impl<F> CapacityGraph<F>
where
    F: Capacity,
{
    pub(crate) fn from_parts(nnodes: usize, edges: Vec<Edge<F>>) -> Self {
        CapacityGraph { nnodes, edges }
    }

    /// Create a new builder for a capacity graph.
    pub fn new_builder() -> CapacityGraphBuilder<F> {
        CapacityGraphBuilder::new()
    }

    /// Create a new graph by passing the builder to the callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_maxflow::CapacityGraph;
    ///
    /// let g = CapacityGraph::new_with(|b| {
    ///     let u = b.add_node();
    ///     let v = b.add_node();
    ///     b.add_edge(u, v, 5);
    /// });
    ///
    /// assert_eq!(g.num_nodes(), 2);
    /// assert_eq!(g.num_edges(), 1);
    /// ```
    pub fn new_with<B>(f: B) -> Self
    where
        B: FnOnce(&mut CapacityGraphBuilder<F>),
    {
        let mut b = Self::new_builder();
        f(&mut b);
        b.into_graph()
    }

    /// Create a graph from an adjacency list.
    ///
    /// The graph has `adj.len()` nodes, `adj[u]` contains the pairs
    /// `(v, cap)` of the edges leaving `u`.
    pub fn from_adjacency(adj: &[Vec<(usize, F)>]) -> Self {
        CapacityGraph {
            nnodes: adj.len(),
            edges: adj
                .iter()
                .enumerate()
                .flat_map(|(u, neighs)| neighs.iter().map(move |&(v, cap)| Edge { src: u, snk: v, cap }))
                .collect(),
        }
    }

    /// Create a graph with `n` nodes from a list of `(src, snk, cap)` triples.
    pub fn from_arcs<I>(n: usize, arcs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, F)>,
    {
        CapacityGraph {
            nnodes: n,
            edges: arcs.into_iter().map(|(src, snk, cap)| Edge { src, snk, cap }).collect(),
        }
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nnodes
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return all edges in the order they have been added.
    pub fn edges(&self) -> &[Edge<F>] {
        &self.edges
    }

    /// Return the edge with index `e`.
    pub fn edge(&self, e: usize) -> &Edge<F> {
        &self.edges[e]
    }

    /// Return an iterator over the edges leaving `u`.
    ///
    /// The edges are stored in a flat list, so this scans all edges
    /// (`O(m)`). Use [`ResidualGraph::neighs`](crate::ResidualGraph::neighs)
    /// for per-node access.
    pub fn outedges(&self, u: usize) -> impl Iterator<Item = &Edge<F>> + '_ {
        self.edges.iter().filter(move |e| e.src == u)
    }

    /// Return the total capacity of all edges from `u` to `v`.
    ///
    /// Returns zero if there is no such edge. Like [`outedges`](Self::outedges)
    /// this scans all edges (`O(m)`); [`ResidualGraph::find_arc`](crate::ResidualGraph::find_arc)
    /// looks up a node pair in `O(log deg(u))`.
    pub fn capacity(&self, u: usize, v: usize) -> F {
        self.edges
            .iter()
            .filter(|e| e.src == u && e.snk == v)
            .fold(F::zero(), |sum, e| sum + e.cap)
    }

    /// Check that the graph is a valid max-flow input.
    ///
    /// The graph must contain at least one node, all edges must connect
    /// existing nodes, there must be no loops and capacities must be
    /// non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.nnodes == 0 {
            return Err(Error::EmptyGraph);
        }

        for e in &self.edges {
            for &u in &[e.src, e.snk] {
                if u >= self.nnodes {
                    return Err(Error::NodeOutOfRange {
                        node: u,
                        num_nodes: self.nnodes,
                    });
                }
            }
            if e.src == e.snk {
                return Err(Error::SelfLoop(e.src));
            }
            // written this way to reject NaN as well
            let valid = e.cap >= F::zero();
            if !valid {
                return Err(Error::NegativeCapacity {
                    src: e.src,
                    snk: e.snk,
                    cap: format!("{:?}", e.cap),
                });
            }
        }

        Ok(())
    }

    /// Check that `src` and `snk` are valid terminals of a flow problem.
    pub fn validate_terminals(&self, src: usize, snk: usize) -> Result<()> {
        check_terminals(self.nnodes, src, snk)
    }
}

/// Check that `src` and `snk` are distinct nodes of a graph with `nnodes` nodes.
pub(crate) fn check_terminals(nnodes: usize, src: usize, snk: usize) -> Result<()> {
    for &u in &[src, snk] {
        if u >= nnodes {
            return Err(Error::NodeOutOfRange {
                node: u,
                num_nodes: nnodes,
            });
        }
    }
    if src == snk {
        return Err(Error::SourceIsSink(src));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CapacityGraph;
    use crate::Error;

    #[test]
    fn test_from_arcs() {
        let g = CapacityGraph::from_arcs(3, vec![(0, 1, 3), (1, 2, 4), (0, 1, 2)]);
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.capacity(0, 1), 5);
        assert_eq!(g.capacity(1, 0), 0);
        assert_eq!(g.outedges(0).count(), 2);
        assert_eq!(g.edge(1).snk, 2);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            CapacityGraph::<i32>::from_arcs(0, vec![]).validate(),
            Err(Error::EmptyGraph)
        );
        assert_eq!(
            CapacityGraph::from_arcs(2, vec![(0, 2, 1)]).validate(),
            Err(Error::NodeOutOfRange { node: 2, num_nodes: 2 })
        );
        assert_eq!(
            CapacityGraph::from_arcs(2, vec![(1, 1, 1)]).validate(),
            Err(Error::SelfLoop(1))
        );
        assert!(matches!(
            CapacityGraph::from_arcs(2, vec![(0, 1, -3)]).validate(),
            Err(Error::NegativeCapacity { src: 0, snk: 1, .. })
        ));
        assert!(matches!(
            CapacityGraph::from_arcs(2, vec![(0, 1, f64::NAN)]).validate(),
            Err(Error::NegativeCapacity { .. })
        ));
        assert!(CapacityGraph::from_arcs(2, vec![(0, 1, 0)]).validate().is_ok());
    }

    #[test]
    fn test_validate_terminals() {
        let g = CapacityGraph::from_arcs(3, vec![(0, 1, 1)]);
        assert!(g.validate_terminals(0, 2).is_ok());
        assert_eq!(g.validate_terminals(1, 1), Err(Error::SourceIsSink(1)));
        assert_eq!(
            g.validate_terminals(0, 3),
            Err(Error::NodeOutOfRange { node: 3, num_nodes: 3 })
        );
    }
}
