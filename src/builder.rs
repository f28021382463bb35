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

//! Construction of capacity graphs.

use crate::capacity::{CapacityGraph, Edge};
use crate::traits::Capacity;

/// A builder for capacity graphs.
///
/// In general graphs are static objects. In order to build a graph,
/// one should use a graph builder and, once the construction is
/// complete, convert it into a graph.
///
/// Nodes are numbered consecutively from `0` in the order they are
/// added, edges likewise. The builder does not check its input, invalid
/// edges (loops, unknown nodes, negative capacities) are reported when a
/// flow algorithm is started on the resulting graph.
#[derive(Clone, Debug)]
pub struct CapacityGraphBuilder<F> {
    nnodes: usize,
    edges: Vec<Edge<F>>,
}

impl<F> Default for CapacityGraphBuilder<F> {
    fn default() -> Self {
        CapacityGraphBuilder {
            nnodes: 0,
            edges: vec![],
        }
    }
}

impl<F> CapacityGraphBuilder<F>
where
    F: Capacity,
{
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::with_capacities(0, 0)
    }

    /// Create a new, empty builder.
    ///
    /// The builder might be passed a guess of the number of nodes and
    /// edges. This is used to reserve the appropriate internal memory,
    /// but is no strict requirement for the number of nodes and edges
    /// to be added to the graph.
    pub fn with_capacities(_nnodes: usize, nedges: usize) -> Self {
        CapacityGraphBuilder {
            nnodes: 0,
            edges: Vec::with_capacity(nedges),
        }
    }

    /// Reserve memory for a certain number of edges.
    pub fn reserve(&mut self, _nnodes: usize, nedges: usize) {
        self.edges.reserve(nedges);
    }

    /// Return the current number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nnodes
    }

    /// Return the current number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Add a new node.
    pub fn add_node(&mut self) -> usize {
        self.nnodes += 1;
        self.nnodes - 1
    }

    /// Add `n` new nodes.
    pub fn add_nodes(&mut self, n: usize) -> Vec<usize> {
        (0..n).map(|_| self.add_node()).collect()
    }

    /// Add a new edge from `u` to `v` with capacity `cap`.
    ///
    /// Returns the index of the new edge.
    pub fn add_edge(&mut self, u: usize, v: usize, cap: F) -> usize {
        self.edges.push(Edge { src: u, snk: v, cap });
        self.edges.len() - 1
    }

    /// Turn the builder into a graph.
    pub fn into_graph(self) -> CapacityGraph<F> {
        CapacityGraph::from_parts(self.nnodes, self.edges)
    }
}
