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

//! The residual graph shared by all max-flow algorithms.
//!
//! For every pair of nodes `{u, v}` connected by at least one edge of the
//! input graph, the residual graph contains the two mirrored arcs `(u,v)`
//! and `(v,u)`. They have consecutive indices `2k` and `2k+1`, so the
//! mirror of arc `e` is always `e ^ 1`. An arc that does not exist in the
//! input graph has capacity zero. Parallel input edges are merged by
//! summing their capacities.
//!
//! The flow is stored per arc and kept skew symmetric, i.e. the flow on
//! `e ^ 1` is always the negated flow on `e`. The residual capacity of
//! an arc is its capacity minus its flow.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::{CapacityGraph, ResidualGraph};
//!
//! let g = CapacityGraph::from_arcs(3, vec![(0, 1, 4), (1, 2, 3)]);
//! let mut r = ResidualGraph::new(&g).unwrap();
//!
//! assert_eq!(r.num_arcs(), 4);
//! let e = r.find_arc(0, 1).unwrap();
//! let f = r.find_arc(1, 0).unwrap();
//! assert_eq!(f, e ^ 1);
//! assert_eq!(r.residual(e), 4);
//! assert_eq!(r.residual(f), 0);
//!
//! r.push_flow(e, 3);
//! assert_eq!(r.flow(e), 3);
//! assert_eq!(r.flow(f), -3);
//! assert_eq!(r.residual(e), 1);
//! assert_eq!(r.residual(f), 3);
//! ```

use crate::capacity::{check_terminals, CapacityGraph};
use crate::error::Result;
use crate::traits::Capacity;

use std::collections::{BTreeMap, VecDeque};

/// Capacities of both directions of a node pair `(a, b)` with `a < b`.
struct PairInfo<F> {
    forward: F,
    backward: F,
    has_forward: bool,
    has_backward: bool,
}

/// A residual graph with flow.
#[derive(Clone, Debug)]
pub struct ResidualGraph<F> {
    /// The adjacent arcs `(arc, head)` of each node, sorted by head.
    neighs: Vec<Vec<(usize, usize)>>,
    /// The head of each arc. The tail is the head of the mirror.
    heads: Vec<usize>,
    /// The capacity of each arc.
    cap: Vec<F>,
    /// Current flow on each arc.
    flow: Vec<F>,
    /// Whether the arc is an edge of the input graph.
    original: Vec<bool>,
}

impl<F> ResidualGraph<F>
where
    F: Capacity,
{
    /// Build the residual graph of `g` with zero flow.
    ///
    /// Returns an error if `g` is not a valid max-flow input, see
    /// [`CapacityGraph::validate`].
    pub fn new(g: &CapacityGraph<F>) -> Result<Self> {
        g.validate()?;

        let mut pairs = BTreeMap::new();
        for e in g.edges() {
            let info = pairs.entry((e.src.min(e.snk), e.src.max(e.snk))).or_insert(PairInfo {
                forward: F::zero(),
                backward: F::zero(),
                has_forward: false,
                has_backward: false,
            });
            if e.src < e.snk {
                info.forward += e.cap;
                info.has_forward = true;
            } else {
                info.backward += e.cap;
                info.has_backward = true;
            }
        }

        let n = g.num_nodes();
        let m = pairs.len() * 2;
        let mut neighs = vec![vec![]; n];
        let mut heads = Vec::with_capacity(m);
        let mut cap = Vec::with_capacity(m);
        let mut original = Vec::with_capacity(m);

        for ((a, b), info) in pairs {
            let e = heads.len();
            heads.push(b);
            cap.push(info.forward);
            original.push(info.has_forward);
            neighs[a].push((e, b));

            heads.push(a);
            cap.push(info.backward);
            original.push(info.has_backward);
            neighs[b].push((e | 1, a));
        }

        for ns in &mut neighs {
            ns.sort_by_key(|&(_, v)| v);
        }

        Ok(ResidualGraph {
            neighs,
            heads,
            cap,
            flow: vec![F::zero(); m],
            original,
        })
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.neighs.len()
    }

    /// Return the number of arcs (including synthetic reverse arcs).
    pub fn num_arcs(&self) -> usize {
        self.heads.len()
    }

    /// Check that `src` and `snk` are valid terminals of a flow problem.
    pub fn validate_terminals(&self, src: usize, snk: usize) -> Result<()> {
        check_terminals(self.num_nodes(), src, snk)
    }

    /// Return the arcs leaving `u` as pairs `(arc, head)`.
    ///
    /// The arcs are sorted by ascending head.
    pub fn neighs(&self, u: usize) -> &[(usize, usize)] {
        &self.neighs[u]
    }

    /// Return the tail of arc `e`.
    pub fn tail(&self, e: usize) -> usize {
        self.heads[e ^ 1]
    }

    /// Return the head of arc `e`.
    pub fn head(&self, e: usize) -> usize {
        self.heads[e]
    }

    /// Return the mirrored arc of `e`.
    pub fn reverse(&self, e: usize) -> usize {
        e ^ 1
    }

    /// Return the arc from `u` to `v` if it exists.
    pub fn find_arc(&self, u: usize, v: usize) -> Option<usize> {
        let ns = self.neighs.get(u)?;
        ns.binary_search_by_key(&v, |&(_, w)| w).ok().map(|i| ns[i].0)
    }

    /// Return the capacity of arc `e`.
    pub fn capacity(&self, e: usize) -> F {
        self.cap[e]
    }

    /// Return the current flow on arc `e`.
    pub fn flow(&self, e: usize) -> F {
        self.flow[e]
    }

    /// Return the residual capacity of arc `e`.
    pub fn residual(&self, e: usize) -> F {
        self.cap[e] - self.flow[e]
    }

    /// Return `true` if arc `e` corresponds to an edge of the input graph.
    pub fn is_original(&self, e: usize) -> bool {
        self.original[e]
    }

    /// Send `df` units of flow over arc `e`.
    ///
    /// The flow on the mirrored arc is set to the negated flow on `e`. If
    /// `df` is not smaller than the residual capacity of `e`, the arc is
    /// saturated: its flow is set to exactly its capacity. Inexact
    /// (floating point) capacities can therefore never be exceeded by
    /// rounding.
    pub fn push_flow(&mut self, e: usize, df: F) {
        let f = self.flow[e] + df;
        let f = if df >= self.residual(e) || f > self.cap[e] {
            self.cap[e]
        } else {
            f
        };
        self.flow[e] = f;
        self.flow[e ^ 1] = -f;
    }

    /// Set the flow on all arcs to zero.
    pub fn reset_flow(&mut self) {
        for f in &mut self.flow {
            *f = F::zero();
        }
    }

    /// Return the net flow entering node `u`.
    pub fn net_inflow(&self, u: usize) -> F {
        self.neighs[u]
            .iter()
            .fold(F::zero(), |sum, &(e, _)| sum + self.flow[e ^ 1])
    }

    /// Return the nodes reachable from `src` via arcs with positive residual capacity.
    ///
    /// The returned vector contains `true` for each reachable node.
    pub fn reachable_from(&self, src: usize) -> Vec<bool> {
        let mut seen = vec![false; self.num_nodes()];
        let mut queue = VecDeque::with_capacity(self.num_nodes());
        seen[src] = true;
        queue.push_back(src);
        while let Some(u) = queue.pop_front() {
            for &(e, v) in &self.neighs[u] {
                if !seen[v] && self.residual(e).is_pos() {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        seen
    }

    /// Return the total capacity of all arcs leaving the node set `side`.
    pub fn cut_capacity(&self, side: &[bool]) -> F {
        (0..self.num_arcs())
            .filter(|&e| side[self.tail(e)] && !side[self.head(e)])
            .fold(F::zero(), |sum, e| sum + self.cap[e])
    }

    /// Return `true` if the flow on every arc is the negated flow of its mirror.
    pub fn is_skew_symmetric(&self) -> bool {
        (0..self.num_arcs()).all(|e| self.flow[e] == -self.flow[e ^ 1])
    }

    /// Return `true` if no arc carries more flow than its capacity.
    pub fn respects_capacities(&self) -> bool {
        (0..self.num_arcs()).all(|e| self.flow[e] <= self.cap[e])
    }

    /// Return `true` if the net flow is zero at all nodes except `src` and `snk`.
    pub fn conserves_flow(&self, src: usize, snk: usize) -> bool {
        (0..self.num_nodes())
            .filter(|&u| u != src && u != snk)
            .all(|u| self.net_inflow(u).is_zero())
    }
}
