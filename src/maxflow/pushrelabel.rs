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

//! This module implements a push relabel algorithm for solving max
//! flow problems.
//!
//! The algorithm maintains a preflow (a flow that may violate flow
//! conservation by a positive excess at inner nodes) and a label (height)
//! for each node. Excess is pushed along arcs leading one level down;
//! a node with excess but no such arc is relabelled. Active nodes are
//! processed in FIFO order.
//!
//! Two relabel rules are available (see [`RelabelRule`]). Additionally the
//! global relabelling heuristic recomputes exact labels by a backward
//! breadth-first search from time to time.
//!
//! The flow value is the net inflow of the sink in the final flow. With
//! floating point capacities, excess that rounding has left on a node
//! without a residual path to the source is discarded (counted in
//! [`Stats::discarded`]).
//!
//! # Example
//!
//! ```
//! use rs_maxflow::CapacityGraph;
//! use rs_maxflow::maxflow::pushrelabel;
//!
//! // s = 0, a = 1, b = 2, c = 3, d = 4, t = 5
//! let g = CapacityGraph::from_arcs(6, vec![
//!     (0, 1, 5), (0, 3, 5),
//!     (1, 2, 2), (1, 3, 1), (1, 4, 1),
//!     (3, 4, 2), (4, 2, 2),
//!     (2, 5, 4), (4, 5, 5),
//! ]);
//!
//! let (value, flow, mincut) = pushrelabel(&g, 0, 5).unwrap();
//!
//! assert_eq!(value, 5);
//! assert!(flow.iter().all(|&((u, v), f)| f > 0 && f <= g.capacity(u, v)));
//! assert_eq!(mincut, vec![0, 1, 3]);
//! ```

use crate::capacity::CapacityGraph;
use crate::error::{Error, Result};
use crate::maxflow::solution::MaxFlow;
use crate::maxflow::Stats;
use crate::residual::ResidualGraph;
use crate::traits::Capacity;

use log::{debug, trace};
use std::collections::VecDeque;

/// The rule used to compute the new label of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelabelRule {
    /// Set the label to one more than the smallest label of a node
    /// reachable by an arc with positive residual capacity.
    MinNeighbor,
    /// Increase the label by one.
    ///
    /// The labelling stays valid, but a node may need several relabel
    /// operations until it gets an admissible arc.
    Increment,
}

impl Default for RelabelRule {
    fn default() -> Self {
        RelabelRule::MinNeighbor
    }
}

/// Data associated with a node.
#[derive(Clone)]
struct NodeInfo<F> {
    /// The current label of the node.
    label: usize,
    /// The excess of flow of the node.
    excess: F,
    /// The next arc to be considered.
    iter: usize,
    /// Whether the node is in the queue of active nodes.
    active: bool,
}

impl<F> NodeInfo<F>
where
    F: Capacity,
{
    fn reset(&mut self) {
        self.label = 0;
        self.excess = F::zero();
        self.iter = 0;
        self.active = false;
    }
}

/// The push-relabel algorithm.
///
/// This struct contains all algorithmic working data.
pub struct PushRelabel<F> {
    /// The residual graph the flow problem is solved on.
    residual: ResidualGraph<F>,
    /// Data associated with each node.
    nodes: Vec<NodeInfo<F>>,
    /// The queue of active nodes.
    queue: VecDeque<usize>,
    /// The queue of nodes for a BFS.
    bfs: VecDeque<usize>,
    src: usize,
    snk: usize,
    /// The flow value.
    value: F,
    stats: Stats,
    /// The relabel rule.
    pub relabel_rule: RelabelRule,
    /// Whether to use the global relabelling heuristic.
    pub use_global_relabelling: bool,
}

impl<F> PushRelabel<F>
where
    F: Capacity,
{
    /// Return a new push-relabel algorithm data structure for the graph `g`.
    ///
    /// Returns an error if `g` is not a valid max-flow input.
    pub fn new(g: &CapacityGraph<F>) -> Result<Self> {
        let residual = ResidualGraph::new(g)?;
        let n = residual.num_nodes();
        Ok(PushRelabel {
            residual,
            nodes: vec![
                NodeInfo {
                    label: 0,
                    excess: F::zero(),
                    iter: 0,
                    active: false,
                };
                n
            ],
            queue: VecDeque::with_capacity(n),
            bfs: VecDeque::with_capacity(n),
            src: 0,
            snk: 0,
            value: F::zero(),
            stats: Stats::default(),
            relabel_rule: RelabelRule::default(),
            use_global_relabelling: true,
        })
    }

    /// Return the residual graph with the latest computed flow.
    pub fn residual(&self) -> &ResidualGraph<F> {
        &self.residual
    }

    /// Return the flow value.
    ///
    /// The function returns 0 if the flow has not been computed, yet.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the operation counters of the latest run.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Return the flow on the arc from `u` to `v`.
    ///
    /// The value is negative if flow is sent from `v` to `u` and zero if
    /// the nodes are not adjacent.
    pub fn flow(&self, u: usize, v: usize) -> F {
        self.residual.find_arc(u, v).map(|e| self.residual.flow(e)).unwrap_or_else(F::zero)
    }

    /// Return the current label of node `u`.
    pub fn label(&self, u: usize) -> usize {
        self.nodes[u].label
    }

    /// Return the current excess of node `u`.
    pub fn excess(&self, u: usize) -> F {
        self.nodes[u].excess
    }

    /// Run the push-relabel algorithm from some source to some sink node.
    ///
    /// Any previously computed flow is discarded first. Returns the value
    /// of the maximum flow.
    pub fn solve(&mut self, src: usize, snk: usize) -> Result<F> {
        self.residual.validate_terminals(src, snk)?;

        let n = self.residual.num_nodes();
        self.src = src;
        self.snk = snk;
        self.stats = Stats::default();
        self.init_preflow();

        if self.use_global_relabelling {
            self.update_labels();
        }
        let mut lvl_relabel = n;

        while let Some(u) = self.queue.pop_front() {
            self.nodes[u].active = false;
            self.discharge(u)?;

            if self.use_global_relabelling && self.stats.relabels >= lvl_relabel {
                self.update_labels();
                lvl_relabel = self.stats.relabels + n;
            }
        }

        self.value = self.residual.net_inflow(snk);
        debug!(
            "max flow from {} to {}: value {:?} after {} pushes, {} relabels, {} global relabels",
            src, snk, self.value, self.stats.pushes, self.stats.relabels, self.stats.global_relabels
        );

        Ok(self.value)
    }

    /// Return the minimal cut associated with the last maximum flow.
    ///
    /// These are the nodes reachable from the source in the residual
    /// graph.
    pub fn mincut(&self) -> Vec<usize> {
        self.residual
            .reachable_from(self.src)
            .into_iter()
            .enumerate()
            .filter_map(|(u, reachable)| if reachable { Some(u) } else { None })
            .collect()
    }

    /// Return the latest computed flow.
    pub fn solution(&self) -> MaxFlow<F> {
        MaxFlow::from_residual(&self.residual, self.value)
    }

    /// Initialize preflow algorithm.
    ///
    /// All arcs leaving the source node are saturated, the source's
    /// label is set to `n`, all other labels are set to `0`.
    fn init_preflow(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
        self.residual.reset_flow();
        self.queue.clear();

        let src = self.src;
        self.nodes[src].label = self.residual.num_nodes();

        // send maximal flow out of source
        for i in 0..self.residual.neighs(src).len() {
            let (e, v) = self.residual.neighs(src)[i];
            let ub = self.residual.residual(e);
            if ub.is_pos() {
                self.residual.push_flow(e, ub);
                self.nodes[v].excess += ub;
                self.stats.pushes += 1;
                self.activate(v);
            }
        }
    }

    /// Put `u` into the queue of active nodes if it has become active.
    fn activate(&mut self, u: usize) {
        let node = &mut self.nodes[u];
        if u != self.src && u != self.snk && !node.active && node.excess.is_pos() {
            node.active = true;
            self.queue.push_back(u);
        }
    }

    /// Discharges node `u`.
    ///
    /// This function does a sequence of push and relabel operations for an
    /// active node `u` until its excess reaches 0.
    fn discharge(&mut self, u: usize) -> Result<()> {
        while self.nodes[u].excess.is_pos() {
            let cur = self.nodes[u].iter;
            if cur == self.residual.neighs(u).len() {
                // we ran out of admissible arcs but node still has positive excess
                match self.relabel(u) {
                    Ok(()) => {
                        self.nodes[u].iter = 0;
                        continue;
                    }
                    Err(err) if !F::is_exact() => {
                        // rounding residue, there is no way back to the source
                        debug!("discard excess {:?} of node {}: {}", self.nodes[u].excess, u, err);
                        self.nodes[u].excess = F::zero();
                        self.stats.discarded += 1;
                        break;
                    }
                    Err(err) => return Err(err),
                }
            }

            let (e, v) = self.residual.neighs(u)[cur];
            let r = self.residual.residual(e);
            if r.is_pos() && self.nodes[u].label == self.nodes[v].label + 1 {
                // Push along arc e
                let df = F::min_of(self.nodes[u].excess, r);
                self.residual.push_flow(e, df);
                if df == self.nodes[u].excess {
                    self.nodes[u].excess = F::zero();
                } else {
                    self.nodes[u].excess -= df;
                }
                self.nodes[v].excess += df;
                self.stats.pushes += 1;
                self.activate(v);
            } else {
                // arc is not admissible, go to next
                self.nodes[u].iter += 1;
            }
        }
        Ok(())
    }

    /// The relabel operation.
    ///
    /// Fails if `u` has no arc with positive residual capacity or if the
    /// new label exceeds `2n - 1`. Neither can happen for a valid preflow
    /// in exact arithmetic. With floating point capacities the excess
    /// of `u` is a rounding residue in this case and `discharge` drops it.
    fn relabel(&mut self, u: usize) -> Result<()> {
        debug_assert!(self.nodes[u].excess.is_pos());

        let h_old = self.nodes[u].label;
        let h_min = self.residual.neighs(u)
            .iter()
            .filter(|&&(e, _)| self.residual.residual(e).is_pos())
            .map(|&(_, v)| self.nodes[v].label)
            .min()
            .ok_or(Error::StrandedExcess(u))?;

        let h_new = match self.relabel_rule {
            RelabelRule::MinNeighbor => h_min + 1,
            RelabelRule::Increment => h_old + 1,
        };
        debug_assert!(h_new > h_old);

        let bound = 2 * self.residual.num_nodes() - 1;
        if h_new > bound {
            return Err(Error::LabelOverflow {
                node: u,
                label: h_new,
                bound,
            });
        }

        trace!("relabel node {} from {} to {}", u, h_old, h_new);
        self.nodes[u].label = h_new;
        self.stats.relabels += 1;
        Ok(())
    }

    /// Compute exact labels.
    ///
    /// Nodes that can reach the sink in the residual graph get their
    /// distance to the sink, nodes that can only reach the source get
    /// `n` plus their distance to the source. All remaining nodes (which
    /// cannot carry excess) get the largest feasible label `2n - 1`.
    /// Labels never decrease.
    fn update_labels(&mut self) {
        let n = self.residual.num_nodes();
        let unseen = usize::max_value();
        let mut dist = vec![unseen; n];
        dist[self.snk] = 0;
        dist[self.src] = n;

        // find correct labels by BFS from sink, then from source
        for &root in &[self.snk, self.src] {
            self.bfs.clear();
            self.bfs.push_back(root);
            while let Some(v) = self.bfs.pop_front() {
                let h = dist[v] + 1;
                for &(e, u) in self.residual.neighs(v) {
                    if dist[u] == unseen && self.residual.residual(e ^ 1).is_pos() {
                        dist[u] = h;
                        self.bfs.push_back(u);
                    }
                }
            }
        }

        for (u, node) in self.nodes.iter_mut().enumerate() {
            // we need to reset the iterators for correctness
            node.iter = 0;
            if u == self.src || u == self.snk {
                continue;
            }
            let h = if dist[u] == unseen { 2 * n - 1 } else { dist[u] };
            debug_assert!(h >= node.label);
            node.label = node.label.max(h);
        }

        self.stats.global_relabels += 1;
    }
}

/// Solve the maxflow problem using the push-relabel algorithm.
///
/// The function solves the max flow problem from the source node `src`
/// to the sink node `snk`.
///
/// The function returns the flow value, the arcs with positive flow and
/// the nodes in a minimal cut.
pub fn pushrelabel<F>(g: &CapacityGraph<F>, src: usize, snk: usize) -> Result<(F, Vec<((usize, usize), F)>, Vec<usize>)>
where
    F: Capacity,
{
    let mut maxflow = PushRelabel::new(g)?;
    maxflow.solve(src, snk)?;
    Ok((maxflow.value(), maxflow.solution().iter().collect(), maxflow.mincut()))
}

#[cfg(test)]
mod tests {
    use super::{pushrelabel, PushRelabel, RelabelRule};
    use crate::{CapacityGraph, Error};

    fn six_node_graph() -> CapacityGraph<isize> {
        CapacityGraph::new_with(|g| {
            let s = g.add_node();
            let t = g.add_node();
            let v1 = g.add_node();
            let v2 = g.add_node();
            let v3 = g.add_node();
            let v4 = g.add_node();
            g.add_edge(s, v1, 15);
            g.add_edge(s, v3, 10);
            g.add_edge(v1, v2, 6);
            g.add_edge(v1, v3, 7);
            g.add_edge(v2, t, 5);
            g.add_edge(v2, v4, 2);
            g.add_edge(v3, v2, 11);
            g.add_edge(v3, v4, 4);
            g.add_edge(v4, v2, 4);
            g.add_edge(v4, t, 20);
        })
    }

    #[test]
    fn test_pushrelabel() {
        let g = six_node_graph();
        let (s, t) = (0, 1);
        let (value, flow, _) = pushrelabel(&g, s, t).unwrap();

        assert_eq!(value, 11);
        assert!(flow.iter().all(|&((u, v), f)| f >= 0 && f <= g.capacity(u, v)));

        let sum = |u: usize, out: bool| -> isize {
            flow.iter()
                .filter(|&&((a, b), _)| if out { a == u } else { b == u })
                .map(|&(_, f)| f)
                .sum()
        };
        assert!((2..6).all(|u| sum(u, true) == sum(u, false)));
    }

    #[test]
    fn test_rules_and_heuristics() {
        let g = six_node_graph();
        for &rule in &[RelabelRule::MinNeighbor, RelabelRule::Increment] {
            for &global in &[true, false] {
                let mut pr = PushRelabel::new(&g).unwrap();
                pr.relabel_rule = rule;
                pr.use_global_relabelling = global;
                assert_eq!(pr.solve(0, 1).unwrap(), 11, "rule: {:?} global: {}", rule, global);

                let r = pr.residual();
                assert!(r.is_skew_symmetric());
                assert!(r.respects_capacities());
                assert!(r.conserves_flow(0, 1));
                assert!((2..6).all(|u| pr.excess(u) == 0));
                assert!(pr.label(0) == 6);
                assert!((0..6).all(|u| pr.label(u) <= 11));
                assert_eq!(pr.stats().global_relabels > 0, global);

                let side = r.reachable_from(0);
                assert!(!side[1]);
                assert_eq!(r.cut_capacity(&side), 11);
            }
        }
    }

    #[test]
    fn test_returns_excess() {
        // node 1 receives 10 but can only forward 1, the rest goes back
        let g = CapacityGraph::from_arcs(3, vec![(0, 1, 10), (1, 2, 1)]);
        let mut pr = PushRelabel::new(&g).unwrap();
        pr.use_global_relabelling = false;
        assert_eq!(pr.solve(0, 2).unwrap(), 1);
        assert_eq!(pr.flow(0, 1), 1);
        assert_eq!(pr.flow(1, 2), 1);
        assert_eq!(pr.excess(1), 0);
        assert!(pr.stats().relabels > 0);
        assert_eq!(pr.mincut(), vec![0, 1]);
    }

    #[test]
    fn test_float() {
        let g = CapacityGraph::from_arcs(4, vec![(0, 1, 1.5), (0, 2, 2.25), (1, 3, 2.0), (2, 3, 0.5), (2, 1, 1.0)]);
        let mut pr = PushRelabel::new(&g).unwrap();
        assert_eq!(pr.solve(0, 3).unwrap(), 2.5);
        assert_eq!(pr.solution().value(), 2.5);
    }

    #[test]
    fn test_float_rounding() {
        let third: f64 = 1.0 / 3.0;
        let g = CapacityGraph::from_arcs(
            4,
            vec![
                (1, 0, 1.1),
                (3, 0, 1.1),
                (3, 0, third),
                (1, 0, 0.2),
                (0, 1, 2.9),
                (2, 3, 2.9),
                (3, 1, third),
                (2, 0, 0.2),
                (1, 3, 0.3),
                (0, 3, 0.3),
                (1, 0, 0.1),
                (0, 1, 0.7),
                (0, 1, 0.7),
            ],
        );
        for &rule in &[RelabelRule::MinNeighbor, RelabelRule::Increment] {
            for &global in &[true, false] {
                let mut pr = PushRelabel::new(&g).unwrap();
                pr.relabel_rule = rule;
                pr.use_global_relabelling = global;
                let value = pr.solve(0, 3).unwrap();
                assert!((value - 0.6).abs() < 1e-12);
                assert!(pr.residual().respects_capacities());
                assert!(pr.residual().is_skew_symmetric());
                assert_eq!(pr.flow(1, 3), 0.3);
                assert_eq!(pr.flow(0, 3), 0.3);
                assert!((1..3).all(|u| pr.excess(u) == 0.0));
            }
        }

        let g = CapacityGraph::from_arcs(4, vec![(0, 1, 0.7), (0, 2, 5.0), (2, 1, 5.0), (1, 3, 2.9)]);
        let mut pr = PushRelabel::new(&g).unwrap();
        assert_eq!(pr.solve(0, 3).unwrap(), 2.9);
        assert_eq!(pr.flow(1, 3), 2.9);
        assert!(pr.residual().respects_capacities());
    }

    #[test]
    fn test_invalid_terminals() {
        let g = six_node_graph();
        let mut pr = PushRelabel::new(&g).unwrap();
        assert_eq!(pr.solve(2, 2), Err(Error::SourceIsSink(2)));
        assert_eq!(pr.solve(0, 6), Err(Error::NodeOutOfRange { node: 6, num_nodes: 6 }));
        assert_eq!(pr.value(), 0);
    }
}
