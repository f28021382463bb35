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

//! Max-flow by successive augmentation along paths.
//!
//! Starting from the zero flow, the algorithm repeatedly asks its
//! [`PathFinder`] for an augmenting path and increases the flow along the
//! path by its bottleneck capacity, until the sink cannot be reached in
//! the residual graph anymore.
//!
//! [`FordFulkerson`](crate::maxflow::FordFulkerson) and
//! [`EdmondsKarp`](crate::maxflow::EdmondsKarp) are instances of this
//! scheme.

use crate::capacity::CapacityGraph;
use crate::error::Result;
use crate::maxflow::path::{Path, PathFinder};
use crate::maxflow::solution::MaxFlow;
use crate::maxflow::Stats;
use crate::residual::ResidualGraph;
use crate::traits::Capacity;

use log::{debug, trace};

/// Return the bottleneck capacity of `path`.
///
/// This is the minimal residual capacity of all arcs on the path (zero
/// for an empty path).
pub fn bottleneck<F>(g: &ResidualGraph<F>, path: &Path) -> F
where
    F: Capacity,
{
    let mut arcs = path.arcs().iter();
    let first = arcs.next().map(|&e| g.residual(e)).unwrap_or_else(F::zero);
    arcs.fold(first, |df, &e| F::min_of(df, g.residual(e)))
}

/// Augment the flow along `path` by its bottleneck capacity.
///
/// Returns the amount the flow value has been increased by.
pub fn augment<F>(g: &mut ResidualGraph<F>, path: &Path) -> F
where
    F: Capacity,
{
    let df = bottleneck(g, path);
    for &e in path.arcs() {
        g.push_flow(e, df);
    }
    df
}

/// Max-flow algorithm based on augmenting paths.
pub struct AugmentingPaths<F, P> {
    residual: ResidualGraph<F>,
    finder: P,
    src: usize,
    value: F,
    stats: Stats,
}

impl<F, P> AugmentingPaths<F, P>
where
    F: Capacity,
    P: PathFinder<F>,
{
    /// Create a new algorithm instance for a graph.
    ///
    /// Returns an error if `g` is not a valid max-flow input.
    pub fn new(g: &CapacityGraph<F>) -> Result<Self>
    where
        P: Default,
    {
        Self::with_finder(g, P::default())
    }

    /// Create a new algorithm instance using the given path finder.
    pub fn with_finder(g: &CapacityGraph<F>, finder: P) -> Result<Self> {
        Ok(AugmentingPaths {
            residual: ResidualGraph::new(g)?,
            finder,
            src: 0,
            value: F::zero(),
            stats: Stats::default(),
        })
    }

    /// Return the path finder.
    pub fn finder(&self) -> &P {
        &self.finder
    }

    /// Return the residual graph with the latest computed flow.
    pub fn residual(&self) -> &ResidualGraph<F> {
        &self.residual
    }

    /// Return the value of the latest computed maximum flow.
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

    /// Solve the maxflow problem from `src` to `snk`.
    ///
    /// Any previously computed flow is discarded first. Returns the value
    /// of the maximum flow.
    pub fn solve(&mut self, src: usize, snk: usize) -> Result<F> {
        self.residual.validate_terminals(src, snk)?;

        self.residual.reset_flow();
        self.src = src;
        self.stats = Stats::default();

        while let Some(path) = self.finder.find_path(&self.residual, src, snk) {
            let df = augment(&mut self.residual, path);
            debug_assert!(df.is_pos());
            trace!("augment by {:?} along {:?}", df, path.nodes());
            self.stats.augmentations += 1;
        }

        // taken from the final flow, not the sum of the increments
        self.value = self.residual.net_inflow(snk);

        debug!(
            "max flow from {} to {}: value {:?} after {} augmentations",
            src, snk, self.value, self.stats.augmentations
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
}

#[cfg(test)]
mod tests {
    use super::{augment, bottleneck, AugmentingPaths};
    use crate::maxflow::path::{BreadthFirst, DepthFirst, PathFinder};
    use crate::{CapacityGraph, ResidualGraph};

    #[test]
    fn test_augment() {
        let g = CapacityGraph::from_arcs(3, vec![(0, 1, 4), (1, 2, 3)]);
        let mut r = ResidualGraph::new(&g).unwrap();
        let path = BreadthFirst::new().find_path(&r, 0, 2).unwrap().clone();

        assert_eq!(bottleneck(&r, &path), 3);
        assert_eq!(augment(&mut r, &path), 3);
        assert_eq!(r.flow(r.find_arc(0, 1).unwrap()), 3);
        assert_eq!(r.flow(r.find_arc(1, 0).unwrap()), -3);
        assert_eq!(r.flow(r.find_arc(1, 2).unwrap()), 3);
        assert!(r.is_skew_symmetric());
        assert!(r.respects_capacities());
        assert!(r.conserves_flow(0, 2));
    }

    #[test]
    fn test_invariants_after_each_step() {
        let g = CapacityGraph::from_arcs(
            5,
            vec![(0, 1, 3), (0, 2, 2), (1, 2, 5), (1, 3, 2), (2, 3, 3), (3, 4, 4), (2, 4, 1)],
        );
        let mut r = ResidualGraph::new(&g).unwrap();
        let mut dfs = DepthFirst::new();
        let mut value = 0;
        while let Some(path) = dfs.find_path(&r, 0, 4) {
            let df = augment(&mut r, path);
            assert!(df > 0);
            value += df;
            assert!(r.is_skew_symmetric());
            assert!(r.respects_capacities());
            assert!(r.conserves_flow(0, 4));
            assert_eq!(r.net_inflow(4), value);
        }
        assert_eq!(value, 5);
    }

    #[test]
    fn test_resolve() {
        let g = CapacityGraph::from_arcs(3, vec![(0, 1, 4), (1, 2, 3), (0, 2, 1)]);
        let mut alg = AugmentingPaths::<_, BreadthFirst>::new(&g).unwrap();
        assert_eq!(alg.solve(0, 2).unwrap(), 4);
        assert_eq!(alg.stats().augmentations, 2);
        assert_eq!(alg.flow(0, 1), 3);
        assert_eq!(alg.flow(1, 0), -3);
        assert_eq!(alg.flow(2, 1), -3);
        assert_eq!(alg.flow(0, 0), 0);
        assert_eq!(alg.mincut(), vec![0, 1]);

        // solving again starts from scratch
        assert_eq!(alg.solve(0, 2).unwrap(), 4);
        assert_eq!(alg.stats().augmentations, 2);

        // other direction: nothing leaves node 2
        assert_eq!(alg.solve(2, 0).unwrap(), 0);
        assert_eq!(alg.mincut(), vec![2]);
        assert!(alg.solution().is_empty());
    }

    #[test]
    fn test_float_saturation() {
        // 0.7 + (2.9 - 0.7) rounds to a value above 2.9
        let g = CapacityGraph::from_arcs(4, vec![(0, 1, 0.7), (0, 2, 5.0), (2, 1, 5.0), (1, 3, 2.9)]);
        let mut dfs = AugmentingPaths::<_, DepthFirst>::new(&g).unwrap();
        let mut bfs = AugmentingPaths::<_, BreadthFirst>::new(&g).unwrap();
        assert_eq!(dfs.solve(0, 3).unwrap(), 2.9);
        assert_eq!(bfs.solve(0, 3).unwrap(), 2.9);
        for r in &[dfs.residual(), bfs.residual()] {
            assert!(r.respects_capacities());
            assert!(r.is_skew_symmetric());
        }
        assert_eq!(bfs.flow(1, 3), 2.9);
        assert_eq!(bfs.solution().value(), 2.9);
    }
}
