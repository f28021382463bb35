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

//! This module implements the max flow algorithm of Ford and Fulkerson.
//!
//! Augmenting paths are found by depth-first search. The number of
//! augmentations is not bounded independently of the capacities, use
//! [`edmondskarp`](crate::maxflow::edmondskarp) for a polynomial bound.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::CapacityGraph;
//! use rs_maxflow::maxflow::fordfulkerson;
//!
//! // s = 0, a = 1, b = 2, c = 3, d = 4, t = 5
//! let g = CapacityGraph::from_arcs(6, vec![
//!     (0, 1, 5), (0, 3, 5),
//!     (1, 2, 2), (1, 3, 1), (1, 4, 1),
//!     (3, 4, 2), (4, 2, 2),
//!     (2, 5, 4), (4, 5, 5),
//! ]);
//!
//! let (value, flow, mincut) = fordfulkerson(&g, 0, 5).unwrap();
//!
//! assert_eq!(value, 5);
//! assert!(flow.iter().all(|&((u, v), f)| f > 0 && f <= g.capacity(u, v)));
//! for u in 1..5 {
//!     let inflow: i32 = flow.iter().filter(|&&((_, v), _)| v == u).map(|&(_, f)| f).sum();
//!     let outflow: i32 = flow.iter().filter(|&&((v, _), _)| v == u).map(|&(_, f)| f).sum();
//!     assert_eq!(inflow, outflow);
//! }
//! assert_eq!(mincut, vec![0, 1, 3]);
//! ```

use crate::capacity::CapacityGraph;
use crate::error::Result;
use crate::maxflow::augmenting::AugmentingPaths;
use crate::maxflow::path::DepthFirst;
use crate::traits::Capacity;

/// Max-flow algorithm of Ford and Fulkerson.
pub type FordFulkerson<F> = AugmentingPaths<F, DepthFirst>;

/// Solve the maxflow problem using the algorithm of Ford-Fulkerson.
///
/// The function solves the max flow problem from the source node `src`
/// to the sink node `snk`.
///
/// The function returns the flow value, the arcs with positive flow and
/// the nodes in a minimal cut.
pub fn fordfulkerson<F>(g: &CapacityGraph<F>, src: usize, snk: usize) -> Result<(F, Vec<((usize, usize), F)>, Vec<usize>)>
where
    F: Capacity,
{
    let mut maxflow = FordFulkerson::new(g)?;
    maxflow.solve(src, snk)?;
    Ok((maxflow.value(), maxflow.solution().iter().collect(), maxflow.mincut()))
}

#[cfg(test)]
mod tests {
    use super::{fordfulkerson, FordFulkerson};
    use crate::{CapacityGraph, Error};

    #[test]
    fn test_fordfulkerson() {
        let g = CapacityGraph::new_with(|g| {
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
        });

        let mut ff = FordFulkerson::new(&g).unwrap();
        assert_eq!(ff.solve(0, 1).unwrap(), 11);
        assert!(ff.stats().augmentations > 0);

        let r = ff.residual();
        assert!(r.is_skew_symmetric());
        assert!(r.respects_capacities());
        assert!(r.conserves_flow(0, 1));

        let sol = ff.solution();
        assert_eq!(sol.value(), 11);
        assert_eq!(sol.flow(0, 1), 0);
        assert_eq!(sol.flow(2, 1) + sol.flow(5, 1), 11);
    }

    #[test]
    fn test_single_arc() {
        let g = CapacityGraph::from_arcs(2, vec![(0, 1, 5)]);
        let (value, flow, mincut) = fordfulkerson(&g, 0, 1).unwrap();
        assert_eq!(value, 5);
        assert_eq!(flow, vec![((0, 1), 5)]);
        assert_eq!(mincut, vec![0]);
    }

    #[test]
    fn test_source_is_sink() {
        let g = CapacityGraph::from_arcs(2, vec![(0, 1, 5)]);
        assert_eq!(fordfulkerson(&g, 1, 1).unwrap_err(), Error::SourceIsSink(1));
    }
}
