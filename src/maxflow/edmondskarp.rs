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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! Augmenting paths are found by breadth-first search, hence every
//! augmenting path has a minimal number of arcs. This bounds the number of
//! augmentations by `O(nm)` independently of the capacities.
//!
//! The neighbors of a node may optionally be expanded by descending
//! residual capacity ([`NeighborOrder::ByResidual`]), which often reduces
//! the number of augmentations.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::CapacityGraph;
//! use rs_maxflow::maxflow::edmondskarp;
//!
//! // s = 0, a = 1, b = 2, c = 3, d = 4, e = 5, f = 6, g = 7, h = 8, t = 9
//! let g = CapacityGraph::from_arcs(10, vec![
//!     (0, 2, 18), (0, 5, 27),
//!     (2, 1, 8), (2, 3, 9), (2, 6, 6),
//!     (1, 3, 1), (1, 4, 10),
//!     (3, 4, 8), (4, 3, 3), (4, 9, 33),
//!     (5, 3, 5), (5, 4, 2), (5, 6, 9), (5, 8, 5),
//!     (6, 7, 6), (8, 4, 8), (8, 7, 4), (7, 9, 6),
//! ]);
//!
//! assert_eq!(g.num_edges(), 18);
//!
//! let (value, _, mincut) = edmondskarp(&g, 0, 9).unwrap();
//! assert_eq!(value, 29);
//! assert_eq!(mincut, vec![0, 2, 3, 5, 6]);
//! ```

use crate::capacity::CapacityGraph;
use crate::error::Result;
use crate::maxflow::augmenting::AugmentingPaths;
use crate::maxflow::path::{BreadthFirst, NeighborOrder};
use crate::traits::Capacity;

/// Max-flow algorithm of Edmonds and Karp.
pub type EdmondsKarp<F> = AugmentingPaths<F, BreadthFirst>;

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source node `src`
/// to the sink node `snk`.
///
/// The function returns the flow value, the arcs with positive flow and
/// the nodes in a minimal cut.
pub fn edmondskarp<F>(g: &CapacityGraph<F>, src: usize, snk: usize) -> Result<(F, Vec<((usize, usize), F)>, Vec<usize>)>
where
    F: Capacity,
{
    edmondskarp_with_order(g, src, snk, NeighborOrder::ById)
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// This is the same as [`edmondskarp`] but expands neighbors in the
/// given order.
pub fn edmondskarp_with_order<F>(
    g: &CapacityGraph<F>,
    src: usize,
    snk: usize,
    order: NeighborOrder,
) -> Result<(F, Vec<((usize, usize), F)>, Vec<usize>)>
where
    F: Capacity,
{
    let mut maxflow = EdmondsKarp::with_finder(g, BreadthFirst::with_order(order))?;
    maxflow.solve(src, snk)?;
    Ok((maxflow.value(), maxflow.solution().iter().collect(), maxflow.mincut()))
}

#[cfg(test)]
mod tests {
    use super::{edmondskarp, edmondskarp_with_order, EdmondsKarp};
    use crate::maxflow::path::{BreadthFirst, NeighborOrder};
    use crate::CapacityGraph;

    #[test]
    fn test_edmondskarp() {
        let g = CapacityGraph::from_arcs(
            4,
            vec![(0, 1, 1000), (0, 2, 1000), (1, 2, 1), (1, 3, 1000), (2, 3, 1000)],
        );

        // Ford-Fulkerson might need 2000 augmentations, Edmonds-Karp needs 2
        let mut ek = EdmondsKarp::new(&g).unwrap();
        assert_eq!(ek.solve(0, 3).unwrap(), 2000);
        assert_eq!(ek.stats().augmentations, 2);
        assert_eq!(ek.flow(1, 2), 0);
        assert_eq!(ek.finder().order(), NeighborOrder::ById);
    }

    #[test]
    fn test_by_residual() {
        // two paths of the same length, the wider one is taken first
        let g = CapacityGraph::from_arcs(4, vec![(0, 1, 1), (1, 3, 1), (0, 2, 9), (2, 3, 9)]);
        let mut ek = EdmondsKarp::with_finder(&g, BreadthFirst::with_order(NeighborOrder::ByResidual)).unwrap();
        assert_eq!(ek.solve(0, 3).unwrap(), 10);
        assert_eq!(ek.stats().augmentations, 2);

        let (value, flow, _) = edmondskarp_with_order(&g, 0, 3, NeighborOrder::ByResidual).unwrap();
        assert_eq!(value, 10);
        assert_eq!(flow, vec![((0, 1), 1), ((0, 2), 9), ((1, 3), 1), ((2, 3), 9)]);
    }

    #[test]
    fn test_disconnected() {
        let g = CapacityGraph::from_arcs(4, vec![(0, 1, 3), (2, 3, 4)]);
        let (value, flow, mincut) = edmondskarp(&g, 0, 3).unwrap();
        assert_eq!(value, 0);
        assert!(flow.is_empty());
        assert_eq!(mincut, vec![0, 1]);
    }
}
