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

//! Maximum flow algorithms.
//!
//! All algorithms work on a [`ResidualGraph`](crate::ResidualGraph) built
//! from a [`CapacityGraph`] and report their result as a [`MaxFlow`].
//! Each algorithm comes as a struct holding all working data (which can
//! be solved repeatedly for different terminals) and as a convenience
//! function returning `(value, flow, mincut)`.

pub mod augmenting;
pub mod edmondskarp;
pub mod fordfulkerson;
pub mod path;
pub mod pushrelabel;
pub mod solution;

pub use self::augmenting::{augment, bottleneck, AugmentingPaths};
pub use self::edmondskarp::{edmondskarp, edmondskarp_with_order, EdmondsKarp};
pub use self::fordfulkerson::{fordfulkerson, FordFulkerson};
pub use self::path::{BreadthFirst, DepthFirst, NeighborOrder, Path, PathFinder};
pub use self::pushrelabel::{pushrelabel, PushRelabel, RelabelRule};
pub use self::solution::{ArcFlow, MaxFlow};

use crate::capacity::CapacityGraph;
use crate::error::{Error, Result};
use crate::traits::Capacity;

use std::fmt;
use std::str::FromStr;

/// Operation counters of a single max-flow run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of augmenting paths.
    pub augmentations: usize,
    /// Number of push operations (including the initial saturating pushes).
    pub pushes: usize,
    /// Number of relabel operations.
    pub relabels: usize,
    /// Number of global relabellings.
    pub global_relabels: usize,
    /// Number of rounding residues dropped by push-relabel.
    pub discarded: usize,
}

/// The available max-flow algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Augmenting paths found by depth-first search.
    FordFulkerson,
    /// Augmenting paths found by breadth-first search.
    EdmondsKarp,
    /// Preflow push with relabelling.
    PushRelabel,
}

impl Algorithm {
    /// Return all algorithms.
    pub fn all() -> [Algorithm; 3] {
        [Algorithm::FordFulkerson, Algorithm::EdmondsKarp, Algorithm::PushRelabel]
    }

    /// Return the name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::FordFulkerson => "fordfulkerson",
            Algorithm::EdmondsKarp => "edmondskarp",
            Algorithm::PushRelabel => "pushrelabel",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(&['-', '_', ' '][..], "").as_str() {
            "fordfulkerson" | "ff" | "dfs" => Ok(Algorithm::FordFulkerson),
            "edmondskarp" | "ek" | "bfs" => Ok(Algorithm::EdmondsKarp),
            "pushrelabel" | "pr" => Ok(Algorithm::PushRelabel),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Solve the max-flow problem from `src` to `snk` with the given algorithm.
///
/// The algorithms use their default settings.
///
/// # Example
///
/// ```
/// use rs_maxflow::{maxflow, Algorithm, CapacityGraph, Error};
///
/// let g = CapacityGraph::from_arcs(2, vec![(0, 1, 5)]);
/// let alg: Algorithm = "edmonds-karp".parse().unwrap();
///
/// let sol = maxflow::solve(alg, &g, 0, 1).unwrap();
/// assert_eq!(sol.value(), 5);
/// assert_eq!(sol.iter().collect::<Vec<_>>(), vec![((0, 1), 5)]);
///
/// assert_eq!(maxflow::solve(alg, &g, 1, 1), Err(Error::SourceIsSink(1)));
/// ```
pub fn solve<F>(alg: Algorithm, g: &CapacityGraph<F>, src: usize, snk: usize) -> Result<MaxFlow<F>>
where
    F: Capacity,
{
    match alg {
        Algorithm::FordFulkerson => {
            let mut maxflow = FordFulkerson::new(g)?;
            maxflow.solve(src, snk)?;
            Ok(maxflow.solution())
        }
        Algorithm::EdmondsKarp => {
            let mut maxflow = EdmondsKarp::new(g)?;
            maxflow.solve(src, snk)?;
            Ok(maxflow.solution())
        }
        Algorithm::PushRelabel => {
            let mut maxflow = PushRelabel::new(g)?;
            maxflow.solve(src, snk)?;
            Ok(maxflow.solution())
        }
    }
}
