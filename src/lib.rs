// Copyright (c) 2015-2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! A library for maximum flow problems on directed, capacitated graphs.
//!
//! The crate builds a residual graph from a [`CapacityGraph`] and runs one
//! of three max-flow algorithms on it:
//!
//! - Ford-Fulkerson with depth-first augmenting paths ([`maxflow::fordfulkerson`]),
//! - Edmonds-Karp with breadth-first augmenting paths ([`maxflow::edmondskarp`]),
//! - push-relabel ([`maxflow::pushrelabel`]).
//!
//! # Example
//!
//! ```
//! use rs_maxflow::{maxflow, Algorithm, CapacityGraph};
//!
//! let g = CapacityGraph::new_with(|b| {
//!     let nodes = b.add_nodes(4);
//!     b.add_edge(nodes[0], nodes[1], 10);
//!     b.add_edge(nodes[0], nodes[2], 5);
//!     b.add_edge(nodes[1], nodes[3], 5);
//!     b.add_edge(nodes[2], nodes[3], 10);
//! });
//!
//! for &alg in &[Algorithm::FordFulkerson, Algorithm::EdmondsKarp, Algorithm::PushRelabel] {
//!     let sol = maxflow::solve(alg, &g, 0, 3).unwrap();
//!     assert_eq!(sol.value(), 10);
//!     assert_eq!(sol.flow(0, 1), 5);
//! }
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod traits;
pub use self::traits::Capacity;

pub mod error;
pub use self::error::{Error, Result};

pub mod builder;
pub use self::builder::CapacityGraphBuilder;

pub mod capacity;
pub use self::capacity::{CapacityGraph, Edge};

pub mod residual;
pub use self::residual::ResidualGraph;

pub mod collections;

// # Algorithms

pub mod maxflow;
pub use self::maxflow::{Algorithm, MaxFlow, Stats};
