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

//! Errors reported by the flow algorithms.

use thiserror::Error;

/// Error of a max-flow computation.
///
/// Invalid input is reported before any algorithm runs. The remaining
/// variants signal an internal inconsistency of the push-relabel engine and
/// cannot occur as long as the residual graph invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("node {node} out of range (must be in 0..{num_nodes})")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("source and sink node must not be equal (both are {0})")]
    SourceIsSink(usize),

    #[error("invalid loop ({0},{0})")]
    SelfLoop(usize),

    /// A capacity is negative or not comparable (NaN).
    ///
    /// The capacity is stored formatted with `Debug`, so `Error` does not
    /// depend on the capacity type and errors of differently typed graphs
    /// can be propagated with `?` into the same `Result`.
    #[error("negative or invalid capacity {cap} on edge ({src},{snk})")]
    NegativeCapacity { src: usize, snk: usize, cap: String },

    #[error("unknown max-flow algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("label of node {node} exceeds {bound} (got {label})")]
    LabelOverflow { node: usize, label: usize, bound: usize },

    #[error("node {0} has positive excess but no residual arc")]
    StrandedExcess(usize),
}

impl Error {
    /// Return `true` if the error is caused by invalid input data.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::LabelOverflow { .. } | Error::StrandedExcess(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
