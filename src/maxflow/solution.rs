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

//! The result of a max-flow computation.

use crate::residual::ResidualGraph;
use crate::traits::Capacity;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The flow on a single arc.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ArcFlow<F> {
    pub src: usize,
    pub snk: usize,
    pub flow: F,
}

/// A maximum flow.
///
/// Contains the flow value and all arcs with strictly positive flow,
/// sorted by `(src, snk)`. Arcs without flow are omitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MaxFlow<F> {
    value: F,
    flows: Vec<ArcFlow<F>>,
}

impl<F> MaxFlow<F>
where
    F: Capacity,
{
    /// Extract the flow from a residual graph.
    ///
    /// Only arcs with positive flow are kept. Because the flow of a
    /// residual graph is skew symmetric, at most one of two mirrored arcs
    /// is kept, and synthetic reverse arcs never are.
    pub fn from_residual(g: &ResidualGraph<F>, value: F) -> Self {
        let mut flows: Vec<_> = (0..g.num_arcs())
            .filter(|&e| g.flow(e).is_pos())
            .map(|e| ArcFlow {
                src: g.tail(e),
                snk: g.head(e),
                flow: g.flow(e),
            })
            .collect();
        flows.sort_by_key(|a| (a.src, a.snk));
        MaxFlow { value, flows }
    }

    /// Return the flow value.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return all arcs with positive flow.
    pub fn flows(&self) -> &[ArcFlow<F>] {
        &self.flows
    }

    /// Return the flow from `u` to `v` (zero if there is none).
    pub fn flow(&self, u: usize, v: usize) -> F {
        self.flows
            .binary_search_by_key(&(u, v), |a| (a.src, a.snk))
            .map(|i| self.flows[i].flow)
            .unwrap_or_else(|_| F::zero())
    }

    /// Return the number of arcs with positive flow.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Return `true` if no arc carries flow.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Return an iterator over `((src, snk), flow)` of all arcs with positive flow.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), F)> + '_ {
        self.flows.iter().map(|a| ((a.src, a.snk), a.flow))
    }
}
