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

//! Frontier data structures for graph searches.
//!
//! A graph search keeps the discovered but not yet expanded nodes in a
//! frontier. The order in which the frontier hands out its items decides
//! the search strategy: a stack (`Vec`) yields depth-first search, a
//! queue (`VecDeque`) yields breadth-first search.

use std::collections::VecDeque;

/// A collection of items waiting to be processed.
pub trait Frontier<I> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn clear(&mut self);

    fn push(&mut self, u: I);

    fn pop(&mut self) -> Option<I>;
}

/// Last in, first out.
impl<I> Frontier<I> for Vec<I> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn push(&mut self, u: I) {
        Vec::push(self, u)
    }

    fn pop(&mut self) -> Option<I> {
        Vec::pop(self)
    }
}

/// First in, first out.
impl<I> Frontier<I> for VecDeque<I> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn push(&mut self, u: I) {
        VecDeque::push_back(self, u)
    }

    fn pop(&mut self) -> Option<I> {
        VecDeque::pop_front(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Frontier;
    use std::collections::VecDeque;

    fn drain<Fr: Frontier<usize>>(mut fr: Fr) -> Vec<usize> {
        for u in 0..4 {
            fr.push(u);
        }
        assert_eq!(fr.len(), 4);
        let mut items = vec![];
        while let Some(u) = fr.pop() {
            items.push(u);
        }
        assert!(fr.is_empty());
        items
    }

    #[test]
    fn test_order() {
        assert_eq!(drain(Vec::new()), vec![3, 2, 1, 0]);
        assert_eq!(drain(VecDeque::new()), vec![0, 1, 2, 3]);
    }
}
