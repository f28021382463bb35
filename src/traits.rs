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

//! Traits shared by all flow algorithms.

use crate::num::traits::{NumAssign, Signed};

use std::fmt::Debug;

/// The numeric type of capacities and flows.
///
/// Flows on residual arcs are signed (the flow on a reverse arc is the
/// negated flow on its forward arc), hence the value type must be signed.
/// The trait is implemented for all signed integers and floating point
/// numbers.
///
/// Floating point capacities are supported, but no tolerance is applied:
/// a residual capacity is positive iff it is strictly larger than zero.
/// Saturated arcs always carry exactly their capacity, and push-relabel
/// discards excess left over by rounding (see [`Capacity::is_exact`]).
pub trait Capacity: NumAssign + Signed + PartialOrd + Copy + Debug {
    /// Return the smaller of two values.
    ///
    /// If the values are incomparable (NaN), `a` is returned.
    fn min_of(a: Self, b: Self) -> Self {
        if b < a {
            b
        } else {
            a
        }
    }

    /// Return `true` if the value is strictly positive.
    fn is_pos(&self) -> bool {
        *self > Self::zero()
    }

    /// Return `true` if arithmetic on this type is exact.
    ///
    /// Integer division truncates, so `1 / 2` is zero exactly for the
    /// integer types.
    fn is_exact() -> bool {
        (Self::one() / (Self::one() + Self::one())).is_zero()
    }
}

impl<T> Capacity for T where T: NumAssign + Signed + PartialOrd + Copy + Debug {}

#[cfg(test)]
mod tests {
    use super::Capacity;

    #[test]
    fn test_min_of() {
        assert_eq!(<i32 as Capacity>::min_of(3, 5), 3);
        assert_eq!(<i64 as Capacity>::min_of(7, -1), -1);
        assert_eq!(<f64 as Capacity>::min_of(2.5, 1.5), 1.5);
    }

    #[test]
    fn test_is_pos() {
        assert!(5i32.is_pos());
        assert!(!0i32.is_pos());
        assert!(!(-2i64).is_pos());
        assert!(0.25f64.is_pos());
        assert!(!f64::NAN.is_pos());
    }

    #[test]
    fn test_is_exact() {
        assert!(<i32 as Capacity>::is_exact());
        assert!(<isize as Capacity>::is_exact());
        assert!(!<f32 as Capacity>::is_exact());
        assert!(!<f64 as Capacity>::is_exact());
    }
}
