// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Objective Numeric Trait
//!
//! Unified numeric bounds for the model and solver components. Objective
//! weights are real-valued, so the whole layer is generic over a floating
//! point type rather than a machine integer. `ObjectiveNumeric` collects
//! the necessary bounds into a single alias, simplifying generic
//! signatures; in practice the alias resolves to `f64`.

use num_traits::Float;

/// A trait alias for numeric types that can carry objective values and
/// constraint coefficients. These are usually `f32` and `f64`.
pub trait ObjectiveNumeric:
    Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

impl<T> ObjectiveNumeric for T where
    T: Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

/// The comparison tolerance used when checking row satisfaction and strict
/// objective improvement. Scaled off the type's machine epsilon so `f32`
/// and `f64` both get a sensible slack.
#[inline]
pub fn solution_tolerance<W>() -> W
where
    W: ObjectiveNumeric,
{
    W::epsilon().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_is_small_but_nonzero() {
        let tol = solution_tolerance::<f64>();
        assert!(tol > 0.0);
        assert!(tol < 1e-6);
    }

    #[test]
    fn test_tolerance_scales_with_precision() {
        assert!(solution_tolerance::<f32>() > solution_tolerance::<f64>() as f32);
    }
}
