use crate::server::error::operation::CalculationError;

/// Solves "largest k ≤ n with k mod x = y".
///
/// Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Returns the maximum k with `0 ≤ k ≤ n` and `k mod x = y`.
    ///
    /// Takes the largest multiple of `x` not above `n`, adds `y`, and steps back one
    /// period if that overshoots `n`. Expects `y < x`; callers enforce it, and with a
    /// larger `y` the returned value is not congruent to `y`.
    ///
    /// # Returns
    /// - `Ok(k)` - The maximum k
    /// - `Err(CalculationError::ZeroModulus)` - `x` is 0
    /// - `Err(CalculationError::NegativeInput)` - Any input below 0
    /// - `Err(CalculationError::NoSolution)` - Every candidate is negative (`y > n` and `x > n`)
    /// - `Err(CalculationError::Overflow)` - `n + y` does not fit in an `i64`
    pub fn max_k(&self, x: i64, y: i64, n: i64) -> Result<i64, CalculationError> {
        if x < 0 || y < 0 || n < 0 {
            return Err(CalculationError::NegativeInput { x, y, n });
        }
        if x == 0 {
            return Err(CalculationError::ZeroModulus);
        }

        let mut k = (n - n % x)
            .checked_add(y)
            .ok_or(CalculationError::Overflow { x, y, n })?;
        if k > n {
            k -= x;
        }

        if k < 0 {
            return Err(CalculationError::NoSolution { x, y, n });
        }

        Ok(k)
    }
}
