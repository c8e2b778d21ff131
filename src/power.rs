use crate::ops::MonoidOp;

/// Raises `base` to `exp` under `op` with O(log exp) combines.
///
/// Binary decomposition of the exponent: the running square is folded into
/// the result for each set bit. `exp == 0` yields the identity.
pub fn pow_with<O: MonoidOp>(op: &O, base: O::Value, exp: u64) -> O::Value {
    let mut result = op.identity();
    let mut square = base;
    let mut n = exp;
    while n > 0 {
        if n & 1 == 1 {
            result = op.combine(&result, &square);
        }
        square = op.combine(&square, &square);
        n >>= 1;
    }
    result
}

struct WrappingProduct;

impl MonoidOp for WrappingProduct {
    type Value = u64;

    fn identity(&self) -> u64 {
        1
    }

    fn combine(&self, a: &u64, b: &u64) -> u64 {
        a.wrapping_mul(*b)
    }
}

/// `base^exp` over wrapping `u64` multiplication, the common integer case of
/// [`pow_with`].
pub fn pow(base: u64, exp: u32) -> u64 {
    pow_with(&WrappingProduct, base, u64::from(exp))
}
