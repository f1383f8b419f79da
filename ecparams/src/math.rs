//! Multi-precision integer backend.
//!
//! Every numeric field of a key is manipulated through a [`MathBackend`]
//! rather than directly, so the operations that can fail in a big-integer
//! library (allocation, copy, assignment, parsing) surface as [`Error`]s
//! at the same points regardless of the integer type in use.

use crate::{Error, Result};
use core::fmt::Debug;
use num_bigint::BigUint;
use num_traits::Zero;

/// Big-integer operations required to populate a key's domain parameters.
pub trait MathBackend {
    /// Arbitrary-precision unsigned integer type.
    type Int: Debug + Eq;

    /// Allocate a new integer initialized to zero.
    fn init(&self) -> Result<Self::Int>;

    /// Copy the value of `src` into `dst`, reusing `dst`'s storage.
    fn copy(&self, src: &Self::Int, dst: &mut Self::Int) -> Result<()>;

    /// Set `dst` to a small value.
    fn set_small(&self, dst: &mut Self::Int, value: u64) -> Result<()>;

    /// Parse `digits` in the given radix into `dst`.
    fn read_radix(&self, dst: &mut Self::Int, digits: &str, radix: u32) -> Result<()>;

    /// Length in bytes of the minimal big-endian serialization of `value`.
    ///
    /// Zero serializes to zero bytes.
    fn unsigned_bin_size(&self, value: &Self::Int) -> usize;
}

/// [`MathBackend`] on top of [`num_bigint::BigUint`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NumBigint;

impl MathBackend for NumBigint {
    type Int = BigUint;

    fn init(&self) -> Result<BigUint> {
        Ok(BigUint::zero())
    }

    fn copy(&self, src: &BigUint, dst: &mut BigUint) -> Result<()> {
        dst.clone_from(src);
        Ok(())
    }

    fn set_small(&self, dst: &mut BigUint, value: u64) -> Result<()> {
        *dst = BigUint::from(value);
        Ok(())
    }

    fn read_radix(&self, dst: &mut BigUint, digits: &str, radix: u32) -> Result<()> {
        if !(2..=36).contains(&radix) {
            return Err(Error::InvalidArgument);
        }

        *dst = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or(Error::Decode)?;
        Ok(())
    }

    fn unsigned_bin_size(&self, value: &BigUint) -> usize {
        value.bits().div_ceil(8) as usize
    }
}
