//! Populating a key's domain parameters.
//!
//! There are three ways in:
//!
//! - [`EccKey::set_dp_oid`]: look up a named curve by object identifier
//! - [`EccKey::set_dp_copy`]: deep copy from another key
//! - [`EccKey::set_dp_bn`]: raw big-integer values for a custom curve
//!
//! Each either fully initializes the key or leaves it empty.

use crate::{
    Error, Result,
    curves::{self, CurveDescriptor},
    key::{DomainParams, EccKey, KeyStorage},
    math::MathBackend,
    oid::CurveOid,
};
use const_oid::Arc;

impl<M: MathBackend> EccKey<M> {
    /// Install the domain parameters of a registered curve.
    ///
    /// Allocates the key's storage, replacing any previous contents.
    pub fn set_dp(&mut self, curve: &CurveDescriptor) -> Result<()> {
        self.init()?;
        self.fill_or_free(|math, storage| install(math, &mut storage.dp, curve))
    }

    /// Install the registered curve with the given name, alias, or dotted
    /// object identifier.
    pub fn set_curve(&mut self, name: &str) -> Result<()> {
        let curve = curves::find_curve(name).ok_or(Error::NotFound)?;
        self.set_dp(curve)
    }

    /// Install the registered curve whose object identifier is exactly
    /// `oid`.
    ///
    /// The key is untouched when no curve matches.
    pub fn set_dp_oid(&mut self, oid: &[Arc]) -> Result<()> {
        if oid.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let curve = curves::find_curve_by_oid(oid).ok_or(Error::NotFound)?;
        self.set_dp(curve)
    }

    /// Copy the domain parameters of `src` into freshly allocated storage.
    ///
    /// The public point and private scalar are allocated but not copied.
    /// `src` must be initialized.
    pub fn set_dp_copy(&mut self, src: &Self) -> Result<()> {
        let src = src.storage.as_ref().ok_or(Error::InvalidArgument)?;
        self.init()?;
        self.fill_or_free(|math, storage| copy_dp(math, &src.dp, &mut storage.dp))
    }

    /// Set the domain parameters of a custom curve from raw values.
    ///
    /// The key must already be initialized (see [`EccKey::init`]). The base
    /// point is made affine, `size` is derived from `prime`, and the curve
    /// is marked as unnamed: the registry is not consulted.
    #[allow(clippy::too_many_arguments)]
    pub fn set_dp_bn(
        &mut self,
        a: &M::Int,
        b: &M::Int,
        prime: &M::Int,
        order: &M::Int,
        gx: &M::Int,
        gy: &M::Int,
        cofactor: u64,
    ) -> Result<()> {
        self.fill_or_free(|math, storage| {
            let dp = &mut storage.dp;
            math.copy(prime, &mut dp.prime)?;
            math.copy(order, &mut dp.order)?;
            math.copy(a, &mut dp.a)?;
            math.copy(b, &mut dp.b)?;
            math.copy(gx, &mut dp.base.x)?;
            math.copy(gy, &mut dp.base.y)?;
            math.set_small(&mut dp.base.z, 1)?;

            dp.cofactor = cofactor;
            dp.size = math.unsigned_bin_size(prime);
            dp.oid.clear();
            Ok(())
        })
    }

    /// Run `fill` against the key's storage, releasing the storage if it
    /// fails. An uninitialized key is [`Error::InvalidArgument`].
    fn fill_or_free<F>(&mut self, fill: F) -> Result<()>
    where
        F: FnOnce(&M, &mut KeyStorage<M::Int>) -> Result<()>,
    {
        let result = match self.storage.as_mut() {
            Some(storage) => fill(&self.math, storage),
            None => Err(Error::InvalidArgument),
        };

        if result.is_err() {
            self.free();
        }

        result
    }
}

fn install<M: MathBackend>(
    math: &M,
    dp: &mut DomainParams<M::Int>,
    curve: &CurveDescriptor,
) -> Result<()> {
    math.read_radix(&mut dp.prime, curve.prime, 16)?;
    math.read_radix(&mut dp.order, curve.order, 16)?;
    math.read_radix(&mut dp.a, curve.a, 16)?;
    math.read_radix(&mut dp.b, curve.b, 16)?;
    math.read_radix(&mut dp.base.x, curve.gx, 16)?;
    math.read_radix(&mut dp.base.y, curve.gy, 16)?;
    math.set_small(&mut dp.base.z, 1)?;

    dp.cofactor = curve.cofactor;
    dp.size = math.unsigned_bin_size(&dp.prime);
    dp.oid = CurveOid::try_from(&curve.oid)?;
    Ok(())
}

fn copy_dp<M: MathBackend>(
    math: &M,
    src: &DomainParams<M::Int>,
    dst: &mut DomainParams<M::Int>,
) -> Result<()> {
    math.copy(&src.prime, &mut dst.prime)?;
    math.copy(&src.order, &mut dst.order)?;
    math.copy(&src.a, &mut dst.a)?;
    math.copy(&src.b, &mut dst.b)?;
    math.copy(&src.base.x, &mut dst.base.x)?;
    math.copy(&src.base.y, &mut dst.base.y)?;
    math.copy(&src.base.z, &mut dst.base.z)?;

    dst.cofactor = src.cofactor;
    dst.size = src.size;
    dst.oid.copy_from(&src.oid);
    Ok(())
}
