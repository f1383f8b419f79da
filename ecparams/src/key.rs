//! ECC keys and the big-integer storage they own.

use crate::{
    Result,
    math::{MathBackend, NumBigint},
    oid::CurveOid,
};
use core::fmt;

/// Curve point in projective `(x, y, z)` coordinates.
///
/// Points built from domain parameters are affine, i.e. `z = 1`.
#[derive(Debug, Eq, PartialEq)]
pub struct Point<I> {
    /// x-coordinate
    pub x: I,

    /// y-coordinate
    pub y: I,

    /// z-coordinate
    pub z: I,
}

impl<I> Point<I> {
    fn init<M: MathBackend<Int = I>>(math: &M) -> Result<Self> {
        Ok(Self {
            x: math.init()?,
            y: math.init()?,
            z: math.init()?,
        })
    }
}

/// Domain parameters of a short Weierstrass curve
/// `y² = x³ + a·x + b (mod prime)`.
#[derive(Debug, Eq, PartialEq)]
pub struct DomainParams<I> {
    /// Field modulus.
    pub prime: I,

    /// Order of the base point.
    pub order: I,

    /// Coefficient `a` in the curve equation.
    pub a: I,

    /// Coefficient `b` in the curve equation.
    pub b: I,

    /// Base point.
    pub base: Point<I>,

    /// Curve cofactor.
    pub cofactor: u64,

    /// Length of the big-endian serialization of `prime` in bytes.
    pub size: usize,

    /// Identifier of the named curve, empty for custom curves.
    pub oid: CurveOid,
}

/// Every big integer a key owns, allocated and released as a unit.
pub(crate) struct KeyStorage<I> {
    pub(crate) dp: DomainParams<I>,
    pub(crate) pubkey: Point<I>,
    pub(crate) k: I,
}

impl<I> KeyStorage<I> {
    /// Allocate all eleven integers, zero-valued.
    ///
    /// Integers allocated before a failing one are dropped on return.
    pub(crate) fn init<M: MathBackend<Int = I>>(math: &M) -> Result<Self> {
        Ok(Self {
            dp: DomainParams {
                prime: math.init()?,
                order: math.init()?,
                a: math.init()?,
                b: math.init()?,
                base: Point::init(math)?,
                cofactor: 0,
                size: 0,
                oid: CurveOid::EMPTY,
            },
            pubkey: Point::init(math)?,
            k: math.init()?,
        })
    }
}

/// Elliptic curve key: domain parameters, public point and private scalar.
///
/// A key either owns all of its big integers or none of them. Every
/// operation that populates a key and fails leaves it with none.
pub struct EccKey<M: MathBackend = NumBigint> {
    pub(crate) math: M,
    pub(crate) storage: Option<KeyStorage<M::Int>>,
}

impl EccKey<NumBigint> {
    /// Create an empty key backed by [`NumBigint`].
    pub fn new() -> Self {
        Self::with_backend(NumBigint)
    }
}

impl Default for EccKey<NumBigint> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MathBackend> EccKey<M> {
    /// Create an empty key using the given math backend.
    pub fn with_backend(math: M) -> Self {
        Self {
            math,
            storage: None,
        }
    }

    /// Math backend used by this key.
    pub fn backend(&self) -> &M {
        &self.math
    }

    /// Allocate storage for every big integer of the key, zero-valued.
    ///
    /// Any previous contents are released first. On failure the key is left
    /// empty.
    pub fn init(&mut self) -> Result<()> {
        self.free();
        self.storage = Some(KeyStorage::init(&self.math)?);
        Ok(())
    }

    /// Release every big integer owned by the key.
    ///
    /// Calling this on an empty key is a no-op.
    pub fn free(&mut self) {
        self.storage = None;
    }

    /// Does the key own its big integers?
    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    /// Domain parameters, if initialized.
    pub fn domain_params(&self) -> Option<&DomainParams<M::Int>> {
        self.storage.as_ref().map(|s| &s.dp)
    }

    /// Mutable domain parameters, if initialized.
    pub fn domain_params_mut(&mut self) -> Option<&mut DomainParams<M::Int>> {
        self.storage.as_mut().map(|s| &mut s.dp)
    }

    /// Public point, if initialized.
    pub fn public_point(&self) -> Option<&Point<M::Int>> {
        self.storage.as_ref().map(|s| &s.pubkey)
    }

    /// Mutable public point, if initialized.
    ///
    /// Populating domain parameters only allocates the public point; setting
    /// its value is up to the caller.
    pub fn public_point_mut(&mut self) -> Option<&mut Point<M::Int>> {
        self.storage.as_mut().map(|s| &mut s.pubkey)
    }

    /// Mutable private scalar, if initialized.
    pub fn secret_scalar_mut(&mut self) -> Option<&mut M::Int> {
        self.storage.as_mut().map(|s| &mut s.k)
    }

    /// Size of the curve's field elements in bytes, if initialized.
    pub fn size(&self) -> Option<usize> {
        self.domain_params().map(|dp| dp.size)
    }

    /// Identifier of the key's curve, if initialized.
    pub fn curve_oid(&self) -> Option<&CurveOid> {
        self.domain_params().map(|dp| &dp.oid)
    }
}

impl<M: MathBackend> fmt::Debug for EccKey<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EccKey")
            .field("dp", &self.domain_params())
            .field("pubkey", &self.public_point())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::EccKey;

    #[test]
    fn init_and_free() {
        let mut key = EccKey::new();
        assert!(!key.is_initialized());
        assert_eq!(key.size(), None);

        key.init().unwrap();
        assert!(key.is_initialized());
        assert_eq!(key.size(), Some(0));
        assert!(key.curve_oid().unwrap().is_empty());

        key.free();
        assert!(!key.is_initialized());
        key.free();
        assert!(!key.is_initialized());
    }

    #[test]
    fn debug_omits_secret_scalar() {
        let mut key = EccKey::new();
        key.init().unwrap();
        *key.secret_scalar_mut().unwrap() = 0xdead_beef_u32.into();

        let debug = alloc::format!("{key:?}");
        assert!(!debug.contains(&alloc::format!("{}", 0xdead_beef_u32)));
        assert!(debug.starts_with("EccKey"));
    }
}
