//! Curve object identifiers.

use crate::{Error, Result};
use const_oid::{Arc, ObjectIdentifier};
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// Maximum number of arcs a [`CurveOid`] can hold.
pub const MAX_OID_ARCS: usize = 16;

/// Object identifier of the named curve a set of domain parameters belongs
/// to, stored as a fixed-capacity sequence of arcs.
///
/// An empty identifier marks a custom curve that is not in the registry.
#[derive(Copy, Clone)]
pub struct CurveOid {
    arcs: [Arc; MAX_OID_ARCS],
    len: usize,
}

impl CurveOid {
    /// Identifier of a custom (unnamed) curve.
    pub const EMPTY: Self = Self {
        arcs: [0; MAX_OID_ARCS],
        len: 0,
    };

    /// Create an identifier from its arcs.
    ///
    /// Returns [`Error::InvalidArgument`] if there are more than
    /// [`MAX_OID_ARCS`] arcs.
    pub fn new(arcs: &[Arc]) -> Result<Self> {
        if arcs.len() > MAX_OID_ARCS {
            return Err(Error::InvalidArgument);
        }

        let mut oid = Self::EMPTY;
        oid.arcs[..arcs.len()].copy_from_slice(arcs);
        oid.len = arcs.len();
        Ok(oid)
    }

    /// Arcs of this identifier.
    pub fn as_slice(&self) -> &[Arc] {
        &self.arcs[..self.len]
    }

    /// Number of arcs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is this the identifier of a custom curve?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark the curve as custom.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Overwrite this identifier with `other`: the length first, then each
    /// arc up to that length.
    pub fn copy_from(&mut self, other: &Self) {
        self.len = other.len;
        self.arcs[..self.len].copy_from_slice(other.as_slice());
    }

    /// Convert to a [`ObjectIdentifier`].
    ///
    /// Returns `None` for custom curves, or if the arcs do not form a valid
    /// object identifier.
    pub fn to_object_identifier(&self) -> Option<ObjectIdentifier> {
        if self.is_empty() {
            return None;
        }

        ObjectIdentifier::from_arcs(self.as_slice().iter().copied()).ok()
    }
}

impl Default for CurveOid {
    fn default() -> Self {
        Self::EMPTY
    }
}

// Arcs past `len` are stale and must not take part in comparisons.
impl PartialEq for CurveOid {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for CurveOid {}

impl Hash for CurveOid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl AsRef<[Arc]> for CurveOid {
    fn as_ref(&self) -> &[Arc] {
        self.as_slice()
    }
}

impl TryFrom<&ObjectIdentifier> for CurveOid {
    type Error = Error;

    fn try_from(oid: &ObjectIdentifier) -> Result<Self> {
        let mut out = Self::EMPTY;

        for arc in oid.arcs() {
            if out.len == MAX_OID_ARCS {
                return Err(Error::InvalidArgument);
            }

            out.arcs[out.len] = arc;
            out.len += 1;
        }

        Ok(out)
    }
}

impl fmt::Display for CurveOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.as_slice().iter().enumerate() {
            if i != 0 {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for CurveOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurveOid({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CurveOid, MAX_OID_ARCS};
    use crate::Error;
    use alloc::string::ToString;
    use const_oid::ObjectIdentifier;

    const P256: &[u32] = &[1, 2, 840, 10045, 3, 1, 7];

    #[test]
    fn new_and_as_slice() {
        let oid = CurveOid::new(P256).unwrap();
        assert_eq!(oid.as_slice(), P256);
        assert_eq!(oid.len(), 7);
        assert!(!oid.is_empty());
    }

    #[test]
    fn too_many_arcs() {
        let arcs = [1u32; MAX_OID_ARCS + 1];
        assert_eq!(CurveOid::new(&arcs), Err(Error::InvalidArgument));
        assert!(CurveOid::new(&arcs[..MAX_OID_ARCS]).is_ok());
    }

    #[test]
    fn copy_from_shrinks_and_grows() {
        let long = CurveOid::new(P256).unwrap();
        let short = CurveOid::new(&[1, 3, 132, 0, 34]).unwrap();

        let mut oid = long;
        oid.copy_from(&short);
        assert_eq!(oid, short);

        oid.copy_from(&long);
        assert_eq!(oid, long);
    }

    #[test]
    fn equality_ignores_stale_arcs() {
        let mut oid = CurveOid::new(P256).unwrap();
        oid.clear();
        assert_eq!(oid, CurveOid::EMPTY);
        assert_eq!(oid.as_slice(), &[] as &[u32]);
    }

    #[test]
    fn object_identifier_conversions() {
        let expected = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
        let oid = CurveOid::try_from(&expected).unwrap();
        assert_eq!(oid.as_slice(), P256);
        assert_eq!(oid.to_object_identifier(), Some(expected));
        assert_eq!(CurveOid::EMPTY.to_object_identifier(), None);
    }

    #[test]
    fn display_dotted() {
        let oid = CurveOid::new(P256).unwrap();
        assert_eq!(oid.to_string(), "1.2.840.10045.3.1.7");
        assert_eq!(CurveOid::EMPTY.to_string(), "");
    }
}
