//! Registry of named curves.
//!
//! Each entry carries its domain parameters as big-endian hexadecimal
//! strings, in the form the installer ([`EccKey::set_dp`]) decodes them.
//!
//! [`EccKey::set_dp`]: crate::EccKey::set_dp

use const_oid::{Arc, ObjectIdentifier};

/// Named short Weierstrass curve: `y² = x³ + a·x + b (mod prime)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CurveDescriptor {
    /// Canonical name.
    pub name: &'static str,

    /// Other names the curve is known by.
    pub aliases: &'static [&'static str],

    /// Object identifier.
    pub oid: ObjectIdentifier,

    /// Size of a serialized field element in bytes.
    pub size: usize,

    /// Field modulus.
    pub prime: &'static str,

    /// Coefficient `a` in the curve equation.
    pub a: &'static str,

    /// Coefficient `b` in the curve equation.
    pub b: &'static str,

    /// Order of the base point.
    pub order: &'static str,

    /// Base point x-coordinate.
    pub gx: &'static str,

    /// Base point y-coordinate.
    pub gy: &'static str,

    /// Curve cofactor.
    pub cofactor: u64,
}

impl CurveDescriptor {
    /// Does this curve's object identifier consist of exactly `arcs`?
    pub fn oid_matches(&self, arcs: &[Arc]) -> bool {
        self.oid.arcs().count() == arcs.len() && self.oid.arcs().eq(arcs.iter().copied())
    }

    /// Is `name` the canonical name or one of the aliases of this curve?
    ///
    /// ASCII case and the separators `-`, `_` and space are ignored.
    pub fn name_matches(&self, name: &str) -> bool {
        name_eq(self.name, name) || self.aliases.iter().any(|alias| name_eq(alias, name))
    }
}

/// NIST P-192 (secp192r1).
#[cfg(feature = "nist")]
pub const SECP192R1: CurveDescriptor = CurveDescriptor {
    name: "P-192",
    aliases: &["secp192r1", "nistp192", "prime192v1", "eccp192"],
    oid: ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1"),
    size: 24,
    prime: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC",
    b: "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
    order: "FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831",
    gx: "188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012",
    gy: "07192B95FFC8DA78631011ED6B24CDD573F977A11E794811",
    cofactor: 1,
};

/// NIST P-224 (secp224r1).
#[cfg(feature = "nist")]
pub const SECP224R1: CurveDescriptor = CurveDescriptor {
    name: "P-224",
    aliases: &["secp224r1", "nistp224", "eccp224"],
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.33"),
    size: 28,
    prime: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
    b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    order: "FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D",
    gx: "B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21",
    gy: "BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34",
    cofactor: 1,
};

/// NIST P-256 (secp256r1, prime256v1).
#[cfg(feature = "nist")]
pub const SECP256R1: CurveDescriptor = CurveDescriptor {
    name: "P-256",
    aliases: &["secp256r1", "nistp256", "prime256v1", "eccp256"],
    oid: ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"),
    size: 32,
    prime: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    order: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    cofactor: 1,
};

/// NIST P-384 (secp384r1).
#[cfg(feature = "nist")]
pub const SECP384R1: CurveDescriptor = CurveDescriptor {
    name: "P-384",
    aliases: &["secp384r1", "nistp384", "eccp384"],
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.34"),
    size: 48,
    prime: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFC",
    b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
    order: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973",
    gx: "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7",
    gy: "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F",
    cofactor: 1,
};

/// NIST P-521 (secp521r1).
#[cfg(feature = "nist")]
pub const SECP521R1: CurveDescriptor = CurveDescriptor {
    name: "P-521",
    aliases: &["secp521r1", "nistp521", "eccp521"],
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.35"),
    size: 66,
    prime: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    a: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC",
    b: "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
    order: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409",
    gx: "00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66",
    gy: "011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650",
    cofactor: 1,
};

/// SECG secp256k1.
#[cfg(feature = "secp256k1")]
pub const SECP256K1: CurveDescriptor = CurveDescriptor {
    name: "secp256k1",
    aliases: &["k256"],
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.10"),
    size: 32,
    prime: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "0000000000000000000000000000000000000000000000000000000000000000",
    b: "0000000000000000000000000000000000000000000000000000000000000007",
    order: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    gx: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    gy: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    cofactor: 1,
};

/// brainpoolP256r1 (RFC 5639).
#[cfg(feature = "brainpool")]
pub const BRAINPOOLP256R1: CurveDescriptor = CurveDescriptor {
    name: "brainpoolP256r1",
    aliases: &["bp256r1"],
    oid: ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.7"),
    size: 32,
    prime: "A9FB57DBA1EEA9BC3E660A909D838D726E3BF623D52620282013481D1F6E5377",
    a: "7D5A0975FC2C3057EEF67530417AFFE7FB8055C126DC5C6CE94A4B44F330B5D9",
    b: "26DC5C6CE94A4B44F330B5D9BBD77CBF958416295CF7E1CE6BCCDC18FF8C07B6",
    order: "A9FB57DBA1EEA9BC3E660A909D838D718C397AA3B561A6F7901E0E82974856A7",
    gx: "8BD2AEB9CB7E57CB2C4B482FFC81B7AFB9DE27E1E3BD23C23A4453BD9ACE3262",
    gy: "547EF835C3DAC4FD97F8461A14611DC9C27745132DED8E545C1D54C72F046997",
    cofactor: 1,
};

/// brainpoolP384r1 (RFC 5639).
#[cfg(feature = "brainpool")]
pub const BRAINPOOLP384R1: CurveDescriptor = CurveDescriptor {
    name: "brainpoolP384r1",
    aliases: &["bp384r1"],
    oid: ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.11"),
    size: 48,
    prime: "8CB91E82A3386D280F5D6F7E50E641DF152F7109ED5456B412B1DA197FB71123ACD3A729901D1A71874700133107EC53",
    a: "7BC382C63D8C150C3C72080ACE05AFA0C2BEA28E4FB22787139165EFBA91F90F8AA5814A503AD4EB04A8C7DD22CE2826",
    b: "04A8C7DD22CE28268B39B55416F0447C2FB77DE107DCD2A62E880EA53EEB62D57CB4390295DBC9943AB78696FA504C11",
    order: "8CB91E82A3386D280F5D6F7E50E641DF152F7109ED5456B31F166E6CAC0425A7CF3AB6AF6B7FC3103B883202E9046565",
    gx: "1D1C64F068CF45FFA2A63A81B7C13F6B8847A3E77EF14FE3DB7FCAFE0CBD10E8E826E03436D646AAEF87B2E247D4AF1E",
    gy: "8ABE1D7520F9C2A45CB1EB8E95CFD55262B70B29FEEC5864E19C054FF99129280E4646217791811142820341263C5315",
    cofactor: 1,
};

#[cfg(feature = "nist")]
const NIST_CURVES: &[CurveDescriptor] = &[SECP192R1, SECP224R1, SECP256R1, SECP384R1, SECP521R1];
#[cfg(not(feature = "nist"))]
const NIST_CURVES: &[CurveDescriptor] = &[];

#[cfg(feature = "secp256k1")]
const KOBLITZ_CURVES: &[CurveDescriptor] = &[SECP256K1];
#[cfg(not(feature = "secp256k1"))]
const KOBLITZ_CURVES: &[CurveDescriptor] = &[];

#[cfg(feature = "brainpool")]
const BRAINPOOL_CURVES: &[CurveDescriptor] = &[BRAINPOOLP256R1, BRAINPOOLP384R1];
#[cfg(not(feature = "brainpool"))]
const BRAINPOOL_CURVES: &[CurveDescriptor] = &[];

/// Iterate over the registered curves in lookup priority order.
pub fn registry() -> impl Iterator<Item = &'static CurveDescriptor> {
    NIST_CURVES
        .iter()
        .chain(KOBLITZ_CURVES)
        .chain(BRAINPOOL_CURVES)
}

/// Find the first registered curve whose object identifier is exactly
/// `arcs`.
pub fn find_curve_by_oid(arcs: &[Arc]) -> Option<&'static CurveDescriptor> {
    registry().find(|curve| curve.oid_matches(arcs))
}

/// Find a registered curve by canonical name, alias, or dotted object
/// identifier (e.g. `"1.2.840.10045.3.1.7"`).
pub fn find_curve(name: &str) -> Option<&'static CurveDescriptor> {
    if name.is_empty() {
        return None;
    }

    let oid = ObjectIdentifier::new(name).ok();
    registry().find(|curve| curve.name_matches(name) || oid == Some(curve.oid))
}

fn name_eq(left: &str, right: &str) -> bool {
    normalized(left).eq(normalized(right))
}

fn normalized(name: &str) -> impl Iterator<Item = u8> + '_ {
    name.bytes()
        .filter(|b| !matches!(b, b' ' | b'-' | b'_'))
        .map(|b| b.to_ascii_lowercase())
}
