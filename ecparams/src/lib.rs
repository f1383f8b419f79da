#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! Elliptic curve domain parameter management.
//!
//! An [`EccKey`] owns the domain parameters of the curve it lives on
//! (prime, order, equation coefficients, base point, cofactor and, for
//! named curves, an object identifier) together with storage for its public
//! point and private scalar. This crate populates that state in one of
//! three ways:
//!
//! - from the built-in registry of named curves, by object identifier
//!   ([`EccKey::set_dp_oid`]) or by name ([`EccKey::set_curve`])
//! - as a deep copy of another key's parameters ([`EccKey::set_dp_copy`])
//! - from raw big-integer values describing a custom curve
//!   ([`EccKey::set_dp_bn`])
//!
//! Every operation either fully initializes the key or leaves it holding no
//! big integers at all.
//!
//! No validation of raw parameters is performed: callers supplying custom
//! curves are responsible for their soundness.
//!
//! ## Usage
//!
#![cfg_attr(feature = "nist", doc = "```")]
#![cfg_attr(not(feature = "nist"), doc = "```ignore")]
//! use ecparams::{EccKey, Error};
//!
//! let mut key = EccKey::new();
//! key.set_dp_oid(&[1, 2, 840, 10045, 3, 1, 7])?;
//! assert_eq!(key.size(), Some(32));
//!
//! let mut copy = EccKey::new();
//! copy.set_dp_copy(&key)?;
//! assert_eq!(copy.domain_params(), key.domain_params());
//!
//! assert_eq!(
//!     EccKey::new().set_dp_oid(&[1, 2, 840, 10045, 3, 1, 8]),
//!     Err(Error::NotFound)
//! );
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Math backends
//!
//! Big integers are manipulated through the [`MathBackend`] trait. The
//! default backend, [`NumBigint`], uses [`num_bigint::BigUint`].

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod curves;
pub mod math;

mod error;
mod key;
mod oid;
mod set_dp;

pub use crate::{
    curves::{CurveDescriptor, find_curve, find_curve_by_oid},
    error::{Error, Result},
    key::{DomainParams, EccKey, Point},
    math::{MathBackend, NumBigint},
    oid::{CurveOid, MAX_OID_ARCS},
};
pub use const_oid::{self, Arc, ObjectIdentifier};
pub use num_bigint::{self, BigUint};
