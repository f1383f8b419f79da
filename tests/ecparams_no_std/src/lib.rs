//! Links `ecparams` into a `no_std` build.

#![no_std]

use ecparams::{EccKey, Result};

/// Resolve a curve by its object identifier and return its size in bytes.
pub fn curve_size(oid: &[ecparams::Arc]) -> Result<usize> {
    let mut key = EccKey::new();
    key.set_dp_oid(oid)?;
    Ok(key.size().unwrap_or_default())
}
