#![no_main]
// Custom curves from raw values, then deep copy
use ecparams::{BigUint, EccKey};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let (head, rest) = data.split_at(8);
    let cofactor = u64::from_be_bytes(head.try_into().unwrap());

    let mut parts = rest.chunks(rest.len().div_ceil(6).max(1));
    let mut next = || BigUint::from_bytes_be(parts.next().unwrap_or_default());
    let (a, b, prime, order, gx, gy) = (next(), next(), next(), next(), next(), next());

    let mut key = EccKey::new();
    key.init().unwrap();
    key.set_dp_bn(&a, &b, &prime, &order, &gx, &gy, cofactor)
        .unwrap();

    let expected = prime.to_bytes_be();
    let expected = if prime.bits() == 0 { 0 } else { expected.len() };
    assert_eq!(key.size(), Some(expected));
    assert!(key.curve_oid().unwrap().is_empty());

    let mut copy = EccKey::new();
    copy.set_dp_copy(&key).unwrap();
    assert_eq!(copy.domain_params(), key.domain_params());
});
