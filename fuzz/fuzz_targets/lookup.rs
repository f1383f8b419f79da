#![no_main]
// Curve lookup by object identifier arcs and by name
use ecparams::{Arc, EccKey, Error, curves};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let arcs: Vec<Arc> = data
        .chunks(4)
        .map(|chunk| chunk.iter().fold(0, |acc, &b| (acc << 8) | Arc::from(b)))
        .collect();

    let mut key = EccKey::new();
    match key.set_dp_oid(&arcs) {
        Ok(()) => {
            // only registered identifiers resolve
            let curve = curves::find_curve_by_oid(&arcs).unwrap();
            assert_eq!(key.curve_oid().unwrap().as_slice(), arcs.as_slice());
            assert_eq!(key.size(), Some(curve.size));
        }
        Err(Error::NotFound) | Err(Error::InvalidArgument) => assert!(!key.is_initialized()),
        Err(err) => panic!("unexpected error: {err}"),
    }

    if let Ok(name) = core::str::from_utf8(data) {
        if let Some(curve) = curves::find_curve(name) {
            key.set_curve(name).unwrap();
            assert_eq!(key.size(), Some(curve.size));
        } else {
            assert_eq!(key.set_curve(name), Err(Error::NotFound));
        }
    }
});
