#![no_main]

use libfuzzer_sys::fuzz_target;

use factcalc_core::calculator::FactError;
use factcalc_core::partitioned::factorial_parallel;
use factcalc_core::serial::factorial_serial;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // n in [-4095, 4095], workers in [0, 63]
    let n = i64::from(i16::from_le_bytes([data[0], data[1]]) % 4096);
    let workers = usize::from(data[2] % 64);

    let serial = factorial_serial(n);
    let parallel = factorial_parallel(n, workers);

    match (serial, parallel) {
        (Ok(s), Ok(p)) => assert_eq!(s, p, "serial != parallel at n={n} workers={workers}"),
        (Err(FactError::InvalidArgument(_)), Err(FactError::InvalidArgument(_))) => {
            assert!(n < 0);
        }
        (Ok(_), Err(FactError::InvalidArgument(_))) => assert_eq!(workers, 0),
        (s, p) => panic!("unexpected outcomes at n={n} workers={workers}: {s:?} vs {p:?}"),
    }
});
