#![no_main]

use libfuzzer_sys::fuzz_target;
use mpi_bignum::BigNum;

fuzz_target!(|s: &str| {
    let lossy = BigNum::from_hex(s);
    if let Ok(strict) = BigNum::parse_hex(s) {
        // the strict parser only accepts inputs the lossy one reads the same
        assert_eq!(strict, lossy);
    }
});
